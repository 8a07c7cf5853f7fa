//! Chain: singly linked list used as bucket storage by `HashTable`.
//!
//! Links are owned boxes; the list keeps only its head and a length. The
//! table needs `append`, first-match deletion, head-to-end iteration and
//! `len`; the rest is the usual small list surface.

use core::fmt;

struct Link<T> {
    value: T,
    next: Option<Box<Link<T>>>,
}

pub struct Chain<T> {
    head: Option<Box<Link<T>>>,
    len: usize,
}

impl<T> Chain<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Add `value` after the current last element.
    pub fn append(&mut self, value: T) {
        let mut slot = &mut self.head;
        while let Some(link) = slot {
            slot = &mut link.next;
        }
        *slot = Some(Box::new(Link { value, next: None }));
        self.len += 1;
    }

    /// Add `value` before the current first element.
    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Link { value, next }));
        self.len += 1;
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        let mut slot = &mut self.head;
        while slot.as_ref()?.next.is_some() {
            slot = &mut slot.as_mut()?.next;
        }
        let last = slot.take()?;
        self.len -= 1;
        Some(last.value)
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let mut first = self.head.take()?;
        self.head = first.next.take();
        self.len -= 1;
        Some(first.value)
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|link| &link.value)
    }

    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Element at `index`, counting from the head.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Unlink the first element matching `pred` and return it.
    pub fn delete_first_where<P>(&mut self, mut pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut slot = &mut self.head;
        while slot.as_ref().is_some_and(|link| !pred(&link.value)) {
            slot = &mut slot.as_mut()?.next;
        }
        let mut removed = slot.take()?;
        *slot = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl<T: PartialEq> Chain<T> {
    /// Unlink the first element equal to `value`. Returns whether one was found.
    pub fn delete_first_match(&mut self, value: &T) -> bool {
        self.delete_first_where(|v| v == value).is_some()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively; the derived drop would recurse once per link.
impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut link) = cur {
            cur = link.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut chain = Chain::new();
        while let Some(v) = values.pop() {
            chain.prepend(v);
        }
        chain
    }
}

/// Iterator over shared references, head to end.
pub struct Iter<'a, T> {
    next: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|link| {
            self.next = link.next.as_deref();
            &link.value
        })
    }
}

/// Iterator over mutable references, head to end.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Link<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|link| {
            self.next = link.next.as_deref_mut();
            &mut link.value
        })
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, head to end.
pub struct IntoIter<T>(Chain<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
