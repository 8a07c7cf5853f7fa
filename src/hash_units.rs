//! Keys as sequences of hash units, and the polynomial bucket hash.
//!
//! The table never asks a key for a 64-bit digest. It folds the key's units
//! one by one, reducing modulo the current capacity at each step, so a key's
//! bucket depends on the capacity and moves whenever the capacity changes.

/// Multiplier of the rolling bucket hash.
pub const HASH_MULTIPLIER: u64 = 31;

/// A key that can be presented as a finite sequence of integer units.
///
/// Equal keys must yield equal unit sequences. Owned and borrowed forms of
/// the same key (`String` and `str`) must agree so borrowed lookups land in
/// the same bucket.
pub trait HashUnits {
    fn hash_units(&self) -> impl Iterator<Item = u64> + '_;
}

impl HashUnits for str {
    // UTF-16 code units, i.e. the character codes of the string.
    fn hash_units(&self) -> impl Iterator<Item = u64> + '_ {
        self.encode_utf16().map(u64::from)
    }
}

impl HashUnits for String {
    fn hash_units(&self) -> impl Iterator<Item = u64> + '_ {
        self.as_str().hash_units()
    }
}

impl HashUnits for char {
    fn hash_units(&self) -> impl Iterator<Item = u64> + '_ {
        let mut buf = [0u16; 2];
        let used = self.encode_utf16(&mut buf).len();
        buf.into_iter().take(used).map(u64::from)
    }
}

impl HashUnits for [u8] {
    fn hash_units(&self) -> impl Iterator<Item = u64> + '_ {
        self.iter().map(|&b| u64::from(b))
    }
}

impl HashUnits for Vec<u8> {
    fn hash_units(&self) -> impl Iterator<Item = u64> + '_ {
        self.as_slice().hash_units()
    }
}

impl<const N: usize> HashUnits for [u8; N] {
    fn hash_units(&self) -> impl Iterator<Item = u64> + '_ {
        self.as_slice().hash_units()
    }
}

impl<T: HashUnits + ?Sized> HashUnits for &T {
    fn hash_units(&self) -> impl Iterator<Item = u64> + '_ {
        (**self).hash_units()
    }
}

macro_rules! int_hash_units {
    ($($t:ty),* $(,)?) => {
        $(
            impl HashUnits for $t {
                // Big-endian bytes of the value.
                fn hash_units(&self) -> impl Iterator<Item = u64> + '_ {
                    self.to_be_bytes().into_iter().map(u64::from)
                }
            }
        )*
    };
}

int_hash_units!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Bucket index of `key` for a table of `capacity` buckets.
///
/// `acc = (acc * 31 + unit) % capacity` for every unit, starting from 0.
/// The result is always in `[0, capacity)`. `capacity` must be non-zero.
pub fn bucket_index<Q>(key: &Q, capacity: usize) -> usize
where
    Q: ?Sized + HashUnits,
{
    debug_assert!(capacity > 0, "bucket_index: capacity must be non-zero");
    let cap = capacity as u128;
    let acc = key.hash_units().fold(0u128, |acc, unit| {
        (acc * u128::from(HASH_MULTIPLIER) + u128::from(unit)) % cap
    });
    // acc < capacity, so it fits back into usize.
    acc as usize
}
