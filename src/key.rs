//! Boundary conversion from caller values to canonical trie keys.
//!
//! Every public operation converts its argument exactly once, here, before
//! any trie logic runs. Integers must lie in `[0, 2^W)`; byte strings are
//! read as big-endian integers and may be at most `W` bits long.

use crate::error::{Result, TrieError};

/// A value that can be stored in an [`XFastTrie`](crate::XFastTrie).
pub trait TrieKey {
    /// Converts to the canonical key for a `width`-bit universe.
    fn to_key(&self, width: u32) -> Result<u64>;
}

#[inline(always)]
fn fits(value: u128, width: u32) -> bool {
    value >> width == 0
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl TrieKey for $t {
            #[inline(always)]
            fn to_key(&self, width: u32) -> Result<u64> {
                let value = *self as u128;
                if fits(value, width) {
                    Ok(value as u64)
                } else {
                    Err(TrieError::OutOfRange { value: value as i128, width })
                }
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl TrieKey for $t {
            #[inline(always)]
            fn to_key(&self, width: u32) -> Result<u64> {
                let value = *self as i128;
                if value >= 0 && fits(value as u128, width) {
                    Ok(value as u64)
                } else {
                    Err(TrieError::OutOfRange { value, width })
                }
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);

impl TrieKey for u128 {
    fn to_key(&self, width: u32) -> Result<u64> {
        if fits(*self, width) {
            Ok(*self as u64)
        } else {
            Err(TrieError::OutOfRange {
                value: i128::try_from(*self).unwrap_or(i128::MAX),
                width,
            })
        }
    }
}

impl TrieKey for i128 {
    fn to_key(&self, width: u32) -> Result<u64> {
        if *self >= 0 && fits(*self as u128, width) {
            Ok(*self as u64)
        } else {
            Err(TrieError::OutOfRange { value: *self, width })
        }
    }
}

impl TrieKey for [u8] {
    fn to_key(&self, width: u32) -> Result<u64> {
        if self.len() * 8 > width as usize {
            return Err(TrieError::KeyTooLong {
                bytes: self.len(),
                width,
            });
        }
        Ok(self.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }
}

impl<const N: usize> TrieKey for [u8; N] {
    #[inline(always)]
    fn to_key(&self, width: u32) -> Result<u64> {
        self.as_slice().to_key(width)
    }
}

impl TrieKey for Vec<u8> {
    #[inline(always)]
    fn to_key(&self, width: u32) -> Result<u64> {
        self.as_slice().to_key(width)
    }
}

impl<T: TrieKey + ?Sized> TrieKey for &T {
    #[inline(always)]
    fn to_key(&self, width: u32) -> Result<u64> {
        (**self).to_key(width)
    }
}
