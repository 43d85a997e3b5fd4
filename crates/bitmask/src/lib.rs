//! A fixed set of named flags, each mapped to its own bit.
//!
//! The name at position `i` maps to the bit `1 << i`, so a [`BitmaskEnum`]
//! built from `["read", "write", "exec"]` looks like this:
//!
//! | Name    | Index | Bit    |
//! |---------|-------|--------|
//! | `read`  | 0     | `0x01` |
//! | `write` | 1     | `0x02` |
//! | `exec`  | 2     | `0x04` |
//!
//! At most [`MAX_NAMES`] names are allowed so every bit fits in a signed
//! 32-bit integer with the sign bit unused.

mod error;

pub use error::BitmaskError;

use tracing::{debug, warn};

/// Largest number of names a [`BitmaskEnum`] can hold.
pub const MAX_NAMES: usize = 31;

/// An ordered set of unique names, each assigned one bit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct BitmaskEnum {
    names: Vec<String>,
}

impl BitmaskEnum {
    /// Creates an enum from `names`, assigning bits in order.
    ///
    /// # Errors
    ///
    /// Fails if `names` is empty, holds more than [`MAX_NAMES`] entries, or
    /// repeats a name.
    ///
    /// # Example
    ///
    /// ```
    /// use scraps_bitmask::BitmaskEnum;
    ///
    /// let access = BitmaskEnum::new(["read", "write", "exec"]).unwrap();
    ///
    /// assert_eq!(access.bit("write"), Some(0x02));
    /// assert_eq!(access.bitmask(), 0x07);
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, BitmaskError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            warn!("rejected bitmask enum with no names");
            return Err(BitmaskError::Empty);
        }

        if names.len() > MAX_NAMES {
            warn!(count = names.len(), "rejected bitmask enum with too many names");
            return Err(BitmaskError::TooMany { count: names.len() });
        }

        for (index, name) in names.iter().enumerate() {
            if names[..index].contains(name) {
                warn!(%name, "rejected bitmask enum with a duplicate name");
                return Err(BitmaskError::Duplicate { name: name.clone() });
            }
        }

        debug!(count = names.len(), "built bitmask enum");
        Ok(Self { names })
    }

    /// Returns the union of every bit in the enum.
    #[must_use]
    pub fn bitmask(&self) -> u32 {
        // `len` is at most 31, so the shift cannot overflow.
        (1_u32 << self.names.len()) - 1
    }

    /// Returns the bit assigned to `name`.
    #[must_use]
    pub fn bit(&self, name: &str) -> Option<u32> {
        self.idx_by_name(name).map(|idx| 1 << idx)
    }

    /// Returns the name assigned to `bit`.
    ///
    /// `bit` must have exactly one bit set, and that bit must belong to the
    /// enum.
    #[must_use]
    pub fn name_by_bit(&self, bit: u32) -> Option<&str> {
        self.idx_by_bit(bit).and_then(|idx| self.name_by_idx(idx))
    }

    /// Returns the bit for the name at `idx`.
    #[must_use]
    pub fn bit_by_idx(&self, idx: usize) -> Option<u32> {
        (idx < self.names.len()).then(|| 1 << idx)
    }

    /// Returns the position of `bit`, which is also the index of its name.
    #[must_use]
    pub fn idx_by_bit(&self, bit: u32) -> Option<usize> {
        if !bit.is_power_of_two() {
            return None;
        }
        let idx = bit.trailing_zeros() as usize;
        (idx < self.names.len()).then_some(idx)
    }

    #[must_use]
    pub fn idx_by_name(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    #[must_use]
    pub fn name_by_idx(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    /// Returns a copy of the names in bit order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    /// Returns the number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; an enum holds at least one name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `true` if `mask` has the bit for `name` set.
    ///
    /// Unknown names are never contained.
    #[must_use]
    pub fn contains(&self, mask: u32, name: &str) -> bool {
        self.bit(name).is_some_and(|bit| mask & bit != 0)
    }
}

impl TryFrom<Vec<String>> for BitmaskEnum {
    type Error = BitmaskError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<BitmaskEnum> for Vec<String> {
    fn from(value: BitmaskEnum) -> Self {
        value.names
    }
}
