use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// This crate's error kind.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// A fixed-capacity sink has no room for the bytes being written.
    Capacity {
        /// Number of bytes the writer asked for.
        len: usize,
        /// Number of bytes the sink had left.
        cap: usize,
    },

    /// The `Display` implementation of an object value returned an error.
    Display,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;
        match self {
            Capacity { len, cap } => write!(
                f,
                "Attempted to write {} bytes into a sink with {} bytes of capacity left.",
                len, cap
            ),
            Display => write!(f, "Display implementation of an object value failed."),
        }
    }
}
