//! Error types.

use core::{error, fmt};

/// SRP protocol error.
///
/// Construction and key completion are the only fallible operations; a
/// mismatch between the two derived session keys is a diagnostic outcome,
/// not an error.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A hexadecimal integer string failed to parse.
    MalformedHex,
    /// A protocol value violated its invariant.
    IllegalParameter {
        /// Parameter name
        name: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHex => f.write_str("malformed hexadecimal string"),
            Self::IllegalParameter { name } => {
                write!(f, "illegal_parameter: bad '{name}' value")
            }
        }
    }
}

impl error::Error for Error {}

/// [`Result`][core::result::Result] type with srp6's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
