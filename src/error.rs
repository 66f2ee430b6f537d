use core::fmt;

/// The error type returned by the fallible constructors of the tables.
///
/// Lookups and insertions never fail: keys are owned values and can not be
/// absent, and hash-to-bucket mapping is total for every `u64` hash.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An argument was absent or outside the range the table accepts, e.g. a
    /// bucket count of zero.
    InvalidArgument(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
        }
    }
}

impl core::error::Error for Error {}
