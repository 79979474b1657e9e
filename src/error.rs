use std::fmt;

/// Errors reported by the indexed operations of [`DynamicArray`](crate::DynamicArray).
///
/// Every error is raised before the container is touched, so a failed call
/// leaves it exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// A capacity or index argument was negative.
    InvalidArgument(&'static str),

    /// An index did not name a live element.
    IndexOutOfRange {
        /// The index that was asked for.
        index: i32,
        /// The number of live elements at the time of the call.
        size: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::InvalidArgument(reason) => write!(f, "{}", reason),
            ArrayError::IndexOutOfRange { index, size } => {
                write!(f, "Index: {}, Size: {}", index, size)
            }
        }
    }
}

impl std::error::Error for ArrayError {}

pub type Result<T> = std::result::Result<T, ArrayError>;
