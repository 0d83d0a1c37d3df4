use crate::plan::Placement;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Coarse classification of a [`FourierError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid plan parameters, reported by plan constructors.
    Configuration,
    /// A buffer handed to `execute` cannot hold the plan geometry.
    Buffer,
    /// An internal number-theoretic invariant did not hold.
    ArithmeticPrecondition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FourierError {
    /// A transform length or dimension is zero.
    ZeroLength,
    /// The batch count is zero.
    ZeroBatch,
    /// The declared rank differs from the number of dimensions given.
    RankMismatch { rank: usize, dims: usize },
    /// A zero stride or distance where more than one sample must be addressed.
    InvalidLayout { detail: &'static str },
    /// The plan addresses more samples than its indices can hold.
    TooLarge(usize),
    /// A buffer is shorter than the span of the plan layout.
    BufferTooSmall { required: usize, actual: usize },
    /// The execute call does not match the plan's placement.
    WrongPlacement { expected: Placement },
    /// No generator exists modulo this length.
    NoPrimitiveRoot(usize),
}

impl FourierError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroLength
            | Self::ZeroBatch
            | Self::RankMismatch { .. }
            | Self::InvalidLayout { .. }
            | Self::TooLarge(_) => ErrorKind::Configuration,
            Self::BufferTooSmall { .. } | Self::WrongPlacement { .. } => ErrorKind::Buffer,
            Self::NoPrimitiveRoot(_) => ErrorKind::ArithmeticPrecondition,
        }
    }
}

impl Display for FourierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLength => f.write_str("transform length must be at least one"),
            Self::ZeroBatch => f.write_str("batch count must be at least one"),
            Self::RankMismatch { rank, dims } => {
                write!(f, "rank {rank} does not match {dims} supplied dimensions")
            }
            Self::InvalidLayout { detail } => write!(f, "invalid layout: {detail}"),
            Self::TooLarge(total) => {
                write!(f, "{total} samples cannot be addressed with 32-bit indices")
            }
            Self::BufferTooSmall { required, actual } => {
                write!(f, "buffer holds {actual} samples but the plan needs {required}")
            }
            Self::WrongPlacement { expected } => {
                write!(f, "plan was created for {expected:?} execution")
            }
            Self::NoPrimitiveRoot(n) => write!(f, "no primitive root found modulo {n}"),
        }
    }
}

impl Error for FourierError {}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, FourierError};

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(FourierError::ZeroLength.kind(), ErrorKind::Configuration);
        assert_eq!(
            FourierError::BufferTooSmall {
                required: 4,
                actual: 2
            }
            .kind(),
            ErrorKind::Buffer
        );
        assert_eq!(
            FourierError::NoPrimitiveRoot(9).kind(),
            ErrorKind::ArithmeticPrecondition
        );
    }

    #[test]
    fn display_mentions_sizes() {
        let message = FourierError::BufferTooSmall {
            required: 16,
            actual: 8,
        }
        .to_string();
        assert!(message.contains("16") && message.contains('8'));
    }
}
