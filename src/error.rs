use core::fmt;

#[cfg(feature = "std")]
use std::{io, path::PathBuf};

/// Errors that can occur while generating the twiddle tables.
#[derive(Debug)]
pub enum TwiddleError {
    /// The requested transform length has no entry in the stage table.
    UnsupportedSize(usize),
    /// A twiddle vector did not hold `2 * n` reals for its transform size.
    LengthMismatch { expected: usize, actual: usize },
    /// A `core::fmt::Write` target refused text while rendering.
    Format,
    /// An output file could not be created, written or flushed.
    #[cfg(feature = "std")]
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for TwiddleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwiddleError::UnsupportedSize(n) => write!(
                f,
                "unsupported transform size {n} (expected one of 16, 64, 256, 1024, 4096)"
            ),
            TwiddleError::LengthMismatch { expected, actual } => write!(
                f,
                "twiddle vector holds {actual} reals, expected {expected}"
            ),
            TwiddleError::Format => write!(f, "failed to render table text"),
            #[cfg(feature = "std")]
            TwiddleError::Io { path, source } => {
                write!(f, "i/o error on {}: {source}", path.display())
            }
        }
    }
}

impl From<fmt::Error> for TwiddleError {
    fn from(_: fmt::Error) -> Self {
        TwiddleError::Format
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TwiddleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TwiddleError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn unsupported_size_message_names_the_size() {
        let msg = TwiddleError::UnsupportedSize(32).to_string();
        assert!(msg.contains("32"));
        assert!(msg.contains("4096"));
    }

    #[test]
    fn length_mismatch_message_names_both_lengths() {
        let msg = TwiddleError::LengthMismatch {
            expected: 32,
            actual: 30,
        }
        .to_string();
        assert!(msg.contains("30"));
        assert!(msg.contains("32"));
    }

    #[test]
    fn fmt_error_converts() {
        let err: TwiddleError = fmt::Error.into();
        assert!(matches!(err, TwiddleError::Format));
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = TwiddleError::Io {
            path: PathBuf::from("out/arm_mve_tables.c"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("arm_mve_tables.c"));
        assert!(err.source().is_some());
    }
}
