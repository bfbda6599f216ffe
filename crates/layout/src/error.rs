//! Error types for the strandwheel-layout crate.

use crate::ring::RingKind;

/// Error type for layout configuration problems.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Returned when a sliding window width is even, zero or larger than
    /// the cycle it slides over.
    #[error("invalid {ring} window width: {width} ({reason})")]
    InvalidWindow {
        /// Ring the window belongs to.
        ring: RingKind,
        /// The rejected width.
        width: usize,
        /// Why the width was rejected.
        reason: &'static str,
    },

    /// Returned when dial dimensions cannot fit every ring.
    #[error("invalid dial geometry: {reason}")]
    InvalidGeometry {
        /// Description of the geometry problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_window() {
        let err = LayoutError::InvalidWindow {
            ring: RingKind::Strand,
            width: 14,
            reason: "must be odd",
        };
        assert_eq!(
            err.to_string(),
            "invalid strand window width: 14 (must be odd)"
        );
    }

    #[test]
    fn error_invalid_geometry() {
        let err = LayoutError::InvalidGeometry {
            reason: "ring gap must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid dial geometry: ring gap must be positive"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<LayoutError>();
    }
}
