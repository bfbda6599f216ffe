//! Dial dimensions: ring radii, thickness and hub size.

use serde::Serialize;

use crate::error::LayoutError;
use crate::ring::RingKind;

/// Physical dimensions of the dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DialGeometry {
    /// Width of the drawing area; the dial centre is at `size / 2`.
    pub size: f64,
    /// Radial distance between the outer edges of neighbouring rings.
    pub ring_gap: f64,
    /// Gap between the outermost ring and the edge of the drawing area.
    pub margin: f64,
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self {
            size: 720.0,
            ring_gap: 34.0,
            margin: 50.0,
        }
    }
}

impl DialGeometry {
    /// Returns the outer radius of `ring`.
    pub fn radius(&self, ring: RingKind) -> f64 {
        self.size / 2.0 - self.margin - ring.position() as f64 * self.ring_gap
    }

    /// Returns the radial thickness shared by every ring.
    pub fn thickness(&self) -> f64 {
        self.ring_gap * 0.75
    }

    /// Returns the radius of the sun/moon hub.
    pub fn hub_radius(&self) -> f64 {
        self.thickness() * 4.0
    }

    /// Checks that every ring has a positive inner radius.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(LayoutError::InvalidGeometry {
                reason: format!("size must be finite and positive, got {}", self.size),
            });
        }
        if !self.ring_gap.is_finite() || self.ring_gap <= 0.0 {
            return Err(LayoutError::InvalidGeometry {
                reason: format!("ring gap must be finite and positive, got {}", self.ring_gap),
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(LayoutError::InvalidGeometry {
                reason: format!("margin must be finite and non-negative, got {}", self.margin),
            });
        }
        let innermost = self.radius(RingKind::Year) - self.thickness();
        if innermost <= 0.0 {
            return Err(LayoutError::InvalidGeometry {
                reason: format!(
                    "size {} is too small for six rings {} apart",
                    self.size, self.ring_gap
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_radii() {
        let g = DialGeometry::default();
        assert_abs_diff_eq!(g.radius(RingKind::Day), 310.0, epsilon = 1e-9);
        assert_abs_diff_eq!(g.radius(RingKind::Strand), 276.0, epsilon = 1e-9);
        assert_abs_diff_eq!(g.radius(RingKind::Year), 140.0, epsilon = 1e-9);
        assert_abs_diff_eq!(g.thickness(), 25.5, epsilon = 1e-9);
        assert_abs_diff_eq!(g.hub_radius(), 102.0, epsilon = 1e-9);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn too_small_dial() {
        let g = DialGeometry {
            size: 200.0,
            ..DialGeometry::default()
        };
        assert!(matches!(g.validate(), Err(LayoutError::InvalidGeometry { .. })));
    }

    #[test]
    fn bad_gap() {
        for gap in [0.0, -3.0, f64::NAN] {
            let g = DialGeometry {
                ring_gap: gap,
                ..DialGeometry::default()
            };
            assert!(g.validate().is_err(), "gap {gap}");
        }
    }
}
