//! Configuration for the ring layout engine.

use strandwheel_calendar::STRAND_COUNT;

use crate::error::LayoutError;
use crate::geometry::DialGeometry;
use crate::palette::Palette;
use crate::ring::RingKind;

/// Configuration for laying out the dial.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use strandwheel_layout::LayoutConfig;
///
/// let config = LayoutConfig::new()
///     .with_strand_window(11)
///     .with_day_window(Some(19));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    geometry: DialGeometry,
    pointer_angle: f64,
    strand_window: usize,
    year_window: usize,
    day_window: Option<usize>,
    window_span: f64,
    pointer_offsets: [f64; 6],
    pointer_size: f64,
    palette: Palette,
}

impl LayoutConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: 720-unit dial with rings 34 apart, pointer at the top
    /// (270°), a 15-slot strand window, a 7-slot year window, a full-month
    /// day ring, windowed rings spanning 180°, pointers 4.5 units inside each
    /// ring's centre line with a half-width of 4, and the stock palette.
    pub fn new() -> Self {
        Self {
            geometry: DialGeometry::default(),
            pointer_angle: 270.0,
            strand_window: 15,
            year_window: 7,
            day_window: None,
            window_span: 180.0,
            pointer_offsets: [-4.5; 6],
            pointer_size: 4.0,
            palette: Palette::default(),
        }
    }

    /// Sets the dial dimensions.
    pub fn with_geometry(mut self, geometry: DialGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the angle of the pointer markers.
    pub fn with_pointer_angle(mut self, angle: f64) -> Self {
        self.pointer_angle = angle;
        self
    }

    /// Sets the number of strands shown at once.
    pub fn with_strand_window(mut self, width: usize) -> Self {
        self.strand_window = width;
        self
    }

    /// Sets the number of years shown at once.
    pub fn with_year_window(mut self, width: usize) -> Self {
        self.year_window = width;
        self
    }

    /// Sets the day ring to a sliding window of `width` days, or to the full
    /// month when `None`.
    pub fn with_day_window(mut self, width: Option<usize>) -> Self {
        self.day_window = width;
        self
    }

    /// Sets the arc, in degrees, covered by each windowed ring.
    pub fn with_window_span(mut self, span: f64) -> Self {
        self.window_span = span;
        self
    }

    /// Sets the radial adjustment of one ring's pointer relative to the
    /// ring's centre line (negative moves it inwards).
    pub fn with_pointer_offset(mut self, ring: RingKind, offset: f64) -> Self {
        self.pointer_offsets[ring.position()] = offset;
        self
    }

    /// Sets the pointer triangle's half-width.
    pub fn with_pointer_size(mut self, size: f64) -> Self {
        self.pointer_size = size;
        self
    }

    /// Sets the ring colours.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    // --- Accessors ---

    /// Returns the dial dimensions.
    pub fn geometry(&self) -> &DialGeometry {
        &self.geometry
    }

    /// Returns the pointer angle.
    pub fn pointer_angle(&self) -> f64 {
        self.pointer_angle
    }

    /// Returns the strand window width.
    pub fn strand_window(&self) -> usize {
        self.strand_window
    }

    /// Returns the year window width.
    pub fn year_window(&self) -> usize {
        self.year_window
    }

    /// Returns the day window width, or `None` for the full-month ring.
    pub fn day_window(&self) -> Option<usize> {
        self.day_window
    }

    /// Returns the arc covered by each windowed ring.
    pub fn window_span(&self) -> f64 {
        self.window_span
    }

    /// Returns the radial pointer adjustment for `ring`.
    pub fn pointer_offset(&self, ring: RingKind) -> f64 {
        self.pointer_offsets[ring.position()]
    }

    /// Returns the pointer half-width.
    pub fn pointer_size(&self) -> f64 {
        self.pointer_size
    }

    /// Returns the ring colours.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the angular step between slots of a window `width` wide.
    pub fn window_step(&self, width: usize) -> f64 {
        self.window_span / width.max(1) as f64
    }

    /// Validates this configuration.
    ///
    /// Windows must be odd and non-empty so one slot sits under the pointer,
    /// and the strand window may not exceed the strand cycle, so no strand
    /// appears twice.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.geometry.validate()?;

        Self::validate_window(RingKind::Strand, self.strand_window)?;
        if self.strand_window > STRAND_COUNT {
            return Err(LayoutError::InvalidWindow {
                ring: RingKind::Strand,
                width: self.strand_window,
                reason: "wider than the strand cycle",
            });
        }
        Self::validate_window(RingKind::Year, self.year_window)?;
        if let Some(width) = self.day_window {
            Self::validate_window(RingKind::Day, width)?;
        }

        if !self.window_span.is_finite() || self.window_span <= 0.0 || self.window_span > 360.0 {
            return Err(LayoutError::InvalidGeometry {
                reason: format!("window span must be in (0, 360], got {}", self.window_span),
            });
        }
        if !self.pointer_angle.is_finite() {
            return Err(LayoutError::InvalidGeometry {
                reason: format!("pointer angle must be finite, got {}", self.pointer_angle),
            });
        }
        if !self.pointer_size.is_finite() || self.pointer_size < 0.0 {
            return Err(LayoutError::InvalidGeometry {
                reason: format!(
                    "pointer size must be finite and non-negative, got {}",
                    self.pointer_size
                ),
            });
        }
        if let Some(&bad) = self.pointer_offsets.iter().find(|o| !o.is_finite()) {
            return Err(LayoutError::InvalidGeometry {
                reason: format!("pointer offset must be finite, got {bad}"),
            });
        }
        Ok(())
    }

    fn validate_window(ring: RingKind, width: usize) -> Result<(), LayoutError> {
        if width == 0 {
            return Err(LayoutError::InvalidWindow {
                ring,
                width,
                reason: "must be at least 1",
            });
        }
        if width % 2 == 0 {
            return Err(LayoutError::InvalidWindow {
                ring,
                width,
                reason: "must be odd",
            });
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}
