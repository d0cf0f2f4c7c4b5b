//! Viewport readings from the host.

/// Viewport width and device pixel ratio, read once per page runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Inner width in CSS pixels.
    pub width: u32,
    /// Device pixel ratio. Fractional ratios are passed through to the
    /// width parameter unrounded.
    pub dpr: f64,
}

impl Viewport {
    pub const fn new(width: u32, dpr: f64) -> Self {
        Self { width, dpr }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            dpr: 1.0,
        }
    }
}
