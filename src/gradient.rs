extern crate alloc;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ProfileError;
use crate::palette::Palette;

/// Most stops a composed gradient will carry.
pub const MAX_STOPS: usize = 5;

/// Gradient families understood by downstream renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
}

/// An ordered color-stop sequence derived from a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    /// Hex stops in palette (lightest-first) order, at most [`MAX_STOPS`].
    pub stops: Vec<String>,
    pub kind: GradientKind,
    /// Direction token for linear gradients, echoed verbatim. Opaque to
    /// the core.
    pub direction: Option<String>,
}

impl GradientSpec {
    /// Render the stop sequence as a CSS gradient value. A linear
    /// gradient without a direction token defaults to `to right`.
    pub fn css(&self) -> String {
        let stops = self.stops.join(", ");
        match self.kind {
            GradientKind::Linear => {
                let direction = self.direction.as_deref().unwrap_or("to right");
                format!("linear-gradient({direction}, {stops})")
            }
            GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
        }
    }
}

/// Take the first [`MAX_STOPS`] palette colors, in palette order, as
/// gradient stops.
pub fn build_gradient(
    palette: &Palette,
    kind: GradientKind,
    direction: Option<&str>,
) -> Result<GradientSpec, ProfileError> {
    if palette.len() < 2 {
        return Err(ProfileError::InsufficientPalette { len: palette.len() });
    }

    Ok(GradientSpec {
        stops: palette.hex_stops(MAX_STOPS),
        kind,
        direction: direction.map(String::from),
    })
}
