use rgb::RGB;

use crate::convert::{hex_to_rgb, relative_luminance};
use crate::error::ProfileError;

/// Minimum ratio for WCAG AA large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for WCAG AA normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for WCAG AAA large text.
pub const AAA_LARGE: f64 = 4.5;
/// Minimum ratio for WCAG AAA normal text.
pub const AAA_NORMAL: f64 = 7.0;

/// Contrast ratio plus pass flags for the four WCAG text tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    /// (L_lighter + 0.05) / (L_darker + 0.05), in [1, 21].
    pub ratio: f64,
    pub aa_large: bool,
    pub aa_normal: bool,
    pub aaa_large: bool,
    pub aaa_normal: bool,
}

/// WCAG contrast ratio between two colors. Symmetric in its arguments.
pub fn contrast_ratio(a: RGB<u8>, b: RGB<u8>) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Validate two hex colors and grade their contrast.
///
/// Both inputs must parse as six-digit hex (optional `#` prefix); a
/// malformed input is rejected before any luminance is computed.
pub fn check_contrast(fg: &str, bg: &str) -> Result<ContrastResult, ProfileError> {
    let fg = hex_to_rgb(fg)?;
    let bg = hex_to_rgb(bg)?;

    let ratio = contrast_ratio(fg, bg);
    Ok(ContrastResult {
        ratio,
        aa_large: ratio >= AA_LARGE,
        aa_normal: ratio >= AA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
        aaa_normal: ratio >= AAA_NORMAL,
    })
}
