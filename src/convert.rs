extern crate alloc;
use alloc::format;
use alloc::string::String;

use rgb::RGB;

use crate::error::ProfileError;

/// HSL components rounded to integers: hue in degrees [0, 360),
/// saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// HSV components on the degrees/percent scale:
/// hue in [0, 360), saturation and value in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Format a color as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(c: RGB<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Parse a six-digit hex color, with or without a leading `#`.
/// Case-insensitive.
pub fn hex_to_rgb(hex: &str) -> Result<RGB<u8>, ProfileError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ProfileError::MalformedColor(String::from(hex)));
    }

    let channel = |pair: &str| {
        u8::from_str_radix(pair, 16).map_err(|_| ProfileError::MalformedColor(String::from(hex)))
    };

    Ok(RGB {
        r: channel(&digits[0..2])?,
        g: channel(&digits[2..4])?,
        b: channel(&digits[4..6])?,
    })
}

/// Hue in degrees from normalized channels, keyed on the maximal channel.
/// The +6 term wraps the red sector when green < blue.
fn hue_degrees(r: f32, g: f32, b: f32, max: f32, delta: f32) -> f32 {
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h * 60.0
}

/// Convert a color to HSL. Achromatic colors (all channels equal) get
/// hue 0 and saturation 0.
pub fn rgb_to_hsl(c: RGB<u8>) -> Hsl {
    let r = c.r as f32 / 255.0;
    let g = c.g as f32 / 255.0;
    let b = c.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as u8,
        };
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl {
        // Rounding can push a fractional hue to 360; wrap it back.
        h: (hue_degrees(r, g, b, max, delta).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Convert a color to HSV. Shares the hue sectors with [`rgb_to_hsl`];
/// saturation and value come from the max channel and its delta instead
/// of lightness.
pub fn rgb_to_hsv(c: RGB<u8>) -> Hsv {
    let r = c.r as f32 / 255.0;
    let g = c.g as f32 / 255.0;
    let b = c.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else {
        hue_degrees(r, g, b, max, delta)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h,
        s: s * 100.0,
        v: max * 100.0,
    }
}

/// WCAG relative luminance in [0, 1].
///
/// Channels below the 0.03928 threshold use the linear 1/12.92 segment,
/// the rest the (c + 0.055)/1.055 power-2.4 segment, weighted
/// 0.2126/0.7152/0.0722.
pub fn relative_luminance(c: RGB<u8>) -> f64 {
    fn linearize(byte: u8) -> f64 {
        let c = byte as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(c.r) + 0.7152 * linearize(c.g) + 0.0722 * linearize(c.b)
}

/// Euclidean distance between two colors in RGB space.
pub fn distance(a: RGB<u8>, b: RGB<u8>) -> f32 {
    (distance_sq(a, b) as f32).sqrt()
}

/// Squared RGB distance. Exact in integers; same ordering as [`distance`],
/// so the clustering hot path skips the square root.
pub fn distance_sq(a: RGB<u8>, b: RGB<u8>) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}
