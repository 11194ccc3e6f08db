extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use rgb::RGB;

use crate::convert::{self, Hsl};
use crate::error::ProfileError;

/// A dominant color enriched with its display representations.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// The color itself.
    pub rgb: RGB<u8>,
    /// Lowercase `#rrggbb`.
    pub hex: String,
    /// Integer-rounded HSL.
    pub hsl: Hsl,
    /// WCAG relative luminance in [0, 1].
    pub luminance: f64,
}

impl PaletteEntry {
    pub fn new(rgb: RGB<u8>) -> Self {
        Self {
            rgb,
            hex: convert::rgb_to_hex(rgb),
            hsl: convert::rgb_to_hsl(rgb),
            luminance: convert::relative_luminance(rgb),
        }
    }
}

/// The dominant color set of an analysis, ordered lightest-first.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Enrich clustering centroids and sort by descending luminance.
    pub fn from_centroids(centroids: Vec<RGB<u8>>) -> Self {
        let mut entries: Vec<PaletteEntry> =
            centroids.into_iter().map(PaletteEntry::new).collect();

        entries.sort_by(|a, b| {
            b.luminance
                .partial_cmp(&a.luminance)
                .unwrap_or(core::cmp::Ordering::Equal)
        });

        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hex strings of the first `n` entries, in palette order.
    pub fn hex_stops(&self, n: usize) -> Vec<String> {
        self.entries.iter().take(n).map(|e| e.hex.clone()).collect()
    }

    /// Default foreground/background pair for contrast checking: the
    /// lightest entry against the darkest.
    pub fn contrast_pair(&self) -> Result<(&PaletteEntry, &PaletteEntry), ProfileError> {
        if self.entries.len() < 2 {
            return Err(ProfileError::InsufficientPalette {
                len: self.entries.len(),
            });
        }
        Ok((&self.entries[0], &self.entries[self.entries.len() - 1]))
    }
}
