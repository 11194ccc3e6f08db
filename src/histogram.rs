use rgb::{RGB, RGBA};

use crate::convert::rgb_to_hsv;

/// Per-channel frequency counts over the full pixel buffer, one 256-slot
/// array per RGB channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbHistogram {
    pub r: [u32; 256],
    pub g: [u32; 256],
    pub b: [u32; 256],
}

impl RgbHistogram {
    /// Tally every pixel's channel bytes. Full resolution, never sampled.
    pub fn build(pixels: &[RGBA<u8>]) -> Self {
        let mut hist = Self {
            r: [0; 256],
            g: [0; 256],
            b: [0; 256],
        };

        for p in pixels {
            hist.r[p.r as usize] += 1;
            hist.g[p.g as usize] += 1;
            hist.b[p.b as usize] += 1;
        }

        hist
    }

    /// Highest count across all three channels. The channels share one
    /// normalization ceiling when drawn on a common scale.
    pub fn peak(&self) -> u32 {
        fn channel_max(bins: &[u32; 256]) -> u32 {
            bins.iter().copied().max().unwrap_or(0)
        }
        channel_max(&self.r)
            .max(channel_max(&self.g))
            .max(channel_max(&self.b))
    }
}

/// Hue/saturation/value frequency counts over the full pixel buffer:
/// 360 hue bins (degrees), 100 bins each for saturation and value
/// (percent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvHistogram {
    pub hue: [u32; 360],
    pub saturation: [u32; 100],
    pub value: [u32; 100],
}

impl HsvHistogram {
    /// Convert every pixel to HSV and tally the floored components.
    /// Fully saturated or full-brightness pixels land in the top bin.
    pub fn build(pixels: &[RGBA<u8>]) -> Self {
        let mut hist = Self {
            hue: [0; 360],
            saturation: [0; 100],
            value: [0; 100],
        };

        for p in pixels {
            let hsv = rgb_to_hsv(RGB {
                r: p.r,
                g: p.g,
                b: p.b,
            });
            hist.hue[(hsv.h as usize).min(359)] += 1;
            hist.saturation[(hsv.s as usize).min(99)] += 1;
            hist.value[(hsv.v as usize).min(99)] += 1;
        }

        hist
    }

    pub fn hue_peak(&self) -> u32 {
        self.hue.iter().copied().max().unwrap_or(0)
    }

    pub fn saturation_peak(&self) -> u32 {
        self.saturation.iter().copied().max().unwrap_or(0)
    }

    pub fn value_peak(&self) -> u32 {
        self.value.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8) -> RGBA<u8> {
        RGBA { r, g, b, a: 255 }
    }

    #[test]
    fn rgb_bins_sum_to_pixel_count() {
        let pixels: Vec<RGBA<u8>> = (0..97)
            .map(|i| rgba(i as u8, (i * 3) as u8, 255 - i as u8))
            .collect();
        let hist = RgbHistogram::build(&pixels);

        for bins in [&hist.r, &hist.g, &hist.b] {
            assert_eq!(bins.iter().sum::<u32>(), 97);
        }
    }

    #[test]
    fn rgb_known_bins() {
        let pixels = vec![rgba(255, 0, 0), rgba(255, 0, 0), rgba(0, 128, 0)];
        let hist = RgbHistogram::build(&pixels);

        assert_eq!(hist.r[255], 2);
        assert_eq!(hist.r[0], 1);
        assert_eq!(hist.g[128], 1);
        assert_eq!(hist.b[0], 3);
        assert_eq!(hist.peak(), 3); // blue channel: all three pixels at 0
    }

    #[test]
    fn hsv_bins_sum_to_pixel_count() {
        let pixels: Vec<RGBA<u8>> = (0..123)
            .map(|i| rgba((i * 5) as u8, (i * 11) as u8, (i * 17) as u8))
            .collect();
        let hist = HsvHistogram::build(&pixels);

        assert_eq!(hist.hue.iter().sum::<u32>(), 123);
        assert_eq!(hist.saturation.iter().sum::<u32>(), 123);
        assert_eq!(hist.value.iter().sum::<u32>(), 123);
    }

    #[test]
    fn hsv_known_bins() {
        // Pure red: hue 0, saturation 100% and value 100% clamp to bin 99.
        let hist = HsvHistogram::build(&[rgba(255, 0, 0)]);
        assert_eq!(hist.hue[0], 1);
        assert_eq!(hist.saturation[99], 1);
        assert_eq!(hist.value[99], 1);

        // Pure green sits at 120 degrees.
        let hist = HsvHistogram::build(&[rgba(0, 255, 0)]);
        assert_eq!(hist.hue[120], 1);
    }

    #[test]
    fn hsv_peaks_are_per_component() {
        let pixels = vec![rgba(255, 0, 0), rgba(255, 0, 0), rgba(0, 0, 255)];
        let hist = HsvHistogram::build(&pixels);

        assert_eq!(hist.hue_peak(), 2); // two pixels at hue 0
        assert_eq!(hist.saturation_peak(), 3); // all fully saturated
        assert_eq!(hist.value_peak(), 3);
    }
}
