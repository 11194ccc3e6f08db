#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod contrast;
pub mod convert;
pub mod error;
pub mod gradient;
pub mod histogram;
pub mod kmeans;
pub mod palette;

pub use contrast::{check_contrast, contrast_ratio, ContrastResult};
pub use convert::{
    distance, hex_to_rgb, relative_luminance, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, Hsl, Hsv,
};
pub use error::ProfileError;
pub use gradient::{build_gradient, GradientKind, GradientSpec};
pub use histogram::{HsvHistogram, RgbHistogram};
pub use palette::{Palette, PaletteEntry};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rgb::{FromSlice, RGBA};

/// Configuration for image analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Sample every Nth pixel when collecting clustering input (>= 1).
    pub sample_stride: usize,
    /// Number of dominant colors to extract (1..=256).
    pub cluster_count: usize,
    /// k-means iteration budget. Always runs in full.
    pub max_iterations: usize,
    /// Seed for centroid initialization. Same seed, same palette.
    pub seed: u64,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            sample_stride: 10,
            cluster_count: 8,
            max_iterations: 10,
            seed: 0,
        }
    }
}

impl AnalyzeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample_stride(mut self, stride: usize) -> Self {
        self.sample_stride = stride;
        self
    }

    pub fn cluster_count(mut self, k: usize) -> Self {
        self.cluster_count = k;
        self
    }

    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// One image analysis: the dominant palette plus both histograms.
///
/// Holds no reference to the source buffer; analyses of different buffers
/// are independent and safe to run concurrently.
#[derive(Debug, Clone)]
pub struct Analysis {
    palette: Palette,
    rgb_histogram: RgbHistogram,
    hsv_histogram: HsvHistogram,
}

impl Analysis {
    /// Dominant colors, ordered by descending luminance.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Full-resolution per-channel RGB counts.
    pub fn rgb_histogram(&self) -> &RgbHistogram {
        &self.rgb_histogram
    }

    /// Full-resolution hue/saturation/value counts.
    pub fn hsv_histogram(&self) -> &HsvHistogram {
        &self.hsv_histogram
    }
}

/// Analyze an RGBA image: extract the dominant palette via k-means over
/// sampled pixels, and build the full-resolution RGB and HSV histograms.
pub fn analyze(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
    config: &AnalyzeConfig,
) -> Result<Analysis, ProfileError> {
    validate_inputs(pixels.len(), width, height, config)?;

    let samples = kmeans::sample_pixels(pixels, config.sample_stride);
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let centroids = kmeans::cluster(&samples, config.cluster_count, config.max_iterations, &mut rng);

    Ok(Analysis {
        palette: Palette::from_centroids(centroids),
        rgb_histogram: RgbHistogram::build(pixels),
        hsv_histogram: HsvHistogram::build(pixels),
    })
}

/// Analyze a raw interleaved RGBA byte buffer (R,G,B,A repeating,
/// length = width * height * 4).
pub fn analyze_bytes(
    bytes: &[u8],
    width: usize,
    height: usize,
    config: &AnalyzeConfig,
) -> Result<Analysis, ProfileError> {
    // as_rgba would silently drop a trailing partial pixel; catch it here.
    if bytes.len() % 4 != 0 {
        return Err(ProfileError::DimensionMismatch {
            len: bytes.len() / 4,
            width,
            height,
        });
    }
    analyze(bytes.as_rgba(), width, height, config)
}

fn validate_inputs(
    pixel_count: usize,
    width: usize,
    height: usize,
    config: &AnalyzeConfig,
) -> Result<(), ProfileError> {
    if width == 0 || height == 0 {
        return Err(ProfileError::ZeroDimension);
    }
    if pixel_count != width * height {
        return Err(ProfileError::DimensionMismatch {
            len: pixel_count,
            width,
            height,
        });
    }
    if config.sample_stride == 0 {
        return Err(ProfileError::InvalidSampleStride);
    }
    if config.cluster_count == 0 || config.cluster_count > 256 {
        return Err(ProfileError::InvalidClusterCount(config.cluster_count));
    }
    Ok(())
}
