extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use rand::Rng;
use rgb::{RGB, RGBA};

use crate::convert::distance_sq;

/// Collect every `stride`-th pixel's color, dropping alpha.
///
/// The first pixel is always sampled, so a non-empty buffer yields a
/// non-empty working set. A stride of 0 is treated as 1; the validated
/// [`analyze`](crate::analyze) path rejects it before getting here.
pub fn sample_pixels(pixels: &[RGBA<u8>], stride: usize) -> Vec<RGB<u8>> {
    pixels
        .iter()
        .step_by(stride.max(1))
        .map(|p| RGB {
            r: p.r,
            g: p.g,
            b: p.b,
        })
        .collect()
}

/// Fixed-budget k-means over sampled colors.
///
/// Centroids are seeded by uniform draws with replacement from `samples`,
/// so the same `rng` state reproduces the same palette. Each iteration
/// assigns every sample to its nearest centroid by RGB distance (ties go
/// to the lowest centroid index), then replaces each centroid with the
/// integer-rounded mean of its members. A centroid that attracted no
/// members keeps its previous value. The full iteration budget always
/// runs; convergence is not checked.
///
/// Returns exactly `k` centroids, coincident ones included when `k`
/// exceeds the number of distinct samples. Empty input or a `k` of 0
/// yields an empty result.
pub fn cluster<R: Rng>(
    samples: &[RGB<u8>],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Vec<RGB<u8>> {
    if k == 0 || samples.is_empty() {
        return Vec::new();
    }

    let mut centroids: Vec<RGB<u8>> = (0..k)
        .map(|_| samples[rng.gen_range(0..samples.len())])
        .collect();

    for _ in 0..max_iterations {
        let mut sums = vec![[0u64; 3]; k];
        let mut counts = vec![0u64; k];

        for &color in samples {
            let idx = nearest_centroid(color, &centroids);
            sums[idx][0] += color.r as u64;
            sums[idx][1] += color.g as u64;
            sums[idx][2] += color.b as u64;
            counts[idx] += 1;
        }

        for (i, centroid) in centroids.iter_mut().enumerate() {
            if counts[i] == 0 {
                continue; // memberless: keep the previous value
            }
            *centroid = RGB {
                r: mean_channel(sums[i][0], counts[i]),
                g: mean_channel(sums[i][1], counts[i]),
                b: mean_channel(sums[i][2], counts[i]),
            };
        }
    }

    centroids
}

/// Index of the nearest centroid; ties go to the lowest index.
fn nearest_centroid(color: RGB<u8>, centroids: &[RGB<u8>]) -> usize {
    let mut best = 0;
    let mut best_dist = u32::MAX;

    for (i, &c) in centroids.iter().enumerate() {
        let d = distance_sq(color, c);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }

    best
}

fn mean_channel(sum: u64, count: u64) -> u8 {
    (sum as f64 / count as f64).round() as u8
}
