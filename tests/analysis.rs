use colorprof::{
    analyze, analyze_bytes, build_gradient, AnalyzeConfig, GradientKind, ProfileError,
};
use rgb::RGBA;

/// Synthetic gradient image: red ramps with x, green with y.
fn gradient_image(width: usize, height: usize) -> Vec<RGBA<u8>> {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            pixels.push(RGBA {
                r,
                g,
                b: 128,
                a: 255,
            });
        }
    }
    pixels
}

#[test]
fn smoke_test() {
    let width = 32;
    let height = 32;
    let pixels = gradient_image(width, height);

    let config = AnalyzeConfig::default();
    let analysis = analyze(&pixels, width, height, &config).unwrap();

    // Palette is exactly k entries, lightest first.
    let entries = analysis.palette().entries();
    assert_eq!(entries.len(), config.cluster_count);
    assert!(entries
        .windows(2)
        .all(|w| w[0].luminance >= w[1].luminance));

    for entry in entries {
        assert_eq!(entry.hex.len(), 7);
        assert!(entry.hex.starts_with('#'));
        assert!((0.0..=1.0).contains(&entry.luminance));
    }

    // Histograms cover every pixel, not just the sampled ones.
    let pixel_count = (width * height) as u32;
    let rgb = analysis.rgb_histogram();
    for bins in [&rgb.r, &rgb.g, &rgb.b] {
        assert_eq!(bins.iter().sum::<u32>(), pixel_count);
    }

    let hsv = analysis.hsv_histogram();
    assert_eq!(hsv.hue.iter().sum::<u32>(), pixel_count);
    assert_eq!(hsv.saturation.iter().sum::<u32>(), pixel_count);
    assert_eq!(hsv.value.iter().sum::<u32>(), pixel_count);
    assert!(rgb.peak() > 0);
    assert!(hsv.value_peak() > 0);
}

#[test]
fn single_color_image_collapses_palette() {
    let width = 16;
    let height = 16;
    let pixels = vec![
        RGBA {
            r: 40,
            g: 90,
            b: 200,
            a: 255,
        };
        width * height
    ];

    let analysis = analyze(&pixels, width, height, &AnalyzeConfig::default()).unwrap();

    assert_eq!(analysis.palette().len(), 8);
    for entry in analysis.palette().entries() {
        assert_eq!(entry.hex, "#285ac8");
    }
}

#[test]
fn same_seed_reproduces_palette() {
    let pixels = gradient_image(48, 48);

    let config = AnalyzeConfig::new().seed(99);
    let a = analyze(&pixels, 48, 48, &config).unwrap();
    let b = analyze(&pixels, 48, 48, &config).unwrap();

    assert_eq!(a.palette().entries(), b.palette().entries());
}

#[test]
fn byte_buffer_entry_point_matches() {
    let width = 24;
    let height = 24;
    let pixels = gradient_image(width, height);

    let mut bytes = Vec::with_capacity(pixels.len() * 4);
    for p in &pixels {
        bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }

    let config = AnalyzeConfig::default();
    let from_pixels = analyze(&pixels, width, height, &config).unwrap();
    let from_bytes = analyze_bytes(&bytes, width, height, &config).unwrap();

    assert_eq!(from_pixels.palette().entries(), from_bytes.palette().entries());
    assert_eq!(from_pixels.rgb_histogram(), from_bytes.rgb_histogram());
    assert_eq!(from_pixels.hsv_histogram(), from_bytes.hsv_histogram());
}

#[test]
fn gradient_flows_from_analysis() {
    let pixels = gradient_image(32, 32);
    let analysis = analyze(&pixels, 32, 32, &AnalyzeConfig::default()).unwrap();

    let spec = build_gradient(analysis.palette(), GradientKind::Linear, Some("to right")).unwrap();
    assert_eq!(spec.stops.len(), 5);
    assert_eq!(spec.stops[0], analysis.palette().entries()[0].hex);

    let css = spec.css();
    assert!(css.starts_with("linear-gradient(to right, #"));
}

#[test]
fn contrast_pair_flows_from_analysis() {
    let pixels = gradient_image(32, 32);
    let analysis = analyze(&pixels, 32, 32, &AnalyzeConfig::default()).unwrap();

    let (fg, bg) = analysis.palette().contrast_pair().unwrap();
    assert!(fg.luminance >= bg.luminance);

    let checked = colorprof::check_contrast(&fg.hex, &bg.hex).unwrap();
    assert!(checked.ratio >= 1.0);
}

#[test]
fn zero_dimensions_rejected() {
    let err = analyze(&[], 0, 10, &AnalyzeConfig::default()).unwrap_err();
    assert!(matches!(err, ProfileError::ZeroDimension));
}

#[test]
fn dimension_mismatch_rejected() {
    let pixels = gradient_image(8, 8);
    let err = analyze(&pixels, 8, 9, &AnalyzeConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ProfileError::DimensionMismatch {
            len: 64,
            width: 8,
            height: 9,
        }
    ));
}

#[test]
fn truncated_byte_buffer_rejected() {
    let mut bytes = vec![0u8; 8 * 8 * 4];
    bytes.pop();
    let err = analyze_bytes(&bytes, 8, 8, &AnalyzeConfig::default()).unwrap_err();
    assert!(matches!(err, ProfileError::DimensionMismatch { .. }));
}

#[test]
fn bad_config_rejected() {
    let pixels = gradient_image(8, 8);

    let err = analyze(&pixels, 8, 8, &AnalyzeConfig::new().sample_stride(0)).unwrap_err();
    assert!(matches!(err, ProfileError::InvalidSampleStride));

    let err = analyze(&pixels, 8, 8, &AnalyzeConfig::new().cluster_count(0)).unwrap_err();
    assert!(matches!(err, ProfileError::InvalidClusterCount(0)));

    let err = analyze(&pixels, 8, 8, &AnalyzeConfig::new().cluster_count(300)).unwrap_err();
    assert!(matches!(err, ProfileError::InvalidClusterCount(300)));
}

#[test]
fn small_cluster_counts_work() {
    let pixels = gradient_image(16, 16);
    let analysis = analyze(&pixels, 16, 16, &AnalyzeConfig::new().cluster_count(2)).unwrap();
    assert_eq!(analysis.palette().len(), 2);

    // A 2-entry palette is enough for a gradient.
    let spec = build_gradient(analysis.palette(), GradientKind::Radial, None).unwrap();
    assert_eq!(spec.stops.len(), 2);
}
