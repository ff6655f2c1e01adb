use ndarray::Array2;

use leafscope_core::color::palette::{apply_palette, to_intensity, Palette};
use leafscope_core::frame::IndexFrame;
use leafscope_core::{Calibration, HealthTier, LeafscopeError};

#[test]
fn test_default_palette_has_256_entries() {
    let palette = Palette::default();
    assert_eq!(palette.entries().len(), 256);
    assert!(palette.validate().is_ok());
}

#[test]
fn test_default_palette_low_half_is_gray() {
    let palette = Palette::default();
    for i in 0..128u8 {
        assert_eq!(palette.lookup(i), [i, i, i]);
    }
}

#[test]
fn test_default_palette_bands_match_default_tiers() {
    let palette = Palette::default();
    let calibration = Calibration::default();

    for i in 0..=255u8 {
        let expected = match i {
            0..=127 => HealthTier::Other,
            128..=159 => HealthTier::Tier1,
            160..=191 => HealthTier::Tier2,
            192..=223 => HealthTier::Tier3,
            _ => HealthTier::Tier4,
        };
        assert_eq!(
            calibration.classify(palette.lookup(i)),
            expected,
            "intensity {i} -> {:?}",
            palette.lookup(i)
        );
    }
}

#[test]
fn test_palette_wrong_length_rejected() {
    let result = Palette::from_entries(vec![[0, 0, 0]; 255]);
    assert!(matches!(result, Err(LeafscopeError::Configuration(_))));

    let result = Palette::from_entries(vec![[0, 0, 0]; 256]);
    assert!(result.is_ok());
}

#[test]
fn test_intensity_truncates_and_saturates() {
    let index = IndexFrame::new(Array2::from_shape_vec(
        (1, 6),
        vec![-12.0, 0.9, 127.99, 255.0, 312.5, f64::NAN],
    )
    .unwrap());
    let intensity = to_intensity(&index);
    assert_eq!(intensity.row(0).to_vec(), vec![0, 0, 127, 255, 255, 0]);
}

#[test]
fn test_apply_palette_looks_up_every_pixel() {
    let entries: Vec<[u8; 3]> = (0..=255u8).map(|i| [i, 255 - i, 7]).collect();
    let palette = Palette::from_entries(entries).unwrap();

    let index = IndexFrame::new(Array2::from_shape_fn((3, 4), |(r, c)| (r * 60 + c * 10) as f64));
    let colored = apply_palette(&index, &palette);

    assert_eq!(colored.height(), 3);
    assert_eq!(colored.width(), 4);
    for r in 0..3 {
        for c in 0..4 {
            let i = (r * 60 + c * 10) as u8;
            assert_eq!(colored.pixel(r, c), [i, 255 - i, 7]);
        }
    }
}

#[test]
fn test_apply_palette_out_of_range_uses_end_entries() {
    let palette = Palette::default();
    let index = IndexFrame::new(Array2::from_shape_vec((1, 2), vec![-40.0, 400.0]).unwrap());
    let colored = apply_palette(&index, &palette);
    assert_eq!(colored.pixel(0, 0), palette.lookup(0));
    assert_eq!(colored.pixel(0, 1), palette.lookup(255));
}
