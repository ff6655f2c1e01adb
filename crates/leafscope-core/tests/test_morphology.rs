mod common;

use ndarray::Array2;

use leafscope_core::detection::morphology::{
    dilate, erode, morphological_closing, morphological_opening, StructuringElement,
};

use common::{block_mask, count_true};

fn is_subset(a: &Array2<bool>, b: &Array2<bool>) -> bool {
    a.iter().zip(b.iter()).all(|(&x, &y)| !x || y)
}

/// Deterministic speckle pattern for property checks.
fn speckle(h: usize, w: usize) -> Array2<bool> {
    Array2::from_shape_fn((h, w), |(r, c)| (r * 31 + c * 17 + r * c) % 7 < 3)
}

// ---------------------------------------------------------------------------
// Structuring element
// ---------------------------------------------------------------------------

#[test]
fn test_cross_radius_two_shape() {
    let element = StructuringElement::cross(2);
    assert_eq!(element.offsets().len(), 13);

    let expected = [
        [false, false, true, false, false],
        [false, true, true, true, false],
        [true, true, true, true, true],
        [false, true, true, true, false],
        [false, false, true, false, false],
    ];
    let grid = element.to_grid();
    assert_eq!(grid.dim(), (5, 5));
    for r in 0..5 {
        for c in 0..5 {
            assert_eq!(grid[[r, c]], expected[r][c], "cell ({r}, {c})");
        }
    }
}

#[test]
fn test_cross_radius_zero_is_identity() {
    let element = StructuringElement::cross(0);
    let mask = speckle(9, 11);
    assert_eq!(erode(&mask, &element), mask);
    assert_eq!(dilate(&mask, &element), mask);
}

// ---------------------------------------------------------------------------
// Erosion / dilation
// ---------------------------------------------------------------------------

#[test]
fn test_dilate_single_pixel_gives_cross() {
    let mut mask = Array2::from_elem((9, 9), false);
    mask[[4, 4]] = true;
    let element = StructuringElement::cross(2);
    let dilated = dilate(&mask, &element);

    assert_eq!(count_true(&dilated), 13);
    assert!(dilated[[2, 4]]);
    assert!(dilated[[4, 6]]);
    assert!(dilated[[3, 3]]);
    assert!(!dilated[[2, 3]]);
}

#[test]
fn test_erode_removes_single_pixel() {
    let mut mask = Array2::from_elem((9, 9), false);
    mask[[4, 4]] = true;
    let eroded = erode(&mask, &StructuringElement::cross(2));
    assert_eq!(count_true(&eroded), 0);
}

#[test]
fn test_erode_ignores_pixels_outside_image() {
    let mask = Array2::from_elem((4, 4), true);
    let eroded = erode(&mask, &StructuringElement::cross(2));
    assert!(eroded.iter().all(|&v| v));
}

#[test]
fn test_erode_shrinks_block_by_radius() {
    let mask = block_mask(20, 20, 5..15, 5..15);
    let eroded = erode(&mask, &StructuringElement::cross(2));
    assert_eq!(eroded, block_mask(20, 20, 7..13, 7..13));
}

// ---------------------------------------------------------------------------
// Opening / closing
// ---------------------------------------------------------------------------

#[test]
fn test_opening_never_adds_pixels() {
    let mask = speckle(24, 30);
    let opened = morphological_opening(&mask, &StructuringElement::cross(2));
    assert!(is_subset(&opened, &mask));
}

#[test]
fn test_closing_never_removes_pixels() {
    let mask = speckle(24, 30);
    let closed = morphological_closing(&mask, &StructuringElement::cross(2));
    assert!(is_subset(&mask, &closed));
}

#[test]
fn test_opening_is_idempotent() {
    let element = StructuringElement::cross(2);
    let once = morphological_opening(&speckle(24, 30), &element);
    let twice = morphological_opening(&once, &element);
    assert_eq!(once, twice);
}

#[test]
fn test_opening_removes_speck_keeps_block() {
    let mut mask = block_mask(20, 20, 5..15, 5..15);
    mask[[1, 1]] = true;
    let opened = morphological_opening(&mask, &StructuringElement::cross(2));

    assert!(!opened[[1, 1]]);
    assert!(opened[[10, 10]]);
    // Edge midpoints survive, square corners are rounded off.
    assert!(opened[[5, 10]]);
    assert!(!opened[[5, 5]]);
}

#[test]
fn test_closing_fills_small_hole() {
    let mut mask = block_mask(20, 20, 5..15, 5..15);
    mask[[10, 10]] = false;
    mask[[10, 11]] = false;
    let closed = morphological_closing(&mask, &StructuringElement::cross(2));
    assert_eq!(closed, block_mask(20, 20, 5..15, 5..15));
}
