mod common;

use ndarray::Array2;

use leafscope_core::detection::components::connected_components;
use leafscope_core::detection::contour::external_contours;

use common::block_mask;

// ---------------------------------------------------------------------------
// Connected components
// ---------------------------------------------------------------------------

#[test]
fn test_components_diagonal_pixels_join() {
    let mut mask = Array2::from_elem((5, 5), false);
    mask[[1, 1]] = true;
    mask[[2, 2]] = true;
    mask[[3, 1]] = true;
    let labeling = connected_components(&mask);
    assert_eq!(labeling.components.len(), 1);
    assert_eq!(labeling.components[0].area, 3);
    assert_eq!(labeling.components[0].seed, (1, 1));
    assert_eq!(labeling.components[0].bbox, (1, 3, 1, 2));
}

#[test]
fn test_components_in_raster_order() {
    let mut mask = block_mask(10, 10, 6..8, 0..2);
    mask[[1, 8]] = true;
    let labeling = connected_components(&mask);
    assert_eq!(labeling.components.len(), 2);
    assert_eq!(labeling.components[0].seed, (1, 8));
    assert_eq!(labeling.components[1].seed, (6, 0));
    assert_eq!(labeling.components[1].area, 4);
}

#[test]
fn test_components_u_shape_merges() {
    // Two arms joined only at the bottom: provisional labels must be merged.
    let mut mask = Array2::from_elem((5, 5), false);
    for r in 0..5 {
        mask[[r, 0]] = true;
        mask[[r, 4]] = true;
    }
    for c in 0..5 {
        mask[[4, c]] = true;
    }
    let labeling = connected_components(&mask);
    assert_eq!(labeling.components.len(), 1);
    assert_eq!(labeling.components[0].area, 13);
    let label = labeling.labels[[0, 0]];
    assert_eq!(labeling.labels[[0, 4]], label);
}

// ---------------------------------------------------------------------------
// External contours
// ---------------------------------------------------------------------------

#[test]
fn test_square_contour_corners() {
    let mask = block_mask(10, 10, 2..7, 2..7);
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].points, vec![(2, 2), (2, 6), (6, 6), (6, 2)]);
}

#[test]
fn test_contour_touching_border() {
    let mask = block_mask(8, 8, 0..8, 0..4);
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].points, vec![(0, 0), (0, 3), (7, 3), (7, 0)]);
}

#[test]
fn test_single_pixel_contour() {
    let mut mask = Array2::from_elem((5, 5), false);
    mask[[2, 3]] = true;
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].points, vec![(2, 3)]);
}

#[test]
fn test_two_separate_components() {
    let mut mask = block_mask(12, 12, 1..4, 1..4);
    for r in 7..10 {
        for c in 6..11 {
            mask[[r, c]] = true;
        }
    }
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 2);
    assert_eq!(contours[0].points[0], (1, 1));
    assert_eq!(contours[1].points[0], (7, 6));
}

#[test]
fn test_ring_has_single_outer_contour() {
    let mut mask = block_mask(10, 10, 1..9, 1..9);
    for r in 3..7 {
        for c in 3..7 {
            mask[[r, c]] = false;
        }
    }
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].points, vec![(1, 1), (1, 8), (8, 8), (8, 1)]);
}

#[test]
fn test_island_inside_hole_is_not_external() {
    let mut mask = block_mask(11, 11, 0..11, 0..11);
    for r in 2..9 {
        for c in 2..9 {
            mask[[r, c]] = false;
        }
    }
    mask[[5, 5]] = true;
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].points[0], (0, 0));
}

#[test]
fn test_empty_mask_has_no_contours() {
    let mask = Array2::from_elem((6, 6), false);
    assert!(external_contours(&mask).is_empty());
    assert!(external_contours(&Array2::from_elem((0, 0), false)).is_empty());
}

#[test]
fn test_contour_points_lie_on_foreground() {
    let mask = Array2::from_shape_fn((16, 16), |(r, c)| {
        let (dr, dc) = (r as isize - 8, c as isize - 8);
        dr * dr + dc * dc <= 25
    });
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 1);
    assert!(contours[0].points.len() >= 4);
    for &(r, c) in &contours[0].points {
        assert!(mask[[r, c]]);
    }
}
