use approx::assert_abs_diff_eq;
use ndarray::Array3;

use leafscope_core::color::index::{vegetation_index, vegetation_index_u8};
use leafscope_core::LeafscopeError;

fn single_pixel(b: f64, g: f64, r: f64) -> Array3<f64> {
    Array3::from_shape_vec((1, 1, 3), vec![b, g, r]).unwrap()
}

#[test]
fn test_index_formula() {
    let idx = vegetation_index(&single_pixel(200.0, 0.0, 50.0)).unwrap();
    assert_abs_diff_eq!(idx.data[[0, 0]], 150.0 / 250.0, epsilon = 1e-12);

    let idx = vegetation_index(&single_pixel(50.0, 0.0, 200.0)).unwrap();
    assert_abs_diff_eq!(idx.data[[0, 0]], -150.0 / 250.0, epsilon = 1e-12);
}

#[test]
fn test_index_ignores_green() {
    let a = vegetation_index(&single_pixel(120.0, 0.0, 30.0)).unwrap();
    let b = vegetation_index(&single_pixel(120.0, 255.0, 30.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_index_extremes() {
    let pure_blue = vegetation_index(&single_pixel(255.0, 0.0, 0.0)).unwrap();
    assert_abs_diff_eq!(pure_blue.data[[0, 0]], 1.0);

    let pure_red = vegetation_index(&single_pixel(0.0, 0.0, 255.0)).unwrap();
    assert_abs_diff_eq!(pure_red.data[[0, 0]], -1.0);
}

#[test]
fn test_zero_denominator_is_finite() {
    let idx = vegetation_index(&single_pixel(0.0, 77.0, 0.0)).unwrap();
    let v = idx.data[[0, 0]];
    assert!(v.is_finite());
    assert_eq!(v, 0.0);
}

#[test]
fn test_index_bounded_for_non_negative_input() {
    let data = Array3::from_shape_fn((16, 16, 3), |(r, c, ch)| match ch {
        0 => (r * 17) as f64,
        1 => 128.0,
        _ => (c * 17) as f64,
    });
    let idx = vegetation_index(&data).unwrap();
    assert_eq!(idx.height(), 16);
    assert_eq!(idx.width(), 16);
    for &v in idx.data.iter() {
        assert!(v.is_finite());
        assert!((-1.0..=1.0).contains(&v), "index {v} out of range");
    }
}

#[test]
fn test_index_from_u8() {
    let data = Array3::from_shape_vec((1, 2, 3), vec![200u8, 0, 50, 0, 0, 0]).unwrap();
    let idx = vegetation_index_u8(&data).unwrap();
    assert_abs_diff_eq!(idx.data[[0, 0]], 0.6, epsilon = 1e-12);
    assert_eq!(idx.data[[0, 1]], 0.0);
}

#[test]
fn test_channel_mismatch() {
    let data = Array3::<f64>::zeros((4, 4, 4));
    match vegetation_index(&data) {
        Err(LeafscopeError::ChannelMismatch { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 4);
        }
        other => panic!("expected ChannelMismatch, got {:?}", other),
    }
}
