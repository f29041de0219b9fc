//! Integration tests for the rectangle value object.

use fennec_common::warning::has_warned;
use fennec_objects::Rectangle;
use quickcheck_macros::quickcheck;

#[test]
fn test_area() {
    let rect = Rectangle::new(10.0, 20.0);
    assert_eq!(rect.width, 10.0);
    assert_eq!(rect.height, 20.0);
    assert_eq!(rect.area(), 200.0);
}

#[test]
fn test_zero_area() {
    assert_eq!(Rectangle::new(0.0, 7.5).area(), 0.0);
    assert_eq!(Rectangle::default().area(), 0.0);
}

#[test]
fn test_negative_dimension_is_kept_and_reported() {
    let rect = Rectangle::new(-2.0, 3.0);
    assert_eq!(rect.area(), -6.0);
    assert!(has_warned("Objects", "rectangle has a negative dimension (-2 x 3)"));
}

#[quickcheck]
fn prop_area_is_width_times_height(width: u32, height: u32) -> bool {
    let (w, h) = (f64::from(width), f64::from(height));
    Rectangle::new(w, h).area() == w * h
}
