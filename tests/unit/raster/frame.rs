use super::*;

#[test]
fn transparent_frame_is_zeroed() {
    let f = Frame::transparent(3, 2).unwrap();
    assert_eq!(f.dimensions(), (3, 2));
    assert_eq!(f.pixel_count(), 6);
    assert!(f.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        Frame::transparent(0, 4),
        Err(SegueError::Validation(_))
    ));
    assert!(matches!(
        Frame::transparent(4, 0),
        Err(SegueError::Validation(_))
    ));
}

#[test]
fn huge_frames_fail_with_allocation_error() {
    let err = Frame::transparent(u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, SegueError::Allocation(_)), "{err}");
}

#[test]
fn solid_fills_every_pixel() {
    let color = Rgba8Premul::opaque(1, 2, 3);
    let f = Frame::solid(2, 2, color).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(f.pixel(x, y), Some(color));
        }
    }
    assert_eq!(f.pixel(2, 0), None);
    assert!(f.is_opaque());
}

#[test]
fn solid_rejects_non_premultiplied_color() {
    let bad = Rgba8Premul::from_array([200, 0, 0, 10]);
    assert!(Frame::solid(1, 1, bad).is_err());
}

#[test]
fn from_rgba8_premul_checks_length_and_validity() {
    assert!(Frame::from_rgba8_premul(1, 1, vec![0, 0, 0]).is_err());
    assert!(Frame::from_rgba8_premul(1, 1, vec![9, 0, 0, 8]).is_err());

    let f = Frame::from_rgba8_premul(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 255]).unwrap();
    assert_eq!(f.pixel(1, 0), Some(Rgba8Premul::from_array([5, 6, 7, 255])));
    assert!(!f.is_opaque());
    assert_eq!(f.into_raw(), vec![1, 2, 3, 4, 5, 6, 7, 255]);
}

#[test]
fn index_is_row_major() {
    let f = Frame::transparent(4, 3).unwrap();
    assert_eq!(f.index(0, 0), 0);
    assert_eq!(f.index(1, 0), 4);
    assert_eq!(f.index(0, 1), 16);
    assert_eq!(f.index(3, 2), 44);
}
