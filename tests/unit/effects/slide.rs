use super::*;

/// 4x1 frame whose pixel `i` has red channel `base + i`.
fn ramp(base: u8) -> Frame {
    let mut data = Vec::new();
    for i in 0..4u8 {
        data.extend_from_slice(&[base + i, 0, 0, 255]);
    }
    Frame::from_rgba8_premul(4, 1, data).unwrap()
}

fn reds(f: &Frame) -> Vec<u8> {
    f.as_bytes().chunks_exact(4).map(|p| p[0]).collect()
}

#[test]
fn cover_ltr_brings_destination_tail_in_from_the_left() {
    let (a, b) = (ramp(10), ramp(100));
    let effect = Slide {
        dir: Direction::LeftToRight,
        push: false,
    };
    let out = effect.render(&a, &b, 0.5).unwrap();
    assert_eq!(reds(&out), vec![102, 103, 12, 13]);
}

#[test]
fn push_ltr_shifts_source_out_to_the_right() {
    let (a, b) = (ramp(10), ramp(100));
    let effect = Slide {
        dir: Direction::LeftToRight,
        push: true,
    };
    let out = effect.render(&a, &b, 0.5).unwrap();
    assert_eq!(reds(&out), vec![102, 103, 10, 11]);
}

#[test]
fn cover_rtl_brings_destination_head_in_from_the_right() {
    let (a, b) = (ramp(10), ramp(100));
    let effect = Slide {
        dir: Direction::RightToLeft,
        push: false,
    };
    let out = effect.render(&a, &b, 0.25).unwrap();
    assert_eq!(reds(&out), vec![10, 11, 12, 100]);
}

#[test]
fn push_rtl_shifts_source_out_to_the_left() {
    let (a, b) = (ramp(10), ramp(100));
    let effect = Slide {
        dir: Direction::RightToLeft,
        push: true,
    };
    let out = effect.render(&a, &b, 0.25).unwrap();
    assert_eq!(reds(&out), vec![11, 12, 13, 100]);
}

#[test]
fn vertical_slides_move_rows() {
    let a = Frame::from_rgba8_premul(1, 2, vec![1, 0, 0, 255, 2, 0, 0, 255]).unwrap();
    let b = Frame::from_rgba8_premul(1, 2, vec![7, 0, 0, 255, 8, 0, 0, 255]).unwrap();

    let down = Slide {
        dir: Direction::TopToBottom,
        push: true,
    };
    assert_eq!(reds(&down.render(&a, &b, 0.5).unwrap()), vec![8, 1]);

    let up = Slide {
        dir: Direction::BottomToTop,
        push: true,
    };
    assert_eq!(reds(&up.render(&a, &b, 0.5).unwrap()), vec![2, 7]);
}

#[test]
fn every_direction_hits_both_endpoints() {
    let (a, b) = (ramp(10), ramp(100));
    for dir in [
        Direction::LeftToRight,
        Direction::RightToLeft,
        Direction::TopToBottom,
        Direction::BottomToTop,
    ] {
        for push in [false, true] {
            let effect = Slide { dir, push };
            assert_eq!(effect.render(&a, &b, 0.0).unwrap(), a, "{dir:?} push={push}");
            assert_eq!(effect.render(&a, &b, 1.0).unwrap(), b, "{dir:?} push={push}");
        }
    }
}
