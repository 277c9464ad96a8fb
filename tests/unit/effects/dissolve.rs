use super::*;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::SegueError;

fn solid(w: u32, h: u32, px: Rgba8Premul) -> Frame {
    Frame::solid(w, h, px).unwrap()
}

#[test]
fn black_to_white_midpoint_is_mid_gray() {
    let black = solid(2, 2, Rgba8Premul::opaque(0, 0, 0));
    let white = solid(2, 2, Rgba8Premul::opaque(255, 255, 255));
    let out = AlphaDissolve::default().render(&black, &white, 0.5).unwrap();
    for px in out.as_bytes().chunks_exact(4) {
        assert_eq!(px, &[128, 128, 128, 255]);
    }
}

#[test]
fn endpoints_reproduce_inputs_even_when_translucent() {
    let src = Frame::from_rgba8(2, 1, &[200, 10, 30, 90, 0, 0, 0, 0]).unwrap();
    let dst = Frame::from_rgba8(2, 1, &[5, 250, 60, 255, 100, 100, 100, 17]).unwrap();
    for mode in [DissolveMode::Weighted, DissolveMode::Over] {
        let effect = AlphaDissolve::new(mode);
        assert_eq!(effect.render(&src, &dst, 0.0).unwrap(), src, "{mode:?}");
        assert_eq!(effect.render(&src, &dst, 1.0).unwrap(), dst, "{mode:?}");
    }
}

#[test]
fn weighted_matches_linear_interpolation_for_opaque_inputs() {
    let src = Frame::from_rgb8(2, 1, &[0, 40, 255, 13, 200, 99]).unwrap();
    let dst = Frame::from_rgb8(2, 1, &[255, 90, 0, 250, 1, 99]).unwrap();
    for p in [0.1f32, 0.33, 0.5, 0.77, 0.95] {
        let out = AlphaDissolve::default().render(&src, &dst, p).unwrap();
        for ((o, s), d) in out
            .as_bytes()
            .iter()
            .zip(src.as_bytes())
            .zip(dst.as_bytes())
        {
            let expected = f32::from(*d) * p + f32::from(*s) * (1.0 - p);
            assert!(
                (f32::from(*o) - expected).abs() <= 1.0,
                "p={p}: got {o}, expected {expected}"
            );
        }
    }
}

#[test]
fn identical_inputs_are_fixed_points() {
    let img = Frame::from_rgba8(2, 1, &[10, 20, 30, 40, 250, 128, 3, 200]).unwrap();
    for p in [0.0f32, 0.2, 0.5, 0.9, 1.0] {
        let out = AlphaDissolve::default().render(&img, &img, p).unwrap();
        assert_eq!(out, img);
    }
}

#[test]
fn over_mode_layers_destination_then_source() {
    let black = solid(1, 1, Rgba8Premul::opaque(0, 0, 0));
    let white = solid(1, 1, Rgba8Premul::opaque(255, 255, 255));
    let out = AlphaDissolve::new(DissolveMode::Over)
        .render(&black, &white, 0.5)
        .unwrap();
    // White at 128/255 over nothing, then black at 127/255 over that.
    assert_eq!(out.pixel(0, 0), Some(Rgba8Premul::from_array([64, 64, 64, 191])));
}

#[test]
fn over_mode_ordering_is_visible_with_translucent_layers() {
    let red = solid(1, 1, Rgba8Premul::from_straight_rgba(255, 0, 0, 128));
    let blue = solid(1, 1, Rgba8Premul::opaque(0, 0, 255));
    let effect = AlphaDissolve::new(DissolveMode::Over);
    let forward = effect.render(&red, &blue, 0.5).unwrap();
    let backward = effect.render(&blue, &red, 0.5).unwrap();
    assert_ne!(forward, backward);
}

#[test]
fn invalid_progress_is_rejected() {
    let a = solid(2, 2, Rgba8Premul::opaque(0, 0, 0));
    for p in [-0.2f32, 1.3, f32::NAN] {
        assert!(matches!(
            AlphaDissolve::default().render(&a, &a, p),
            Err(SegueError::InvalidProgress(_))
        ));
    }
}
