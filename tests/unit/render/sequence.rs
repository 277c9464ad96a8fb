use super::*;
use crate::effects::dissolve::AlphaDissolve;
use crate::effects::tiles::TileDissolve;
use crate::foundation::core::Rgba8Premul;

fn inputs() -> (Frame, Frame) {
    (
        Frame::solid(8, 4, Rgba8Premul::opaque(0, 0, 0)).unwrap(),
        Frame::solid(8, 4, Rgba8Premul::opaque(255, 255, 255)).unwrap(),
    )
}

#[test]
fn progress_samples_span_the_transition() {
    assert_eq!(progress_at(0, 5, Ease::Linear).unwrap(), Progress::START);
    assert_eq!(progress_at(2, 5, Ease::Linear).unwrap().get(), 0.5);
    assert_eq!(progress_at(4, 5, Ease::Linear).unwrap(), Progress::END);
    assert_eq!(progress_at(1, 5, Ease::InQuad).unwrap().get(), 0.0625);
}

#[test]
fn single_frame_sequence_is_finished() {
    assert_eq!(progress_at(0, 1, Ease::InCubic).unwrap(), Progress::END);
}

#[test]
fn bad_indices_are_rejected() {
    assert!(matches!(
        progress_at(0, 0, Ease::Linear),
        Err(SegueError::Validation(_))
    ));
    assert!(matches!(
        progress_at(3, 3, Ease::Linear),
        Err(SegueError::Validation(_))
    ));
}

#[test]
fn sequence_starts_at_source_and_ends_at_destination() {
    let (a, b) = inputs();
    let opts = SequenceOpts {
        frames: 4,
        ..SequenceOpts::default()
    };
    let frames = render_sequence(&AlphaDissolve::default(), &a, &b, &opts).unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0], a);
    assert_eq!(frames[3], b);

    let reds: Vec<u8> = frames.iter().map(|f| f.as_bytes()[0]).collect();
    assert!(reds.windows(2).all(|w| w[0] < w[1]), "{reds:?}");
}

#[test]
fn parallel_matches_sequential() {
    let (a, b) = inputs();
    let effect = TileDissolve { tile: 2, seed: 5 };
    let seq = SequenceOpts {
        frames: 9,
        ease: Ease::InOutCubic,
        parallel: false,
        threads: None,
    };
    let par = SequenceOpts {
        parallel: true,
        threads: Some(2),
        ..seq.clone()
    };
    let expected = render_sequence(&effect, &a, &b, &seq).unwrap();
    let got = render_sequence(&effect, &a, &b, &par).unwrap();
    assert_eq!(expected, got);
}

#[test]
fn zero_threads_is_rejected() {
    let (a, b) = inputs();
    let opts = SequenceOpts {
        frames: 2,
        parallel: true,
        threads: Some(0),
        ..SequenceOpts::default()
    };
    assert!(matches!(
        render_sequence(&AlphaDissolve::default(), &a, &b, &opts),
        Err(SegueError::Validation(_))
    ));
}

#[test]
fn errors_from_the_effect_propagate() {
    let (a, _) = inputs();
    let small = Frame::transparent(2, 2).unwrap();
    let opts = SequenceOpts {
        frames: 3,
        parallel: true,
        ..SequenceOpts::default()
    };
    assert!(matches!(
        render_sequence(&AlphaDissolve::default(), &a, &small, &opts),
        Err(SegueError::DimensionMismatch { .. })
    ));
}

#[test]
fn opts_deserialize_with_defaults() {
    let opts: SequenceOpts = serde_json::from_str(r#"{ "frames": 12 }"#).unwrap();
    assert_eq!(
        opts,
        SequenceOpts {
            frames: 12,
            ease: Ease::Linear,
            parallel: false,
            threads: None,
        }
    );
}

#[test]
fn zero_frames_is_rejected() {
    let (a, b) = inputs();
    for parallel in [false, true] {
        let opts = SequenceOpts {
            frames: 0,
            parallel,
            ..SequenceOpts::default()
        };
        assert!(matches!(
            render_sequence(&AlphaDissolve::default(), &a, &b, &opts),
            Err(SegueError::Validation(_))
        ));
    }
}
