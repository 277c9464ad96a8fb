use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(9.0), 1.0);
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{ease:?} at {i}");
            prev = v;
        }
    }
}

#[test]
fn names_parse_loosely() {
    assert_eq!(Ease::parse("linear").unwrap(), Ease::Linear);
    assert_eq!(Ease::parse("in_out_cubic").unwrap(), Ease::InOutCubic);
    assert_eq!("Out-Quad".parse::<Ease>().unwrap(), Ease::OutQuad);
    assert!(Ease::parse("bounce").is_err());
}

#[test]
fn serde_uses_snake_case() {
    assert_eq!(
        serde_json::to_string(&Ease::InOutQuad).unwrap(),
        "\"in_out_quad\""
    );
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}
