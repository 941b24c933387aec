use wcs_scaling::{KvpSerializable, ScalingError, TargetAxisSize};

#[test]
fn test_valid_sizes_keep_their_inputs() {
    let cases = [("i", 0.0), ("j", 1.0), ("ansi", 365.0), ("Lat", 0.75), ("", 10.0)];

    for (axis, target_size) in cases {
        let size = TargetAxisSize::new(axis, target_size).unwrap();
        assert_eq!(size.axis(), axis);
        assert_eq!(size.target_size(), target_size);
    }
}

#[test]
fn test_negative_sizes_are_invalid_argument() {
    for target_size in [-1.0, -0.001, -512.0, f64::NEG_INFINITY] {
        match TargetAxisSize::new("i", target_size) {
            Err(ScalingError::InvalidArgument { field, .. }) => assert_eq!(field, "target_size"),
            other => panic!("expected InvalidArgument for {}, got {:?}", target_size, other),
        }
    }
}

#[test]
fn test_fragment_format() {
    assert_eq!(TargetAxisSize::new("i", 512.0).unwrap().to_kvp(), "i(512)");
    assert_eq!(TargetAxisSize::new("t", 0.0).unwrap().to_kvp(), "t(0)");
    assert_eq!(TargetAxisSize::new("", 10.0).unwrap().to_kvp(), "(10)");
}

#[test]
fn test_fragment_is_deterministic() {
    let size = TargetAxisSize::new("E", 800.0).unwrap();
    let fragments: Vec<String> = (0..3).map(|_| size.to_kvp()).collect();
    assert!(fragments.iter().all(|fragment| fragment == "E(800)"));
}

#[test]
fn test_shared_across_threads() {
    let size = std::sync::Arc::new(TargetAxisSize::new("N", 64.0).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let size = std::sync::Arc::clone(&size);
            std::thread::spawn(move || size.to_kvp())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "N(64)");
    }
}
