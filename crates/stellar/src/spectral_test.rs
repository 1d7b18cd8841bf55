use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::spectral::{classify, select_classes, SpectralClass};

// ============================================================================
// Classification bucket tests
// ============================================================================

#[test]
fn classify_bucket_lower_edges() {
    assert_eq!(classify(0.0), SpectralClass::M);
    assert_eq!(classify(0.7645), SpectralClass::K);
    assert_eq!(classify(0.8855), SpectralClass::G);
    assert_eq!(classify(0.9615), SpectralClass::F);
    assert_eq!(classify(0.9915), SpectralClass::A);
    assert_eq!(classify(0.9975), SpectralClass::B);
    assert_eq!(classify(0.9988), SpectralClass::O);
}

#[test]
fn classify_bucket_interiors() {
    assert_eq!(classify(0.5), SpectralClass::M);
    assert_eq!(classify(0.80), SpectralClass::K);
    assert_eq!(classify(0.90), SpectralClass::G);
    assert_eq!(classify(0.97), SpectralClass::F);
    assert_eq!(classify(0.995), SpectralClass::A);
    assert_eq!(classify(0.998), SpectralClass::B);
    assert_eq!(classify(0.9999), SpectralClass::O);
}

#[test]
fn classify_is_monotone_in_heat() {
    // Walking up the fractional position never cools the class.
    let order = |c: SpectralClass| match c {
        SpectralClass::M => 0,
        SpectralClass::K => 1,
        SpectralClass::G => 2,
        SpectralClass::F => 3,
        SpectralClass::A => 4,
        SpectralClass::B => 5,
        SpectralClass::O => 6,
    };

    let mut previous = 0;
    for step in 0..10000 {
        let rank = order(classify(step as f64 / 10000.0));
        assert!(rank >= previous);
        previous = rank;
    }
}

// ============================================================================
// Multiplicity model tests
// ============================================================================

#[test]
fn companion_above_threshold_is_single() {
    assert_eq!(SpectralClass::M.companion(0.26), None);
    assert_eq!(SpectralClass::K.companion(0.44), None);
    assert_eq!(SpectralClass::G.companion(0.50), None);
    assert_eq!(SpectralClass::F.companion(0.50), None);
    assert_eq!(SpectralClass::A.companion(0.60), None);
    assert_eq!(SpectralClass::B.companion(0.60), None);
    assert_eq!(SpectralClass::O.companion(0.80), None);
    assert_eq!(SpectralClass::O.companion(0.99), None);
}

#[test]
fn companion_below_threshold_is_binary() {
    assert_eq!(SpectralClass::M.companion(0.10), Some(SpectralClass::M));
    assert_eq!(SpectralClass::K.companion(0.10), Some(SpectralClass::M));
    assert_eq!(SpectralClass::K.companion(0.30), Some(SpectralClass::K));
    assert_eq!(SpectralClass::G.companion(0.45), Some(SpectralClass::G));
    assert_eq!(SpectralClass::O.companion(0.10), Some(SpectralClass::A));
    assert_eq!(SpectralClass::O.companion(0.70), Some(SpectralClass::O));
}

#[test]
fn companion_never_hotter_than_primary() {
    let order = |c: SpectralClass| match c {
        SpectralClass::M => 0,
        SpectralClass::K => 1,
        SpectralClass::G => 2,
        SpectralClass::F => 3,
        SpectralClass::A => 4,
        SpectralClass::B => 5,
        SpectralClass::O => 6,
    };

    let classes = [
        SpectralClass::M,
        SpectralClass::K,
        SpectralClass::G,
        SpectralClass::F,
        SpectralClass::A,
        SpectralClass::B,
        SpectralClass::O,
    ];

    for primary in classes {
        for step in 0..100 {
            let draw = step as f64 / 100.0;
            if let Some(companion) = primary.companion(draw) {
                assert!(
                    order(companion) <= order(primary),
                    "{} drew hotter companion {}",
                    primary,
                    companion
                );
            }
        }
    }
}

#[test]
fn select_classes_consumes_one_draw() {
    let mut a = ChaChaRng::seed_from_u64(7);
    let mut b = ChaChaRng::seed_from_u64(7);

    select_classes(&mut a, 0.0);

    // Advancing the sibling stream by one uniform keeps them aligned.
    use rand::Rng;
    let _ = b.random::<f64>();
    assert_eq!(a.random::<f64>(), b.random::<f64>());
}

#[test]
fn select_classes_primary_tracks_fraction() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let (primary, _) = select_classes(&mut rng, 0.90);
    assert_eq!(primary, SpectralClass::G);
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn spectral_class_display() {
    assert_eq!(format!("{}", SpectralClass::M), "M");
    assert_eq!(format!("{}", SpectralClass::K), "K");
    assert_eq!(format!("{}", SpectralClass::G), "G");
    assert_eq!(format!("{}", SpectralClass::F), "F");
    assert_eq!(format!("{}", SpectralClass::A), "A");
    assert_eq!(format!("{}", SpectralClass::B), "B");
    assert_eq!(format!("{}", SpectralClass::O), "O");
}
