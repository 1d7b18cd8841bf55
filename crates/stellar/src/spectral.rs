use std::fmt;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Main-sequence spectral class, coolest to hottest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    M,
    K,
    G,
    F,
    A,
    B,
    O,
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralClass::M => "M",
            SpectralClass::K => "K",
            SpectralClass::G => "G",
            SpectralClass::F => "F",
            SpectralClass::A => "A",
            SpectralClass::B => "B",
            SpectralClass::O => "O",
        };
        write!(f, "{}", str)
    }
}

/// Cumulative class abundance over fractional galactic position.
///
/// A system at fraction `x` of the galaxy is classified by the first bucket
/// whose bound exceeds `x`; systems past the last bound are O-class. The
/// bounds follow observed main-sequence abundances (M dwarfs ~76%, one O
/// star per ~800 systems).
const CLASS_BOUNDS: [(SpectralClass, f64); 6] = [
    (SpectralClass::M, 0.7645),
    (SpectralClass::K, 0.8855),
    (SpectralClass::G, 0.9615),
    (SpectralClass::F, 0.9915),
    (SpectralClass::A, 0.9975),
    (SpectralClass::B, 0.9988),
];

/// Multiplicity model for one primary class.
///
/// A single uniform draw decides both whether the system is binary (draw
/// below `binary_threshold`) and, if so, which class the companion takes:
/// the same draw is matched against the `companions` ladder, whose entries
/// are (upper bound, class) pairs ordered coolest-first. Hotter primaries
/// carry higher binary fractions and nearer-peer companions.
#[derive(Clone, Copy)]
struct MultiplicityModel {
    binary_threshold: f64,
    companions: &'static [(f64, SpectralClass)],
}

impl SpectralClass {
    fn multiplicity_model(self) -> MultiplicityModel {
        match self {
            SpectralClass::M => MultiplicityModel {
                binary_threshold: 0.26,
                companions: &[(0.26, SpectralClass::M)],
            },
            SpectralClass::K => MultiplicityModel {
                binary_threshold: 0.44,
                companions: &[(0.20, SpectralClass::M), (0.44, SpectralClass::K)],
            },
            SpectralClass::G => MultiplicityModel {
                binary_threshold: 0.50,
                companions: &[
                    (0.20, SpectralClass::M),
                    (0.35, SpectralClass::K),
                    (0.50, SpectralClass::G),
                ],
            },
            SpectralClass::F => MultiplicityModel {
                binary_threshold: 0.50,
                companions: &[
                    (0.15, SpectralClass::M),
                    (0.28, SpectralClass::K),
                    (0.40, SpectralClass::G),
                    (0.50, SpectralClass::F),
                ],
            },
            SpectralClass::A => MultiplicityModel {
                binary_threshold: 0.60,
                companions: &[
                    (0.15, SpectralClass::K),
                    (0.30, SpectralClass::G),
                    (0.45, SpectralClass::F),
                    (0.60, SpectralClass::A),
                ],
            },
            SpectralClass::B => MultiplicityModel {
                binary_threshold: 0.60,
                companions: &[
                    (0.20, SpectralClass::G),
                    (0.35, SpectralClass::F),
                    (0.48, SpectralClass::A),
                    (0.60, SpectralClass::B),
                ],
            },
            SpectralClass::O => MultiplicityModel {
                binary_threshold: 0.80,
                companions: &[
                    (0.25, SpectralClass::A),
                    (0.55, SpectralClass::B),
                    (0.80, SpectralClass::O),
                ],
            },
        }
    }

    /// Companion class for a multiplicity draw, or `None` for a single star.
    pub fn companion(self, draw: f64) -> Option<SpectralClass> {
        let model = self.multiplicity_model();
        if draw >= model.binary_threshold {
            return None;
        }

        for (bound, class) in model.companions {
            if draw < *bound {
                return Some(*class);
            }
        }

        // Unreachable for well-formed ladders: the last bound equals the
        // binary threshold.
        None
    }
}

/// Classify a system by its fractional position in [0, 1).
pub fn classify(fraction: f64) -> SpectralClass {
    for (class, bound) in CLASS_BOUNDS.iter() {
        if fraction < *bound {
            return *class;
        }
    }
    SpectralClass::O
}

/// Select the spectral classes for one system: the primary from the
/// cumulative abundance table, and an optional companion from the primary's
/// multiplicity model.
///
/// Consumes exactly one uniform draw from `rng` (the multiplicity draw);
/// primary classification is deterministic in `fraction`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::select_classes;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let (primary, companion) = select_classes(&mut rng, 0.0);
/// ```
pub fn select_classes(
    rng: &mut ChaChaRng,
    fraction: f64,
) -> (SpectralClass, Option<SpectralClass>) {
    let primary = classify(fraction);
    let multiplicity = rng.random::<f64>();
    (primary, primary.companion(multiplicity))
}
