//! Random location spot-checks for online classes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

enum Source {
    Fixed(bool),
    Random { probability: f64, rng: Mutex<StdRng> },
}

/// Decides, per scan, whether an online student must submit a location.
///
/// Production uses an OS-seeded generator; tests pin the outcome with
/// [`AuditSampler::fixed`] or replay a sequence with [`AuditSampler::seeded`].
pub struct AuditSampler {
    source: Source,
}

impl AuditSampler {
    pub fn new(probability: f64) -> Self {
        Self::from_rng(probability, StdRng::from_os_rng())
    }

    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self::from_rng(probability, StdRng::seed_from_u64(seed))
    }

    pub fn fixed(outcome: bool) -> Self {
        Self {
            source: Source::Fixed(outcome),
        }
    }

    fn from_rng(probability: f64, rng: StdRng) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self {
            source: Source::Random {
                probability,
                rng: Mutex::new(rng),
            },
        }
    }

    pub fn should_audit(&self) -> bool {
        match &self.source {
            Source::Fixed(outcome) => *outcome,
            Source::Random { probability, rng } => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.random_bool(*probability)
            }
        }
    }
}

impl std::fmt::Debug for AuditSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Source::Fixed(outcome) => write!(f, "AuditSampler::Fixed({outcome})"),
            Source::Random { probability, .. } => {
                write!(f, "AuditSampler::Random(p = {probability})")
            }
        }
    }
}
