use anyhow::ensure;
use classgroup::{ Delta_2048, rug_rng_from_seed, rug_seeded_rng, validate_discriminant };
use rug::{ Integer, rand::RandState };

use crate::procedures::{ DEFAULT_MAX_ATTEMPTS, Procedure };

pub const MAX_EXP_BITS: u32 = 256;
pub const DEFAULT_NUM_EXAMPLES: usize = 10;

/// Everything a generation run depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub procedure: Procedure,
    pub num_examples: usize,
    pub exp_bits: u32,
    pub max_attempts: u64,
    /// `None` seeds from the OS, so runs are not reproducible.
    pub seed: Option<u64>,
    pub discriminant: Integer,
}

impl GeneratorConfig {
    pub fn new(procedure: Procedure) -> Self {
        GeneratorConfig {
            procedure,
            num_examples: DEFAULT_NUM_EXAMPLES,
            exp_bits: MAX_EXP_BITS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            discriminant: Delta_2048().clone(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.exp_bits > 0, "exp_bits must be positive.");
        ensure!(self.max_attempts > 0, "max_attempts must be positive.");
        validate_discriminant(&self.discriminant)
    }

    pub fn rng(&self) -> RandState<'static> {
        match self.seed {
            Some(seed) => rug_rng_from_seed(seed),
            None => rug_seeded_rng(),
        }
    }
}
