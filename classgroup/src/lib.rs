#![allow(nonstandard_style)]

use rand::RngCore;
use rug::{ Integer, rand::RandState };

pub mod discriminant;
pub mod generator_utils;
pub mod quadform;

pub use discriminant::{ Delta_2048, generator_for_discriminant, validate_discriminant };
pub use quadform::{ QuadForm, TrForm };

/// Do NOT use `RandState::new()` directly !
/// An unseeded `RandState` yields the same stream in every process, which the
/// rug document does not make obvious. Seed it from the OS instead.
pub fn rug_seeded_rng() -> RandState<'static> {
    let mut buf = [0u8; 32];
    let mut rng = rand::rng();
    rng.fill_bytes(&mut buf);
    let seed = Integer::from_digits(&buf, rug::integer::Order::Lsf);
    let mut rng = RandState::new();
    rng.seed(&seed);
    rng
}

/// A reproducible stream: equal seeds give equal sequences of draws.
pub fn rug_rng_from_seed(seed: u64) -> RandState<'static> {
    let mut rng = RandState::new();
    rng.seed(&Integer::from(seed));
    rng
}
