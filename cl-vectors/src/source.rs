use classgroup::TrForm;
use rug::{ Integer, rand::RandState };

/// Random elements of $$\langle g \rangle$$, computed as $$g^e$$ for uniform
/// $$e \in [0, 2^{bits})$$.
///
/// The source owns no randomness; every draw consumes the handle it is given,
/// in call order.
#[derive(Debug, Clone)]
pub struct ElemSource<F: TrForm> {
    generator: F,
    exp_bits: u32,
}

impl<F: TrForm> ElemSource<F> {
    pub fn new(generator: F, exp_bits: u32) -> Self {
        ElemSource { generator, exp_bits }
    }

    pub fn for_discriminant(delta: &Integer, exp_bits: u32) -> anyhow::Result<Self> {
        let g = F::generator_for_discriminant(delta)?;
        Ok(ElemSource::new(g, exp_bits))
    }

    pub fn generator(&self) -> &F {
        &self.generator
    }

    pub fn exp_bits(&self) -> u32 {
        self.exp_bits
    }

    pub fn rand_exponent(&self, rng: &mut RandState<'_>) -> Integer {
        Integer::from(Integer::random_bits(self.exp_bits, rng))
    }

    pub fn draw(&self, n: usize, rng: &mut RandState<'_>) -> Vec<F> {
        let mut elems = Vec::with_capacity(n);
        for _ in 0..n {
            let e = self.rand_exponent(rng);
            elems.push(self.generator.exp(&e));
        }
        elems
    }
}

/// Uniform index in `[0, len)`. `len` must be positive.
pub(crate) fn rand_index(len: usize, rng: &mut RandState<'_>) -> usize {
    debug_assert!(len > 0);
    Integer::from(len).random_below(rng).to_usize().unwrap_or_default()
}
