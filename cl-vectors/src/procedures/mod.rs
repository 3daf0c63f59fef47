use std::{ fmt, io::Write, str::FromStr };

use anyhow::{ Context, bail };
use classgroup::TrForm;
use indicatif::ProgressBar;
use rug::rand::RandState;
use tracing::{ debug, info, warn };

use crate::{
    format::{ VectorRecord, VectorValue::{ Elem, Int } },
    source::{ ElemSource, rand_index },
};

/// Consecutive rejections tolerated by `normalize` and `reduce` before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 10_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    Op,
    Normalize,
    Reduce,
    Exp,
    Square,
    RandElems,
}

impl Procedure {
    pub const ALL: [Procedure; 6] = [
        Procedure::Op,
        Procedure::Normalize,
        Procedure::Reduce,
        Procedure::Exp,
        Procedure::Square,
        Procedure::RandElems,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Procedure::Op => "op",
            Procedure::Normalize => "normalize",
            Procedure::Reduce => "reduce",
            Procedure::Exp => "exp",
            Procedure::Square => "square",
            Procedure::RandElems => "rand_elems",
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Procedure {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Procedure::ALL.iter().find(|p| p.name() == s) {
            Some(p) => Ok(*p),
            None => bail!("unknown procedure `{s}`"),
        }
    }
}

// Which canonical form a `normalize`/`reduce` case is about.
#[derive(Debug, Clone, Copy)]
enum Canonical {
    Normal,
    Reduced,
}

impl Canonical {
    fn holds<F: TrForm>(&self, f: &F) -> bool {
        let (a, b, c) = f.abc();
        match self {
            Canonical::Normal => F::is_normal(a, b, c),
            Canonical::Reduced => F::is_reduced(a, b, c),
        }
    }

    fn apply<F: TrForm>(&self, f: &F) -> F {
        match self {
            Canonical::Normal => f.normalized(),
            Canonical::Reduced => f.reduced(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Canonical::Normal => "normalize",
            Canonical::Reduced => "reduce",
        }
    }
}

/// Writes ground-truth vectors, one line per case.
///
/// All randomness comes from the single `RandState` the generator owns, so a
/// seeded state reproduces the output byte for byte.
pub struct VectorGenerator<F: TrForm, W: Write> {
    source: ElemSource<F>,
    rng: RandState<'static>,
    out: W,
    max_attempts: u64,
    progbar: ProgressBar,
}

impl<F: TrForm, W: Write> VectorGenerator<F, W> {
    pub fn new(source: ElemSource<F>, rng: RandState<'static>, out: W) -> Self {
        VectorGenerator {
            source,
            rng,
            out,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            progbar: ProgressBar::hidden(),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_progress(mut self, progbar: ProgressBar) -> Self {
        self.progbar = progbar;
        self
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Run `procedure` for `n` cases and return the number of lines written.
    pub fn run(&mut self, procedure: Procedure, n: usize) -> anyhow::Result<usize> {
        info!(%procedure, n, exp_bits = self.source.exp_bits(), "generating vectors");
        self.progbar.set_length(n as u64);

        let res = match procedure {
            Procedure::Op => self.gen_op(n),
            Procedure::Normalize => self.gen_normalize(n),
            Procedure::Reduce => self.gen_reduce(n),
            Procedure::Exp => self.gen_exp(n),
            Procedure::Square => self.gen_square(n),
            Procedure::RandElems => self.gen_rand_elems(n),
        };
        match res {
            Ok(emitted) => {
                self.out.flush().context("failed to flush vectors")?;
                self.progbar.finish();
                info!(%procedure, emitted, "done");
                Ok(emitted)
            }
            Err(e) => {
                // Keep what was already written.
                let _ = self.out.flush();
                self.progbar.abandon();
                Err(e)
            }
        }
    }

    pub fn gen_op(&mut self, n: usize) -> anyhow::Result<usize> {
        let lhs = self.source.draw(n, &mut self.rng);
        let rhs = self.source.draw(n, &mut self.rng);
        for (lh, rh) in lhs.into_iter().zip(rhs) {
            let prod = lh.mul(&rh);
            self.emit(VectorRecord::new(vec![Elem(lh), Elem(rh)], Elem(prod), true))?;
        }
        Ok(n)
    }

    pub fn gen_square(&mut self, n: usize) -> anyhow::Result<usize> {
        let elems = self.source.draw(n, &mut self.rng);
        for elem in elems {
            let squared = elem.square();
            self.emit(VectorRecord::new(vec![Elem(elem)], Elem(squared), true))?;
        }
        Ok(n)
    }

    pub fn gen_exp(&mut self, n: usize) -> anyhow::Result<usize> {
        let elems = self.source.draw(n, &mut self.rng);
        for elem in elems {
            let e = self.source.rand_exponent(&mut self.rng);
            let res = elem.exp(&e);
            self.emit(VectorRecord::new(vec![Elem(elem), Int(e)], Elem(res), true))?;
        }
        Ok(n)
    }

    pub fn gen_normalize(&mut self, n: usize) -> anyhow::Result<usize> {
        self.gen_canonical(n, Canonical::Normal)
    }

    pub fn gen_reduce(&mut self, n: usize) -> anyhow::Result<usize> {
        self.gen_canonical(n, Canonical::Reduced)
    }

    pub fn gen_rand_elems(&mut self, n: usize) -> anyhow::Result<usize> {
        let elems = self.source.draw(n, &mut self.rng);
        for elem in elems {
            writeln!(self.out, "{elem}").context("failed to write element")?;
            self.progbar.inc(1);
        }
        Ok(n)
    }

    // Compose random pool elements without reduction until the product is
    // not in canonical form, then emit it with its canonicalization.
    fn gen_canonical(&mut self, n: usize, canon: Canonical) -> anyhow::Result<usize> {
        if n == 0 {
            return Ok(0);
        }
        // A multiplicity of 1 is an unmodified pool element, which is reduced.
        let max_mult = n / 2;
        if max_mult < 2 {
            warn!(n, max_mult, "multiplicity bound n/2 admits no composition");
            bail!(
                "cannot produce {} cases for n = {n}: the multiplicity bound n/2 = {max_mult} \
                 never composes elements, request at least 4 cases",
                canon.name()
            );
        }

        let pool = self.source.draw(3 * n, &mut self.rng);
        let mut to_go = n;
        let mut attempts: u64 = 0;
        while to_go > 0 {
            if attempts >= self.max_attempts {
                bail!(
                    "unable to produce a {} case after {attempts} attempts ({} of {n} emitted)",
                    canon.name(),
                    n - to_go
                );
            }
            attempts += 1;

            let mult = 1 + rand_index(max_mult, &mut self.rng);
            let mut base = pool[rand_index(pool.len(), &mut self.rng)].clone();
            for _ in 1..mult {
                let other = &pool[rand_index(pool.len(), &mut self.rng)];
                base = base.multiply(other, false);
            }

            let before = base;
            let after = canon.apply(&before);
            if !canon.holds(&before) && canon.holds(&after) {
                debug!(attempts, mult, "accepted {} case", canon.name());
                self.emit(VectorRecord::new(vec![Elem(before)], Elem(after), true))?;
                to_go -= 1;
                attempts = 0;
            }
        }
        Ok(n)
    }

    fn emit(&mut self, record: VectorRecord<F>) -> anyhow::Result<()> {
        writeln!(self.out, "{record}").context("failed to write vector")?;
        self.progbar.inc(1);
        Ok(())
    }
}
