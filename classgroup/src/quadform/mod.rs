use std::{ fmt, str::FromStr };

use anyhow::{ Context, ensure };
use rug::Integer;

mod arithmetic;
mod tr_form;

pub use tr_form::TrForm;

/// A binary quadratic form $$ax^2 + bxy + cy^2$$.
///
/// The triple is kept exactly as computed: composition without reduction,
/// normalization and reduction each produce a different representation of
/// the same ideal class, and the predicates below inspect the representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QuadForm {
    pub a: Integer,
    pub b: Integer,
    pub c: Integer,
}

/// Solve $$c$$ from $$\Delta = b^2 - 4ac$$.
pub fn derive_c_from_abd(a: &Integer, b: &Integer, delta: &Integer) -> anyhow::Result<Integer> {
    ensure!(*a != 0, "`a` must be nonzero.");
    let num = Integer::from(b.square_ref()) - delta;
    let den = Integer::from(a * 4u32);
    let (c, rem) = num.div_rem(den);
    ensure!(rem == 0, "b^2 - Delta is not divisible by 4a.");
    Ok(c)
}

impl QuadForm {
    /// Build the form $$(a, b, c)$$ of discriminant $$\Delta$$, deriving $$c$$.
    pub fn new(
        a: impl Into<Integer>,
        b: impl Into<Integer>,
        delta: impl Into<Integer>
    ) -> anyhow::Result<QuadForm> {
        let (a, b, delta): (Integer, Integer, Integer) = (a.into(), b.into(), delta.into());
        let c = derive_c_from_abd(&a, &b, &delta)?;
        Ok(QuadForm { a, b, c })
    }

    /// Takes the triple verbatim, no validation.
    pub fn from_abc(a: impl Into<Integer>, b: impl Into<Integer>, c: impl Into<Integer>) -> QuadForm {
        QuadForm { a: a.into(), b: b.into(), c: c.into() }
    }
}

impl fmt::Display for QuadForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

impl FromStr for QuadForm {
    type Err = anyhow::Error;

    /// Parses the `(a, b, c)` text form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .with_context(|| format!("quadratic form `{s}` is not parenthesized"))?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        ensure!(parts.len() == 3, "quadratic form `{s}` does not have three coefficients");
        let mut abc = Vec::with_capacity(3);
        for part in parts {
            let x = Integer::from_str(part).with_context(||
                format!("invalid coefficient `{part}` in `{s}`")
            )?;
            abc.push(x);
        }
        let c = abc.pop().unwrap_or_default();
        let b = abc.pop().unwrap_or_default();
        let a = abc.pop().unwrap_or_default();
        Ok(QuadForm { a, b, c })
    }
}

#[cfg(test)]
mod tests;
