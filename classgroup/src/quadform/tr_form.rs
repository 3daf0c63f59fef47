use std::{ fmt::{ Debug, Display }, str::FromStr };

use rug::Integer;

use super::{ QuadForm, arithmetic::{ abc_is_normal, abc_is_reduced } };
use crate::discriminant;

/// Arithmetic of an imaginary quadratic class group, as seen by code that
/// only needs to draw, combine and canonicalize elements.
#[rustfmt::skip]
pub trait TrForm:
    Clone + Debug + Display + PartialEq + Eq +
    FromStr<Err = anyhow::Error>
{
    fn generator_for_discriminant(delta: &Integer) -> anyhow::Result<Self>;
    fn from_abc(a: Integer, b: Integer, c: Integer) -> Self;
    fn abc(&self) -> (&Integer, &Integer, &Integer);
    fn discriminant(&self) -> Integer;

    /// Composition. With `reduce == false` the composed representation is
    /// returned untouched.
    fn multiply(&self, other: &Self, reduce: bool) -> Self;
    fn mul(&self, other: &Self) -> Self {
        self.multiply(other, true)
    }
    fn square(&self) -> Self;
    fn exp(&self, k: &Integer) -> Self;
    fn normalized(&self) -> Self;
    fn reduced(&self) -> Self;

    fn is_normal(a: &Integer, b: &Integer, c: &Integer) -> bool;
    fn is_reduced(a: &Integer, b: &Integer, c: &Integer) -> bool;
}

impl TrForm for QuadForm {
    fn generator_for_discriminant(delta: &Integer) -> anyhow::Result<Self> {
        discriminant::generator_for_discriminant(delta)
    }

    fn from_abc(a: Integer, b: Integer, c: Integer) -> Self {
        QuadForm { a, b, c }
    }

    fn abc(&self) -> (&Integer, &Integer, &Integer) {
        (&self.a, &self.b, &self.c)
    }

    fn discriminant(&self) -> Integer {
        QuadForm::discriminant(self)
    }

    fn multiply(&self, other: &Self, reduce: bool) -> Self {
        let f = self.compose(other);
        if reduce { f.reduce() } else { f }
    }

    fn square(&self) -> Self {
        QuadForm::square(self)
    }

    fn exp(&self, k: &Integer) -> Self {
        QuadForm::exp(self, k)
    }

    fn normalized(&self) -> Self {
        self.normalize()
    }

    fn reduced(&self) -> Self {
        self.reduce()
    }

    fn is_normal(a: &Integer, b: &Integer, _c: &Integer) -> bool {
        abc_is_normal(a, b)
    }

    fn is_reduced(a: &Integer, b: &Integer, c: &Integer) -> bool {
        abc_is_reduced(a, b, c)
    }
}
