use std::{ str::FromStr, sync::LazyLock };

use anyhow::{ Context, ensure };
use rug::Integer;

use crate::{ generator_utils::sqrt_mod4p, quadform::QuadForm };

// 2048-bit prime, negated, congruent to `7 mod 8`, so $$\Delta \equiv 1 \pmod 8$$.
// This is the discriminant of the Chia `inkfish` reference class group; test
// suites of other implementations hard-code the same value.
pub fn Delta_2048() -> &'static Integer {
    static DELTA: LazyLock<Integer> = LazyLock::new(|| {
        let digits =
            String::from("-") +
                "30616069034807523947093657516320815215492876376165" +
                "06790271698865780240003733191444821825159083011021" +
                "89519215849430413184776658192481976276720778009261" +
                "80883263030484171136687216122364364500191669694934" +
                "23497224870506311710491233557329479816457723381368" +
                "78873407993316565304214571866872776526805756732076" +
                "78516369650123480826989387975548598309959486361425" +
                "02186016102024860783327630631492373098545709727023" +
                "50567411779734372573754840570138310317754359137013" +
                "51265592632577304892671805069109294533717273440872" +
                "86361426404588335160385998280988603297435639020911" +
                "29565202596776170270170147116239662861528056542294" +
                "45219531956098223";
        Integer::from_str(&digits).unwrap()
    });
    return &DELTA;
}

/// A discriminant of an imaginary quadratic order is negative and
/// congruent to 0 or 1 modulo 4.
pub fn validate_discriminant(delta: &Integer) -> anyhow::Result<()> {
    ensure!(delta.is_negative(), "discriminant must be negative, got {delta}.");
    let r = delta.clone().modulo(&Integer::from(4));
    ensure!(r == 0 || r == 1, "discriminant must be 0 or 1 mod 4, got {r} mod 4.");
    Ok(())
}

/// Derive a fixed generator-candidate of $$Cl(\Delta)$$.
///
/// * $$\Delta \equiv 1 \pmod 8$$: 2 splits, use $$(2, 1, (1 - \Delta)/8)$$.
/// * otherwise: take the smallest odd prime $$r$$ with $$(\Delta / r) = 1$$ and a
///   square root $$b$$ of $$\Delta$$ modulo $$4r$$, and use $$(r, b, (b^2 - \Delta)/4r)$$.
///
/// The result is reduced.
pub fn generator_for_discriminant(delta: &Integer) -> anyhow::Result<QuadForm> {
    validate_discriminant(delta)?;

    if delta.clone().modulo(&Integer::from(8)) == 1 {
        let g = QuadForm::new(2, 1, delta)?;
        return Ok(g.reduce());
    }

    let mut r = Integer::from(2);
    loop {
        r = r.next_prime();
        if delta.kronecker(&r) == 1 {
            break;
        }
    }
    let b = sqrt_mod4p(delta, &r).with_context(|| format!("no square root of Delta mod 4*{r}"))?;
    let g = QuadForm::new(r, b, delta)?;
    Ok(g.reduce())
}
