use anyhow::{ anyhow, ensure };
use rug::Integer;

/// Chinese Remainder Theorem
///
/// Given $$x = x_i \pmod w_i$$, where $$\gcd(w_i, w_j)=1$$ for any $$i\ne j$$.
/// Solve $$x \bmod w$$, where $$w=\prod_i w_i$$.
pub fn crt(remainders: &[Integer], divisors: &[Integer]) -> anyhow::Result<Integer> {
    ensure!(!remainders.is_empty(), "crt needs at least one congruence.");
    ensure!(remainders.len() == divisors.len(), "crt got {} remainders but {} divisors.",
        remainders.len(), divisors.len());

    let w = divisors.iter().fold(Integer::from(1), |acc, wi| acc * wi);
    let mut x = Integer::from(0);
    for (xi, wi) in remainders.iter().zip(divisors) {
        let mi = Integer::from(&w / wi);
        let mi_inv = mi
            .clone()
            .invert(wi)
            .map_err(|_| anyhow!("divisor {wi} is not coprime to the others."))?;
        x += Integer::from(xi * &mi) * mi_inv;
    }

    Ok(x.modulo(&w))
}
