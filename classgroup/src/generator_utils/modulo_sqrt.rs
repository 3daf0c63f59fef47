use anyhow::{ anyhow, bail, ensure };
use rug::Integer;

use super::crt;

/// Smallest $$b \in [0, 4p)$$ with $$b^2 \equiv a \pmod{4p}$$, for an odd prime $$p$$.
///
/// The parity of $$b$$ follows $$a \bmod 4$$, which is what makes
/// $$(b^2 - \Delta) / 4p$$ integral when $$a = \Delta$$. For $$a \equiv 0 \pmod 4$$
/// only roots $$b \equiv 0 \pmod 4$$ are considered.
pub fn sqrt_mod4p(a: impl Into<Integer>, p: impl Into<Integer>) -> anyhow::Result<Integer> {
    let a: Integer = a.into();
    let p: Integer = p.into();
    let p4 = Integer::from(&p * 4);
    let a = a.modulo(&p4);
    if a == 0 {
        return Ok(a);
    }

    let a_mod4 = a.clone() % 4;
    if a_mod4 >= 2 {
        bail!("a is a quadratic non-residue mod 4.");
    }
    let res_mod4_vec = if a_mod4 == 0 {
        vec![Integer::from(0)]
    } else {
        vec![Integer::from(1), Integer::from(3)]
    };

    let res_modp = sqrt_modp(&a, &p)?;
    let res_modp_vec = if res_modp == 0 {
        vec![res_modp]
    } else {
        vec![Integer::from(&p - &res_modp), res_modp]
    };

    let divisors = [Integer::from(4), p.clone()];
    let mut res_vec = Vec::new();
    for res_mod4 in &res_mod4_vec {
        for res_modp in &res_modp_vec {
            let res = crt(&[res_mod4.clone(), res_modp.clone()], &divisors)?;
            res_vec.push(res);
        }
    }
    res_vec.into_iter().min().ok_or_else(|| anyhow!("no square root of {a} mod {p4}."))
}

/// Thanks to:
/// https://github.com/GiacomoPope/ClassGroups/blob/main/classgroup_helper.py
pub fn sqrt_modp(a: impl Into<Integer>, p: impl Into<Integer>) -> anyhow::Result<Integer> {
    let a: Integer = a.into();
    let p: Integer = p.into();
    let a = a.modulo(&p);
    if a == 0 {
        return Ok(a);
    }
    ensure!(a.legendre(&p) == 1, "algorithm requires `a` be a quadratic residue.");

    let mut s: Integer;
    if p == 2 {
        s = a.clone().modulo(&p);
    } else if (&p & Integer::from(3)) == 3 {
        let e = (p.clone() + 1) >> 2;
        s = pow_mod(&a, &e, &p)?;
    } else if (&p & Integer::from(7)) == 5 {
        // Atkin's formulas
        let e = (p.clone() - 5) >> 3;
        let a2: Integer = a.clone() * 2;
        let b = pow_mod(&a2, &e, &p)?;
        let c = a2 * b.clone().square();
        let t: Integer = &a * b * (c - 1);
        s = t.modulo(&p);
    } else {
        s = tonelli_shanks(&a, &p)?;
    }
    if s.is_even() {
        s = &p - s;
    }
    return Ok(s);
}

fn pow_mod(x: &Integer, e: &Integer, p: &Integer) -> anyhow::Result<Integer> {
    x.clone().pow_mod(e, p).map_err(|_| anyhow!("{x}^{e} mod {p} is undefined."))
}

/// Rust impl of this python snippet:
///
/// https://www.ctfrecipes.com/cryptography/general-knowledge/maths/modular-arithmetic/tonelli-shanks
fn tonelli_shanks(a: &Integer, p: &Integer) -> anyhow::Result<Integer> {
    let a = a.clone().modulo(p);

    // Step 0. Find $$q, s$$ such that $$p-1 = q \cdot 2^s$$ where $$q$$ is odd.
    let mut s: u32 = 0;
    let q: Integer = p.clone() - 1;
    while !q.get_bit(s) {
        s += 1;
    }
    let q = q >> s;

    if s == 1 {
        let pow = (p.clone() + 1) >> 2;
        return pow_mod(&a, &pow, p);
    }

    let z = {
        let mut z = Integer::from(2);
        while z.legendre(p) != -1 {
            z += 1;
        }
        z
    };

    let mut c = pow_mod(&z, &q, p)?;
    let mut r = pow_mod(&a, &((q.clone() + 1) >> 1), p)?;
    let mut t = pow_mod(&a, &q, p)?;

    let mut m = s;
    while t != 1 {
        let mut t2 = t.clone().square().modulo(p);
        let mut i: u32 = 0;
        for j in 1..m {
            i = j;
            if t2 == 1 {
                break;
            }
            t2 = t2.square().modulo(p);
        }

        let b = pow_mod(&c, &(Integer::from(1) << (m - i - 1)), p)?;
        r = (r * &b).modulo(p);
        c = b.square().modulo(p);
        t = (t * &c).modulo(p);
        m = i;
    }

    Ok(r)
}
