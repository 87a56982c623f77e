//! Arithmetic modulo a prime on arbitrary-precision unsigned integers.
//!
//! All functions return values reduced into `[0, m)` and never produce a
//! negative intermediate: subtraction is performed as `a + m - b`.

use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Returns `a mod m`.
#[inline]
pub(crate) fn reduce(a: &BigUint, m: &BigUint) -> BigUint {
    a % m
}

/// Returns `a - b mod m`.
pub(crate) fn sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + m - (b % m)) % m
}

/// Returns `-a mod m`.
pub(crate) fn neg(a: &BigUint, m: &BigUint) -> BigUint {
    sub(&BigUint::zero(), a, m)
}

/// Returns `a * b mod m`.
#[inline]
pub(crate) fn mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Returns `a⁻¹ mod m`.
///
/// Fails with [`Error::Arithmetic`] when `a ≡ 0 (mod m)` or, for a
/// composite `m`, when `a` shares a factor with it.
pub(crate) fn invert(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    reduce(a, m).modinv(m).ok_or(Error::Arithmetic)
}

/// Returns a square root of `a` modulo the odd prime `p`, or `None` when `a`
/// is a quadratic non-residue.
///
/// Which of the two roots is returned is unspecified.
pub(crate) fn sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = reduce(a, p);
    if a.is_zero() {
        return Some(a);
    }

    let one = BigUint::one();
    let p_minus_1 = p - &one;

    // Euler's criterion: a^((p - 1) / 2) ≡ 1 (mod p) iff a is a residue
    if !a.modpow(&(&p_minus_1 >> 1), p).is_one() {
        return None;
    }

    let root = if p.bit(0) && p.bit(1) {
        // p ≡ 3 (mod 4): a^((p + 1) / 4) is a root since
        //
        //     (a^((p + 1) / 4))^2 = a^((p + 1) / 2) = a * a^((p - 1) / 2) = a
        a.modpow(&((p + &one) >> 2), p)
    } else {
        tonelli_shanks(&a, p, &p_minus_1)?
    };

    (mul(&root, &root, p) == a).then_some(root)
}

/// Tonelli-Shanks square root for a quadratic residue `a` modulo `p`.
fn tonelli_shanks(a: &BigUint, p: &BigUint, p_minus_1: &BigUint) -> Option<BigUint> {
    let one = BigUint::one();

    // p - 1 = q * 2^s with q odd
    let s = p_minus_1.trailing_zeros()?;
    let q = p_minus_1 >> s;

    // Any non-residue z will do; the smallest one is found quickly.
    let euler = p_minus_1 >> 1;
    let mut z = BigUint::from(2u32);
    while z.modpow(&euler, p) != *p_minus_1 {
        z += 1u32;
        if z >= *p {
            return None;
        }
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + &one) >> 1), p);

    while !t.is_one() {
        // least i in (0, m) with t^(2^i) = 1
        let mut i = 0;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = mul(&t2i, &t2i, p);
            i += 1;
            if i == m {
                return None;
            }
        }

        let b = c.modpow(&(&one << (m - i - 1)), p);
        m = i;
        c = mul(&b, &b, p);
        t = mul(&t, &c, p);
        r = mul(&r, &b, p);
    }

    Some(r)
}

/// Is `a` odd?
#[inline]
pub(crate) fn is_odd(a: &BigUint) -> bool {
    a.bit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn sub_wraps_instead_of_going_negative() {
        assert_eq!(sub(&big(3), &big(5), &big(7)), big(5));
        assert_eq!(sub(&big(5), &big(3), &big(7)), big(2));
        assert_eq!(sub(&big(10), &big(24), &big(7)), big(0));
    }

    #[test]
    fn neg_of_zero_is_zero() {
        assert_eq!(neg(&big(0), &big(11)), big(0));
        assert_eq!(neg(&big(4), &big(11)), big(7));
    }

    #[test]
    fn invert_round_trips() {
        let p = big(1_000_003);
        for a in [1u64, 2, 17, 999_999, 1_000_002] {
            let inv = invert(&big(a), &p).unwrap();
            assert_eq!(mul(&big(a), &inv, &p), big(1));
        }
    }

    #[test]
    fn invert_zero_is_arithmetic_error() {
        assert!(matches!(invert(&big(0), &big(13)), Err(Error::Arithmetic)));
        assert!(matches!(invert(&big(26), &big(13)), Err(Error::Arithmetic)));
    }

    #[test]
    fn sqrt_three_mod_four() {
        // 23 ≡ 3 (mod 4)
        let p = big(23);
        for a in 1..23u64 {
            match sqrt(&big(a), &p) {
                Some(root) => assert_eq!(mul(&root, &root, &p), big(a)),
                None => assert!(!big(a).modpow(&big(11), &p).is_one()),
            }
        }
    }

    #[test]
    fn sqrt_one_mod_four() {
        // 97 ≡ 1 (mod 4) and 97 - 1 = 3 * 2^5
        let p = big(97);
        let mut residues = 0;
        for a in 1..97u64 {
            if let Some(root) = sqrt(&big(a), &p) {
                assert_eq!(mul(&root, &root, &p), big(a));
                residues += 1;
            }
        }
        assert_eq!(residues, 48);
    }

    #[test]
    fn sqrt_of_non_residue_is_none() {
        // 5 is a non-residue mod 13
        assert!(sqrt(&big(5), &big(13)).is_none());
    }
}
