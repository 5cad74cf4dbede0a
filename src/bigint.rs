// Big Integer Operations
// Thin layer over num-bigint for the arithmetic RSA needs: modular
// exponentiation, extended Euclid, and modular inverse.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Modular exponentiation: base^exp mod modulus
/// Binary square-and-multiply, O(log exp) multiplications.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd(a, b).
///
/// Iterative over the quotient chain rather than recursive: the step count is
/// O(log(min(a, b))), which for multi-hundred-digit moduli is a few hundred
/// iterations, and this way none of them live on the call stack.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;
        let rem = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, rem);
        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);
        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Compute modular inverse: a^(-1) mod m
/// The Bézout coefficient may come back negative; it is normalized into
/// (0, m). Returns None if gcd(a, m) != 1, i.e. no inverse exists.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let (gcd, x, _) = extended_gcd(&BigInt::from(a.clone()), &BigInt::from(m.clone()));

    if !gcd.is_one() {
        return None;
    }

    let m = BigInt::from(m.clone());
    let mut x = x % &m;
    if x.is_negative() {
        x += &m;
    }

    x.to_biguint()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: u64) -> BigInt {
        BigInt::from(n)
    }

    fn uint(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        assert_eq!(mod_pow(&uint(3), &uint(5), &uint(7)), uint(5));
        // Anything mod 1 is 0
        assert_eq!(mod_pow(&uint(10), &uint(10), &uint(1)), uint(0));
        // Zero exponent
        assert_eq!(mod_pow(&uint(42), &uint(0), &uint(97)), uint(1));
    }

    #[test]
    fn test_mod_pow_textbook_values() {
        // The classic p=61, q=53 example: 65^17 mod 3233 = 2790
        assert_eq!(mod_pow(&uint(65), &uint(17), &uint(3233)), uint(2790));
        assert_eq!(mod_pow(&uint(2790), &uint(2753), &uint(3233)), uint(65));
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        let pairs = [(65537u64, 3120u64), (17, 3120), (240, 46), (7, 40)];
        for (a, b) in pairs {
            let (g, x, y) = extended_gcd(&int(a), &int(b));
            assert_eq!(&int(a) * &x + &int(b) * &y, g);
        }
    }

    #[test]
    fn test_extended_gcd_base_case() {
        let (g, x, y) = extended_gcd(&int(42), &int(0));
        assert_eq!(g, int(42));
        assert_eq!(x, int(1));
        assert_eq!(y, int(0));
    }

    #[test]
    fn test_extended_gcd_large_operands() {
        let a: BigInt = "340282366920938463463374607431768211507".parse().unwrap();
        let b: BigInt = "18446744073709551629".parse().unwrap();
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(&a * &x + &b * &y, g);
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        assert_eq!(mod_inverse(&uint(3), &uint(7)), Some(uint(5)));
        // 17^(-1) mod 3120 = 2753
        assert_eq!(mod_inverse(&uint(17), &uint(3120)), Some(uint(2753)));
    }

    #[test]
    fn test_mod_inverse_not_coprime() {
        assert_eq!(mod_inverse(&uint(4), &uint(8)), None);
        assert_eq!(mod_inverse(&uint(6), &uint(9)), None);
    }
}
