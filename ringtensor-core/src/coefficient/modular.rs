use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{Field, Ring, SampleElement};
use crate::error::RingTensorError;

/// Residues modulo `m`, stored as canonical `u64` values in `[0, m)`.
///
/// Operations reduce their inputs, so non-canonical values are accepted.
/// When `m` is prime this is the finite field `GF(m)`; otherwise only units
/// are invertible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModularIntegers {
    modulus: u64,
}

impl ModularIntegers {
    /// # Errors
    /// Returns `RingTensorError::InvalidModulus` when `modulus < 2`.
    pub fn new(modulus: u64) -> Result<Self, RingTensorError> {
        if modulus < 2 {
            return Err(RingTensorError::InvalidModulus(modulus));
        }
        Ok(ModularIntegers { modulus })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Maps a signed integer onto its canonical residue.
    pub fn residue(&self, value: i64) -> u64 {
        (value as i128).rem_euclid(self.modulus as i128) as u64
    }

    #[inline]
    fn reduce(&self, a: u64) -> u64 {
        a % self.modulus
    }
}

impl Ring for ModularIntegers {
    type Element = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        ((self.reduce(*a) as u128 + self.reduce(*b) as u128) % self.modulus as u128) as u64
    }

    fn sub(&self, a: &u64, b: &u64) -> u64 {
        let (a, b) = (self.reduce(*a) as u128, self.reduce(*b) as u128);
        ((a + self.modulus as u128 - b) % self.modulus as u128) as u64
    }

    fn neg(&self, a: &u64) -> u64 {
        (self.modulus - self.reduce(*a)) % self.modulus
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        ((*a as u128 * *b as u128) % self.modulus as u128) as u64
    }

    fn is_equal(&self, a: &u64, b: &u64) -> bool {
        self.reduce(*a) == self.reduce(*b)
    }
}

impl Field for ModularIntegers {
    /// Inverse via the extended Euclidean algorithm.
    fn reciprocal(&self, a: &u64) -> Result<u64, RingTensorError> {
        let m = self.modulus as i128;
        let (mut old_r, mut r) = (self.reduce(*a) as i128, m);
        let (mut old_s, mut s) = (1i128, 0i128);
        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
        }
        if old_r != 1 {
            return Err(RingTensorError::NotInvertible(format!(
                "{} has no inverse modulo {} (gcd {})",
                a, self.modulus, old_r
            )));
        }
        Ok(old_s.rem_euclid(m) as u64)
    }
}

impl SampleElement for ModularIntegers {
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> u64 {
        Uniform::new(0, self.modulus).sample(rng)
    }
}
