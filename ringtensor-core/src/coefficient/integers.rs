use std::fmt::Debug;
use std::marker::PhantomData;

use num_traits::{NumCast, PrimInt, Signed};
use rand::Rng;
use rand_distr::uniform::SampleUniform;
use rand_distr::{Distribution, Uniform};

use super::{Ring, SampleElement};

/// The integers, represented by a signed primitive type.
///
/// Overflow follows the primitive type's arithmetic (it panics in debug builds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Integers<T> {
    _marker: PhantomData<T>,
}

impl<T> Integers<T> {
    pub fn new() -> Self {
        Integers {
            _marker: PhantomData,
        }
    }
}

impl<T> Ring for Integers<T>
where
    T: PrimInt + Signed + Debug + Send + Sync + 'static,
{
    type Element = T;

    #[inline]
    fn zero(&self) -> T {
        T::zero()
    }

    #[inline]
    fn one(&self) -> T {
        T::one()
    }

    #[inline]
    fn add(&self, a: &T, b: &T) -> T {
        *a + *b
    }

    #[inline]
    fn sub(&self, a: &T, b: &T) -> T {
        *a - *b
    }

    #[inline]
    fn neg(&self, a: &T) -> T {
        -*a
    }

    #[inline]
    fn mul(&self, a: &T, b: &T) -> T {
        *a * *b
    }

    #[inline]
    fn is_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T> SampleElement for Integers<T>
where
    T: PrimInt + Signed + SampleUniform + Debug + Send + Sync + 'static,
{
    /// Uniform over `[-16, 16]` (clamped to the type's range).
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> T {
        let bound = <T as NumCast>::from(16).unwrap_or_else(T::max_value);
        Uniform::new_inclusive(-bound, bound).sample(rng)
    }
}
