use std::fmt::Debug;
use std::marker::PhantomData;

use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::{Field, Ring, SampleElement};
use crate::error::RingTensorError;

/// Floating-point numbers treated as a field.
///
/// Equality is exact; no tolerance is applied. Rounding makes the ring laws
/// hold only approximately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reals<T> {
    _marker: PhantomData<T>,
}

impl<T> Reals<T> {
    pub fn new() -> Self {
        Reals {
            _marker: PhantomData,
        }
    }
}

impl<T> Ring for Reals<T>
where
    T: Float + Debug + Send + Sync + 'static,
{
    type Element = T;

    fn zero(&self) -> T {
        T::zero()
    }

    fn one(&self) -> T {
        T::one()
    }

    fn add(&self, a: &T, b: &T) -> T {
        *a + *b
    }

    fn sub(&self, a: &T, b: &T) -> T {
        *a - *b
    }

    fn neg(&self, a: &T) -> T {
        -*a
    }

    fn mul(&self, a: &T, b: &T) -> T {
        *a * *b
    }

    fn is_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T> Field for Reals<T>
where
    T: Float + Debug + Send + Sync + 'static,
{
    fn reciprocal(&self, a: &T) -> Result<T, RingTensorError> {
        if a.is_zero() {
            return Err(RingTensorError::NotInvertible(
                "reciprocal of zero".to_string(),
            ));
        }
        Ok(a.recip())
    }
}

impl<T> SampleElement for Reals<T>
where
    T: Float + Debug + Send + Sync + 'static,
    StandardNormal: Distribution<T>,
{
    /// Standard normal samples.
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> T {
        StandardNormal.sample(rng)
    }
}
