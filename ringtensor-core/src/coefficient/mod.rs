//! Coefficient models: the algebraic structures tensor elements live in.
//!
//! Every arithmetic step of the engine goes through a [`Ring`] value carried by
//! the tensor. A model is a value rather than a bare type so that it can hold
//! parameters such as a modulus.
//!
//! # Ring laws
//!
//! For a model `(R, +, ×, 0, 1)` the engine relies on:
//! - `(R, +, 0)` is a commutative group (`neg` gives inverses)
//! - `(R, ×, 1)` is a monoid
//! - `×` distributes over `+`
//!
//! Contraction sums terms in an unspecified order, so `+` must be associative
//! and commutative for results to be well defined.
//!
//! | Model | Element | Field |
//! |-------|---------|-------|
//! | [`Integers<T>`] | signed primitive int | no |
//! | [`ModularIntegers`] | `u64` residue | yes (units only) |
//! | [`Reals<T>`] | float | yes |

use std::fmt::Debug;

use rand::Rng;

use crate::error::RingTensorError;

pub mod integers;
pub mod modular;
pub mod reals;

pub use integers::Integers;
pub use modular::ModularIntegers;
pub use reals::Reals;

/// A commutative ring of coefficients.
pub trait Ring: Clone + Debug + Send + Sync + 'static {
    /// The element type stored in tensor buffers.
    type Element: Clone + Debug + Send + Sync + 'static;

    /// Additive identity.
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity.
    fn one(&self) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn neg(&self, a: &Self::Element) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Coefficient equality. Elements may have several representations, so
    /// this is the only equality the engine uses.
    fn is_equal(&self, a: &Self::Element, b: &Self::Element) -> bool;

    fn is_zero(&self, a: &Self::Element) -> bool {
        self.is_equal(a, &self.zero())
    }
}

/// A ring where every non-zero (or every unit) element has an inverse.
///
/// Not used by the tensor core itself; provided for collaborators such as
/// elimination-based algorithms built on top of it.
pub trait Field: Ring {
    /// Multiplicative inverse.
    ///
    /// # Errors
    /// Returns `RingTensorError::NotInvertible` when `a` has no inverse.
    fn reciprocal(&self, a: &Self::Element) -> Result<Self::Element, RingTensorError>;

    /// `a * b^-1`.
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, RingTensorError> {
        let inv = self.reciprocal(b)?;
        Ok(self.mul(a, &inv))
    }
}

/// Models that can draw random elements, used by `Tensor::random`.
pub trait SampleElement: Ring {
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> Self::Element;
}
