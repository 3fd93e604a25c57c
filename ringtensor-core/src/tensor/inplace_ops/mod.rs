//! In-place writes through a tensor's geometry.
//!
//! These never allocate storage: they mutate the slots addressed by the view,
//! so every alias of those slots observes the change.

pub(crate) mod add;
pub(crate) mod assign;
pub(crate) mod fill;
