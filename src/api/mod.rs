//! Resource definitions
//!
//! - [`meta`] - Identity and object metadata shared by every kind
//! - [`v1alpha1`] - The `vitistack.io/v1alpha1` kinds

pub mod meta;
pub mod v1alpha1;
