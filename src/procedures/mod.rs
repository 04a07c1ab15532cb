//! Procedures for deriving dependencies.
//!
//! Each rule of inference is a function from a collection of dependencies to the collection of dependencies derived by the rule.
//! The given collection is never modified.
//!
//! The [closure] combines the rules, and (along with a bounded variant of [transitivity]) is also available as a method of a [context](crate::context::Context), which checks the derivation against the limits of its configuration.

pub mod augmentation;
pub mod closure;
pub mod transitivity;
pub mod trivial;
