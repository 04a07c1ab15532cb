//! Error types used in the library.
//!
//! - Derivation itself is total, and so there are no errors from applying a rule of inference.
//! - Errors arise when constructing a dependency which is not meaningful --- e.g. with an empty determinant, or with an attribute outside of some declared schema.
//! - Errors also arise when a derivation exceeds some limit of the [configuration](crate::config), as the cost of a closure is exponential in the size of the universe of attributes.
//!   In this case no (partial) closure is returned, and the context may be reconfigured and used again.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::attribute::Attribute;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Dependency(DependencyError),
    Limit(LimitError),
}

/// Noted errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside of the bounds of the named option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors when constructing a functional dependency.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DependencyError {
    /// The determinant (left side) of the dependency is empty.
    EmptyDeterminant,

    /// The dependent (right side) of the dependency is empty.
    EmptyDependent,

    /// An attribute which is not part of the declared schema.
    UnknownAttribute(Attribute),
}

impl From<DependencyError> for ErrorKind {
    fn from(e: DependencyError) -> Self {
        ErrorKind::Dependency(e)
    }
}

/// Some limit on a derivation was exceeded.
///
/// The value given with a variant is the limit in place, for reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LimitError {
    /// The universe of attributes is too large to build a power set of.
    Universe { size: usize, limit: usize },

    /// The closure did not reach a fixpoint within the permitted number of iterations.
    Iterations(usize),

    /// Transitive saturation did not reach a fixpoint within the permitted number of rounds.
    TransitiveRounds(usize),

    /// The working collection grew past the permitted number of dependencies.
    Collection(usize),

    /// The time limit of the derivation passed.
    Time,

    /// The terminate callback requested the derivation stop.
    Terminated,
}

impl From<LimitError> for ErrorKind {
    fn from(e: LimitError) -> Self {
        ErrorKind::Limit(e)
    }
}
