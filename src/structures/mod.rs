//! Key structures, such as attributes, dependencies, and collections of dependencies.
//!
//! # Other structures without an implementation.
//!
//! ## Relations
//!
//! A relation is a set of rows over some set of [attributes](attribute).
//! Dependencies are claims about relations, though no relation is ever represented, and a dependency is only ever related to other dependencies through the rules of inference.
//!
//! ## Universes
//!
//! The universe of a collection of dependencies is the set of attributes appearing in some dependency of the collection. \
//! Every derivation is implicitly relative to the universe of the given collection, as (with [augmentation](crate::procedures::augmentation)) it is the source of attributes for derived dependencies.
//!
//! The universe is computed by [FDCollection::attributes](collection::FDCollection::attributes), and may be checked against some [schema].

pub mod attribute;
pub mod collection;
pub mod dependency;
pub mod schema;
pub mod source;
