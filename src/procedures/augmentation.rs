//! Augmentation of dependencies.
//!
//! If *X → Y* then *XZ → YZ*, for any set of attributes *Z*.
//!
//! Within a [closure](crate::procedures::closure) *Z* ranges over every non-empty subset of the universe, and so augmentation is the (only) rule by which attributes are related to a dependency which does not already mention them.
//!
//! If *Z* is contained in *X* and *Y*, the augmented dependency is the original dependency.
//! This is not checked, as the duplicate is absorbed by the collection.

use crate::{
    misc::log::targets::{self},
    structures::{attribute::AttributeSet, collection::FDCollection},
};

/// Each dependency of `dependencies` with `attributes` added to both sides.
pub fn augment(dependencies: &FDCollection, attributes: &AttributeSet) -> FDCollection {
    let augmented = dependencies
        .iter()
        .map(|fd| {
            let mut copy = fd.clone();
            copy.add_to_left(attributes);
            copy.add_to_right(attributes);
            copy
        })
        .collect::<FDCollection>();

    log::trace!(target: targets::AUGMENTATION, "{} dependencies augmented with {attributes:?}", augmented.len());
    augmented
}
