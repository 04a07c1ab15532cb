//! Trivial dependencies, by reflexivity.
//!
//! A set of attributes determines each of its subsets, and so for every dependency *X → Y* and non-empty subset *Z* of *X*, *X → Z* is a (trivial) dependency.
//!
//! As the trivial dependencies of a dependency are fixed by its determinant, trivial dependencies are found once for each distinct determinant in a collection.
//!
//! # Example
//!
//! ```rust
//! # use fd_closure::procedures::trivial::trivial;
//! # use fd_closure::structures::attribute::attribute_set;
//! # use fd_closure::structures::collection::FDCollection;
//! # use fd_closure::structures::dependency::FD;
//! let fds = FDCollection::from_iter([FD::new(attribute_set(["a", "b"]), attribute_set(["c"])).unwrap()]);
//!
//! let trivial = trivial(&fds);
//!
//! assert_eq!(trivial.len(), 3);
//! assert!(trivial.iter().all(|fd| fd.is_trivial()));
//! ```

use std::collections::BTreeSet;

use crate::{
    generic::power_set::power_set,
    misc::log::targets::{self},
    structures::{collection::FDCollection, dependency::FunctionalDependency},
};

/// Every dependency of a determinant in `dependencies` on some non-empty subset of the determinant.
pub fn trivial(dependencies: &FDCollection) -> FDCollection {
    let determinants = dependencies
        .iter()
        .map(|fd| fd.determinant())
        .collect::<BTreeSet<_>>();

    let mut trivial = FDCollection::default();

    for determinant in determinants {
        for subset in power_set(determinant) {
            if !subset.is_empty() {
                trivial.insert(FunctionalDependency::derived(determinant.clone(), subset));
            }
        }
    }

    log::trace!(target: targets::TRIVIAL, "{} trivial dependencies from {} dependencies", trivial.len(), dependencies.len());
    trivial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::attribute::attribute_set;

    fn fd(determinant: &str, dependent: &str) -> FunctionalDependency {
        FunctionalDependency::new(
            attribute_set(determinant.split_whitespace()),
            attribute_set(dependent.split_whitespace()),
        )
        .unwrap()
    }

    #[test]
    fn every_non_empty_subset() {
        let fds = FDCollection::from_iter([fd("a b c", "d")]);
        let trivial = trivial(&fds);

        assert_eq!(trivial.len(), 7);
        for dependent in ["a", "b", "c", "a b", "a c", "b c", "a b c"] {
            assert!(trivial.contains(&fd("a b c", dependent)));
        }
    }

    #[test]
    fn shared_determinants() {
        let fds = FDCollection::from_iter([fd("a", "b"), fd("a", "c"), fd("b", "c")]);
        let trivial = trivial(&fds);

        assert_eq!(trivial, FDCollection::from_iter([fd("a", "a"), fd("b", "b")]));
    }

    #[test]
    fn empty() {
        assert!(trivial(&FDCollection::default()).is_empty());
    }
}
