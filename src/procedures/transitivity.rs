//! Transitive dependencies.
//!
//! If *X → Y* and *Y → Z* then *X → Z*.
//!
//! Chaining requires the dependent of the first dependency to be *equal* to the determinant of the second.
//! Weaker matches, such as a dependent which contains the determinant of the second, are instances of derived rules (e.g. pseudo-transitivity), and follow within a [closure](crate::procedures::closure) only by way of the other rules.
//!
//! # Overview
//!
//! A *round* chains every (ordered) pair of distinct dependencies in a collection whose dependent and determinant match.
//! Dependencies obtained from a round are added to the collection, and rounds continue until some round adds no dependency, at which point the collection is *saturated*.
//!
//! The (newly) transitive dependencies are then those in the saturated collection but not in the given collection.
//!
//! Saturation terminates, as each side of a chained dependency is a side of some given dependency, and so there are finitely many dependencies to chain.
//! Still, the number of rounds may be bounded through a [context](Context::transitive).
//!
//! # Example
//!
//! ```rust
//! # use fd_closure::procedures::transitivity::transitive;
//! # use fd_closure::structures::attribute::attribute_set;
//! # use fd_closure::structures::collection::FDCollection;
//! # use fd_closure::structures::dependency::FD;
//! let fds = FDCollection::from_iter([
//!     FD::new(attribute_set(["a"]), attribute_set(["b"])).unwrap(),
//!     FD::new(attribute_set(["b"]), attribute_set(["c"])).unwrap(),
//!     FD::new(attribute_set(["c"]), attribute_set(["d"])).unwrap(),
//! ]);
//!
//! let transitive = transitive(&fds);
//!
//! assert_eq!(transitive.len(), 3);
//! assert!(transitive.contains(&FD::new(attribute_set(["a"]), attribute_set(["d"])).unwrap()));
//! ```

use std::collections::BTreeMap;

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        attribute::AttributeSet, collection::FDCollection, dependency::FunctionalDependency,
    },
    types::err::{self},
};

/// Every dependency derivable from `dependencies` by (repeated) transitivity, which is not in `dependencies`.
pub fn transitive(dependencies: &FDCollection) -> FDCollection {
    let mut saturated = dependencies.clone();

    loop {
        let chained = transitive_round(&saturated);
        if saturated.merge(chained) == 0 {
            break;
        }
    }

    saturated.difference(dependencies)
}

/// A single round of transitivity over `dependencies`.
///
/// The returned collection may contain dependencies already in `dependencies`.
pub fn transitive_round(dependencies: &FDCollection) -> FDCollection {
    let mut by_determinant: BTreeMap<&AttributeSet, Vec<&FunctionalDependency>> = BTreeMap::new();
    for fd in dependencies {
        by_determinant.entry(fd.determinant()).or_default().push(fd);
    }

    let mut chained = FDCollection::default();

    for first in dependencies {
        let Some(seconds) = by_determinant.get(first.dependent()) else {
            continue;
        };

        for second in seconds {
            if first != *second {
                chained.insert(FunctionalDependency::derived(
                    first.determinant().clone(),
                    second.dependent().clone(),
                ));
            }
        }
    }

    chained
}

impl Context {
    /// Every dependency derivable from `dependencies` by (repeated) transitivity, which is not in `dependencies`.
    ///
    /// As [transitive], though with limits from the configuration of the context on rounds of saturation and the size of the saturated collection.
    pub fn transitive(
        &mut self,
        dependencies: &FDCollection,
    ) -> Result<FDCollection, err::LimitError> {
        let round_limit = self.config.transitive_round_limit.value;
        let collection_limit = self.config.collection_limit.value;

        let mut saturated = dependencies.clone();
        let mut round = 0;

        loop {
            round += 1;
            if round > round_limit {
                log::info!(target: targets::TRANSITIVITY, "Saturation incomplete after {round_limit} rounds");
                return Err(err::LimitError::TransitiveRounds(round_limit));
            }
            self.counters.transitive_rounds += 1;

            let fresh = saturated.merge(transitive_round(&saturated));
            log::trace!(target: targets::TRANSITIVITY, "Round {round}: {fresh} fresh dependencies");

            if saturated.len() > collection_limit {
                log::info!(target: targets::TRANSITIVITY, "Saturation exceeded {collection_limit} dependencies");
                return Err(err::LimitError::Collection(collection_limit));
            }

            if fresh == 0 {
                break;
            }
        }

        Ok(saturated.difference(dependencies))
    }
}
