//! The closure of a collection of dependencies.
//!
//! # Overview
//!
//! The closure of a collection 𝐅 of dependencies is the smallest collection which contains 𝐅 and is closed under the rules of inference:
//! - [Trivial](crate::procedures::trivial) dependencies.
//! - [Augmentation](crate::procedures::augmentation) by any non-empty subset of the universe of 𝐅.
//! - [Transitivity](crate::procedures::transitivity).
//!
//! The closure is found as a fixpoint.
//! Each iteration applies each rule to a working collection, merging the results back into the working collection, and iterations continue until some iteration leaves the size of the working collection unchanged.
//!
//! ```rust,ignore
//! let power = power_set(&dependencies.attributes());
//! let mut working = dependencies.clone();
//!
//! loop {
//!     let size_before = working.len();
//!
//!     for attributes in power.iter().filter(|s| !s.is_empty()) {
//!         working.merge(augment(&working, attributes));
//!     }
//!     working.merge(trivial(&working));
//!     working.merge(transitive(&working));
//!
//!     if working.len() == size_before {
//!         break;
//!     }
//! }
//! ```
//!
//! The working collection only grows, and every dependency in the working collection is a pair of subsets of the universe, so the fixpoint is reached after finitely many iterations.
//! As the working collection is a set, the result is independent of the order in which dependencies are given or derived.
//!
//! Augmentation is always by subsets of the universe of the *given* collection.
//! Though, no rule introduces an attribute outside of the universe, and so the universe is fixed throughout.
//!
//! # Costs
//!
//! Each iteration augments the working collection by each of the 2<sup>*n*</sup> - 1 non-empty subsets of a universe of *n* attributes, and transitivity compares pairs of dependencies in the working collection.
//! In the worst case a closure contains a dependency between every pair of non-empty subsets of the universe.
//!
//! So, a [context](crate::context) checks a closure against the limits of its configuration:
//! - The size of the universe is checked before the power set is built.
//! - The size of the working collection is checked after each merge.
//! - The count of iterations, the time limit, and the terminate callback, are checked at the start of each iteration and before each augmentation.
//!
//! # Example
//!
//! ```rust
//! # use fd_closure::procedures::closure::closure;
//! # use fd_closure::structures::attribute::attribute_set;
//! # use fd_closure::structures::collection::FDCollection;
//! # use fd_closure::structures::dependency::FD;
//! let fds = FDCollection::from_iter([FD::new(attribute_set(["a"]), attribute_set(["b"])).unwrap()]);
//!
//! let closed = closure(&fds).unwrap();
//!
//! assert_eq!(closed.len(), 6);
//! assert_eq!(closure(&closed), Ok(closed.clone()));
//! ```

use std::time::Instant;

use crate::{
    config::Config,
    context::{Context, Counters},
    generic::power_set::power_set,
    misc::log::targets::{self},
    procedures::{augmentation::augment, trivial::trivial},
    structures::{attribute::AttributeSet, collection::FDCollection, source::DependencySource},
    types::err::{self},
};

/// The closure of `dependencies`, within a context of default configuration.
pub fn closure(dependencies: &FDCollection) -> Result<FDCollection, err::ErrorKind> {
    Context::from_config(Config::default()).closure(dependencies)
}

impl Context {
    /// The closure of `dependencies`, within the limits of the configuration of the context.
    ///
    /// Counters of the context are reset, and on return hold counts from this closure.
    pub fn closure(&mut self, dependencies: &FDCollection) -> Result<FDCollection, err::ErrorKind> {
        let start = Instant::now();
        self.counters = Counters::default();

        let universe = dependencies.attributes();
        let universe_limit = self.config.universe_limit.value;
        if universe.len() > universe_limit {
            log::info!(target: targets::CLOSURE, "Universe of {} attributes exceeds limit of {universe_limit}", universe.len());
            return Err(err::LimitError::Universe {
                size: universe.len(),
                limit: universe_limit,
            }
            .into());
        }

        let augmentations = power_set(&universe)
            .into_iter()
            .filter(|attributes| !attributes.is_empty())
            .collect::<Vec<AttributeSet>>();

        let mut working = FDCollection::default();
        self.merge_noting(&mut working, dependencies.clone(), DependencySource::Original)?;

        'closure_loop: loop {
            self.counters.iterations += 1;
            let iteration_limit = self.config.iteration_limit.value;
            if self.counters.iterations > iteration_limit {
                log::info!(target: targets::CLOSURE, "No fixpoint after {iteration_limit} iterations");
                return Err(err::LimitError::Iterations(iteration_limit).into());
            }
            self.check_interrupts(start)?;

            let size_before = working.len();

            for attributes in &augmentations {
                self.check_interrupts(start)?;
                let augmented = augment(&working, attributes);
                self.merge_noting(&mut working, augmented, DependencySource::Augmentation)?;
            }

            let trivial = trivial(&working);
            self.merge_noting(&mut working, trivial, DependencySource::Trivial)?;

            let transitive = self.transitive(&working)?;
            self.merge_noting(&mut working, transitive, DependencySource::Transitivity)?;

            log::debug!(target: targets::CLOSURE, "Iteration {}: {} dependencies ({} fresh)", self.counters.iterations, working.len(), working.len() - size_before);

            if working.len() == size_before {
                break 'closure_loop;
            }
        }

        self.counters.time = start.elapsed();
        log::info!(target: targets::CLOSURE, "Closure of {} dependencies: {} dependencies after {} iterations", dependencies.len(), working.len(), self.counters.iterations);

        Ok(working)
    }

    /// Checks the time limit and terminate callback.
    fn check_interrupts(&mut self, start: Instant) -> Result<(), err::LimitError> {
        self.counters.time = start.elapsed();
        let time_limit = self.config.time_limit.value;
        if !time_limit.is_zero() && self.counters.time > time_limit {
            log::info!(target: targets::CLOSURE, "Time limit of {time_limit:?} passed");
            return Err(err::LimitError::Time);
        }

        if self.check_callback_terminate() {
            log::info!(target: targets::CLOSURE, "Terminated by callback");
            return Err(err::LimitError::Terminated);
        }

        Ok(())
    }

    /// Merges `derived` into `working`, noting each fresh dependency, and checks the size of `working` against the collection limit.
    fn merge_noting(
        &mut self,
        working: &mut FDCollection,
        derived: FDCollection,
        source: DependencySource,
    ) -> Result<(), err::LimitError> {
        for dependency in derived {
            if working.contains(&dependency) {
                continue;
            }

            self.note_derivation(&dependency, source);
            if source != DependencySource::Original {
                self.counters.derivations += 1;
            }
            working.insert(dependency);
        }

        let collection_limit = self.config.collection_limit.value;
        if working.len() > collection_limit {
            log::info!(target: targets::CLOSURE, "Working collection exceeds {collection_limit} dependencies");
            return Err(err::LimitError::Collection(collection_limit));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{attribute::attribute_set, dependency::FD};

    fn fd(determinant: &str, dependent: &str) -> FD {
        FD::new(
            attribute_set(determinant.split_whitespace()),
            attribute_set(dependent.split_whitespace()),
        )
        .unwrap()
    }

    #[test]
    fn empty() {
        assert_eq!(closure(&FDCollection::default()), Ok(FDCollection::default()));
    }

    #[test]
    fn single_dependency() {
        let fds = FDCollection::from_iter([fd("a", "b")]);

        let expected = FDCollection::from_iter([
            fd("a", "b"),
            fd("a", "a"),
            fd("a", "a b"),
            fd("a b", "a"),
            fd("a b", "b"),
            fd("a b", "a b"),
        ]);

        assert_eq!(closure(&fds), Ok(expected));
    }

    #[test]
    fn counters() {
        let fds = FDCollection::from_iter([fd("a", "b")]);
        let mut ctx = Context::default();

        let closure = ctx.closure(&fds).unwrap();

        assert_eq!(ctx.counters.iterations, 2);
        assert_eq!(ctx.counters.derivations, closure.len() - fds.len());
    }
}
