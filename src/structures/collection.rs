/*!
A collection of functional dependencies, aka. a set of dependencies deduplicated by structural equality.

```rust
# use fd_closure::structures::attribute::attribute_set;
# use fd_closure::structures::collection::FDCollection;
# use fd_closure::structures::dependency::FD;
let mut fds = FDCollection::default();

let a_b = FD::new(attribute_set(["a"]), attribute_set(["b"])).unwrap();
assert!(fds.insert(a_b.clone()));
assert!(!fds.insert(a_b));

assert_eq!(fds.len(), 1);
assert_eq!(fds.attributes(), attribute_set(["a", "b"]));
```

A clone of a collection shares nothing with the original, and so a working copy may be freely mutated.
*/

use std::collections::BTreeSet;

use crate::structures::{
    attribute::AttributeSet,
    dependency::FunctionalDependency,
};

/// A set of functional dependencies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FDCollection {
    dependencies: BTreeSet<FunctionalDependency>,
}

impl FDCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dependency to the collection, returning whether the dependency was not already present.
    pub fn insert(&mut self, dependency: FunctionalDependency) -> bool {
        self.dependencies.insert(dependency)
    }

    pub fn contains(&self, dependency: &FunctionalDependency) -> bool {
        self.dependencies.contains(dependency)
    }

    /// The number of (distinct) dependencies in the collection.
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// An iterator over the dependencies in the collection, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionalDependency> {
        self.dependencies.iter()
    }

    /// Adds each dependency from `other` to the collection, returning a count of the dependencies which were not already present.
    pub fn merge(&mut self, other: FDCollection) -> usize {
        let before = self.dependencies.len();
        match self.dependencies.is_empty() {
            true => self.dependencies = other.dependencies,
            false => self.dependencies.extend(other.dependencies),
        }
        self.dependencies.len() - before
    }

    /// The dependencies of the collection which are not in `other`.
    pub fn difference(&self, other: &FDCollection) -> FDCollection {
        self.dependencies
            .difference(&other.dependencies)
            .cloned()
            .collect()
    }

    /// Whether every dependency of the collection is in `other`.
    pub fn is_subset_of(&self, other: &FDCollection) -> bool {
        self.dependencies.is_subset(&other.dependencies)
    }

    /// The universe of the collection, aka. every attribute which appears on either side of some dependency.
    pub fn attributes(&self) -> AttributeSet {
        self.dependencies
            .iter()
            .flat_map(|fd| fd.attributes().cloned())
            .collect()
    }
}

impl FromIterator<FunctionalDependency> for FDCollection {
    fn from_iter<I: IntoIterator<Item = FunctionalDependency>>(iter: I) -> Self {
        FDCollection {
            dependencies: iter.into_iter().collect(),
        }
    }
}

impl Extend<FunctionalDependency> for FDCollection {
    fn extend<I: IntoIterator<Item = FunctionalDependency>>(&mut self, iter: I) {
        self.dependencies.extend(iter)
    }
}

impl IntoIterator for FDCollection {
    type Item = FunctionalDependency;
    type IntoIter = std::collections::btree_set::IntoIter<FunctionalDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.dependencies.into_iter()
    }
}

impl<'c> IntoIterator for &'c FDCollection {
    type Item = &'c FunctionalDependency;
    type IntoIter = std::collections::btree_set::Iter<'c, FunctionalDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.dependencies.iter()
    }
}

/// One dependency per line.
impl std::fmt::Display for FDCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for dependency in &self.dependencies {
            writeln!(f, "{dependency}")?;
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
    fn merge_counts_fresh() {
        let mut fds = FDCollection::from_iter([fd("a", "b"), fd("b", "c")]);
        let other = FDCollection::from_iter([fd("b", "c"), fd("c", "d"), fd("a b", "d")]);

        assert_eq!(fds.merge(other.clone()), 2);
        assert_eq!(fds.len(), 4);
        assert!(other.is_subset_of(&fds));

        assert_eq!(fds.merge(other), 0);
    }

    #[test]
    fn difference() {
        let fds = FDCollection::from_iter([fd("a", "b"), fd("b", "c"), fd("c", "d")]);
        let other = FDCollection::from_iter([fd("b", "c")]);

        let remaining = fds.difference(&other);
        assert_eq!(remaining.len(), 2);
        assert!(!remaining.contains(&fd("b", "c")));
        assert!(remaining.contains(&fd("a", "b")));
    }

    #[test]
    fn copies_are_independent() {
        let fds = FDCollection::from_iter([fd("a", "b")]);
        let mut copy = fds.clone();
        copy.insert(fd("b", "a"));

        assert_eq!(fds.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn display() {
        let fds = FDCollection::from_iter([fd("b", "c"), fd("a b", "c")]);
        assert_eq!(fds.to_string(), "a b -> c\nb -> c\n");
    }
}
