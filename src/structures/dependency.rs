/*!
Functional dependencies, aka. a pair of attribute sets, interpreted as the first set of attributes determining the second.

A functional dependency *X → Y* holds of a relation when any two rows which agree on each attribute of the *determinant* *X* also agree on each attribute of the *dependent* *Y*.

```rust
# use fd_closure::structures::attribute::attribute_set;
# use fd_closure::structures::dependency::FunctionalDependency;
let fd = FunctionalDependency::new(attribute_set(["a", "b"]), attribute_set(["c"])).unwrap();

assert_eq!(fd.to_string(), "a b -> c");
assert!(!fd.is_trivial());

let same = FunctionalDependency::new(attribute_set(["b", "a"]), attribute_set(["c"])).unwrap();
assert_eq!(fd, same);
```

- Equality of dependencies is structural: two dependencies are equal exactly when their determinants are equal and their dependents are equal (as sets).
- Neither side of a dependency is empty.
  This is checked when a dependency is constructed through [new](FunctionalDependency::new), and preserved by each rule of inference.
*/

use crate::{
    structures::attribute::{self, Attribute, AttributeSet},
    types::err::{self},
};

/// A functional dependency.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionalDependency {
    determinant: AttributeSet,
    dependent: AttributeSet,
}

/// Shorthand for a [FunctionalDependency].
pub type FD = FunctionalDependency;

impl FunctionalDependency {
    /// A dependency of `dependent` on `determinant`, if both are non-empty.
    pub fn new(
        determinant: AttributeSet,
        dependent: AttributeSet,
    ) -> Result<Self, err::DependencyError> {
        if determinant.is_empty() {
            return Err(err::DependencyError::EmptyDeterminant);
        }
        if dependent.is_empty() {
            return Err(err::DependencyError::EmptyDependent);
        }
        Ok(Self::derived(determinant, dependent))
    }

    /// A dependency from sides already known to be non-empty.
    ///
    /// For use by the rules of inference, each of which builds non-empty sides from the (non-empty) sides of some other dependency.
    pub(crate) fn derived(determinant: AttributeSet, dependent: AttributeSet) -> Self {
        debug_assert!(!determinant.is_empty() && !dependent.is_empty());
        FunctionalDependency {
            determinant,
            dependent,
        }
    }

    /// The determinant (left side) of the dependency.
    pub fn determinant(&self) -> &AttributeSet {
        &self.determinant
    }

    /// The dependent (right side) of the dependency.
    pub fn dependent(&self) -> &AttributeSet {
        &self.dependent
    }

    /// Adds each of the given attributes to the determinant of the dependency.
    pub fn add_to_left(&mut self, attributes: &AttributeSet) {
        self.determinant.extend(attributes.iter().cloned());
    }

    /// Adds each of the given attributes to the dependent of the dependency.
    pub fn add_to_right(&mut self, attributes: &AttributeSet) {
        self.dependent.extend(attributes.iter().cloned());
    }

    /// Whether the dependent is a subset of the determinant, in which case the dependency holds of any relation.
    pub fn is_trivial(&self) -> bool {
        self.dependent.is_subset(&self.determinant)
    }

    /// An iterator over all attributes in the dependency, from the determinant and then the dependent.
    ///
    /// An attribute on both sides of the dependency is returned twice.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.determinant.iter().chain(self.dependent.iter())
    }
}

impl std::fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}",
            attribute::as_string(&self.determinant),
            attribute::as_string(&self.dependent)
        )
    }
}
