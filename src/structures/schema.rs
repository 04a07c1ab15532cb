/*!
A schema, aka. a declared set of attributes.

A schema is optional.
Without a schema, the universe of a derivation is the set of attributes used by the given dependencies.
With a schema, dependencies may be checked to use only attributes of the schema.

```rust
# use fd_closure::structures::attribute::attribute_set;
# use fd_closure::structures::schema::Schema;
# use fd_closure::types::err;
let schema = Schema::new(attribute_set(["id", "name", "email"]));

assert!(schema.dependency(attribute_set(["id"]), attribute_set(["name", "email"])).is_ok());

assert_eq!(
    schema.dependency(attribute_set(["id"]), attribute_set(["phone"])),
    Err(err::DependencyError::UnknownAttribute("phone".to_string()))
);
```
*/

use crate::{
    structures::{
        attribute::{Attribute, AttributeSet},
        collection::FDCollection,
        dependency::FunctionalDependency,
    },
    types::err::{self},
};

/// A set of declared attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    attributes: AttributeSet,
}

impl Schema {
    pub fn new(attributes: AttributeSet) -> Self {
        Schema { attributes }
    }

    /// The attributes of the schema.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// A dependency of `dependent` on `determinant`, if both are non-empty and use only attributes of the schema.
    pub fn dependency(
        &self,
        determinant: AttributeSet,
        dependent: AttributeSet,
    ) -> Result<FunctionalDependency, err::DependencyError> {
        let dependency = FunctionalDependency::new(determinant, dependent)?;
        self.admit(&dependency)?;
        Ok(dependency)
    }

    /// Ok, if the dependency uses only attributes of the schema, and otherwise an error with the first unknown attribute found.
    pub fn admit(&self, dependency: &FunctionalDependency) -> Result<(), err::DependencyError> {
        match dependency.attributes().find(|a| !self.contains(a)) {
            None => Ok(()),
            Some(unknown) => Err(err::DependencyError::UnknownAttribute(unknown.clone())),
        }
    }

    /// Ok, if every dependency of the collection uses only attributes of the schema.
    pub fn admit_all(&self, dependencies: &FDCollection) -> Result<(), err::DependencyError> {
        dependencies.iter().try_for_each(|fd| self.admit(fd))
    }
}

impl From<AttributeSet> for Schema {
    fn from(attributes: AttributeSet) -> Self {
        Schema::new(attributes)
    }
}

impl FromIterator<Attribute> for Schema {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Schema::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::attribute::attribute_set;

    #[test]
    fn unknown_on_either_side() {
        let schema = Schema::new(attribute_set(["a", "b"]));

        assert_eq!(
            schema.dependency(attribute_set(["c"]), attribute_set(["a"])),
            Err(err::DependencyError::UnknownAttribute("c".to_string()))
        );
        assert_eq!(
            schema.dependency(attribute_set(["a"]), attribute_set(["b", "d"])),
            Err(err::DependencyError::UnknownAttribute("d".to_string()))
        );
    }

    #[test]
    fn empty_sides_before_unknown() {
        let schema = Schema::new(attribute_set(["a"]));
        assert_eq!(
            schema.dependency(AttributeSet::new(), attribute_set(["z"])),
            Err(err::DependencyError::EmptyDeterminant)
        );
    }

    #[test]
    fn admit_collection() {
        let schema = Schema::new(attribute_set(["a", "b", "c"]));
        let mut fds = FDCollection::default();
        fds.insert(schema.dependency(attribute_set(["a"]), attribute_set(["b"])).unwrap());
        assert!(schema.admit_all(&fds).is_ok());

        fds.insert(FunctionalDependency::new(attribute_set(["a"]), attribute_set(["x"])).unwrap());
        assert!(schema.admit_all(&fds).is_err());
    }
}
