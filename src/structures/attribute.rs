/*!
(The representation of) an attribute, and sets of attributes.

Broadly, attributes are the names of columns of some relation, and functional dependencies are stated between sets of attributes.
Nothing is assumed of an attribute beyond its name, and two attributes are the same exactly when their names are.

```rust
# use fd_closure::structures::attribute::{attribute_set, AttributeSet};
let left = attribute_set(["zip", "city"]);
let right = attribute_set(["city", "zip", "city"]);

assert_eq!(left, right);
assert_eq!(left.len(), 2);
```

Sets of attributes are ordered sets.
So, sets of attributes may themselves be ordered, hashed, and compared for equality without regard to the order in which attributes were given, and iteration over a set of attributes is deterministic.
*/

use std::collections::BTreeSet;

/// An attribute, aka. a 'column'.
pub type Attribute = String;

/// A set of attributes.
pub type AttributeSet = BTreeSet<Attribute>;

/// The set of attributes named by some collection of strings.
pub fn attribute_set<I, S>(attributes: I) -> AttributeSet
where
    I: IntoIterator<Item = S>,
    S: Into<Attribute>,
{
    attributes.into_iter().map(Into::into).collect()
}

/// A string representation of a set of attributes, with attributes separated by a space.
///
/// The empty set is represented by '∅'.
pub fn as_string(attributes: &AttributeSet) -> String {
    match attributes.is_empty() {
        true => "∅".to_string(),
        false => attributes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings() {
        assert_eq!(as_string(&AttributeSet::new()), "∅");
        assert_eq!(as_string(&attribute_set(["b", "a"])), "a b");
    }
}
