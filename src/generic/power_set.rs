/*!
The power set of a set, aka. the set of all subsets of a set.

The power set of the empty set is the set containing the empty set.
Otherwise, for some element *e* of a set *S*, the power set of *S* is the power set of *S* without *e*, together with each of those sets with *e* added.

The given set is never modified.
Instead, recursion is over a slice of references to the elements of the set, in order, and each step drops the first element of the slice.

```rust
# use std::collections::BTreeSet;
# use fd_closure::generic::power_set::power_set;
let set = BTreeSet::from(['a', 'b', 'c']);
let power = power_set(&set);

assert_eq!(power.len(), 8);
assert!(power.contains(&BTreeSet::new()));
assert!(power.contains(&set));
assert!(power.contains(&BTreeSet::from(['a', 'c'])));
```

# Costs

A set of *n* elements has 2<sup>*n*</sup> subsets, each of which is built, and so care should be taken over the size of a given set.
The [closure](crate::procedures::closure) bounds this through a [limit](crate::config::Config::universe_limit) on the size of the universe.
*/

use std::collections::BTreeSet;

use crate::misc::log::targets::{self};

/// The power set of `set`.
pub fn power_set<T: Ord + Clone>(set: &BTreeSet<T>) -> BTreeSet<BTreeSet<T>> {
    let elements = set.iter().collect::<Vec<_>>();
    let power = power_set_of_slice(&elements);
    log::trace!(target: targets::POWER_SET, "{} subsets of {} elements", power.len(), set.len());
    power
}

fn power_set_of_slice<T: Ord + Clone>(elements: &[&T]) -> BTreeSet<BTreeSet<T>> {
    let Some((first, rest)) = elements.split_first() else {
        return BTreeSet::from([BTreeSet::new()]);
    };

    let mut subsets = power_set_of_slice(rest);

    let with_first = subsets
        .iter()
        .map(|subset| {
            let mut extended = subset.clone();
            extended.insert((*first).clone());
            extended
        })
        .collect::<Vec<_>>();

    subsets.extend(with_first);
    subsets
}
