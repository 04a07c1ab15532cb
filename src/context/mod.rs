/*!
The context --- within which derivations take place.

A context holds a configuration, counters from the most recent derivation, and optional callbacks.
Dependencies are not stored in a context.
Instead, a collection is given to each derivation, which returns a fresh collection and leaves the given collection untouched.

# Example
```rust
# use fd_closure::config::Config;
# use fd_closure::context::Context;
# use fd_closure::structures::attribute::attribute_set;
# use fd_closure::structures::collection::FDCollection;
# use fd_closure::structures::dependency::FD;
let mut the_context = Context::from_config(Config::default());

let fds = FDCollection::from_iter([
    FD::new(attribute_set(["a"]), attribute_set(["b"])).unwrap(),
    FD::new(attribute_set(["b"]), attribute_set(["c"])).unwrap(),
]);

let closure = the_context.closure(&fds).unwrap();

let a_c = FD::new(attribute_set(["a"]), attribute_set(["c"])).unwrap();
assert!(closure.contains(&a_c));
assert!(fds.is_subset_of(&closure));
assert!(!fds.contains(&a_c));

assert!(the_context.counters.iterations > 1);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use crate::config::Config;

use callbacks::{CallbackOnDerivation, CallbackTerminate};

/// The context of a derivation.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the most recent derivation.
    pub counters: Counters,

    /// Terminates procedures, if true.
    callback_terminate: Option<Box<CallbackTerminate>>,

    /// Notified of each addition to a working collection.
    callback_derivation: Option<Box<CallbackOnDerivation>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,

            counters: Counters::default(),

            callback_terminate: None,
            callback_derivation: None,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
