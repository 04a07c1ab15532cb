/*!
Configuration of a context.

All configuration for a context is contained within the context.

The cost of a closure is exponential in the size of the universe, and (in the worst case) the size of a closure is quadratic in the size of the power set of the universe.
So, each option other than the time limit is a limit on some part of a derivation, and a derivation which passes some limit stops with a [limit error](crate::types::err::LimitError).

```rust
# use fd_closure::config::Config;
let mut config = Config::default();
assert!(config.universe_limit.set(6).is_ok());
assert!(config.universe_limit.set(64).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of attributes in the universe of a closure.
    pub universe_limit: ConfigOption<usize>,

    /// The maximum number of iterations of the closure fixpoint.
    pub iteration_limit: ConfigOption<usize>,

    /// The maximum number of rounds of saturation in a single transitive derivation.
    pub transitive_round_limit: ConfigOption<usize>,

    /// The maximum number of dependencies in the working collection of a closure.
    pub collection_limit: ConfigOption<usize>,

    /// The time limit for a closure, with zero read as no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    /// The default context is (roughly) configured to allow any closure of a realistic schema, while failing quickly on a universe whose power set is unreasonable.
    fn default() -> Self {
        Config {
            universe_limit: ConfigOption {
                name: "universe_limit",
                min: 0,
                max: 32,
                value: 10,
            },

            iteration_limit: ConfigOption {
                name: "iteration_limit",
                min: 1,
                max: usize::MAX,
                value: 1024,
            },

            transitive_round_limit: ConfigOption {
                name: "transitive_round_limit",
                min: 1,
                max: usize::MAX,
                value: 1024,
            },

            collection_limit: ConfigOption {
                name: "collection_limit",
                min: 0,
                max: usize::MAX,
                value: 1 << 20,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}
