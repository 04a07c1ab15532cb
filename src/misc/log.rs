/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [power sets](crate::generic::power_set)
    pub const POWER_SET: &str = "power_set";

    /// Logs related to [trivial dependencies](crate::procedures::trivial)
    pub const TRIVIAL: &str = "trivial";

    /// Logs related to [augmentation](crate::procedures::augmentation)
    pub const AUGMENTATION: &str = "augmentation";

    /// Logs related to [transitivity](crate::procedures::transitivity)
    pub const TRANSITIVITY: &str = "transitivity";

    /// Logs related to the [closure](crate::procedures::closure) fixpoint
    pub const CLOSURE: &str = "closure";
}
