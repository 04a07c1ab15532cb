use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counts are reset at the start of each closure.
#[derive(Clone, Debug)]
pub struct Counters {
    /// The number of iterations through the closure fixpoint.
    pub iterations: usize,

    /// The number of rounds of transitive saturation, across all iterations.
    pub transitive_rounds: usize,

    /// A count of every dependency added to the working collection which was not given as input.
    pub derivations: usize,

    /// The time taken during a closure.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            iterations: 0,
            transitive_rounds: 0,
            derivations: 0,

            time: Duration::from_secs(0),
        }
    }
}
