//! Generic structures and procedures, not specific to dependencies.

pub mod power_set;
