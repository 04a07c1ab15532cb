//! A library for deriving the closure of a collection of functional dependencies.
//!
//! fd_closure derives every functional dependency implied by a collection of functional dependencies under Armstrong's axioms, until no further dependency follows.
//! The closure is the foundation of much of relational schema analysis, e.g. key discovery, normal-form checks, and decomposition, though each of these is left to users of the library.
//!
//! # Orientation
//!
//! - A [dependency](structures::dependency) is a pair of non-empty sets of [attributes](structures::attribute).
//! - A [collection](structures::collection) is a set of dependencies, deduplicated by structural equality.
//! - Each rule of inference is a [procedure](procedures) from a collection to the collection of dependencies derived by the rule:
//!   + [Trivial](procedures::trivial) dependencies, by reflexivity.
//!   + [Augmentation](procedures::augmentation).
//!   + [Transitivity](procedures::transitivity).
//! - The [closure](procedures::closure) applies the rules until a fixpoint is reached.
//!
//! The cost of a closure is exponential in the number of attributes used.
//! So, closures are made within a [context], whose [configuration](config) limits the size of a derivation, and a derivation which passes some limit returns a [limit error](types::err::LimitError) rather than continuing.
//!
//! # Examples
//!
//! + The closure of a chain of dependencies.
//!
//! ```rust
//! # use fd_closure::procedures::closure::closure;
//! # use fd_closure::structures::attribute::attribute_set;
//! # use fd_closure::structures::collection::FDCollection;
//! # use fd_closure::structures::dependency::FD;
//! let fds = FDCollection::from_iter([
//!     FD::new(attribute_set(["id"]), attribute_set(["zip"])).unwrap(),
//!     FD::new(attribute_set(["zip"]), attribute_set(["city"])).unwrap(),
//! ]);
//!
//! let closed = closure(&fds).unwrap();
//!
//! let id_city = FD::new(attribute_set(["id"]), attribute_set(["city"])).unwrap();
//! assert!(closed.contains(&id_city));
//!
//! let id_id_zip = FD::new(attribute_set(["id"]), attribute_set(["id", "zip"])).unwrap();
//! assert!(closed.contains(&id_id_zip));
//! ```
//!
//! + Limit the universe of a closure.
//!
//! ```rust
//! # use fd_closure::config::Config;
//! # use fd_closure::context::Context;
//! # use fd_closure::structures::attribute::attribute_set;
//! # use fd_closure::structures::collection::FDCollection;
//! # use fd_closure::structures::dependency::FD;
//! # use fd_closure::types::err::{self};
//! let mut config = Config::default();
//! config.universe_limit.set(2).unwrap();
//!
//! let mut the_context = Context::from_config(config);
//!
//! let fds = FDCollection::from_iter([FD::new(attribute_set(["a", "b"]), attribute_set(["c"])).unwrap()]);
//!
//! assert_eq!(
//!     the_context.closure(&fds),
//!     Err(err::ErrorKind::Limit(err::LimitError::Universe { size: 3, limit: 2 }))
//! );
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the closure fixpoint can be filtered with `RUST_LOG=closure …` or,
//! - Logs of each round of transitive saturation can be found with `RUST_LOG=transitivity=trace …`

pub mod config;
pub mod context;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
