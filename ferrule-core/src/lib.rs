//! # 🔩 ferrule-core — Generic Utilities
//!
//! Small, stateless building blocks that operate over capability traits
//! instead of concrete types.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ownership` | Heap-owned clones of values and optional references |
//! | `sequence` | `Sequence` / `GrowableSequence` capability traits |
//! | `append` | In-place concatenation with rollback on panic |
//! | `logistic` | Stable sigmoid, logit, generalised logistic curve |
//! | `config` | TOML + environment configuration |
//! | `error` | `FerruleError` / `FerruleResult` |
//!
//! ## Concurrency
//!
//! Nothing here holds state or locks. Calls are safe from any thread as long
//! as their own arguments are not mutated concurrently, which the borrow
//! checker already enforces.
//!
//! ## Exemplo
//!
//! ```
//! use ferrule_core::prelude::*;
//!
//! let mut destination = vec![4, 5];
//! append(&[1, 2, 3], &mut destination)?;
//! assert_eq!(destination, vec![4, 5, 1, 2, 3]);
//!
//! assert_eq!(logistic(0.0_f64), 0.5);
//! assert_eq!(*clone_owned(&42), 42);
//! # Ok::<(), FerruleError>(())
//! ```

pub mod append;
pub mod config;
pub mod error;
pub mod logistic;
pub mod ownership;
pub mod prelude;
pub mod sequence;

pub use append::{append, appended};
pub use config::{FerruleConfig, LogisticConfig};
pub use error::{FerruleError, FerruleResult};
pub use logistic::{logistic, logistic_derivative, logistic_in_place, logit, LogisticCurve};
pub use ownership::{clone_optional, clone_owned};
pub use sequence::{GrowableSequence, Sequence};
