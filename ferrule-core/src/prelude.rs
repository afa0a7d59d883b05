//! Prelude: common imports
//!
//! ```
//! use ferrule_core::prelude::*;
//! ```

pub use crate::append::{append, appended};
pub use crate::config::{FerruleConfig, LogisticConfig};
pub use crate::error::{FerruleError, FerruleResult};
pub use crate::logistic::{logistic, logistic_derivative, logistic_in_place, logit, LogisticCurve};
pub use crate::ownership::{clone_optional, clone_owned};
pub use crate::sequence::{GrowableSequence, Sequence};
