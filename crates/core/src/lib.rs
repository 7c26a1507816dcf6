#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Shared models, response envelope and the declarative record validator
//! for the task service.

pub mod api;
pub mod error;
pub mod format;
pub mod model;
pub mod rule;
pub mod validation;

mod util;

pub use error::{ErrorKind, RuleError, Violation};
pub use format::FormatRegistry;
pub use rule::{FieldKind, FieldValue, Rule};
pub use util::now_ms;
pub use validation::{FieldSpec, Record, Schema};
