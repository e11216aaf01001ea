//! Configuration module
//!
//! Loading of plugin configuration files, the field schema, and the
//! validator that checks a parsed document against it.

pub mod loader;
pub mod schema;
pub mod validation;
pub mod value;

pub use loader::{ConfigLoader, LoaderOptions};
pub use validation::{ValidationResult, Validator, validate, validate_file};
pub use value::{ConfigValue, Mapping};
