//! Flat `key=value` properties files with typed lookups.
//!
//! ```text
//! # comment
//! host = example.org
//! port = 8080
//! ```

pub mod errors;
pub mod parse;
pub mod store;
pub mod value;

pub use errors::{ConfigError, ValueError};
pub use store::PropertyStore;
pub use value::PropertyValue;
