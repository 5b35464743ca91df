pub mod error;
pub mod math;
pub mod operations;
pub mod script;
pub mod topology;

pub use error::{EulisError, Result};
