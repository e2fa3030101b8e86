pub mod error;
pub mod interpreter;

pub use error::{ExpressionError, Result};
