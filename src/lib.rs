pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod parser;
pub mod resource;

pub use ast::{Field, File, Numeric, Tag, Value};
pub use diagnostics::Diagnostic;
pub use error::TagresError;
pub use parser::{Grammar, parse};
pub use resource::Resource;
