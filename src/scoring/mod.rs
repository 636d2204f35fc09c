pub mod analyzer;
pub mod parser;
pub mod quality;
pub mod risk;

pub use analyzer::*;
pub use parser::*;
pub use quality::*;
pub use risk::*;
