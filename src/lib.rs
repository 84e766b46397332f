pub mod fleet;
pub mod output;
pub mod parser;
pub mod stats;
