pub mod expr;
pub mod filter;
pub mod pipeline;
pub mod reader;
