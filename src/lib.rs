pub mod checker;
pub mod diagnostics;
pub mod mcp;
pub mod workspace;
