pub mod derived;

pub use derived::{derive_line, derive_lines, SalesLine};
