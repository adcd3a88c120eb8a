pub mod formatter;

pub use formatter::{format_result, format_score, should_use_colors};
