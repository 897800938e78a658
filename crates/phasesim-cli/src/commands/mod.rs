pub mod completions;
pub mod simulate;
