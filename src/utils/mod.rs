pub mod formatting;

pub use formatting::{format_clock, format_size, truncate_name};
