pub mod format;

pub use format::{format_amount, format_date, format_optional, truncate_string};
