//! Display formatting helpers.

pub mod num;

pub use num::{format_change, format_magnitude, format_price, group_thousands, is_positive_change};
