//! Password rule sections
//!
//! Each section checks one composition rule.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_char_section, uppercase_section};

/// Result type for section functions.
/// - `Ok(())` - Rule satisfied
/// - `Err(rule)` - Rule not met
pub type SectionResult = Result<(), crate::Rule>;
