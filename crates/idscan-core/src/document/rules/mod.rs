//! Rule-based building blocks shared by the field extractors.

pub mod dates;
pub mod gender;
pub mod names;
pub mod patterns;

pub use dates::{normalize_date, DateMatch, NormalizedDate};
pub use gender::{female_overrides_male, male_unless_female};
pub use names::{contains_any, is_name_shaped, line_after_label};
