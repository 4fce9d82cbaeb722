//! Gender marker detection.
//!
//! Two tie-break rules exist. National ID, tax ID and driving license use
//! [`female_overrides_male`]; passports use [`male_unless_female`]. They are
//! kept separate so each document type's behavior can be tested on its own.

use crate::models::record::Gender;

/// If the text mentions "male", report `Female` when it also mentions
/// "female", otherwise `Male`.
pub fn female_overrides_male(text: &str) -> Gender {
    let lower = text.to_lowercase();

    if lower.contains("male") {
        if lower.contains("female") {
            Gender::Female
        } else {
            Gender::Male
        }
    } else {
        Gender::Unknown
    }
}

/// `Male` when "male" appears without "female"; `Female` when "female" appears.
pub fn male_unless_female(text: &str) -> Gender {
    let lower = text.to_lowercase();
    let has_female = lower.contains("female");

    if lower.contains("male") && !has_female {
        Gender::Male
    } else if has_female {
        Gender::Female
    } else {
        Gender::Unknown
    }
}
