//! Display labels for a profile.

use crate::models::Profile;

// ---

/// `name`, then `profile_name`, then `location`, else a label built from the id.
pub fn display_name(profile: &Profile) -> String {
    // ---
    [&profile.name, &profile.profile_name, &profile.location]
        .into_iter()
        .flatten()
        .find(|label| !label.is_empty())
        .cloned()
        .unwrap_or_else(|| format!("Weather Station {}", profile.id))
}

/// Free-text location, or `default` when the profile has none.
pub fn location_label(profile: &Profile, default: &str) -> String {
    // ---
    profile
        .location
        .as_deref()
        .filter(|location| !location.is_empty())
        .unwrap_or(default)
        .to_string()
}
