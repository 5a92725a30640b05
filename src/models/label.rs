//! Conversion between machine-readable tokens and display labels.
//!
//! The remote API speaks lower-case underscored tokens (`in_progress`,
//! `profile_picture`); every screen shows title-cased labels ("In Progress",
//! "Profile Picture"). The two forms must round-trip losslessly.

/// `in_progress` → `In Progress`.
pub fn displayify(token: &str) -> String {
    token
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `In Progress` → `in_progress`.
pub fn machineify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
