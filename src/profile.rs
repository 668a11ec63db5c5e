use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_STATE: &str = "Jammu & Kashmir";

/// Districts a student can pick when filling the profile
pub const DISTRICTS: [&str; 22] = [
    "Jammu", "Srinagar", "Baramulla", "Kathua", "Udhampur", "Doda", "Rajouri", "Kupwara",
    "Pulwama", "Poonch", "Leh", "Kargil", "Ganderbal", "Budgam", "Anantnag", "Bandipora",
    "Shopian", "Kulgam", "Ramban", "Kishtwar", "Samba", "Reasi",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassLevel {
    #[serde(rename = "10")]
    Tenth,
    #[default]
    #[serde(rename = "12")]
    Twelfth,
}

impl FromStr for ClassLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "10" => Ok(ClassLevel::Tenth),
            "12" => Ok(ClassLevel::Twelfth),
            other => Err(format!("invalid class level '{}' (expected 10 or 12)", other)),
        }
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLevel::Tenth => f.write_str("Class 10"),
            ClassLevel::Twelfth => f.write_str("Class 12"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub class_level: ClassLevel,
    pub district: String,
    pub state: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, class_level: ClassLevel, district: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_level,
            district: district.into(),
            state: DEFAULT_STATE.to_string(),
        }
    }
}

/// Validate a student profile.
/// Returns all validation errors at once (not just the first).
pub fn validate_profile(profile: &Profile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if profile.name.trim().is_empty() {
        errors.push("name: Name is required".to_string());
    }

    let district = profile.district.trim();
    if district.is_empty() {
        errors.push("district: District is required".to_string());
    } else if !DISTRICTS.contains(&district) {
        errors.push(format!("district: unknown district '{}'", district));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
