use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;
use validator::Validate;

use crate::models::Profile;

/// Errors that can occur when loading the candidate pool
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid profile {profile_id}: {reason}")]
    InvalidProfile { profile_id: String, reason: String },

    #[error("failed to parse profile data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Supplies the initial ordered list of profiles at session start
pub trait ProfileSource {
    fn load_profiles(&self) -> Result<Vec<Profile>, LoadError>;
}

/// Profile source backed by an owned, pre-built list
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileSource {
    profiles: Vec<Profile>,
}

impl InMemoryProfileSource {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }
}

impl ProfileSource for InMemoryProfileSource {
    fn load_profiles(&self) -> Result<Vec<Profile>, LoadError> {
        validate_profiles(&self.profiles)?;
        Ok(self.profiles.clone())
    }
}

/// Profile source that parses a JSON array of profiles
#[derive(Debug, Clone)]
pub struct JsonProfileSource {
    raw: String,
}

impl JsonProfileSource {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl ProfileSource for JsonProfileSource {
    fn load_profiles(&self) -> Result<Vec<Profile>, LoadError> {
        let profiles: Vec<Profile> = serde_json::from_str(&self.raw)?;
        validate_profiles(&profiles)?;
        debug!("parsed {} profiles from JSON", profiles.len());
        Ok(profiles)
    }
}

/// Check every profile and reject duplicate ids; the pool must hold exactly
/// one profile per id for match references to stay unambiguous
fn validate_profiles(profiles: &[Profile]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for profile in profiles {
        profile
            .validate()
            .map_err(|e| LoadError::InvalidProfile {
                profile_id: profile.profile_id.clone(),
                reason: e.to_string(),
            })?;
        if !seen.insert(profile.profile_id.as_str()) {
            return Err(LoadError::InvalidProfile {
                profile_id: profile.profile_id.clone(),
                reason: "duplicate profile id".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_profile(id: &str, age: u8) -> Profile {
        Profile {
            profile_id: id.to_string(),
            name: format!("User {}", id),
            age,
            bio: String::new(),
            location: "Moscow".to_string(),
            interests: vec![],
            photos: vec![],
        }
    }

    #[test]
    fn test_in_memory_source_loads() {
        let source = InMemoryProfileSource::new(vec![create_profile("a", 25)]);
        let profiles = source.load_profiles().unwrap();
        assert_eq!(profiles.len(), 1);
    }

    #[test]
    fn test_underage_profile_rejected() {
        let source = InMemoryProfileSource::new(vec![create_profile("a", 16)]);
        let err = source.load_profiles().unwrap_err();
        assert!(matches!(err, LoadError::InvalidProfile { profile_id, .. } if profile_id == "a"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let source =
            InMemoryProfileSource::new(vec![create_profile("a", 25), create_profile("a", 30)]);
        assert!(source.load_profiles().is_err());
    }

    #[test]
    fn test_json_source_parses_camel_case() {
        let source = JsonProfileSource::new(
            r#"[{"profileId": "p1", "name": "Anna", "age": 25,
                 "bio": "Yoga and coffee", "location": "Moscow",
                 "interests": ["Travel"], "photos": ["/placeholder.svg"]}]"#,
        );
        let profiles = source.load_profiles().unwrap();
        assert_eq!(profiles[0].profile_id, "p1");
        assert_eq!(profiles[0].interests, vec!["Travel"]);
    }

    #[test]
    fn test_json_source_parse_error() {
        let source = JsonProfileSource::new("not json");
        assert!(matches!(
            source.load_profiles(),
            Err(LoadError::Parse(_))
        ));
    }
}
