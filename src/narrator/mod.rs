//! # Narrator Module
//!
//! The narrative-text collaborator: flavor dialogue for NPC conversations and
//! ambient dungeon tips.
//!
//! The collaborator is an external service behind the [`Narrator`] trait.
//! Gameplay never depends on it: both operations have a deterministic offline
//! implementation with the same contract (a non-empty string), and the core
//! only tracks availability as a status for observability. Configuration is
//! injected explicitly; there is no module-level singleton.

pub mod offline;

pub use offline::*;

use crate::{Entity, GameState};
use serde::{Deserialize, Serialize};

/// Availability of the external text-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiStatus {
    /// A key is configured and the service is usable.
    Ready,
    /// No key configured; the offline fallback answers everything.
    Missing,
    /// The service failed; the offline fallback answers everything.
    Error,
}

/// Injected configuration for the narrative collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarratorConfig {
    /// API key for the external service, if any.
    pub api_key: Option<String>,
    /// Model identifier requested from the external service.
    pub model: String,
}

impl NarratorConfig {
    /// Builds a configuration from the `SPROUT_API_KEY` environment variable.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("SPROUT_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: "gemini-2.5-flash".to_string(),
        }
    }

    /// A configuration with no external service at all.
    pub fn offline() -> Self {
        Self {
            api_key: None,
            model: String::new(),
        }
    }

    /// Status implied by this configuration.
    pub fn status(&self) -> ApiStatus {
        if self.api_key.is_some() {
            ApiStatus::Ready
        } else {
            ApiStatus::Missing
        }
    }
}

/// Interface to the narrative-text collaborator.
///
/// Both operations must return a non-empty string even when the external
/// service is unavailable or errors; callers never special-case degradation
/// beyond this trait's implementation choosing its fallback.
pub trait Narrator {
    /// In-character NPC response to a player utterance.
    fn request_dialogue(&self, npc: &Entity, state: &GameState, utterance: &str) -> String;

    /// One-line atmospheric description of the current level.
    fn request_ambient_tip(&self, state: &GameState) -> String;

    /// Current availability, for observability only.
    fn status(&self) -> ApiStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_status() {
        assert_eq!(NarratorConfig::offline().status(), ApiStatus::Missing);

        let configured = NarratorConfig {
            api_key: Some("key".to_string()),
            model: "gemini-2.5-flash".to_string(),
        };
        assert_eq!(configured.status(), ApiStatus::Ready);
    }
}
