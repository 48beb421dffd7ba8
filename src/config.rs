//! Engine configuration.
//!
//! The developer override lets a debug build pretend the child has
//! unlocked a given layer. It is supplied by the host and only read here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::QuizPolicy;
use crate::types::{Layer, LayerError};

/// Environment variable holding the developer override (debug builds only)
pub const DEV_OVERRIDE_ENV: &str = "PROGRESSION_DEV_UNLOCKED_LAYER";

/// Environment variable for the daily quiz attempt cap
pub const QUIZ_MAX_ATTEMPTS_ENV: &str = "PROGRESSION_QUIZ_MAX_ATTEMPTS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    #[error("override is not an integer: {0:?}")]
    NotNumeric(String),
    #[error(transparent)]
    Layer(#[from] LayerError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeveloperOverride(Option<Layer>);

impl DeveloperOverride {
    pub const NONE: DeveloperOverride = DeveloperOverride(None);

    pub fn layer(layer: Layer) -> Self {
        Self(Some(layer))
    }

    pub fn get(self) -> Option<Layer> {
        self.0
    }

    pub fn is_active(self) -> bool {
        self.0.is_some()
    }

    /// Strict parse of a raw key/value entry
    pub fn try_parse(raw: Option<&str>) -> Result<Self, OverrideError> {
        let Some(raw) = raw.map(str::trim) else {
            return Ok(Self::NONE);
        };
        if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
            return Ok(Self::NONE);
        }
        let value: i64 = raw
            .parse()
            .map_err(|_| OverrideError::NotNumeric(raw.to_string()))?;
        Ok(Self(Some(Layer::try_from(value)?)))
    }

    /// Malformed values are ignored so the resolver falls back to inference
    pub fn parse(raw: Option<&str>) -> Self {
        Self::try_parse(raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring developer layer override");
            Self::NONE
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Set only through [`EngineConfig::from_lookup`] or [`EngineConfig::with_override`]
    #[serde(skip)]
    pub dev_override: DeveloperOverride,
    pub quiz: QuizPolicy,
}

impl EngineConfig {
    pub fn with_override(mut self, dev_override: DeveloperOverride) -> Self {
        self.dev_override = dev_override;
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. The override key is never read in
    /// release builds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if cfg!(debug_assertions) {
            config.dev_override = DeveloperOverride::parse(lookup(DEV_OVERRIDE_ENV).as_deref());
        }
        if let Some(val) = lookup(QUIZ_MAX_ATTEMPTS_ENV) {
            config.quiz.max_attempts_per_day = val
                .trim()
                .parse()
                .unwrap_or(config.quiz.max_attempts_per_day);
        }

        config
    }
}
