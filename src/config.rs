//! Configuration for the Gemini upstream

use serde::{Deserialize, Serialize};
use log::{debug, error};

pub const API_URL_VAR: &str = "GEMINI_API_URL";
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";

/// Gemini endpoint configuration, fixed at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig
{   /// Full generateContent URL, without the key
    pub api_url: String
  , /// API key, sent as the `key` query parameter
    pub api_key: String
  , /// Request timeout in seconds (unbounded when absent)
    #[serde(default)]
    pub timeout_secs: Option<u64>
}

impl GeminiConfig
{   pub fn new(
      api_url: impl Into<String>
    , api_key: impl Into<String>
    ) -> Self
    {   GeminiConfig
        {   api_url: api_url.into()
          , api_key: api_key.into()
          , timeout_secs: None
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self
    {   self.timeout_secs = Some(secs);
        self
    }

    /// Read `GEMINI_API_URL`, `GEMINI_API_KEY` and the optional
    /// `GEMINI_TIMEOUT_SECS` from the process environment
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name -> value source
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where
      F: Fn(&str) -> Option<String>
    {   let required = |name: &str| {
          lookup(name).ok_or_else(|| {
            error!("{} is not set", name);
            crate::error::Error::InvalidConfiguration(
              format!("{} is not set", name)
            )
          })
        };

        let api_url = required(API_URL_VAR)?;
        let api_key = required(API_KEY_VAR)?;

        let timeout_secs = match lookup(TIMEOUT_VAR)
        {   Some(raw) => Some(raw.trim().parse::<u64>()
              .map_err(|e| {
                error!("Bad {}: {}", TIMEOUT_VAR, e);
                crate::error::Error::InvalidConfiguration(
                  format!("{} must be a number: {}", TIMEOUT_VAR, e)
                )
              })?)
          , None => None
        };

        if timeout_secs == Some(0)
        {   error!("{} must be greater than 0", TIMEOUT_VAR);
            return Err(crate::error::Error::InvalidConfiguration(
              format!("{} must be greater than 0", TIMEOUT_VAR)
            ));
        }

        debug!(
          "Loaded Gemini config (timeout: {:?})",
          timeout_secs
        );
        Ok(GeminiConfig
        {   api_url
          , api_key
          , timeout_secs
        })
    }
}
