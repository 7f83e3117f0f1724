use serde::{Deserialize, Serialize};
use log::{debug, trace, error};
use std::time::Duration;

// ===== Request Types =====

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest
{   pub contents: Vec<Content>
}

#[derive(Debug, Clone, Serialize)]
pub struct Content
{   pub parts: Vec<Part>
}

#[derive(Debug, Clone, Serialize)]
pub struct Part
{   pub text: String
}

impl GenerateContentRequest
{   /// One content holding one text part
    pub fn from_prompt(prompt: String) -> Self
    {   GenerateContentRequest
        {   contents: vec![
              Content
              {   parts: vec![Part { text: prompt }]
              }
            ]
        }
    }
}

// ===== Response Types =====
//
// Every level is optional; unknown fields are ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse
{   #[serde(default)]
    pub candidates: Option<Vec<Candidate>>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate
{   #[serde(default)]
    pub content: Option<CandidateContent>
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent
{   #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart
{   #[serde(default)]
    pub text: Option<String>
}

impl GenerateContentResponse
{   /// Text of the first part of the first candidate, if any
    pub fn first_text(&self) -> Option<&str>
    {   self.candidates.as_ref()?
          .first()?
          .content.as_ref()?
          .parts.as_ref()?
          .first()?
          .text.as_deref()
    }
}

/// Parse a raw Gemini body and pull out the first generated text
pub fn extract_text(body: &str)
  -> Result<Option<String>, crate::error::Error>
{   let response: GenerateContentResponse
      = serde_json::from_str(body).map_err(|e| {
        error!("Parse error: {}", e);
        crate::error::Error::UpstreamParse(e.to_string())
      })?;
    Ok(response.first_text().map(str::to_string))
}

// ===== Gemini Client =====

/// Issues generateContent calls against one configured endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient
{   api_url: String
  , api_key: String
  , http_client: reqwest::Client
}

impl GeminiClient
{   pub fn new(config: &crate::config::GeminiConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating GeminiClient for {}", config.api_url);
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   if secs == 0
            {   error!("Gemini request timeout must be positive");
                return Err(crate::error::Error::InvalidConfiguration(
                  "timeout_secs must be greater than 0".to_string()
                ));
            }
            debug!("Gemini request timeout: {}s", secs);
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(GeminiClient
        {   api_url: config.api_url.clone()
          , api_key: config.api_key.clone()
          , http_client
        })
    }

    /// POST the prompt and return the raw response body
    pub async fn send(&self, prompt: String)
      -> Result<String, crate::error::Error>
    {   let request = GenerateContentRequest::from_prompt(prompt);
        let body = serde_json::to_string(&request).map_err(|e| {
          error!("Failed to encode request: {}", e);
          crate::error::Error::Other(e.to_string())
        })?;

        debug!("Sending request to Gemini API...");
        debug!("Request body: {}", body);

        let response = self.http_client
          .post(&self.api_url)
          .query(&[("key", self.api_key.as_str())])
          .header("Content-Type", "application/json")
          .body(body)
          .send()
          .await
          .map_err(transport_error)?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Gemini API error {}: {}", status, error_text);
            return Err(crate::error::Error::UpstreamHttp(
              status.as_u16()
            ));
        }

        let raw = response.text().await
          .map_err(transport_error)?;
        debug!("Response from Gemini API: {}", raw);
        Ok(raw)
    }
}

/// The request URL carries `?key=`, so it never reaches logs or callers
fn transport_error(e: reqwest::Error) -> crate::error::Error
{   let e = e.without_url();
    error!("HTTP error: {}", e);
    if e.is_timeout()
    {   crate::error::Error::Timeout
    } else
    {   crate::error::Error::Transport(e.to_string())
    }
}
