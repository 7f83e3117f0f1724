//! Single request/response pipeline: prompt, call Gemini, format

use log::{debug, error};
use crate::request::{build_prompt, Reply, ResearchRequest};

/// Turns research requests into formatted Gemini replies.
///
/// Holds only immutable configuration and a shareable HTTP client,
/// so one instance can serve many concurrent callers.
#[derive(Debug, Clone)]
pub struct ResearchProcessor
{   gemini: crate::providers::GeminiClient
}

impl ResearchProcessor
{   pub fn new(config: crate::config::GeminiConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating ResearchProcessor");
        Ok(ResearchProcessor
        {   gemini: crate::providers::GeminiClient::new(&config)?
        })
    }

    /// Structured form of `process`.
    ///
    /// An invalid operation fails before any HTTP call is made.
    pub async fn try_process(
      &self
    , request: &ResearchRequest
    ) -> Result<Reply, crate::error::Error>
    {   let prompt = build_prompt(request)?;
        debug!(
          "Processing {:?} request ({} bytes of content)",
          request.operation,
          request.content.len()
        );

        let raw = self.gemini.send(prompt).await?;

        match crate::providers::gemini::extract_text(&raw)?
        {   Some(text) => Ok(Reply::Found(text))
          , None => {
              debug!("Gemini response had no usable text");
              Ok(Reply::Empty)
            }
        }
    }

    /// Never fails: errors come back as `"Error: ..."` strings
    pub async fn process(&self, request: &ResearchRequest) -> String
    {   match self.try_process(request).await
        {   Ok(reply) => reply.render()
          , Err(e) => {
              error!("Research request failed: {}", e);
              e.render()
            }
        }
    }
}
