use std::fmt;

/// Error type for research processing
/// Implements Clone for sending through reply channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Operation missing, blank, or not one of the known modes
    InvalidOperation(String)
  , /// Gemini answered with a non-2xx status
    UpstreamHttp(u16)
  , /// Gemini body was not valid JSON or had the wrong shape
    UpstreamParse(String)
  , /// Network failure reaching Gemini
    Transport(String)
  , /// Outbound call exceeded the configured timeout
    Timeout
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Generic error
    Other(String)
}

impl Error
{   /// Legacy string form handed back to callers of `process`
    pub fn render(&self) -> String
    {   format!("Error: {}", self)
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::InvalidOperation(msg) => {
              write!(f, "{}", msg)
            }
          , Error::UpstreamHttp(status) => {
              write!(f,
                "Gemini API request failed with status: {}",
                status
              )
            }
          , Error::UpstreamParse(msg) => {
              write!(f, "Failed to parse Gemini response: {}", msg)
            }
          , Error::Transport(msg) => {
              write!(f, "Transport error: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Gemini API request timed out")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn http_failure_carries_status_code()
    {   let rendered = Error::UpstreamHttp(503).render();
        assert!(rendered.starts_with("Error: "));
        assert!(rendered.contains("503"));
    }

    #[test]
    fn other_renders_message_once()
    {   let err: Error = "Backend disconnected".into();
        assert_eq!(err.render(), "Error: Backend disconnected");
    }
}
