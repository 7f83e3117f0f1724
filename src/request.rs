//! Request, prompt and reply types

use serde::{Deserialize, Serialize};

/// Returned when Gemini produced no usable text
pub const FALLBACK_REPLY: &str
  = "Sorry, I couldn't generate a valid response.";

const REPLY_PREFIX: &str = "✨ Here’s what I found: \n\n";
const REPLY_SUFFIX: &str
  = "\n\n💡 Let me know if you need more details!";

/// The three instruction modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation
{   Summarize
  , Suggest
  , Analyze
}

impl Operation
{   /// Case-insensitive exact match on the operation name
    pub fn parse(raw: &str)
      -> Result<Self, crate::error::Error>
    {   match raw.to_lowercase().as_str()
        {   "summarize" => Ok(Operation::Summarize)
          , "suggest" => Ok(Operation::Suggest)
          , "analyze" => Ok(Operation::Analyze)
          , _ => Err(crate::error::Error::InvalidOperation(
              format!("Unknown Operation: {}", raw)
            ))
        }
    }

    pub fn as_str(&self) -> &'static str
    {   match self
        {   Operation::Summarize => "summarize"
          , Operation::Suggest => "suggest"
          , Operation::Analyze => "analyze"
        }
    }

    /// Instruction text placed ahead of the user content
    pub fn instruction(&self) -> &'static str
    {   match self
        {   Operation::Summarize => {
              "Summarize the following research in a concise and \
               structured manner, including key objectives, \
               methodology, and conclusions."
            }
          , Operation::Suggest => {
              "Provide recommendations and suggestions for further \
               research based on the following content."
            }
          , Operation::Analyze => {
              "Critically analyze the following research, \
               highlighting strengths, weaknesses, and implications."
            }
        }
    }
}

/// Inbound request, shaped like `{"content": ..., "operation": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest
{   pub operation: Option<String>
  , #[serde(default)]
    pub content: String
}

impl ResearchRequest
{   pub fn new(
      operation: impl Into<String>
    , content: impl Into<String>
    ) -> Self
    {   ResearchRequest
        {   operation: Some(operation.into())
          , content: content.into()
        }
    }

    /// Resolve the operation name, rejecting missing or blank values
    pub fn operation(&self)
      -> Result<Operation, crate::error::Error>
    {   match self.operation.as_deref()
        {   Some(raw) if !raw.trim().is_empty() => {
              Operation::parse(raw)
            }
          , _ => Err(crate::error::Error::InvalidOperation(
              "Invalid request: operation cannot be empty"
                .to_string()
            ))
        }
    }
}

/// Instruction, blank line, then the content untouched
pub fn build_prompt(request: &ResearchRequest)
  -> Result<String, crate::error::Error>
{   let operation = request.operation()?;
    let instruction = operation.instruction();
    let mut prompt = String::with_capacity(
      instruction.len() + 2 + request.content.len()
    );
    prompt.push_str(instruction);
    prompt.push_str("\n\n");
    prompt.push_str(&request.content);
    Ok(prompt)
}

/// Successful outcome of one processing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply
{   /// First text part of the first candidate
    Found(String)
  , /// Upstream answered, but without usable text
    Empty
}

impl Reply
{   pub fn render(&self) -> String
    {   match self
        {   Reply::Found(text) => format_reply(text)
          , Reply::Empty => FALLBACK_REPLY.to_string()
        }
    }
}

pub fn format_reply(text: &str) -> String
{   format!("{}{}{}", REPLY_PREFIX, text, REPLY_SUFFIX)
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn prompt_starts_with_instruction_for_any_case()
    {   for (name, op) in [
          ("summarize", Operation::Summarize)
        , ("SUGGEST", Operation::Suggest)
        , ("AnAlYzE", Operation::Analyze)
        ]
        {   let content = "  raw <b>content</b>\nline two ";
            let prompt = build_prompt(
              &ResearchRequest::new(name, content)
            ).unwrap();
            assert_eq!(
              prompt,
              format!("{}\n\n{}", op.instruction(), content)
            );
        }
    }

    #[test]
    fn instruction_text_is_verbatim()
    {   assert_eq!(
          Operation::Summarize.instruction(),
          "Summarize the following research in a concise and structured manner, including key objectives, methodology, and conclusions."
        );
        assert_eq!(
          Operation::Suggest.instruction(),
          "Provide recommendations and suggestions for further research based on the following content."
        );
        assert_eq!(
          Operation::Analyze.instruction(),
          "Critically analyze the following research, highlighting strengths, weaknesses, and implications."
        );
    }

    #[test]
    fn empty_content_is_allowed()
    {   let prompt = build_prompt(
          &ResearchRequest::new("suggest", "")
        ).unwrap();
        assert!(prompt.ends_with("content.\n\n"));
    }

    #[test]
    fn unknown_and_blank_operations_are_rejected()
    {   let unknown = build_prompt(
          &ResearchRequest::new("translate", "x")
        ).unwrap_err();
        assert_eq!(
          unknown,
          crate::error::Error::InvalidOperation(
            "Unknown Operation: translate".to_string()
          )
        );

        for operation in [None, Some("   ".to_string())]
        {   let request = ResearchRequest
            {   operation
              , content: "x".to_string()
            };
            assert!(matches!(
              build_prompt(&request),
              Err(crate::error::Error::InvalidOperation(_))
            ));
        }
    }

    #[test]
    fn request_deserializes_from_ui_payload()
    {   let request: ResearchRequest = serde_json::from_str(
          r#"{"content":"abc","operation":"analyze"}"#
        ).unwrap();
        assert_eq!(request, ResearchRequest::new("analyze", "abc"));

        let bare: ResearchRequest
          = serde_json::from_str(r#"{}"#).unwrap();
        assert!(bare.operation.is_none());
        assert!(bare.content.is_empty());
    }

    #[test]
    fn reply_rendering()
    {   assert_eq!(
          Reply::Found("Hello world".to_string()).render(),
          "✨ Here’s what I found: \n\nHello world\n\n💡 Let me know if you need more details!"
        );
        assert_eq!(Reply::Empty.render(), FALLBACK_REPLY);
    }
}
