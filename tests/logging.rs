//! Diagnostic log output of a Gemini round trip.
//!
//! Lives in its own test binary: the capturing logger is installed
//! process-wide and would clash with env_logger in the other tests.

use log::{Level, LevelFilter, Log, Metadata, Record};
use research_assistant::{GeminiConfig, ResearchProcessor, ResearchRequest};
use serde_json::json;
use std::sync::Mutex;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger
{   fn enabled(&self, metadata: &Metadata) -> bool
    {   metadata.target().starts_with("research_assistant")
    }

    fn log(&self, record: &Record)
    {   if self.enabled(record.metadata()) && record.level() <= Level::Debug
        {   if let Ok(mut lines) = LINES.lock()
            {   lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

#[tokio::test]
async fn test_request_and_raw_response_bodies_are_logged()
{   log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let server = MockServer::start().await;
    let raw_body
      = r#"{"candidates":[{"content":{"parts":[{"text":"logged reply"}]}}]}"#;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200).set_body_string(raw_body))
      .mount(&server)
      .await;

    let processor = ResearchProcessor::new(
      GeminiConfig::new(format!("{}/generate", server.uri()), "log-key")
    ).unwrap();
    processor
      .process(&ResearchRequest::new("analyze", "findings"))
      .await;

    let prompt = "Critically analyze the following research, highlighting strengths, weaknesses, and implications.\n\nfindings";
    let request_body = json!({
      "contents": [ { "parts": [ { "text": prompt } ] } ]
    }).to_string();

    let lines = LINES.lock().unwrap().clone();
    assert!(
      lines.iter().any(|l| l.contains(&request_body)),
      "request body not logged: {:?}", lines
    );
    assert!(
      lines.iter().any(|l| l.contains(raw_body)),
      "raw response not logged: {:?}", lines
    );
    assert!(lines.iter().all(|l| !l.contains("log-key")));
}
