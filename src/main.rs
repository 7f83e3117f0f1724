//! Reads research text on stdin and prints Gemini's reply.
//!
//! Usage: GEMINI_API_URL=... GEMINI_API_KEY=... research-assistant <summarize|suggest|analyze>

use std::io::Read;
use log::error;
use research_assistant::{GeminiConfig, ResearchProcessor, ResearchRequest};

#[tokio::main]
async fn main()
{   env_logger::init();

    let operation = std::env::args().nth(1);

    let mut content = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut content)
    {   error!("Failed to read stdin: {}", e);
        std::process::exit(1);
    }

    let processor = match GeminiConfig::from_env()
      .and_then(ResearchProcessor::new)
    {   Ok(p) => p
      , Err(e) => {
          eprintln!("{}", e.render());
          std::process::exit(2);
        }
    };

    let request = ResearchRequest
    {   operation
      , content
    };
    println!("{}", processor.process(&request).await);
}
