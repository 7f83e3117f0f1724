pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod processor;
pub mod client;

pub use client::ResearchBackend;
pub use config::GeminiConfig;
pub use error::Error;
pub use processor::ResearchProcessor;
pub use request::{Operation, Reply, ResearchRequest};

/*

research-assistant: forwards selected research text to Gemini with
one of three instructions (summarize / suggest / analyze) and hands
back a friendly, formatted reply.

research-assistant/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and backend channel types
│   ├── error.rs        # Error taxonomy, legacy "Error: " rendering
│   ├── config.rs       # Gemini url / key / timeout
│   ├── request.rs      # Operation, prompt building, Reply
│   ├── processor.rs    # One request -> one Gemini call -> one string
│   ├── client.rs       # Task-owning backend fed over channels
│   └── providers/
│       ├── mod.rs
│       └── gemini.rs   # Wire types and the HTTP call
└── tests/              # wiremock-backed integration tests

*/

/// BACKEND API INTERFACE:

// ===== Process =====

pub type ProcessReply = Result<crate::Reply, crate::error::Error>;
pub type ProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<ProcessReply>;

pub struct ProcessArgs
{   pub request: crate::ResearchRequest
  , pub reply: ProcessReplySender
}

// ===== Shutdown =====

pub type ShutdownReply = Result<(), crate::error::Error>;
pub type ShutdownReplySender
  = tokio::sync::mpsc::UnboundedSender<ShutdownReply>;

pub struct ShutdownArgs
{   pub reply: ShutdownReplySender
}

// ===== ResearchHand (sender side) =====

pub struct ResearchHand
{   pub process_tx
      : tokio::sync::mpsc::UnboundedSender<ProcessArgs>
  , pub shutdown_tx
      : tokio::sync::mpsc::UnboundedSender<ShutdownArgs>
}

// ===== ResearchFoot (receiver side) =====

pub struct ResearchFoot
{   pub process_rx
      : tokio::sync::mpsc::UnboundedReceiver<ProcessArgs>
  , pub shutdown_rx
      : tokio::sync::mpsc::UnboundedReceiver<ShutdownArgs>
}
