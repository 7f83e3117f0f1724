use std::sync::Arc;
use tokio::sync::mpsc;
use log::{debug, error, info};
use crate::ResearchFoot;

/// Public handle to the research backend - owns the task
pub struct ResearchBackend
{   hand: crate::ResearchHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl ResearchBackend
{   /// Create and spawn a new backend on the current runtime
    /// Returns immediately - spawns background task
    pub fn new(
      config: crate::config::GeminiConfig
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating ResearchBackend with task ownership");
        let processor = Arc::new(
          crate::processor::ResearchProcessor::new(config)?
        );

        let (process_tx, process_rx)
          = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx)
          = mpsc::unbounded_channel();

        let hand = crate::ResearchHand
        {   process_tx
          , shutdown_tx
        };

        let foot = crate::ResearchFoot
        {   process_rx
          , shutdown_rx
        };

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, processor).await
        });

        Ok(ResearchBackend
        {   hand
          , _task_handle
        })
    }

    /// Queue a request - returns almost immediately
    pub async fn process(
      &self
    , request: crate::ResearchRequest
    ) -> Result<
        mpsc::UnboundedReceiver<crate::ProcessReply>,
        crate::error::Error
      >
    {   debug!("process queuing {:?}", request.operation);
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::ProcessArgs
        {   request
          , reply: reply_tx
        };

        self.hand.process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Queue a request and wait for its legacy string form
    pub async fn process_to_string(
      &self
    , request: crate::ResearchRequest
    ) -> String
    {   let mut reply_rx = match self.process(request).await
        {   Ok(rx) => rx
          , Err(e) => return e.render()
        };

        match reply_rx.recv().await
        {   Some(Ok(reply)) => reply.render()
          , Some(Err(e)) => e.render()
          , None => crate::error::Error::Other(
              "Backend disconnected".to_string()
            ).render()
        }
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down ResearchBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::ShutdownArgs
        {   reply: reply_tx
        };

        self.hand.shutdown_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::Other(
              "Backend already shutdown".to_string()
            )
          })?;

        // Wait for shutdown confirmation
        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend shutdown timeout");
            Err(crate::error::Error::Timeout)
        }
    }
}

/// Main backend event loop
///
/// tokio::select! only routes: each request runs on its own task,
/// so a slow Gemini call never holds up the next request.
async fn run_backend_loop(
  foot: crate::ResearchFoot
, processor: Arc<crate::processor::ResearchProcessor>
)
{   debug!("Starting ResearchBackend event loop");
    let ResearchFoot
    {   mut process_rx
      , mut shutdown_rx
    } = foot;

    loop
    { tokio::select!
      { Some(cmd) = process_rx.recv() => {
          debug!("Received Process for {:?}", cmd.request.operation);
          let processor = Arc::clone(&processor);
          tokio::spawn(async move {
            let result = processor.try_process(&cmd.request).await;
            if let Err(e) = &result
            {   error!("Research request failed: {}", e);
            }
            let _ = cmd.reply.send(result);
          });
        }
      , Some(cmd) = shutdown_rx.recv() => {
          debug!("Received Shutdown");
          let _ = cmd.reply.send(Ok(()));
          info!("ResearchBackend shutting down");
          break;
        }
      , else => {
          debug!("All backend channels closed");
          break;
        }
      }
    }
}
