//! One-shot background load of the dataset.
//!
//! The load is started once, and the caller gets back a handle that yields a
//! single [`LoadMessage`] when loading finishes or fails.

use crate::loader::dataset_loader::{DatasetLoader, DatasetSource};
use crate::loader::error::LoadError;
use crate::types::dataset::Dataset;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Result of a background load, as delivered to the caller.
#[derive(Debug, Clone)]
pub enum LoadMessage {
    Loaded(Arc<Dataset>),
    /// Human-readable description of why the load failed.
    Failed(String),
}

impl LoadMessage {
    pub fn into_result(self) -> Result<Arc<Dataset>, String> {
        match self {
            LoadMessage::Loaded(dataset) => Ok(dataset),
            LoadMessage::Failed(reason) => Err(reason),
        }
    }
}

impl From<Result<Dataset, LoadError>> for LoadMessage {
    fn from(result: Result<Dataset, LoadError>) -> Self {
        match result {
            Ok(dataset) => LoadMessage::Loaded(Arc::new(dataset)),
            Err(err) => LoadMessage::Failed(describe(&err)),
        }
    }
}

/// Joins the error and its sources into one line.
fn describe(err: &LoadError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Receiving end of a background load.
#[derive(Debug)]
pub struct LoadHandle {
    receiver: oneshot::Receiver<LoadMessage>,
    delivered: bool,
}

impl LoadHandle {
    /// Waits for the load to finish.
    pub async fn wait(self) -> LoadMessage {
        match self.receiver.await {
            Ok(message) => message,
            Err(_) => LoadMessage::Failed("Dataset load task ended without a result".to_string()),
        }
    }

    /// Polls for the message without blocking. Returns `None` while the load
    /// is still running and after the message has been taken once.
    pub fn try_message(&mut self) -> Option<LoadMessage> {
        if self.delivered {
            return None;
        }
        let message = match self.receiver.try_recv() {
            Ok(message) => message,
            Err(oneshot::error::TryRecvError::Empty) => return None,
            Err(oneshot::error::TryRecvError::Closed) => {
                LoadMessage::Failed("Dataset load task ended without a result".to_string())
            }
        };
        self.delivered = true;
        Some(message)
    }
}

/// Starts loading `source` with a default [`DatasetLoader`] on the current
/// tokio runtime.
pub fn spawn_load(source: DatasetSource) -> LoadHandle {
    spawn_load_with(DatasetLoader::new(), source)
}

/// Same as [`spawn_load`] with a caller-provided loader.
pub fn spawn_load_with(loader: DatasetLoader, source: DatasetSource) -> LoadHandle {
    let (sender, receiver) = oneshot::channel();
    tokio::spawn(async move {
        let result = loader.load(&source).await;
        match &result {
            Ok(dataset) => info!("Background load of {} finished with {} stations", source, dataset.len()),
            Err(err) => error!("Background load of {} failed: {}", source, err),
        }
        // The receiver may be gone if the caller lost interest.
        let _ = sender.send(LoadMessage::from(result));
    });
    LoadHandle {
        receiver,
        delivered: false,
    }
}
