use super::backend::StorageBackend;
use crate::error::{storage_error, PlannerResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// The storage actor that owns the backend and processes messages
pub struct StorageActor {
    backend: Box<dyn StorageBackend>,
    command_rx: mpsc::Receiver<StorageCommand>,
}

/// Commands that can be sent to the storage actor
pub enum StorageCommand {
    GetItem(String, mpsc::Sender<PlannerResult<Option<String>>>),
    SetItem(String, String, mpsc::Sender<PlannerResult<()>>),
    RemoveItem(String, mpsc::Sender<PlannerResult<()>>),
    Shutdown,
}

/// Handle for communicating with the storage actor
#[derive(Clone)]
pub struct StorageHandle {
    command_tx: mpsc::Sender<StorageCommand>,
    _actor_task: Arc<JoinHandle<()>>,
}

impl StorageHandle {
    /// Create the actor around `backend` and spawn it
    pub fn spawn(backend: Box<dyn StorageBackend>) -> Self {
        let (mut actor, command_tx) = StorageActor::new(backend);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            command_tx,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Raw stored JSON text for a key
    pub async fn get_item(&self, key: &str) -> PlannerResult<Option<String>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(StorageCommand::GetItem(key.to_string(), response_tx))
            .await
            .map_err(|e| storage_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| storage_error("Response channel closed"))?
    }

    /// Replace the stored JSON text for a key
    pub async fn set_item(&self, key: &str, value: String) -> PlannerResult<()> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(StorageCommand::SetItem(key.to_string(), value, response_tx))
            .await
            .map_err(|e| storage_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| storage_error("Response channel closed"))?
    }

    /// Forget a key
    pub async fn remove(&self, key: &str) -> PlannerResult<()> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(StorageCommand::RemoveItem(key.to_string(), response_tx))
            .await
            .map_err(|e| storage_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| storage_error("Response channel closed"))?
    }

    /// Read a stored list. A missing key (or a stored `null`) reads as empty.
    pub async fn get_data<T: DeserializeOwned>(&self, key: &str) -> PlannerResult<Vec<T>> {
        match self.get_item(key).await? {
            Some(text) => {
                let list: Option<Vec<T>> = serde_json::from_str(&text)?;
                Ok(list.unwrap_or_default())
            }
            None => Ok(Vec::new()),
        }
    }

    /// Read a stored single object
    pub async fn get_object<T: DeserializeOwned>(&self, key: &str) -> PlannerResult<Option<T>> {
        match self.get_item(key).await? {
            Some(text) => Ok(serde_json::from_str::<Option<T>>(&text)?),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`, replacing what was there
    pub async fn save_data<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> PlannerResult<()> {
        let text = serde_json::to_string(value)?;
        self.set_item(key, text).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> PlannerResult<()> {
        let _ = self.command_tx.send(StorageCommand::Shutdown).await;
        Ok(())
    }
}

impl StorageActor {
    /// Create a new actor and the sender its handle talks through
    pub fn new(backend: Box<dyn StorageBackend>) -> (Self, mpsc::Sender<StorageCommand>) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            backend,
            command_rx,
        };

        (actor, command_tx)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Storage actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                StorageCommand::GetItem(key, response_tx) => {
                    let result = self.backend.get_item(&key).await;
                    let _ = response_tx.send(result).await;
                }
                StorageCommand::SetItem(key, value, response_tx) => {
                    debug!("Saving {} bytes under '{}'", value.len(), key);
                    let result = self.backend.set_item(&key, value).await;
                    let _ = response_tx.send(result).await;
                }
                StorageCommand::RemoveItem(key, response_tx) => {
                    debug!("Removing '{}'", key);
                    let result = self.backend.remove_item(&key).await;
                    let _ = response_tx.send(result).await;
                }
                StorageCommand::Shutdown => {
                    info!("Storage actor shutting down");
                    break;
                }
            }
        }

        info!("Storage actor shut down");
    }
}
