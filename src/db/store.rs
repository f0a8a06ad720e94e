use crate::db::document::Document;
use crate::db::files;
use crate::error::CmsError;

use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Read-modify-write step executed inside the store actor.
///
/// Receives the current document, may change it in place, and returns the
/// value handed back to the caller. An `Err` aborts the write.
pub type MutateFn = Box<dyn FnOnce(&mut Value) -> Result<Value, CmsError> + Send>;

/// Messages handled by the store actor.
pub enum StoreMessage {
    /// Load one whole document.
    Read(Document, RpcReplyPort<Result<Value, CmsError>>),
    /// Load, apply the step, rewrite the file when the step succeeds.
    Mutate(Document, MutateFn, RpcReplyPort<Result<Value, CmsError>>),
}

impl fmt::Debug for StoreMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreMessage::Read(doc, _) => f.debug_tuple("Read").field(doc).finish(),
            StoreMessage::Mutate(doc, _, _) => f.debug_tuple("Mutate").field(doc).finish(),
        }
    }
}

/// Handle for interacting with the store actor.
///
/// All document access funnels through one mailbox, so concurrent requests
/// never interleave their read-modify-write cycles.
#[derive(Clone)]
pub struct StoreHandle {
    actor: ActorRef<StoreMessage>,
}

impl StoreHandle {
    pub async fn read<T>(&self, doc: Document) -> Result<T, CmsError>
    where
        T: DeserializeOwned,
    {
        let value = ractor::call!(self.actor, StoreMessage::Read, doc)
            .map_err(|e| CmsError::Store(format!("read {doc} RPC failed: {e}")))??;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn mutate<T, R, F>(&self, doc: Document, f: F) -> Result<R, CmsError>
    where
        T: DeserializeOwned + Serialize + 'static,
        R: DeserializeOwned + Serialize + 'static,
        F: FnOnce(&mut T) -> Result<R, CmsError> + Send + 'static,
    {
        let op: MutateFn = Box::new(move |value: &mut Value| {
            let mut typed: T = serde_json::from_value(value.take())?;
            let out = f(&mut typed)?;
            *value = serde_json::to_value(&typed)?;
            Ok(serde_json::to_value(out)?)
        });
        let value = ractor::call!(self.actor, StoreMessage::Mutate, doc, op)
            .map_err(|e| CmsError::Store(format!("mutate {doc} RPC failed: {e}")))??;
        Ok(serde_json::from_value(value)?)
    }
}

struct StoreState {
    data_dir: PathBuf,
}

struct StoreActor;

#[ractor::async_trait]
impl Actor for StoreActor {
    type Msg = StoreMessage;
    type State = StoreState;
    type Arguments = PathBuf;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        data_dir: PathBuf,
    ) -> Result<Self::State, ActorProcessingErr> {
        tokio::fs::create_dir_all(&data_dir).await.map_err(|e| {
            ActorProcessingErr::from(format!(
                "create data dir {} failed: {}",
                data_dir.display(),
                e
            ))
        })?;
        info!(path = %data_dir.display(), "StoreActor started");
        Ok(StoreState { data_dir })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            StoreMessage::Read(doc, reply) => {
                let _ = reply.send(files::load(&state.data_dir, doc).await);
            }
            StoreMessage::Mutate(doc, op, reply) => {
                let _ = reply.send(self.handle_mutate(state, doc, op).await);
            }
        }
        Ok(())
    }
}

impl StoreActor {
    async fn handle_mutate(
        &self,
        state: &mut StoreState,
        doc: Document,
        op: MutateFn,
    ) -> Result<Value, CmsError> {
        let mut value = files::load(&state.data_dir, doc).await?;
        let out = op(&mut value)?;
        files::write_atomic(&state.data_dir, doc, &value).await?;
        debug!(document = %doc, "document rewritten");
        Ok(out)
    }
}

/// Spawn the store actor over `data_dir` and return a handle.
pub async fn spawn(data_dir: impl Into<PathBuf>) -> Result<StoreHandle, CmsError> {
    let (actor, _jh) = Actor::spawn(None, StoreActor, data_dir.into())
        .await
        .map_err(|e| CmsError::Store(format!("failed to spawn StoreActor: {e}")))?;
    Ok(StoreHandle { actor })
}
