//! The core event loop.
//!
//! Every watcher capture and every presentation request goes through one
//! mpsc channel and is executed to completion, persistence included, before
//! the next one is taken. Successful mutations push the full history on the
//! broadcast channel; failed ones push `OperationFailed`.

use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info};

use crate::usecase_factory::AppUseCases;

use super::handle::CoreHandle;
use super::messages::{CoreError, CoreNotification, CoreRequest, Reply};

/// Default bound of the request channel.
pub const DEFAULT_REQUEST_BUFFER: usize = 64;

const NOTIFICATION_BUFFER: usize = 32;

pub struct CoreRuntime {
    usecases: Arc<AppUseCases>,
    rx: mpsc::Receiver<CoreRequest>,
    notifications: broadcast::Sender<CoreNotification>,
}

impl CoreRuntime {
    /// Create the runtime and the handle used to talk to it.
    pub fn new(usecases: AppUseCases, request_buffer: usize) -> (Self, CoreHandle) {
        let (tx, rx) = mpsc::channel(request_buffer.max(1));
        let (notifications, _) = broadcast::channel(NOTIFICATION_BUFFER);

        let runtime = Self {
            usecases: Arc::new(usecases),
            rx,
            notifications: notifications.clone(),
        };
        (runtime, CoreHandle::new(tx, notifications))
    }

    /// Run until a `Shutdown` request arrives or every handle is dropped.
    pub async fn run(mut self) {
        info!("Core runtime started");

        while let Some(request) = self.rx.recv().await {
            if matches!(request, CoreRequest::Shutdown) {
                info!("Core runtime shutting down");
                break;
            }
            self.handle_request(request).await;
        }

        info!("Core runtime stopped");
    }

    async fn handle_request(&self, request: CoreRequest) {
        let operation = request.operation();
        debug!(operation, "Handling core request");

        let uc = &self.usecases;
        match request {
            CoreRequest::Capture { snapshot, reply } => {
                let result = uc.capture_clipboard().execute(snapshot).await;
                self.finish_mutation(operation, result.map_err(CoreError::from), reply)
                    .await;
            }
            CoreRequest::GetAllItems { reply } => {
                let _ = reply.send(Ok(uc.list_entries().execute().await));
            }
            CoreRequest::SearchItems { query, reply } => {
                let _ = reply.send(Ok(uc.search_entries().execute(&query).await));
            }
            CoreRequest::GetItemById { id, reply } => {
                let _ = reply.send(Ok(uc.get_entry().execute(&id).await));
            }
            CoreRequest::GetMaxItems { reply } => {
                let _ = reply.send(Ok(uc.history_capacity().get().await));
            }
            CoreRequest::CopyToClipboard {
                kind,
                content,
                reply,
            } => {
                let copy = uc.copy_to_clipboard();
                match copy.execute(kind, &content) {
                    Ok(()) => {
                        let _ = reply.send(Ok(()));
                        if copy.paste_enabled() {
                            // detached so the loop is not held up by the paste delay
                            tokio::spawn(async move { copy.simulate_paste().await });
                        }
                    }
                    Err(err) => {
                        let err = CoreError::Clipboard(format!("{err:#}"));
                        self.report_failure(operation, &err);
                        let _ = reply.send(Err(err));
                    }
                }
            }
            CoreRequest::DeleteItem { id, reply } => {
                let result = uc.delete_entry().execute(&id).await;
                self.finish_mutation(operation, result.map_err(CoreError::from), reply)
                    .await;
            }
            CoreRequest::ClearAll { reply } => {
                let result = uc.clear_history().clear_all().await;
                self.finish_mutation(operation, result.map_err(CoreError::from), reply)
                    .await;
            }
            CoreRequest::ClearOldest { count, reply } => {
                let result = uc.clear_history().clear_oldest(count).await;
                self.finish_mutation(operation, result.map_err(CoreError::from), reply)
                    .await;
            }
            CoreRequest::UpdateLastUsed { id, reply } => {
                let result = uc.touch_entry().execute(&id).await;
                self.finish_mutation(operation, result.map_err(CoreError::from), reply)
                    .await;
            }
            CoreRequest::SetMaxItems { max_items, reply } => {
                let result = uc.history_capacity().set(max_items).await;
                self.finish_mutation(operation, result.map_err(CoreError::from), reply)
                    .await;
            }
            CoreRequest::Shutdown => {}
        }
    }

    async fn finish_mutation(
        &self,
        operation: &'static str,
        result: Result<(), CoreError>,
        reply: Reply<()>,
    ) {
        match result {
            Ok(()) => {
                let items = self.usecases.list_entries().execute().await;
                // no subscribers is fine
                let _ = self
                    .notifications
                    .send(CoreNotification::ClipboardUpdated { items });
                let _ = reply.send(Ok(()));
            }
            Err(err) => {
                self.report_failure(operation, &err);
                let _ = reply.send(Err(err));
            }
        }
    }

    fn report_failure(&self, operation: &'static str, err: &CoreError) {
        error!(operation, error = %err, "Core operation failed");
        let _ = self.notifications.send(CoreNotification::OperationFailed {
            operation: operation.to_string(),
            message: err.to_string(),
        });
    }
}
