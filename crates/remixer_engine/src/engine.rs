use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use remixer_logging::{remix_debug, remix_warn};

use crate::transform::transform;
use crate::{EngineEvent, EngineSettings, RemixFailure, RequestId};

/// The seam where a real text-generation service would plug in.
#[async_trait::async_trait]
pub trait RemixBackend: Send + Sync {
    async fn remix(&self, mode_label: &str, text: &str) -> Result<String, RemixFailure>;
}

/// Local stand-in for a real backend: waits out the configured latency,
/// then applies the deterministic transform for the requested mode.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    settings: EngineSettings,
}

impl SimulatedBackend {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl RemixBackend for SimulatedBackend {
    async fn remix(&self, mode_label: &str, text: &str) -> Result<String, RemixFailure> {
        tokio::time::sleep(self.settings.simulated_latency).await;
        Ok(transform(mode_label, text))
    }
}

enum EngineCommand {
    Remix {
        request_id: RequestId,
        mode_label: String,
        text: String,
    },
}

#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let backend: Arc<dyn RemixBackend> = Arc::new(SimulatedBackend::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn remix(
        &self,
        request_id: RequestId,
        mode_label: impl Into<String>,
        text: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Remix {
            request_id,
            mode_label: mode_label.into(),
            text: text.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    backend: Arc<dyn RemixBackend>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Remix {
            request_id,
            mode_label,
            text,
        } => {
            remix_debug!(
                "remix request {} mode={} input_len={}",
                request_id,
                mode_label,
                text.len()
            );
            // Joining the spawned task is the failure boundary: even a
            // panicking backend still settles the request, so the
            // controller can never be left busy.
            let task =
                tokio::spawn(async move { backend.remix(&mode_label, &text).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => Err(RemixFailure::new(format!("remix task aborted: {err}"))),
            };
            if let Err(failure) = &result {
                remix_warn!("remix request {} failed: {}", request_id, failure);
            }
            let _ = event_tx.send(EngineEvent::RemixCompleted { request_id, result });
        }
    }
}
