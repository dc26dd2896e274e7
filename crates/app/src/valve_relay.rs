//! In-process relay holding the operator's latest valve command.

use tokio::sync::RwLock;

use flowgate_domain::valve::ValveCommand;

/// Shared single-value store for the operator-commanded valve position.
///
/// Read by device polls and written by operator requests; the lock
/// serializes access and concurrent writes resolve last-writer-wins.
/// The command is process-local and resets to [`ValveCommand::Close`]
/// on restart. One relay serves every polling device.
#[derive(Debug, Default)]
pub struct ValveRelay {
    command: RwLock<ValveCommand>,
}

impl ValveRelay {
    /// Create a relay holding the default `close` command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest operator-issued command.
    pub async fn current(&self) -> ValveCommand {
        *self.command.read().await
    }

    /// Replace the command, returning the newly set value.
    pub async fn set(&self, command: ValveCommand) -> ValveCommand {
        *self.command.write().await = command;
        tracing::info!(command = %command, "valve command updated");
        command
    }
}
