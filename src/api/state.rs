//! Application state for the server.

use std::sync::Arc;

use crate::site::DocumentShell;

/// Shared, immutable application state.
///
/// The shell is injected via constructor so tests can swap head assets.
#[derive(Clone)]
pub struct AppState {
    shell: Arc<DocumentShell>,
}

impl AppState {
    pub fn new(shell: DocumentShell) -> Self {
        Self {
            shell: Arc::new(shell),
        }
    }

    /// Get a reference to the document shell.
    pub fn shell(&self) -> &DocumentShell {
        &self.shell
    }
}
