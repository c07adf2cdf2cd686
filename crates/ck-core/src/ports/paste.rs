use anyhow::Result;
use async_trait::async_trait;

/// Simulates the platform "paste" keystroke into the focused window.
///
/// Best effort: callers log failures and move on.
#[async_trait]
pub trait PasteSimulatorPort: Send + Sync {
    async fn simulate_paste(&self) -> Result<()>;
}
