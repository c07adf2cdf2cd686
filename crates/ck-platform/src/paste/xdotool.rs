use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use ck_core::ports::PasteSimulatorPort;

/// Sends Ctrl+V to the focused window with `xdotool`, falling back to `xte`.
///
/// The delay gives the clipboard owner time to publish the new content
/// before the target application asks for it.
pub struct XdotoolPasteSimulator {
    delay: Duration,
}

impl XdotoolPasteSimulator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn run(program: &str, args: &[&str]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .with_context(|| format!("failed to spawn {program}"))?;

        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}

#[async_trait]
impl PasteSimulatorPort for XdotoolPasteSimulator {
    async fn simulate_paste(&self) -> Result<()> {
        tokio::time::sleep(self.delay).await;

        match Self::run("xdotool", &["key", "--clearmodifiers", "ctrl+v"]).await {
            Ok(()) => Ok(()),
            Err(err) => {
                debug!(error = %format!("{err:#}"), "xdotool paste failed, trying xte");
                Self::run("xte", &["keydown Control_L", "key v", "keyup Control_L"])
                    .await
                    .context("no paste tool succeeded (tried xdotool, xte)")
            }
        }
    }
}
