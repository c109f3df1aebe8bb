use crate::constants::{DIRECTIONS_BASE_URL, DIRECTIONS_TRAVEL_MODE};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::fmt;

/// Map deep link from `origin` to `destination`, each rendered as `lat,lon`
/// in decimal degrees. The commas are left unescaped.
pub fn directions_url(origin: impl fmt::Display, destination: impl fmt::Display) -> String {
    format!(
        "{}&origin={}&destination={}&travelmode={}",
        DIRECTIONS_BASE_URL, origin, destination, DIRECTIONS_TRAVEL_MODE
    )
}

/// Hands a link to whatever application renders maps on this device.
#[async_trait]
pub trait MapLauncher: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

/// Opens links with the platform's default opener, or a configured program.
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher {
    command: Option<String>,
}

impl SystemLauncher {
    pub fn new(command: Option<String>) -> Self {
        SystemLauncher { command }
    }

    fn program(&self) -> (String, Vec<String>) {
        if let Some(ref command) = self.command {
            return (command.clone(), Vec::new());
        }
        if cfg!(target_os = "macos") {
            ("open".to_string(), Vec::new())
        } else if cfg!(target_os = "windows") {
            // `start` treats the first quoted argument as a window title.
            (
                "cmd".to_string(),
                vec!["/C".to_string(), "start".to_string(), String::new()],
            )
        } else {
            ("xdg-open".to_string(), Vec::new())
        }
    }
}

#[async_trait]
impl MapLauncher for SystemLauncher {
    async fn open(&self, url: &str) -> Result<()> {
        let (program, args) = self.program();
        tracing::info!("Opening directions with {}: {}", program, url);

        let status = tokio::process::Command::new(&program)
            .args(&args)
            .arg(url)
            .status()
            .await
            .map_err(|e| AppError::Launch(format!("{}: {}", program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Launch(format!("{} exited with {}", program, status)))
        }
    }
}
