//! Share capability
//!
//! The platform share sheet is modeled as an injected capability so the
//! update logic can be exercised with a fake in tests instead of depending
//! on ambient platform state. The desktop implementation hands the
//! milestone URL to the system opener.

use std::process::Command;

use anyhow::Context;

/// Payload for a share invocation.
#[derive(Debug, Clone)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    /// The fixed milestone announcement.
    pub fn milestone() -> Self {
        Self {
            title: "Tab for a Cause - $2 Million Raised".to_string(),
            text: "We just hit $2 Million raised for charity! Join the movement \
                   at tabforacause.org"
                .to_string(),
            url: "https://tab.gladly.io/2-million/".to_string(),
        }
    }

    /// Single-line payload for the clipboard fallback.
    pub fn clipboard_text(&self) -> String {
        format!("{}: {} {}", self.title, self.text, self.url)
    }
}

/// Why a share invocation did not complete.
#[derive(Debug, Clone)]
pub enum ShareError {
    /// No share capability on this platform.
    Unavailable,
    /// The platform share path itself failed.
    Failed(String),
}

impl std::fmt::Display for ShareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShareError::Unavailable => write!(f, "no share capability available"),
            ShareError::Failed(e) => write!(f, "share invocation failed: {e}"),
        }
    }
}

impl std::error::Error for ShareError {}

/// Injected share capability.
pub trait SharePlatform: Send + Sync {
    fn is_available(&self) -> bool;
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Shares by handing the milestone URL to the system opener.
pub struct SystemShare;

impl SystemShare {
    fn opener() -> Option<&'static str> {
        if cfg!(target_os = "linux") {
            Some("xdg-open")
        } else if cfg!(target_os = "macos") {
            Some("open")
        } else if cfg!(target_os = "windows") {
            Some("explorer")
        } else {
            None
        }
    }
}

impl SharePlatform for SystemShare {
    fn is_available(&self) -> bool {
        Self::opener().is_some()
    }

    fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        let opener = Self::opener().ok_or(ShareError::Unavailable)?;
        spawn_opener(opener, &request.url).map_err(|e| ShareError::Failed(e.to_string()))
    }
}

/// Open a URL with the system opener. Used for the impact page; the caller
/// decides how loudly to fail.
pub fn open_url(url: &str) -> anyhow::Result<()> {
    let opener = SystemShare::opener().context("no system opener on this platform")?;
    spawn_opener(opener, url)
}

fn spawn_opener(opener: &str, url: &str) -> anyhow::Result<()> {
    Command::new(opener)
        .arg(url)
        .spawn()
        .with_context(|| format!("spawning {opener} {url}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestone_request_is_fixed() {
        let request = ShareRequest::milestone();
        assert_eq!(request.title, "Tab for a Cause - $2 Million Raised");
        assert_eq!(request.url, "https://tab.gladly.io/2-million/");
        assert!(request.text.contains("$2 Million"));
    }

    #[test]
    fn clipboard_text_carries_everything() {
        let request = ShareRequest::milestone();
        let line = request.clipboard_text();
        assert!(line.contains(&request.title));
        assert!(line.contains(&request.text));
        assert!(line.contains(&request.url));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn error_messages_distinguish_the_two_paths() {
        assert!(ShareError::Unavailable.to_string().contains("available"));
        assert!(
            ShareError::Failed("cancelled".to_string())
                .to_string()
                .contains("cancelled")
        );
    }
}
