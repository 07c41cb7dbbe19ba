// src/app/update/share.rs
//! Share and impact-page handlers
//!
//! Both failure modes of the share path (capability missing, invocation
//! failed) stay silent toward the user: the first falls back to a clipboard
//! copy plus an acknowledgment toast, the second is logged only.

use std::sync::Arc;
use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ShareRequest;
use crate::ui::widgets::Toast;

/// How long the acknowledgment toast stays up.
const TOAST_DURATION: Duration = Duration::from_secs(4);

impl App {
    /// Handle share-related messages
    pub fn handle_share(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Share => Some(self.begin_share()),

            Message::ShareCompleted(result) => {
                if let Err(e) = result {
                    // User cancelled or the platform path failed; never a
                    // user-visible error.
                    tracing::warn!("share invocation failed: {e}");
                }
                Some(Task::none())
            }

            Message::OpenImpactPage => {
                let url = &self.core.settings.milestone.impact_url;
                if let Err(e) = crate::features::share::open_url(url) {
                    tracing::warn!("could not open impact page: {e}");
                }
                Some(Task::none())
            }

            Message::HideToast => {
                self.ui.toast_visible = false;
                if let Some(toast) = &mut self.ui.toast {
                    toast.hide();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Kick off a share: native capability when present, otherwise the
    /// clipboard-and-toast fallback.
    pub(crate) fn begin_share(&mut self) -> Task<Message> {
        let request = ShareRequest::milestone();

        if self.core.share.is_available() {
            let platform = Arc::clone(&self.core.share);
            Task::perform(
                async move { platform.share(&request).map_err(|e| e.to_string()) },
                Message::ShareCompleted,
            )
        } else {
            tracing::info!("share capability unavailable, using clipboard fallback");
            self.ui.toast = Some(Toast::success("Thanks for spreading the news!"));
            self.ui.toast_visible = true;
            Task::batch([
                iced::clipboard::write(request.clipboard_text()),
                Task::perform(
                    async {
                        tokio::time::sleep(TOAST_DURATION).await;
                    },
                    |_| Message::HideToast,
                ),
            ])
        }
    }
}
