//! Clipboard copy and the timed "copied" indicator

use super::App;
use crate::constants::COPIED_WINDOW;
use crate::types::ToastKind;
use std::time::Instant;
use tracing::{error, info};

/// True while the last successful copy is younger than the copied window.
/// A newer copy restarts the window; no timer ever detaches.
pub(crate) fn copied_flag_active(copied_at: Option<Instant>) -> bool {
    copied_at.is_some_and(|t| t.elapsed() < COPIED_WINDOW)
}

impl App {
    /// Copy the output text to the system clipboard. No-op when there is
    /// no output yet.
    pub fn copy_output(&mut self) {
        if self.output_text.is_empty() {
            return;
        }

        let result = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(self.output_text.clone()));

        match result {
            Ok(()) => {
                info!(chars = self.output_text.len(), "Output copied to clipboard");
                self.copied_at = Some(Instant::now());
                self.push_toast(
                    ToastKind::Success,
                    "Tersalin!",
                    "Teks berhasil disalin ke clipboard.",
                );
            }
            Err(e) => {
                error!(error = %e, "Clipboard copy failed");
                self.push_toast(ToastKind::Error, "Gagal menyalin", "Tidak dapat menyalin teks.");
            }
        }
    }

    pub fn is_copied(&self) -> bool {
        copied_flag_active(self.copied_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn flag_inactive_without_copy() {
        assert!(!copied_flag_active(None));
    }

    #[test]
    fn flag_active_right_after_copy() {
        assert!(copied_flag_active(Some(Instant::now())));
    }

    #[test]
    fn flag_expires_after_window() {
        let past = Instant::now()
            .checked_sub(COPIED_WINDOW + Duration::from_millis(10))
            .unwrap();
        assert!(!copied_flag_active(Some(past)));
    }

    #[test]
    fn newer_copy_restarts_window() {
        let stale = Instant::now()
            .checked_sub(COPIED_WINDOW + Duration::from_millis(10))
            .unwrap();
        assert!(!copied_flag_active(Some(stale)));
        // the restart is just storing a fresh Instant
        assert!(copied_flag_active(Some(Instant::now())));
    }
}
