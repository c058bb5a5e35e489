//! Application constants and configuration

use std::time::Duration;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "SkripsiSakti";

/// Free-tier word limit per submission.
pub const WORD_LIMIT: usize = 100;

/// Max characters of the original text echoed back in demo output.
pub const EXCERPT_LEN: usize = 150;

/// Simulated backend latency while no API endpoint is configured.
pub const DEMO_DELAY: Duration = Duration::from_millis(1500);

/// How long the "copied" state stays on the copy button.
pub const COPIED_WINDOW: Duration = Duration::from_millis(2000);

/// Timeout for the real backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const PREMIUM_URL: &str = "https://skripsisakti.id/premium";
