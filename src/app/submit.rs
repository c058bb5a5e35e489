//! Submission workflow: validate, run one transform, report back

use super::App;
use crate::constants::WORD_LIMIT;
use crate::text::count_words;
use crate::transform::{TextTransformer, TransformError};
use crate::types::{SubmitState, ToastKind};
use eframe::egui;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Why a submission was rejected before any work started.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitBlock {
    Empty,
    OverLimit { count: usize },
}

/// Preconditions, checked in order: trimmed input non-empty, then word
/// count within the free-tier limit.
pub fn validate_submission(text: &str, limit: usize) -> Result<(), SubmitBlock> {
    if text.trim().is_empty() {
        return Err(SubmitBlock::Empty);
    }
    let count = count_words(text);
    if count > limit {
        return Err(SubmitBlock::OverLimit { count });
    }
    Ok(())
}

/// Records a completion into the shared state exactly once. If the task
/// unwinds before `finish` runs, Drop records an aborted completion so the
/// processing flag can never stay stuck.
struct CompletionGuard {
    state: Arc<Mutex<SubmitState>>,
    armed: bool,
}

impl CompletionGuard {
    fn new(state: Arc<Mutex<SubmitState>>) -> Self {
        Self { state, armed: true }
    }

    fn finish(mut self, result: Result<String, TransformError>) {
        self.armed = false;
        let mut s = self.state.lock().unwrap();
        s.completion = Some(result);
        s.in_flight = false;
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if self.armed {
            if let Ok(mut s) = self.state.lock() {
                s.completion = Some(Err(TransformError::Aborted));
                s.in_flight = false;
            }
        }
    }
}

/// The single async unit of work per submission.
pub(crate) async fn run_transform(
    state: Arc<Mutex<SubmitState>>,
    transformer: Arc<dyn TextTransformer>,
    text: String,
    ctx: egui::Context,
) {
    let guard = CompletionGuard::new(state);
    let result = transformer.transform(&text).await;
    guard.finish(result);
    ctx.request_repaint();
}

impl App {
    /// Run the full submission workflow. At most one submission is in
    /// flight; the disabled submit control upholds that.
    pub fn submit(&mut self, ctx: &egui::Context) {
        match validate_submission(&self.input_text, WORD_LIMIT) {
            Err(SubmitBlock::Empty) => {
                self.push_toast(
                    ToastKind::Error,
                    "Teks kosong",
                    "Silakan masukkan teks yang ingin diubah.",
                );
                return;
            }
            Err(SubmitBlock::OverLimit { count }) => {
                info!(words = count, limit = WORD_LIMIT, "Submission over word limit");
                self.push_toast(
                    ToastKind::Error,
                    "Teks terlalu panjang",
                    format!("Versi gratis hanya mendukung maksimal {WORD_LIMIT} kata."),
                );
                return;
            }
            Ok(()) => {}
        }

        self.processing = true;
        self.output_text.clear();
        {
            let mut s = self.submit_state.lock().unwrap();
            s.in_flight = true;
            s.completion = None;
        }

        let text = self.input_text.trim().to_string();
        info!(words = count_words(&text), "Submission started");

        self.runtime.spawn(run_transform(
            self.submit_state.clone(),
            self.transformer.clone(),
            text,
            ctx.clone(),
        ));
    }

    /// Consume a finished submission, if any. Called every frame.
    pub fn poll_submit_result(&mut self) {
        if !self.processing {
            return;
        }
        let completion = self.submit_state.lock().unwrap().completion.take();
        let Some(result) = completion else { return };

        self.processing = false;
        match result {
            Ok(output) => {
                info!(chars = output.len(), "Submission finished");
                self.output_text = output;
                self.push_toast(
                    ToastKind::Success,
                    "Berhasil!",
                    "Teks telah diubah ke bahasa akademik.",
                );
            }
            Err(e) => {
                warn!(error = %e, "Submission failed");
                self.push_toast(
                    ToastKind::Error,
                    "Terjadi kesalahan",
                    "Gagal memproses teks. Silakan coba lagi.",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::DemoTransformer;
    use async_trait::async_trait;

    struct FailingTransformer;

    #[async_trait]
    impl TextTransformer for FailingTransformer {
        async fn transform(&self, _text: &str) -> Result<String, TransformError> {
            Err(TransformError::Status(500))
        }
    }

    #[test]
    fn empty_and_blank_input_rejected() {
        assert_eq!(validate_submission("", WORD_LIMIT), Err(SubmitBlock::Empty));
        assert_eq!(
            validate_submission("   \n\t", WORD_LIMIT),
            Err(SubmitBlock::Empty)
        );
    }

    #[test]
    fn over_limit_input_rejected() {
        let text = vec!["kata"; 101].join(" ");
        assert_eq!(
            validate_submission(&text, WORD_LIMIT),
            Err(SubmitBlock::OverLimit { count: 101 })
        );
        let text = vec!["kata"; 150].join(" ");
        assert!(matches!(
            validate_submission(&text, WORD_LIMIT),
            Err(SubmitBlock::OverLimit { count: 150 })
        ));
    }

    #[test]
    fn input_within_limit_accepted() {
        assert_eq!(validate_submission("halo", WORD_LIMIT), Ok(()));
        let text = vec!["kata"; 100].join(" ");
        assert_eq!(validate_submission(&text, WORD_LIMIT), Ok(()));
    }

    #[tokio::test]
    async fn transform_task_records_success_and_clears_flight() {
        let state = Arc::new(Mutex::new(SubmitState {
            in_flight: true,
            completion: None,
        }));
        run_transform(
            state.clone(),
            Arc::new(DemoTransformer),
            "Halo dunia ini contoh".into(),
            egui::Context::default(),
        )
        .await;

        let s = state.lock().unwrap();
        assert!(!s.in_flight);
        let out = s.completion.as_ref().unwrap().as_ref().unwrap();
        assert!(out.contains("(4 kata)"));
    }

    #[tokio::test]
    async fn transform_task_records_failure_and_clears_flight() {
        let state = Arc::new(Mutex::new(SubmitState {
            in_flight: true,
            completion: None,
        }));
        run_transform(
            state.clone(),
            Arc::new(FailingTransformer),
            "halo".into(),
            egui::Context::default(),
        )
        .await;

        let s = state.lock().unwrap();
        assert!(!s.in_flight);
        assert!(s.completion.as_ref().unwrap().is_err());
    }

    #[test]
    fn dropped_guard_records_aborted_completion() {
        let state = Arc::new(Mutex::new(SubmitState {
            in_flight: true,
            completion: None,
        }));
        drop(CompletionGuard::new(state.clone()));

        let s = state.lock().unwrap();
        assert!(!s.in_flight);
        assert!(matches!(
            s.completion,
            Some(Err(TransformError::Aborted))
        ));
    }
}
