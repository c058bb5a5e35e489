//! App module - contains the page state and the actions on it

mod clipboard;
mod submit;

use crate::settings::Settings;
use crate::text::count_words;
use crate::theme;
use crate::transform::{DemoTransformer, HttpTransformer, TextTransformer};
use crate::types::{SubmitState, Toast, ToastKind};
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Form state
    pub(crate) input_text: String,
    pub(crate) output_text: String,
    pub(crate) processing: bool,
    pub(crate) copied_at: Option<Instant>,

    // Submission plumbing
    pub(crate) submit_state: Arc<Mutex<SubmitState>>,
    pub(crate) transformer: Arc<dyn TextTransformer>,
    pub(crate) runtime: tokio::runtime::Runtime,

    // Notifications
    pub(crate) toasts: Vec<Toast>,

    // Chrome
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) api_url: Option<String>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let transformer: Arc<dyn TextTransformer> = match settings.api_url.as_deref() {
            Some(url) => match HttpTransformer::new(url.to_string()) {
                Ok(t) => {
                    info!(endpoint = url, "Using backend transformer");
                    Arc::new(t)
                }
                Err(e) => {
                    warn!(error = %e, "Backend client setup failed, falling back to demo");
                    Arc::new(DemoTransformer)
                }
            },
            None => {
                info!("No endpoint configured, using demo transformer");
                Arc::new(DemoTransformer)
            }
        };

        Self {
            input_text: String::new(),
            output_text: String::new(),
            processing: false,
            copied_at: None,
            submit_state: Arc::new(Mutex::new(SubmitState::default())),
            transformer,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            toasts: Vec::new(),
            logo_texture: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            api_url: settings.api_url,
        }
    }

    pub fn word_count(&self) -> usize {
        count_words(&self.input_text)
    }

    pub(crate) fn push_toast(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.toasts.push(Toast::new(kind, title, description));
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            api_url: self.api_url.clone(),
        };
        settings.save(&self.data_dir);
    }
}
