use crate::app::CommandLog;
use crate::core::Camera2D;
use crate::shared::EditorOptions;

use super::{EditorState, ViewState};

/// Hauptzustand der Anwendung.
///
/// Kamera und aktive Kurve werden explizit durch Controller und Handler
/// gereicht; es gibt keinen globalen Zustand.
pub struct AppState {
    /// View-State (Kamera, Viewport)
    pub view: ViewState,
    /// Editor-State (aktive Kurve, Drag)
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State; die Kamera startet mit der konfigurierten Weltgröße.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut view = ViewState::new();
        view.camera = Camera2D::with_extent(options.camera_extent());
        Self {
            view,
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Anzahl der Kontrollpunkte der aktiven Kurve (für UI-Anzeige)
    pub fn control_point_count(&self) -> usize {
        self.editor.curve.control_points().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
