//! Zentrale Konfiguration für den Kurveneditor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Sichtbare Weltgröße (Breite, Höhe) beim Start.
pub const CAMERA_WORLD_SIZE: [f32; 2] = [30.0, 30.0];
/// Zoom-Faktor pro Tastendruck (`Z` = ×Schritt, `z` = ÷Schritt).
pub const CAMERA_ZOOM_STEP: f32 = 1.1;
/// Pan-Schritt in Welteinheiten pro Tastendruck.
pub const CAMERA_PAN_STEP: f32 = 1.0;

// ── Editing ─────────────────────────────────────────────────────────

/// Pick-Radius in Welteinheiten für das Greifen von Kontrollpunkten.
pub const PICK_RADIUS_WORLD: f32 = 0.1;
/// Spannungsänderung pro Tastendruck (`T` / `t`).
pub const TENSION_STEP: f32 = 0.1;

// ── Rendering ───────────────────────────────────────────────────────

/// Anzahl der Stützstellen für die Kurven-Polyline.
pub const SAMPLE_COUNT: usize = 100;
/// Farbe der Kontrollpunkte (RGB: Rot).
pub const POINT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
/// Farbe der Kurve (RGB: Gelb).
pub const CURVE_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
/// Hintergrundfarbe (RGB: Schwarz).
pub const BACKGROUND_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
/// Kontrollpunkt-Durchmesser in Pixeln.
pub const POINT_SIZE_PX: f32 = 10.0;
/// Linienstärke der Kurve in Pixeln.
pub const LINE_WIDTH_PX: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Sichtbare Weltgröße beim Start / nach Kamera-Reset
    pub camera_world_size: [f32; 2],
    /// Zoom-Schritt bei Shortcuts
    pub camera_zoom_step: f32,
    /// Pan-Schritt in Welteinheiten
    pub camera_pan_step: f32,

    // ── Editing ─────────────────────────────────────────────────
    /// Pick-Radius in Welteinheiten
    pub pick_radius_world: f32,
    /// Spannungsänderung pro Shortcut
    pub tension_step: f32,

    // ── Rendering ───────────────────────────────────────────────
    /// Stützstellen der Kurven-Polyline
    pub sample_count: usize,
    /// Farbe der Kontrollpunkte (RGB)
    pub point_color: [f32; 3],
    /// Farbe der Kurve (RGB)
    pub curve_color: [f32; 3],
    /// Hintergrundfarbe (RGB)
    pub background_color: [f32; 3],
    /// Punkt-Durchmesser in Pixeln
    pub point_size_px: f32,
    /// Linienstärke in Pixeln
    pub line_width_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_world_size: CAMERA_WORLD_SIZE,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_pan_step: CAMERA_PAN_STEP,

            pick_radius_world: PICK_RADIUS_WORLD,
            tension_step: TENSION_STEP,

            sample_count: SAMPLE_COUNT,
            point_color: POINT_COLOR,
            curve_color: CURVE_COLOR,
            background_color: BACKGROUND_COLOR,
            point_size_px: POINT_SIZE_PX,
            line_width_px: LINE_WIDTH_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text. Fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_editor.toml")
    }

    /// Sichtbare Startgröße der Kamera als Vektor.
    pub fn camera_extent(&self) -> glam::Vec2 {
        glam::Vec2::from(self.camera_world_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let opts = EditorOptions::from_toml_str("sample_count = 250\n").unwrap();
        assert_eq!(opts.sample_count, 250);
        assert_eq!(opts.pick_radius_world, PICK_RADIUS_WORLD);
        assert_eq!(opts.curve_color, CURVE_COLOR);
    }

    #[test]
    fn test_save_then_load_restores_options() {
        let path = std::env::temp_dir().join(format!(
            "curve_editor_options_{}.toml",
            std::process::id()
        ));
        let mut opts = EditorOptions::default();
        opts.camera_zoom_step = 1.25;
        opts.point_color = [0.0, 1.0, 0.5];

        opts.save_to_file(&path).unwrap();
        let loaded = EditorOptions::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_save_to_missing_directory_is_error() {
        let path = std::path::Path::new("/nonexistent/dir/curve_editor.toml");
        assert!(EditorOptions::default().save_to_file(path).is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(EditorOptions::from_toml_str("sample_count = \"viele\"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::path::Path::new("/nonexistent/curve_editor.toml");
        assert_eq!(EditorOptions::load_from_file(path), EditorOptions::default());
    }
}
