//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use glam::{Mat3, Vec2};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Kontrollpunkte in Welt-Koordinaten
    pub control_points: Vec<Vec2>,
    /// Abgetastete Kurve in Welt-Koordinaten (leer bei < 2 Punkten oder Fehler)
    pub polyline: Vec<Vec2>,
    /// Welt → Device (View · Projektion)
    pub view_projection: Mat3,
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

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden kann.
    pub fn has_curve(&self) -> bool {
        !self.polyline.is_empty()
    }
}
