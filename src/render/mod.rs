//! Rendering-Schnittstelle zwischen Render-Szene und Zeichen-Backend.
//!
//! Der Kern kennt weder Buffer noch Shader: er übergibt Punktlisten und
//! Uniforms an einen `RenderSink`, der die eigentlichen Draw-Calls absetzt.

mod painter;

pub use crate::shared::RenderScene;
pub use painter::{to_color32, EguiPainterSink};

use glam::{Mat3, Vec2};

/// Schmale Schnittstelle zum Zeichen-Backend.
pub trait RenderSink {
    /// Setzt Farbe (RGB) und Welt→Device-Transformation für folgende Uploads.
    fn set_uniform(&mut self, color: [f32; 3], transform: Mat3);

    /// Zeichnet einzelne Punkte (Welt-Koordinaten).
    fn upload_points(&mut self, points: &[Vec2]);

    /// Zeichnet einen zusammenhängenden Linienzug (Welt-Koordinaten).
    fn upload_polyline(&mut self, polyline: &[Vec2]);
}

/// Zeichnet eine Szene: zuerst die Kontrollpunkte, dann die Kurve.
pub fn draw_scene(scene: &RenderScene, sink: &mut impl RenderSink) {
    if !scene.control_points.is_empty() {
        sink.set_uniform(scene.point_color, scene.view_projection);
        sink.upload_points(&scene.control_points);
    }

    if scene.has_curve() {
        sink.set_uniform(scene.curve_color, scene.view_projection);
        sink.upload_polyline(&scene.polyline);
    }
}
