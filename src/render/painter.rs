//! `RenderSink` auf Basis des egui-Painters.

use super::RenderSink;
use crate::core::Camera2D;
use glam::{Mat3, Vec2};

/// Zeichnet Punkte und Linienzüge mit `egui::Painter` in ein Viewport-Rechteck.
pub struct EguiPainterSink<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    color: egui::Color32,
    transform: Mat3,
    point_radius: f32,
    line_width: f32,
}

impl<'a> EguiPainterSink<'a> {
    /// Erstellt einen Sink für das gegebene Viewport-Rechteck.
    pub fn new(
        painter: &'a egui::Painter,
        rect: egui::Rect,
        point_size_px: f32,
        line_width_px: f32,
    ) -> Self {
        Self {
            painter,
            rect,
            color: egui::Color32::WHITE,
            transform: Mat3::IDENTITY,
            point_radius: point_size_px * 0.5,
            line_width: line_width_px,
        }
    }

    /// Welt → Bildschirmposition im Viewport-Rechteck.
    fn to_screen(&self, world: Vec2) -> egui::Pos2 {
        let device = self.transform.transform_point2(world);
        let size = Vec2::new(self.rect.width(), self.rect.height());
        let pixel = Camera2D::device_to_pixel(device, size);
        egui::pos2(self.rect.left() + pixel.x, self.rect.top() + pixel.y)
    }
}

/// RGB (0..1) → egui-Farbe.
pub fn to_color32(rgb: [f32; 3]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

impl RenderSink for EguiPainterSink<'_> {
    fn set_uniform(&mut self, color: [f32; 3], transform: Mat3) {
        self.color = to_color32(color);
        self.transform = transform;
    }

    fn upload_points(&mut self, points: &[Vec2]) {
        for &p in points {
            self.painter
                .circle_filled(self.to_screen(p), self.point_radius, self.color);
        }
    }

    fn upload_polyline(&mut self, polyline: &[Vec2]) {
        let screen: Vec<egui::Pos2> = polyline.iter().map(|&p| self.to_screen(p)).collect();
        self.painter.add(egui::Shape::line(
            screen,
            egui::Stroke::new(self.line_width, self.color),
        ));
    }
}
