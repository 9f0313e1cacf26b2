//! 2D-Kamera für Pan und Zoom.

use glam::{Mat3, Vec2};

/// 2D-Kamera mit Zentrum und sichtbarer Weltgröße.
///
/// `view_projection()` bildet Welt-Koordinaten auf normalisierte
/// Device-Koordinaten (-1 bis 1) ab, `inverse_view_projection()` zurück.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Mittelpunkt des sichtbaren Bereichs in Welt-Koordinaten
    pub center: Vec2,
    /// Breite und Höhe des sichtbaren Bereichs in Welt-Einheiten (immer > 0)
    pub extent: Vec2,
}

impl Camera2D {
    /// Standard-Weltgröße beim Programmstart.
    pub const DEFAULT_EXTENT: Vec2 = Vec2::new(30.0, 30.0);

    /// Erstellt eine Kamera im Ursprung mit Standard-Weltgröße.
    pub fn new() -> Self {
        Self::with_extent(Self::DEFAULT_EXTENT)
    }

    /// Erstellt eine Kamera im Ursprung mit vorgegebener Weltgröße.
    ///
    /// Nicht-positive Komponenten fallen auf `DEFAULT_EXTENT` zurück.
    pub fn with_extent(extent: Vec2) -> Self {
        let extent = if extent.x > 0.0 && extent.y > 0.0 && extent.is_finite() {
            extent
        } else {
            log::warn!(
                "Ungültige Kamera-Weltgröße {:?}, verwende {:?}",
                extent,
                Self::DEFAULT_EXTENT
            );
            Self::DEFAULT_EXTENT
        };
        Self {
            center: Vec2::ZERO,
            extent,
        }
    }

    /// View-Matrix: Translation um `-center`.
    pub fn view(&self) -> Mat3 {
        Mat3::from_translation(-self.center)
    }

    /// Projektions-Matrix: Skalierung um `2 / extent`.
    pub fn projection(&self) -> Mat3 {
        Mat3::from_scale(Vec2::splat(2.0) / self.extent)
    }

    /// Inverse View-Matrix: Translation um `center`.
    pub fn inverse_view(&self) -> Mat3 {
        Mat3::from_translation(self.center)
    }

    /// Inverse Projektions-Matrix: Skalierung um `extent / 2`.
    pub fn inverse_projection(&self) -> Mat3 {
        Mat3::from_scale(self.extent / 2.0)
    }

    /// Welt → Device: erst View, dann Projektion.
    pub fn view_projection(&self) -> Mat3 {
        self.projection() * self.view()
    }

    /// Device → Welt: erst inverse Projektion, dann inverse View.
    pub fn inverse_view_projection(&self) -> Mat3 {
        self.inverse_view() * self.inverse_projection()
    }

    /// Konvertiert normalisierte Device-Koordinaten zu Welt-Koordinaten.
    pub fn device_to_world(&self, device_pos: Vec2) -> Vec2 {
        self.inverse_view_projection().transform_point2(device_pos)
    }

    /// Konvertiert Welt-Koordinaten zu normalisierten Device-Koordinaten.
    pub fn world_to_device(&self, world_pos: Vec2) -> Vec2 {
        self.view_projection().transform_point2(world_pos)
    }

    /// Skaliert die sichtbare Weltgröße komponentenweise.
    ///
    /// `factor > 1` zeigt mehr Welt (herauszoomen). Nicht-positive oder
    /// nicht-endliche Faktoren werden ignoriert, damit `extent > 0` bleibt.
    pub fn zoom(&mut self, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            log::warn!("Zoom-Faktor {} ignoriert", factor);
            return;
        }
        self.extent *= factor;
    }

    /// Verschiebt die Kamera um ein Delta in Welt-Einheiten.
    pub fn pan(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Konvertiert Pixel-Koordinaten (Ursprung oben links) zu Device-Koordinaten.
    /// Die Y-Achse wird dabei umgedreht.
    pub fn pixel_to_device(pixel: Vec2, viewport_size: Vec2) -> Vec2 {
        let size = viewport_size.max(Vec2::ONE);
        Vec2::new(2.0 * pixel.x / size.x - 1.0, 1.0 - 2.0 * pixel.y / size.y)
    }

    /// Gegenstück zu `pixel_to_device`.
    pub fn device_to_pixel(device: Vec2, viewport_size: Vec2) -> Vec2 {
        let size = viewport_size.max(Vec2::ONE);
        Vec2::new(
            (device.x + 1.0) * 0.5 * size.x,
            (1.0 - device.y) * 0.5 * size.y,
        )
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
