//! Trait-basiertes Kurven-System: gemeinsame Kontrollpunkt-Verwaltung und
//! parametrische Auswertung `r(t)` über `[start, end]`.
//!
//! Jede Kurvenart implementiert den `Curve`-Trait. Die Kontrollpunkte liegen
//! in einem gemeinsamen `ControlPoints`-Baustein, den jede Variante per
//! Komposition besitzt. Device→Welt-Umrechnung erfolgt über die übergebene Kamera.

mod bezier;
mod catmull_rom;
mod control_points;
pub mod knots;
mod lagrange;

pub use bezier::BezierCurve;
pub use catmull_rom::CatmullRomCurve;
pub use control_points::ControlPoints;
pub use lagrange::LagrangeCurve;

use super::camera::Camera2D;
use super::error::{CurveError, CurveResult};
use glam::Vec2;

/// Toleranz, mit der `t` knapp außerhalb von [start, end] noch akzeptiert
/// und in den Definitionsbereich geklemmt wird.
pub const DOMAIN_EPSILON: f32 = 1e-5;

/// Die drei verfügbaren Kurvenarten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveKind {
    /// Bézier-Kurve über alle Kontrollpunkte (Grad = Anzahl - 1)
    #[default]
    Bezier,
    /// Lagrange-Interpolation mit Chord-Length-Knoten
    Lagrange,
    /// Catmull-Rom-Spline mit Spannung
    CatmullRom,
}

impl CurveKind {
    /// Anzeigename der Kurvenart.
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Bezier => "bezier",
            CurveKind::Lagrange => "lagrange",
            CurveKind::CatmullRom => "catmull-rom",
        }
    }

    /// Erzeugt eine leere Kurve dieser Art.
    pub fn create(self) -> Box<dyn Curve> {
        match self {
            CurveKind::Bezier => Box::new(BezierCurve::new()),
            CurveKind::Lagrange => Box::new(LagrangeCurve::new()),
            CurveKind::CatmullRom => Box::new(CatmullRomCurve::new()),
        }
    }
}

/// Schnittstelle aller Kurvenarten.
///
/// Pflicht-Methoden arbeiten in Welt-Koordinaten; die bereitgestellten
/// Methoden (`add_control_point`, `find_nearest_point`, `move_point`)
/// nehmen Device-Koordinaten entgegen und rechnen über die Kamera um.
pub trait Curve {
    /// Art der Kurve
    fn kind(&self) -> CurveKind;

    /// Read-only Sicht auf die Kontrollpunkte
    fn control_points(&self) -> &ControlPoints;

    /// Hängt einen Punkt (Welt-Koordinaten) an und berechnet abhängige Knoten neu.
    fn push_control_point(&mut self, world_pos: Vec2);

    /// Überschreibt den Punkt an `index` (Welt-Koordinaten).
    fn set_control_point(&mut self, index: usize, world_pos: Vec2) -> CurveResult<()>;

    /// Verwirft alle Kontrollpunkte.
    fn clear(&mut self);

    /// Knoten-Parameter, falls die Kurve welche verwendet.
    fn knots(&self) -> &[f32] {
        &[]
    }

    /// Ändert die Spannung additiv. Standard: keine Wirkung.
    fn set_tension(&mut self, _delta: f32) {}

    /// Aktuelle Spannung, falls unterstützt.
    fn tension(&self) -> Option<f32> {
        None
    }

    /// Anfang des Parameterbereichs
    fn start(&self) -> f32;

    /// Ende des Parameterbereichs
    fn end(&self) -> f32;

    /// Berechnet `r(t)` für `t ∈ [start(), end()]`.
    fn evaluate(&self, t: f32) -> CurveResult<Vec2>;

    /// Fügt einen Kontrollpunkt an der Device-Position hinzu.
    fn add_control_point(&mut self, device_pos: Vec2, camera: &Camera2D) {
        self.push_control_point(camera.device_to_world(device_pos));
    }

    /// Index des ersten Kontrollpunkts innerhalb von `radius` Welt-Einheiten.
    ///
    /// Erster Treffer in Einfügereihenfolge, nicht der nächstgelegene.
    fn find_nearest_point(&self, device_pos: Vec2, camera: &Camera2D, radius: f32) -> Option<usize> {
        self.control_points()
            .find_within(camera.device_to_world(device_pos), radius)
    }

    /// Verschiebt den Kontrollpunkt `index` auf die Device-Position.
    fn move_point(&mut self, index: usize, device_pos: Vec2, camera: &Camera2D) -> CurveResult<()> {
        self.set_control_point(index, camera.device_to_world(device_pos))
    }

    /// Wertet `r(t)` an `count` gleichmäßig verteilten Parametern aus.
    ///
    /// Benötigt mindestens zwei Kontrollpunkte.
    fn sample(&self, count: usize) -> CurveResult<Vec<Vec2>> {
        let actual = self.control_points().len();
        if actual < 2 {
            return Err(CurveError::TooFewPoints {
                required: 2,
                actual,
            });
        }

        let (start, end) = (self.start(), self.end());
        match count {
            0 => Ok(Vec::new()),
            1 => Ok(vec![self.evaluate(start)?]),
            _ => (0..count)
                .map(|i| {
                    let t_normalized = i as f32 / (count - 1) as f32;
                    self.evaluate(start + (end - start) * t_normalized)
                })
                .collect(),
        }
    }
}

/// Klemmt `t` in [start, end], sofern es höchstens `DOMAIN_EPSILON` außerhalb liegt.
pub(crate) fn clamp_to_domain(t: f32, start: f32, end: f32) -> CurveResult<f32> {
    if !t.is_finite() || t < start - DOMAIN_EPSILON || t > end + DOMAIN_EPSILON {
        return Err(CurveError::ParameterOutOfDomain { t, start, end });
    }
    Ok(t.clamp(start, end))
}

/// Prüft die Mindestanzahl an Kontrollpunkten.
pub(crate) fn require_points(points: &ControlPoints, required: usize) -> CurveResult<()> {
    if points.len() < required {
        return Err(CurveError::TooFewPoints {
            required,
            actual: points.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
