//! Bézier-Kurve beliebigen Grades über alle Kontrollpunkte.

use super::{clamp_to_domain, require_points, ControlPoints, Curve, CurveKind};
use crate::core::error::CurveResult;
use glam::Vec2;

/// Bézier-Kurve: r(t) = Σ cps[i] · B(i, n, t), t ∈ [0, 1].
///
/// Der Grad wächst mit der Punktanzahl, jeder Punkt beeinflusst die ganze Kurve.
#[derive(Debug, Clone, Default)]
pub struct BezierCurve {
    points: ControlPoints,
}

impl BezierCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bernstein-Polynom B(i, n, t).
    ///
    /// Der Binomialkoeffizient wird als Produkt (n-j+1)/j aufgebaut statt
    /// über Fakultäten, damit er auch bei hohem Grad nicht überläuft.
    fn bernstein(i: usize, n: usize, t: f32) -> f32 {
        let mut choose = 1.0f32;
        for j in 1..=i {
            choose *= (n - j + 1) as f32 / j as f32;
        }
        choose * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
    }
}

impl Curve for BezierCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Bezier
    }

    fn control_points(&self) -> &ControlPoints {
        &self.points
    }

    fn push_control_point(&mut self, world_pos: Vec2) {
        self.points.push(world_pos);
    }

    fn set_control_point(&mut self, index: usize, world_pos: Vec2) -> CurveResult<()> {
        self.points.set(index, world_pos)
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn start(&self) -> f32 {
        0.0
    }

    fn end(&self) -> f32 {
        1.0
    }

    fn evaluate(&self, t: f32) -> CurveResult<Vec2> {
        require_points(&self.points, 1)?;
        let t = clamp_to_domain(t, self.start(), self.end())?;

        let cps = self.points.as_slice();
        let n = cps.len() - 1;
        Ok(cps
            .iter()
            .enumerate()
            .fold(Vec2::ZERO, |acc, (i, &p)| acc + p * Self::bernstein(i, n, t)))
    }
}
