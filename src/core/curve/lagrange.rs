//! Lagrange-Interpolation durch alle Kontrollpunkte.

use super::knots::{chord_length_knots, ensure_strictly_increasing};
use super::{clamp_to_domain, require_points, ControlPoints, Curve, CurveKind};
use crate::core::error::CurveResult;
use glam::Vec2;

/// Lagrange-Kurve mit einem Chord-Length-Knoten pro Kontrollpunkt.
#[derive(Debug, Clone, Default)]
pub struct LagrangeCurve {
    points: ControlPoints,
    knots: Vec<f32>,
}

impl LagrangeCurve {
    pub fn new() -> Self {
        Self::default()
    }

    fn recompute_knots(&mut self) {
        self.knots = chord_length_knots(self.points.as_slice());
    }

    /// Basis-Polynom L_i(t) = Π_{j≠i} (t - k_j) / (k_i - k_j).
    fn basis(&self, i: usize, t: f32) -> f32 {
        let k_i = self.knots[i];
        self.knots
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(1.0f32, |acc, (_, &k_j)| acc * (t - k_j) / (k_i - k_j))
    }
}

impl Curve for LagrangeCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Lagrange
    }

    fn control_points(&self) -> &ControlPoints {
        &self.points
    }

    fn push_control_point(&mut self, world_pos: Vec2) {
        self.points.push(world_pos);
        self.recompute_knots();
    }

    fn set_control_point(&mut self, index: usize, world_pos: Vec2) -> CurveResult<()> {
        self.points.set(index, world_pos)?;
        self.recompute_knots();
        Ok(())
    }

    fn clear(&mut self) {
        self.points.clear();
        self.knots.clear();
    }

    fn knots(&self) -> &[f32] {
        &self.knots
    }

    fn start(&self) -> f32 {
        0.0
    }

    fn end(&self) -> f32 {
        self.knots.last().copied().unwrap_or(0.0)
    }

    fn evaluate(&self, t: f32) -> CurveResult<Vec2> {
        require_points(&self.points, 1)?;
        ensure_strictly_increasing(&self.knots)?;
        let t = clamp_to_domain(t, self.start(), self.end())?;

        Ok(self
            .points
            .as_slice()
            .iter()
            .enumerate()
            .fold(Vec2::ZERO, |acc, (i, &p)| acc + p * self.basis(i, t)))
    }
}
