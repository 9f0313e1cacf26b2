//! Catmull-Rom-Spline mit Chord-Length-Knoten und einstellbarer Spannung.

use super::knots::{chord_length_knots, ensure_strictly_increasing};
use super::{clamp_to_domain, require_points, ControlPoints, Curve, CurveKind};
use crate::core::error::{CurveError, CurveResult};
use glam::Vec2;

/// Catmull-Rom-Spline: stückweise kubische Hermite-Interpolation.
///
/// `knots` enthält einen Knoten pro Kontrollpunkt plus einen abschließenden
/// Knoten 1.0. Ausgewertet werden nur die ersten `len()` Knoten; an den
/// Rändern wird die fehlende Nachbar-Sehne als Null angenommen.
#[derive(Debug, Clone, Default)]
pub struct CatmullRomCurve {
    points: ControlPoints,
    knots: Vec<f32>,
    tension: f32,
}

impl CatmullRomCurve {
    pub fn new() -> Self {
        Self::default()
    }

    fn recompute_knots(&mut self) {
        self.knots = chord_length_knots(self.points.as_slice());
        if !self.knots.is_empty() {
            self.knots.push(1.0);
        }
    }

    /// Knoten, die zu echten Kontrollpunkten gehören (ohne abschließende 1.0).
    fn point_knots(&self) -> &[f32] {
        &self.knots[..self.points.len().min(self.knots.len())]
    }

    /// Sehnen-Geschwindigkeit (cps[j+1] - cps[j]) / (k[j+1] - k[j]).
    fn chord_velocity(cps: &[Vec2], knots: &[f32], j: usize) -> Vec2 {
        (cps[j + 1] - cps[j]) / (knots[j + 1] - knots[j])
    }

    /// Kubisches Hermite-Segment von (p0, v0, t0) nach (p1, v1, t1).
    fn hermite(p0: Vec2, v0: Vec2, t0: f32, p1: Vec2, v1: Vec2, t1: f32, t: f32) -> Vec2 {
        let dt = t1 - t0;
        let a0 = p0;
        let a1 = v0;
        let a2 = (3.0 * (p1 - p0)) / (dt * dt) - (v1 + 2.0 * v0) / dt;
        let a3 = (2.0 * (p0 - p1)) / (dt * dt * dt) + (v1 + v0) / (dt * dt);
        let s = t - t0;
        ((a3 * s + a2) * s + a1) * s + a0
    }
}

impl Curve for CatmullRomCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::CatmullRom
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

    /// Additive Spannung ohne Begrenzung. Werte außerhalb [-1, 1] kehren die
    /// Tangenten um bzw. überzeichnen sie und werden nur protokolliert.
    fn set_tension(&mut self, delta: f32) {
        self.tension += delta;
        if !(-1.0..=1.0).contains(&self.tension) {
            log::warn!(
                "Catmull-Rom-Spannung {:.2} außerhalb von [-1, 1]",
                self.tension
            );
        }
    }

    fn tension(&self) -> Option<f32> {
        Some(self.tension)
    }

    fn start(&self) -> f32 {
        self.knots.first().copied().unwrap_or(0.0)
    }

    fn end(&self) -> f32 {
        self.point_knots().last().copied().unwrap_or(0.0)
    }

    fn evaluate(&self, t: f32) -> CurveResult<Vec2> {
        require_points(&self.points, 2)?;
        let knots = self.point_knots();
        ensure_strictly_increasing(knots)?;
        let t = clamp_to_domain(t, self.start(), self.end())?;

        let cps = self.points.as_slice();
        let n = cps.len();
        let scale = (1.0 - self.tension) / 2.0;

        let i = (0..n - 1)
            .find(|&i| knots[i] <= t && t <= knots[i + 1])
            .ok_or(CurveError::ParameterOutOfDomain {
                t,
                start: self.start(),
                end: self.end(),
            })?;

        let current = Self::chord_velocity(cps, knots, i);
        let incoming = if i > 0 {
            Self::chord_velocity(cps, knots, i - 1)
        } else {
            Vec2::ZERO
        };
        let outgoing = if i + 2 < n {
            Self::chord_velocity(cps, knots, i + 1)
        } else {
            Vec2::ZERO
        };

        let v0 = (current + incoming) * scale;
        let v1 = (outgoing + current) * scale;

        Ok(Self::hermite(
            cps[i],
            v0,
            knots[i],
            cps[i + 1],
            v1,
            knots[i + 1],
            t,
        ))
    }
}
