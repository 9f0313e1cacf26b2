//! Geordnete Kontrollpunkt-Liste in Welt-Koordinaten.

use super::super::error::{CurveError, CurveResult};
use glam::Vec2;

/// Kontrollpunkte einer Kurve. Die Reihenfolge bestimmt den Kurvenverlauf.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPoints {
    points: Vec<Vec2>,
}

impl ControlPoints {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt an.
    pub fn push(&mut self, world_pos: Vec2) {
        self.points.push(world_pos);
    }

    /// Überschreibt den Punkt an `index`.
    pub fn set(&mut self, index: usize, world_pos: Vec2) -> CurveResult<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(CurveError::OutOfRange { index, len })?;
        *slot = world_pos;
        Ok(())
    }

    /// Erster Punkt mit Abstand `< radius` zu `world_pos` (Einfügereihenfolge).
    pub fn find_within(&self, world_pos: Vec2, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.distance(world_pos) < radius)
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_out_of_range() {
        let mut points = ControlPoints::new();
        points.push(Vec2::ZERO);
        let err = points.set(3, Vec2::ONE).unwrap_err();
        assert_eq!(err, CurveError::OutOfRange { index: 3, len: 1 });
        assert_eq!(points.get(0), Some(Vec2::ZERO));
    }

    #[test]
    fn test_find_within_returns_first_match_not_closest() {
        let mut points = ControlPoints::new();
        points.push(Vec2::new(0.08, 0.0));
        points.push(Vec2::new(0.01, 0.0));
        assert_eq!(points.find_within(Vec2::ZERO, 0.1), Some(0));
    }

    #[test]
    fn test_find_within_none_when_too_far() {
        let mut points = ControlPoints::new();
        points.push(Vec2::new(1.0, 1.0));
        assert_eq!(points.find_within(Vec2::new(1.0, 1.2), 0.1), None);
    }
}
