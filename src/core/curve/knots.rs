//! Chord-Length-Parametrisierung der Knoten.

use super::super::error::{CurveError, CurveResult};
use glam::Vec2;

/// Berechnet einen Knoten pro Kontrollpunkt aus der kumulierten Sehnenlänge,
/// normalisiert auf [0, 1]. Der erste Knoten ist immer 0, der letzte 1.
///
/// Bei Gesamtlänge 0 (ein Punkt oder alle Punkte identisch) sind alle Knoten 0.
pub fn chord_length_knots(points: &[Vec2]) -> Vec<f32> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut cumulative = Vec::with_capacity(points.len());
    let mut distance = 0.0f32;
    cumulative.push(0.0);
    for pair in points.windows(2) {
        distance += pair[0].distance(pair[1]);
        cumulative.push(distance);
    }

    let total = distance;
    if total <= f32::EPSILON {
        return vec![0.0; points.len()];
    }
    // Gleiche Summationsreihenfolge wie `total` → letzter Knoten exakt 1.0
    cumulative.into_iter().map(|d| d / total).collect()
}

/// Prüft, dass aufeinanderfolgende Knoten echt ansteigen.
///
/// Gleiche Knoten entstehen durch zusammenfallende Nachbarpunkte und würden
/// in der Auswertung durch Null teilen.
pub(crate) fn ensure_strictly_increasing(knots: &[f32]) -> CurveResult<()> {
    match knots.windows(2).position(|k| k[1] - k[0] <= 0.0) {
        Some(i) => Err(CurveError::DegenerateInput(format!(
            "Kontrollpunkte {} und {} fallen zusammen (Knoten {})",
            i,
            i + 1,
            knots[i]
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_knots_empty_and_single() {
        assert!(chord_length_knots(&[]).is_empty());
        assert_eq!(chord_length_knots(&[Vec2::new(3.0, 4.0)]), vec![0.0]);
    }

    #[test]
    fn test_knots_proportional_to_chord_length() {
        let pts = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 3.0)];
        let knots = chord_length_knots(&pts);
        assert_eq!(knots.len(), 3);
        assert_eq!(knots[0], 0.0);
        assert_relative_eq!(knots[1], 0.25);
        assert_eq!(knots[2], 1.0);
    }

    #[test]
    fn test_knots_monotonic() {
        let pts = [
            Vec2::new(-2.0, 1.0),
            Vec2::new(0.5, 0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(4.0, -3.0),
            Vec2::new(1.0, 1.0),
        ];
        let knots = chord_length_knots(&pts);
        assert_eq!(knots[0], 0.0);
        assert!(knots.windows(2).all(|k| k[0] <= k[1]));
        assert_eq!(*knots.last().unwrap(), 1.0);
    }

    #[test]
    fn test_knots_all_identical_points_are_zero() {
        let pts = [Vec2::ONE, Vec2::ONE, Vec2::ONE];
        assert_eq!(chord_length_knots(&pts), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_ensure_strictly_increasing_detects_duplicates() {
        assert!(ensure_strictly_increasing(&[0.0, 0.5, 1.0]).is_ok());
        let err = ensure_strictly_increasing(&[0.0, 0.5, 0.5, 1.0]).unwrap_err();
        assert!(err.is_degenerate());
    }
}
