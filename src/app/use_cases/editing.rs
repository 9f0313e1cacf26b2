//! Use-Cases für Kontrollpunkt-Editing und Kurvenwechsel.

use crate::app::AppState;
use crate::core::{CurveError, CurveKind};
use glam::Vec2;

/// Hängt einen Kontrollpunkt an der Device-Position an.
pub fn add_control_point(state: &mut AppState, device_pos: Vec2) {
    let camera = &state.view.camera;
    state.editor.curve.add_control_point(device_pos, camera);
    log::debug!(
        "Kontrollpunkt {} hinzugefügt",
        state.editor.curve.control_points().len()
    );
}

/// Greift den ersten Kontrollpunkt im Pick-Radius.
///
/// Ohne Treffer wird ein eventuell noch gehaltener Punkt losgelassen.
pub fn begin_point_drag(state: &mut AppState, device_pos: Vec2) {
    let hit = state.editor.curve.find_nearest_point(
        device_pos,
        &state.view.camera,
        state.options.pick_radius_world,
    );
    state.editor.dragged_point = hit;
    match hit {
        Some(index) => log::debug!("Kontrollpunkt {} gegriffen", index),
        None => log::debug!("Kein Kontrollpunkt im Pick-Radius"),
    }
}

/// Verschiebt den gegriffenen Kontrollpunkt.
///
/// Ohne gegriffenen Punkt keine Operation. Ein ungültiger Index
/// (z.B. nach Kurvenwechsel) löst den Drag und liefert `OutOfRange`.
pub fn move_dragged_point(state: &mut AppState, device_pos: Vec2) -> Result<(), CurveError> {
    let Some(index) = state.editor.dragged_point else {
        return Ok(());
    };
    let camera = &state.view.camera;
    let result = state.editor.curve.move_point(index, device_pos, camera);
    if result.is_err() {
        state.editor.dragged_point = None;
    }
    result
}

/// Lässt den gegriffenen Kontrollpunkt los.
pub fn end_point_drag(state: &mut AppState) {
    state.editor.dragged_point = None;
}

/// Ersetzt die aktive Kurve durch eine leere Kurve der gewählten Art.
///
/// Kontrollpunkte werden nicht übernommen; die Kamera bleibt unverändert.
pub fn set_curve_kind(state: &mut AppState, kind: CurveKind) {
    state.editor.curve = kind.create();
    state.editor.dragged_point = None;
}

/// Ändert die Spannung der aktiven Kurve additiv (nur Catmull-Rom).
pub fn adjust_tension(state: &mut AppState, delta: f32) {
    state.editor.curve.set_tension(delta);
}

/// Verwirft alle Kontrollpunkte der aktiven Kurve.
pub fn clear_curve(state: &mut AppState) {
    state.editor.curve.clear();
    state.editor.dragged_point = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_points(kind: CurveKind, device_points: &[Vec2]) -> AppState {
        let mut state = AppState::new();
        set_curve_kind(&mut state, kind);
        for &p in device_points {
            add_control_point(&mut state, p);
        }
        state
    }

    #[test]
    fn add_control_point_converts_to_world() {
        let state = state_with_points(CurveKind::Bezier, &[Vec2::new(1.0, 1.0)]);

        let p = state.editor.curve.control_points().get(0).unwrap();
        assert_eq!(p, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn drag_moves_grabbed_point() {
        let mut state = state_with_points(
            CurveKind::Lagrange,
            &[Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0)],
        );

        begin_point_drag(&mut state, Vec2::new(0.5, 0.0));
        assert_eq!(state.editor.dragged_point, Some(1));

        move_dragged_point(&mut state, Vec2::new(0.5, 0.5)).unwrap();
        end_point_drag(&mut state);

        let p = state.editor.curve.control_points().get(1).unwrap();
        assert_eq!(p, Vec2::new(7.5, 7.5));
        assert_eq!(state.editor.dragged_point, None);
    }

    #[test]
    fn begin_drag_misses_far_points() {
        let mut state = state_with_points(CurveKind::Bezier, &[Vec2::ZERO]);

        begin_point_drag(&mut state, Vec2::new(0.1, 0.0));

        assert_eq!(state.editor.dragged_point, None);
    }

    #[test]
    fn move_without_drag_is_noop() {
        let mut state = state_with_points(CurveKind::Bezier, &[Vec2::ZERO]);

        move_dragged_point(&mut state, Vec2::ONE).unwrap();

        assert_eq!(state.editor.curve.control_points().get(0), Some(Vec2::ZERO));
    }

    #[test]
    fn stale_drag_index_is_out_of_range() {
        let mut state = state_with_points(CurveKind::Bezier, &[Vec2::ZERO]);
        state.editor.dragged_point = Some(4);

        let err = move_dragged_point(&mut state, Vec2::ONE).unwrap_err();

        assert!(err.is_out_of_range());
        assert_eq!(state.editor.dragged_point, None);
    }

    #[test]
    fn set_curve_kind_discards_points_but_keeps_camera() {
        let mut state = state_with_points(CurveKind::Bezier, &[Vec2::ZERO, Vec2::ONE]);
        state.view.camera.pan(Vec2::new(3.0, 0.0));
        state.editor.dragged_point = Some(0);

        set_curve_kind(&mut state, CurveKind::CatmullRom);

        assert_eq!(state.editor.curve_kind(), CurveKind::CatmullRom);
        assert_eq!(state.control_point_count(), 0);
        assert_eq!(state.editor.dragged_point, None);
        assert_eq!(state.view.camera.center, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn adjust_tension_accumulates_on_catmull_rom() {
        let mut state = state_with_points(CurveKind::CatmullRom, &[]);

        adjust_tension(&mut state, 0.1);
        adjust_tension(&mut state, 0.1);
        adjust_tension(&mut state, -0.1);

        let tension = state.editor.curve.tension().unwrap();
        assert!((tension - 0.1).abs() < 1e-6);
    }

    #[test]
    fn clear_curve_keeps_kind() {
        let mut state = state_with_points(CurveKind::Lagrange, &[Vec2::ZERO, Vec2::ONE]);

        clear_curve(&mut state);

        assert_eq!(state.control_point_count(), 0);
        assert_eq!(state.editor.curve_kind(), CurveKind::Lagrange);
    }
}
