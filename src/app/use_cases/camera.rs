//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::Camera2D;

/// Setzt die Kamera auf die konfigurierte Startansicht zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D::with_extent(state.options.camera_extent());
}

/// Skaliert die sichtbare Weltgröße (`factor > 1` zeigt mehr Welt).
pub fn zoom(state: &mut AppState, factor: f32) {
    state.view.camera.zoom(factor);
}

/// Verschiebt die Kamera um ein Delta in Welt-Einheiten.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn resize_viewport(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn reset_camera_restores_configured_extent() {
        let mut state = AppState::new();
        state.options.camera_world_size = [40.0, 20.0];
        state.view.camera.pan(Vec2::new(100.0, 200.0));
        state.view.camera.zoom(5.0);

        reset_camera(&mut state);

        assert_eq!(state.view.camera.center, Vec2::ZERO);
        assert_eq!(state.view.camera.extent, Vec2::new(40.0, 20.0));
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.extent;

        zoom(&mut state, 1.1);
        zoom(&mut state, 1.0 / 1.1);

        assert!((state.view.camera.extent - original).length() < 1e-4);
    }

    #[test]
    fn pan_moves_camera_center() {
        let mut state = AppState::new();

        pan(&mut state, Vec2::new(10.0, -5.0));

        assert_eq!(state.view.camera.center, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn resize_viewport_stores_size() {
        let mut state = AppState::new();

        resize_viewport(&mut state, [800.0, 600.0]);

        assert_eq!(state.view.viewport_size, [800.0, 600.0]);
    }
}
