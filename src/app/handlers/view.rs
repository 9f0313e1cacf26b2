//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf die Startansicht zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
    log::info!("Kamera zurückgesetzt");
}

/// Zoomt um einen Faktor (`> 1` zeigt mehr Welt).
pub fn zoom(state: &mut AppState, factor: f32) {
    use_cases::camera::zoom(state, factor);
    log::info!(
        "Zoom ×{:.3} → Weltgröße {:.2} × {:.2}",
        factor,
        state.view.camera.extent.x,
        state.view.camera.extent.y
    );
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
    log::info!(
        "Pan ({:+.1}, {:+.1}) → Zentrum ({:.1}, {:.1})",
        delta.x,
        delta.y,
        state.view.camera.center.x,
        state.view.camera.center.y
    );
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize_viewport(state, size);
}
