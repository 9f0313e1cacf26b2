//! Handler für Kontrollpunkt-Editing, Kurvenart und Spannung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveKind;

/// Fügt einen Kontrollpunkt an der Device-Position hinzu.
pub fn add_control_point(state: &mut AppState, device_pos: glam::Vec2) {
    use_cases::editing::add_control_point(state, device_pos);
}

/// Greift den ersten Kontrollpunkt im Pick-Radius.
pub fn begin_point_drag(state: &mut AppState, device_pos: glam::Vec2) {
    use_cases::editing::begin_point_drag(state, device_pos);
}

/// Verschiebt den gegriffenen Kontrollpunkt und propagiert Bereichsfehler.
pub fn move_dragged_point(state: &mut AppState, device_pos: glam::Vec2) -> anyhow::Result<()> {
    use_cases::editing::move_dragged_point(state, device_pos)?;
    Ok(())
}

/// Lässt den gegriffenen Kontrollpunkt los.
pub fn end_point_drag(state: &mut AppState) {
    use_cases::editing::end_point_drag(state);
}

/// Wechselt die aktive Kurvenart.
pub fn set_curve_kind(state: &mut AppState, kind: CurveKind) {
    use_cases::editing::set_curve_kind(state, kind);
    log::info!("Kurvenart: {}", kind.name());
}

/// Ändert die Spannung der aktiven Kurve.
pub fn adjust_tension(state: &mut AppState, delta: f32) {
    use_cases::editing::adjust_tension(state, delta);
    match state.editor.curve.tension() {
        Some(tension) => log::info!("Spannung {:+.1} → {:.2}", delta, tension),
        None => log::info!(
            "Spannung wird von {} nicht unterstützt",
            state.editor.curve_kind().name()
        ),
    }
}

/// Verwirft alle Kontrollpunkte der aktiven Kurve.
pub fn clear_curve(state: &mut AppState) {
    use_cases::editing::clear_curve(state);
    log::info!("Kurve geleert");
}
