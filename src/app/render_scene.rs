//! Builder für RenderScene aus dem AppState.

use super::AppState;
use crate::shared::RenderScene;

/// Baut die RenderScene aus dem aktuellen AppState.
///
/// Schlägt das Abtasten fehl (zu wenige oder zusammenfallende Punkte),
/// werden nur die Kontrollpunkte gezeichnet.
pub fn build(state: &AppState) -> RenderScene {
    let curve = &state.editor.curve;
    let control_points = curve.control_points().as_slice().to_vec();

    let polyline = if control_points.len() >= 2 {
        curve
            .sample(state.options.sample_count)
            .unwrap_or_else(|e| {
                log::warn!("Kurve nicht darstellbar: {}", e);
                Vec::new()
            })
    } else {
        Vec::new()
    };

    RenderScene {
        control_points,
        polyline,
        view_projection: state.view.camera.view_projection(),
        point_color: state.options.point_color,
        curve_color: state.options.curve_color,
        background_color: state.options.background_color,
        point_size_px: state.options.point_size_px,
        line_width_px: state.options.line_width_px,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveKind;
    use glam::Vec2;

    #[test]
    fn single_point_has_no_polyline() {
        let mut state = AppState::new();
        state.editor.curve.push_control_point(Vec2::ZERO);

        let scene = build(&state);

        assert_eq!(scene.control_points.len(), 1);
        assert!(!scene.has_curve());
    }

    #[test]
    fn polyline_uses_configured_sample_count() {
        let mut state = AppState::new();
        state.options.sample_count = 32;
        state.editor.curve.push_control_point(Vec2::ZERO);
        state.editor.curve.push_control_point(Vec2::ONE);

        let scene = build(&state);

        assert_eq!(scene.polyline.len(), 32);
        assert_eq!(scene.view_projection, state.view.camera.view_projection());
    }

    #[test]
    fn degenerate_curve_draws_points_only() {
        let mut state = AppState::new();
        state.editor.curve = CurveKind::Lagrange.create();
        state.editor.curve.push_control_point(Vec2::ONE);
        state.editor.curve.push_control_point(Vec2::ONE);

        let scene = build(&state);

        assert_eq!(scene.control_points.len(), 2);
        assert!(scene.polyline.is_empty());
    }
}
