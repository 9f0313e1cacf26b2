//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState, CurveKind};

const CURVE_KINDS: [(CurveKind, &str); 3] = [
    (CurveKind::Bezier, "Bézier (b)"),
    (CurveKind::Lagrange, "Lagrange (l)"),
    (CurveKind::CatmullRom, "Catmull-Rom (c)"),
];

/// Rendert die Status-Bar und gibt erzeugte Events zurück.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active = state.editor.curve_kind();
            for (kind, label) in CURVE_KINDS {
                if ui.selectable_label(active == kind, label).clicked() && active != kind {
                    events.push(AppIntent::CurveKindRequested { kind });
                }
            }

            ui.separator();

            if ui.button("Leeren (x)").clicked() {
                events.push(AppIntent::ClearCurveRequested);
            }
            if ui.button("Kamera (r)").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }
        });

        ui.horizontal(|ui| {
            ui.label(curve_summary(state));
            ui.separator();
            ui.label(view_summary(state));
            ui.separator();
            ui.label(format!("Befehle: {}", state.command_log.total()));
            ui.separator();
            ui.label("Z/z Zoom · P/p Pan · T/t Spannung");
        });
    });

    events
}

fn curve_summary(state: &AppState) -> String {
    let curve = &state.editor.curve;
    let mut text = format!(
        "Kurve: {} | Punkte: {}",
        curve.kind().name(),
        curve.control_points().len()
    );
    if let Some(tension) = curve.tension() {
        text.push_str(&format!(" | Spannung: {:.2}", tension));
    }
    text
}

fn view_summary(state: &AppState) -> String {
    let camera = &state.view.camera;
    let [width, height] = state.view.viewport_size;
    format!(
        "Zentrum: ({:.1}, {:.1}) | Welt: {:.1} × {:.1} | Viewport: {:.0} × {:.0} px",
        camera.center.x, camera.center.y, camera.extent.x, camera.extent.y, width, height
    )
}
