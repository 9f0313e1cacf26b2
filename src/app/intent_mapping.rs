//! Übersetzt UI-Intents in mutierende App-Commands.

use super::events::PointerButton;
use super::{AppCommand, AppIntent, AppState};
use crate::core::CurveKind;
use glam::Vec2;

/// Mappt einen Intent auf null oder mehr Commands.
///
/// Tastenbelegung: `Z`/`z` Zoom, `P`/`p` Pan, `b`/`l`/`c` Kurvenart,
/// `T`/`t` Spannung, `r` Kamera-Reset, `x` Kurve leeren.
/// Unbekannte Tasten erzeugen keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let options = &state.options;

    match intent {
        AppIntent::PointerPressed {
            button: PointerButton::Primary,
            device_pos,
        } => vec![AppCommand::AddControlPoint { device_pos }],
        AppIntent::PointerPressed {
            button: PointerButton::Secondary,
            device_pos,
        } => vec![AppCommand::BeginPointDrag { device_pos }],
        AppIntent::PointerReleased {
            button: PointerButton::Secondary,
            ..
        } => vec![AppCommand::EndPointDrag],
        AppIntent::PointerReleased {
            button: PointerButton::Primary,
            ..
        } => vec![],
        AppIntent::PointerDragged { device_pos } => {
            if state.editor.dragged_point.is_some() {
                vec![AppCommand::MoveDraggedPoint { device_pos }]
            } else {
                vec![]
            }
        }

        AppIntent::KeyPressed { key } => match key {
            'Z' => vec![AppCommand::ZoomCamera {
                factor: options.camera_zoom_step,
            }],
            'z' => vec![AppCommand::ZoomCamera {
                factor: 1.0 / options.camera_zoom_step,
            }],
            'P' => vec![AppCommand::PanCamera {
                delta: Vec2::new(options.camera_pan_step, 0.0),
            }],
            'p' => vec![AppCommand::PanCamera {
                delta: Vec2::new(-options.camera_pan_step, 0.0),
            }],
            'b' => vec![AppCommand::SetCurveKind {
                kind: CurveKind::Bezier,
            }],
            'l' => vec![AppCommand::SetCurveKind {
                kind: CurveKind::Lagrange,
            }],
            'c' => vec![AppCommand::SetCurveKind {
                kind: CurveKind::CatmullRom,
            }],
            'T' => vec![AppCommand::AdjustTension {
                delta: options.tension_step,
            }],
            't' => vec![AppCommand::AdjustTension {
                delta: -options.tension_step,
            }],
            'r' => vec![AppCommand::ResetCamera],
            'x' => vec![AppCommand::EndPointDrag, AppCommand::ClearCurve],
            _ => vec![],
        },

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ClearCurveRequested => vec![AppCommand::EndPointDrag, AppCommand::ClearCurve],
        AppIntent::CurveKindRequested { kind } => vec![AppCommand::SetCurveKind { kind }],
    }
}
