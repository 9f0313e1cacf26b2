//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Editing ===
            AppCommand::AddControlPoint { device_pos } => {
                handlers::editing::add_control_point(state, device_pos)
            }
            AppCommand::BeginPointDrag { device_pos } => {
                handlers::editing::begin_point_drag(state, device_pos)
            }
            AppCommand::MoveDraggedPoint { device_pos } => {
                handlers::editing::move_dragged_point(state, device_pos)?
            }
            AppCommand::EndPointDrag => handlers::editing::end_point_drag(state),
            AppCommand::ClearCurve => handlers::editing::clear_curve(state),

            // === Kurvenart & Spannung ===
            AppCommand::SetCurveKind { kind } => handlers::editing::set_curve_kind(state, kind),
            AppCommand::AdjustTension { delta } => handlers::editing::adjust_tension(state, delta),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
