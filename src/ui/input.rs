//! Viewport-Input-Handling: Maus-Events und Tasten → AppIntent.
//!
//! Pixel-Positionen werden hier in normalisierte Device-Koordinaten
//! umgerechnet; Welt-Koordinaten kennt erst der App-Layer.

use super::keyboard;
use crate::app::{AppIntent, PointerButton};
use crate::core::Camera2D;
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Rechte Maustaste wurde im Viewport gedrückt und ist noch unten
    secondary_drag_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            secondary_drag_active: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));

        let (primary_pressed, secondary_pressed, secondary_released, pointer_pos, moving) =
            ui.input(|i| {
                (
                    i.pointer.button_pressed(egui::PointerButton::Primary),
                    i.pointer.button_pressed(egui::PointerButton::Secondary),
                    i.pointer.button_released(egui::PointerButton::Secondary),
                    i.pointer.interact_pos(),
                    i.pointer.is_moving(),
                )
            });

        let Some(pos) = pointer_pos else {
            return events;
        };
        let device_pos = pixel_to_device(pos, rect);
        let inside = rect.contains(pos);

        if primary_pressed && inside {
            events.push(AppIntent::PointerPressed {
                button: PointerButton::Primary,
                device_pos,
            });
        }

        if secondary_pressed && inside {
            self.secondary_drag_active = true;
            events.push(AppIntent::PointerPressed {
                button: PointerButton::Secondary,
                device_pos,
            });
        } else if self.secondary_drag_active && moving {
            events.push(AppIntent::PointerDragged { device_pos });
        }

        if secondary_released && self.secondary_drag_active {
            self.secondary_drag_active = false;
            events.push(AppIntent::PointerReleased {
                button: PointerButton::Secondary,
                device_pos,
            });
        }

        events
    }
}

/// Bildschirmposition → normalisierte Device-Koordinaten des Viewports.
pub(crate) fn pixel_to_device(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    let local = pos - rect.min;
    Camera2D::pixel_to_device(
        Vec2::new(local.x, local.y),
        Vec2::new(rect.width(), rect.height()),
    )
}
