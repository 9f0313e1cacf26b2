//! Keyboard-Shortcuts für den Viewport.
//!
//! Tasten werden als Zeichen weitergereicht, damit Groß- und
//! Kleinschreibung (`Z`/`z`, `P`/`p`, `T`/`t`) erhalten bleibt.

use crate::app::AppIntent;

/// Sammelt getippte Zeichen und gibt je Zeichen einen `KeyPressed`-Intent zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Text(text) => Some(text.chars()),
                _ => None,
            })
            .flatten()
            .map(|key| AppIntent::KeyPressed { key })
            .collect()
    })
}
