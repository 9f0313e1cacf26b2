use crate::core::CurveKind;
use glam::Vec2;

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Kontrollpunkt setzen
    Primary,
    /// Rechte Taste: Kontrollpunkt greifen und ziehen
    Secondary,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen liegen in normalisierten Device-Koordinaten (-1 bis 1).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maustaste gedrückt
    PointerPressed {
        button: PointerButton,
        device_pos: Vec2,
    },
    /// Maustaste losgelassen
    PointerReleased {
        button: PointerButton,
        device_pos: Vec2,
    },
    /// Maus mit gedrückter Taste bewegt
    PointerDragged { device_pos: Vec2 },
    /// Zeichen-Taste gedrückt (Groß-/Kleinschreibung ist relevant)
    KeyPressed { key: char },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera auf Startzustand zurücksetzen
    ResetCameraRequested,
    /// Alle Kontrollpunkte der aktiven Kurve verwerfen
    ClearCurveRequested,
    /// Kurvenart wechseln (z.B. aus einem Menü)
    CurveKindRequested { kind: CurveKind },
}
