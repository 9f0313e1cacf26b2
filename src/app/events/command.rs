use crate::core::CurveKind;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kontrollpunkt an Device-Position anhängen
    AddControlPoint { device_pos: Vec2 },
    /// Nächstgelegenen Kontrollpunkt greifen (erster Treffer im Pick-Radius)
    BeginPointDrag { device_pos: Vec2 },
    /// Gegriffenen Kontrollpunkt auf Device-Position verschieben
    MoveDraggedPoint { device_pos: Vec2 },
    /// Gegriffenen Kontrollpunkt loslassen
    EndPointDrag,
    /// Sichtbare Weltgröße mit Faktor skalieren
    ZoomCamera { factor: f32 },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    PanCamera { delta: Vec2 },
    /// Kamera auf Startzustand zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Aktive Kurvenart wechseln (verwirft alle Punkte)
    SetCurveKind { kind: CurveKind },
    /// Spannung additiv ändern
    AdjustTension { delta: f32 },
    /// Alle Kontrollpunkte verwerfen
    ClearCurve,
}
