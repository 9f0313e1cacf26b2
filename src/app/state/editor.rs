use crate::core::{Curve, CurveKind};

/// Zustand der aktiven Kurve und des laufenden Punkt-Drags
pub struct EditorState {
    /// Aktive Kurve; besitzt Kontrollpunkte und Knoten exklusiv
    pub curve: Box<dyn Curve>,
    /// Index des gegriffenen Kontrollpunkts (Rechtsklick-Drag)
    pub dragged_point: Option<usize>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt den Startzustand (leere Bézier-Kurve).
    pub fn new() -> Self {
        Self::with_kind(CurveKind::default())
    }

    /// Erstellt einen Zustand mit leerer Kurve der gegebenen Art.
    pub fn with_kind(kind: CurveKind) -> Self {
        Self {
            curve: kind.create(),
            dragged_point: None,
        }
    }

    /// Art der aktiven Kurve
    pub fn curve_kind(&self) -> CurveKind {
        self.curve.kind()
    }
}
