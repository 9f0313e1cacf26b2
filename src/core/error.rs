//! Fehlertypen für Kurven-Editing und -Auswertung.

use thiserror::Error;

/// Fehler der Kurven-Operationen.
///
/// Zwei Klassen: Bereichsfehler (`OutOfRange`, `ParameterOutOfDomain`) und
/// entartete Eingaben (`DegenerateInput`, `TooFewPoints`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Kontrollpunkt-Index existiert nicht
    #[error("Kontrollpunkt-Index {index} außerhalb des Bereichs (Anzahl: {len})")]
    OutOfRange { index: usize, len: usize },
    /// Parameter liegt außerhalb von [start, end]
    #[error("Parameter t={t} außerhalb des Definitionsbereichs [{start}, {end}]")]
    ParameterOutOfDomain { t: f32, start: f32, end: f32 },
    /// Zu wenige Kontrollpunkte für die Auswertung
    #[error("Mindestens {required} Kontrollpunkte nötig, vorhanden: {actual}")]
    TooFewPoints { required: usize, actual: usize },
    /// Zusammenfallende Punkte bzw. doppelte Knoten (Division durch Null)
    #[error("Entartete Eingabe: {0}")]
    DegenerateInput(String),
}

impl CurveError {
    /// Gehört der Fehler zur Klasse der Bereichsfehler?
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            CurveError::OutOfRange { .. } | CurveError::ParameterOutOfDomain { .. }
        )
    }

    /// Gehört der Fehler zur Klasse der entarteten Eingaben?
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            CurveError::TooFewPoints { .. } | CurveError::DegenerateInput(_)
        )
    }
}

/// Ergebnis-Typ der Kurven-Operationen.
pub type CurveResult<T> = Result<T, CurveError>;
