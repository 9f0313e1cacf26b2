//! Core-Domänentypen: Kamera, Kontrollpunkte, Kurven und Fehler.

pub mod camera;
/// Kurven-Mathematik (Bézier, Lagrange, Catmull-Rom)
///
/// - `Curve`: gemeinsame Schnittstelle (Editing + Auswertung `r(t)`)
/// - `ControlPoints`: geordnete Punktliste in Welt-Koordinaten
/// - `knots`: Chord-Length-Parametrisierung
pub mod curve;
pub mod error;

pub use camera::Camera2D;
pub use curve::{BezierCurve, CatmullRomCurve, ControlPoints, Curve, CurveKind, LagrangeCurve};
pub use error::{CurveError, CurveResult};
