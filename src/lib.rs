//! Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PointerButton, ViewState};
pub use core::{
    BezierCurve, Camera2D, CatmullRomCurve, ControlPoints, Curve, CurveError, CurveKind,
    LagrangeCurve,
};
pub use shared::{EditorOptions, RenderScene};
