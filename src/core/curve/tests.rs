use super::*;
use approx::assert_relative_eq;

const ALL_KINDS: [CurveKind; 3] = [CurveKind::Bezier, CurveKind::Lagrange, CurveKind::CatmullRom];

fn curve_with(kind: CurveKind, points: &[Vec2]) -> Box<dyn Curve> {
    let mut curve = kind.create();
    for &p in points {
        curve.push_control_point(p);
    }
    curve
}

// ── Endpunkt-Interpolation ──

#[test]
fn test_bezier_two_points_exact_endpoints() {
    let curve = curve_with(CurveKind::Bezier, &[Vec2::ZERO, Vec2::ONE]);
    assert_eq!(curve.evaluate(0.0).unwrap(), Vec2::ZERO);
    assert_eq!(curve.evaluate(1.0).unwrap(), Vec2::ONE);
}

#[test]
fn test_all_kinds_interpolate_first_and_last_point() {
    let pts = [
        Vec2::new(-3.0, 1.0),
        Vec2::new(-1.0, 4.0),
        Vec2::new(2.0, 2.5),
        Vec2::new(5.0, -1.0),
        Vec2::new(6.0, 3.0),
    ];
    for kind in ALL_KINDS {
        for count in 2..=pts.len() {
            let curve = curve_with(kind, &pts[..count]);
            let first = curve.evaluate(curve.start()).unwrap();
            let last = curve.evaluate(curve.end()).unwrap();
            assert_relative_eq!(first.x, pts[0].x, epsilon = 1e-4);
            assert_relative_eq!(first.y, pts[0].y, epsilon = 1e-4);
            assert_relative_eq!(last.x, pts[count - 1].x, epsilon = 1e-4);
            assert_relative_eq!(last.y, pts[count - 1].y, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_knotted_kinds_start_at_zero_and_are_monotonic() {
    let pts = [
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(2.5, 3.0),
        Vec2::new(-1.0, 2.0),
    ];
    for kind in [CurveKind::Lagrange, CurveKind::CatmullRom] {
        let curve = curve_with(kind, &pts);
        let knots = curve.knots();
        assert_eq!(knots[0], 0.0);
        assert!(knots.windows(2).all(|k| k[0] <= k[1]), "{kind:?}: {knots:?}");
    }
    assert!(curve_with(CurveKind::Bezier, &pts).knots().is_empty());
}

// ── Sampling ──

#[test]
fn test_sample_count_and_endpoints() {
    let pts = [Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(3.0, 0.0)];
    for kind in ALL_KINDS {
        let curve = curve_with(kind, &pts);
        let samples = curve.sample(100).unwrap();
        assert_eq!(samples.len(), 100);
        assert_relative_eq!(samples[0].x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(samples[99].x, 3.0, epsilon = 1e-4);
        assert_relative_eq!(samples[99].y, 0.0, epsilon = 1e-4);
    }
}

#[test]
fn test_sample_requires_two_points() {
    for kind in ALL_KINDS {
        let curve = curve_with(kind, &[Vec2::ONE]);
        assert_eq!(
            curve.sample(10),
            Err(CurveError::TooFewPoints {
                required: 2,
                actual: 1
            })
        );
    }
}

#[test]
fn test_sample_degenerate_counts() {
    let curve = curve_with(CurveKind::Bezier, &[Vec2::ZERO, Vec2::ONE]);
    assert!(curve.sample(0).unwrap().is_empty());
    assert_eq!(curve.sample(1).unwrap(), vec![Vec2::ZERO]);
}

// ── Device-Koordinaten über die Kamera ──

#[test]
fn test_add_control_point_uses_camera() {
    let mut camera = Camera2D::new();
    camera.pan(Vec2::new(10.0, 0.0));
    let mut curve = CurveKind::Bezier.create();

    curve.add_control_point(Vec2::new(0.5, -0.5), &camera);

    assert_eq!(curve.control_points().len(), 1);
    let p = curve.control_points().get(0).unwrap();
    assert_relative_eq!(p.x, 17.5);
    assert_relative_eq!(p.y, -7.5);
}

#[test]
fn test_find_nearest_point_within_radius() {
    let camera = Camera2D::new();
    let mut curve = CurveKind::Lagrange.create();
    curve.add_control_point(Vec2::new(0.0, 0.0), &camera);
    curve.add_control_point(Vec2::new(0.5, 0.5), &camera);

    // 1 Device-Einheit = 15 Welt-Einheiten → 0.002 Device = 0.03 Welt
    assert_eq!(
        curve.find_nearest_point(Vec2::new(0.502, 0.5), &camera, 0.1),
        Some(1)
    );
    assert_eq!(
        curve.find_nearest_point(Vec2::new(0.25, 0.25), &camera, 0.1),
        None
    );
}

#[test]
fn test_move_point_out_of_range() {
    let camera = Camera2D::new();
    let mut curve = CurveKind::CatmullRom.create();
    curve.add_control_point(Vec2::ZERO, &camera);

    let err = curve.move_point(5, Vec2::ONE, &camera).unwrap_err();
    assert_eq!(err, CurveError::OutOfRange { index: 5, len: 1 });
}

#[test]
fn test_move_point_overwrites_in_place() {
    let camera = Camera2D::new();
    let mut curve = CurveKind::Bezier.create();
    curve.add_control_point(Vec2::ZERO, &camera);
    curve.add_control_point(Vec2::new(0.2, 0.2), &camera);

    curve.move_point(0, Vec2::new(-0.2, 0.0), &camera).unwrap();

    assert_eq!(curve.control_points().len(), 2);
    assert_relative_eq!(curve.control_points().get(0).unwrap().x, -3.0, epsilon = 1e-5);
}

// ── Spannung ──

#[test]
fn test_set_tension_only_affects_catmull_rom() {
    for kind in ALL_KINDS {
        let mut curve = kind.create();
        curve.set_tension(0.1);
        match kind {
            CurveKind::CatmullRom => assert_relative_eq!(curve.tension().unwrap(), 0.1),
            _ => assert_eq!(curve.tension(), None),
        }
    }
}

#[test]
fn test_clear_resets_points_and_knots() {
    for kind in ALL_KINDS {
        let mut curve = curve_with(kind, &[Vec2::ZERO, Vec2::ONE, Vec2::X]);
        curve.clear();
        assert!(curve.control_points().is_empty());
        assert!(curve.knots().is_empty());
        assert_eq!(curve.kind(), kind);
    }
}

#[test]
fn test_clamp_to_domain_tolerance() {
    assert_eq!(clamp_to_domain(1.0 + 1e-6, 0.0, 1.0), Ok(1.0));
    assert!(clamp_to_domain(1.01, 0.0, 1.0).is_err());
    assert!(clamp_to_domain(f32::NAN, 0.0, 1.0).is_err());
}
