use approx::assert_abs_diff_eq;
use surf_core::{SamplingConfig, SurfError, Tolerance};
use surf_geometry::{construct, construct_kind, GridSurface, Surface, SurfaceCatalog, SurfaceKind};
use surf_math::Domain;

const RANGE: (f64, f64) = (-5.0, 5.0);

fn build(kind: &str, params: &[f64]) -> Surface {
    construct(kind, RANGE, RANGE, params).unwrap()
}

#[test]
fn test_every_kind_yields_equal_100x100_grids() {
    for kind in SurfaceKind::ALL {
        let out = build(kind.name(), kind.default_parameters()).evaluate();
        assert_eq!(out.x().shape(), (100, 100), "{}", kind);
        assert_eq!(out.y().shape(), (100, 100), "{}", kind);
        assert_eq!(out.z().shape(), (100, 100), "{}", kind);
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    for kind in SurfaceKind::ALL {
        let surface = build(kind.name(), kind.default_parameters());
        let before = surface.clone();
        let first = surface.evaluate();
        let second = surface.evaluate();
        assert!(first.approx_eq(&second, Tolerance::exact()), "{}", kind);
        // Evaluation leaves the surface description untouched
        assert_eq!(surface, before, "{}", kind);
    }
}

#[test]
fn test_unknown_surface_kind_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(
            construct("NotARealSurface", RANGE, RANGE, &[1.0]).unwrap_err(),
            SurfError::UnknownSurfaceKind("NotARealSurface".to_string())
        );
    }
}

#[test]
fn test_paraboloid_scenario() {
    let surface = build("Paraboloid", &[2.0]);
    let out = surface.evaluate();
    // x = 5 is the last column; every row has the same x
    assert_eq!(out.x()[(0, 99)], 5.0);
    assert_eq!(out.z()[(0, 99)], 2.0 * (25.0 + 25.0));

    // Sample the exact origin and the x = 5, y = 0 boundary point
    let out = surface.evaluate_with(&SamplingConfig::new(101).unwrap());
    assert_eq!(out.x()[(50, 50)], 0.0);
    assert_eq!(out.y()[(50, 50)], 0.0);
    assert_eq!(out.z()[(50, 50)], 0.0);
    assert_eq!(out.x()[(50, 100)], 5.0);
    assert_eq!(out.y()[(50, 100)], 0.0);
    assert_eq!(out.z()[(50, 100)], 50.0);
}

#[test]
fn test_plane_zero_slope() {
    let out = build("Plane", &[0.0]).evaluate();
    assert!(out.z().iter().all(|z| z == 0.0));
}

#[test]
fn test_unit_ellipsoid_matches_unit_sphere() {
    let e = build("Ellipsoid", &[1.0, 1.0, 1.0]).evaluate();
    let s = build("Sphere", &[1.0]).evaluate();
    assert!(e.approx_eq(&s, Tolerance::default()));
}

#[test]
fn test_height_surfaces_keep_domain_mesh() {
    let domain = Domain::from_ranges((-2.0, 1.0), (0.0, 4.0));
    for kind in SurfaceKind::ALL.into_iter().filter(|k| !k.is_angular()) {
        let out = construct_kind(kind, domain, &[]).unwrap().evaluate();
        assert_eq!(out.x().min_max(), Some((-2.0, 1.0)), "{}", kind);
        assert_eq!(out.y().min_max(), Some((0.0, 4.0)), "{}", kind);
    }
}

#[test]
fn test_angular_surfaces_ignore_domain() {
    let wide = Domain::from_ranges((-50.0, 50.0), (-50.0, 50.0));
    for kind in SurfaceKind::ALL.into_iter().filter(|k| k.is_angular()) {
        let a = construct_kind(kind, Domain::default(), &[]).unwrap().evaluate();
        let b = construct_kind(kind, wide, &[]).unwrap().evaluate();
        assert_eq!(a, b, "{}", kind);
    }
}

#[test]
fn test_hyperboloid_degenerate_axis_is_not_an_error() {
    let out = build("Hyperboloid", &[1.0, 0.0, 1.0]).evaluate();
    assert_eq!(out.shape(), (100, 100));
    // No sample has y == 0, so every height is -inf
    assert_eq!(out.non_finite_count(), 100 * 100);
    assert!(out.z().iter().all(|z| z == f64::NEG_INFINITY));
    assert!(out.bounds().is_none());
}

#[test]
fn test_catalog_defaults_to_rendering_domain() {
    let catalog = SurfaceCatalog::default();
    let out = catalog.evaluate("Sinusoid", &[2.0]).unwrap();
    assert_eq!(out.shape(), (100, 100));
    assert_eq!(out.x().min_max(), Some((-5.0, 5.0)));

    let torus = catalog.evaluate("torus", &[2.0, 0.5]).unwrap();
    let b = torus.bounds().unwrap();
    assert_abs_diff_eq!(b.max.x, 2.5, epsilon = 1e-12);
}

#[test]
fn test_surface_json_is_tagged_by_kind() {
    let surface = build("Torus", &[2.0, 0.5]);
    let json = serde_json::to_value(&surface).unwrap();
    assert_eq!(json["kind"], "Torus");
    assert_eq!(json["major_radius"], 2.0);
    assert_eq!(json["minor_radius"], 0.5);

    let back: Surface = serde_json::from_value(json).unwrap();
    assert_eq!(back, surface);
}
