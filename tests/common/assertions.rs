use glam::DVec2;
use part77::{RunwaySurfaces, SurfaceKind};

/// Assert that a footprint ring is counterclockwise and free of
/// self-intersections.
#[track_caller]
pub fn assert_simple_ccw_ring(ring: &[DVec2]) {
    assert!(ring.len() >= 3, "Ring has fewer than three vertices");

    let mut doubled_area = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        doubled_area += a.perp_dot(b);
    }
    assert!(doubled_area > 0.0, "Ring is not counterclockwise");

    let n = ring.len();
    for i in 0..n {
        for j in i + 1..n {
            // Edges sharing a vertex meet there legitimately
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }
            let (a1, a2) = (ring[i], ring[(i + 1) % n]);
            let (b1, b2) = (ring[j], ring[(j + 1) % n]);
            assert!(
                !segments_cross(a1, a2, b1, b2),
                "Edges {} and {} of the ring cross",
                i,
                j
            );
        }
    }
}

/// Assert that every boundary ring of every surface is well formed.
#[track_caller]
pub fn assert_footprints_well_formed(surfaces: &RunwaySurfaces) {
    for surface in surfaces.surfaces() {
        assert_simple_ccw_ring(&surface.footprint());
        if let Some(hole) = surface.hole_footprint() {
            assert_simple_ccw_ring(&hole);
        }
    }
}

/// Assert that a runway carries the full surface set in priority order:
/// one primary, one approach per end, six transitional panels, one
/// horizontal and one conical.
#[track_caller]
pub fn assert_surface_inventory(surfaces: &RunwaySurfaces) {
    let kinds: Vec<SurfaceKind> = surfaces.surfaces().iter().map(|s| s.kind()).collect();
    let expected = [
        SurfaceKind::Primary,
        SurfaceKind::Approach,
        SurfaceKind::Approach,
        SurfaceKind::Transitional,
        SurfaceKind::Transitional,
        SurfaceKind::Transitional,
        SurfaceKind::Transitional,
        SurfaceKind::Transitional,
        SurfaceKind::Transitional,
        SurfaceKind::Horizontal,
        SurfaceKind::Conical,
    ];
    assert_eq!(
        kinds,
        expected,
        "Surface inventory out of order for runway {}",
        surfaces.runway_name()
    );
}

fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

fn segments_cross(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> bool {
    let d1 = orientation(a1, a2, b1);
    let d2 = orientation(a1, a2, b2);
    let d3 = orientation(b1, b2, a1);
    let d4 = orientation(b1, b2, a2);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}
