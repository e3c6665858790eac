//! Property checks for the coordinate math, run over pseudo-random samples.
//! Every check uses a fixed seed so failures are reproducible.

use assert_approx_eq::assert_approx_eq;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::f64::consts::PI;
use strum::IntoEnumIterator;
use warhex::{
    Direction, FractionalHex, Hex, HexGrid, Layout, Orientation, Point, Vector,
    FLAT_TOP, POINTY_TOP,
};

const SAMPLES: usize = 1000;

fn random_hex(rng: &mut impl Rng) -> Hex {
    Hex::new_qr(rng.gen_range(-1000..=1000), rng.gen_range(-1000..=1000))
}

fn orientations() -> [&'static Orientation; 2] {
    [&POINTY_TOP, &FLAT_TOP]
}

#[test]
fn test_invariant_holds() {
    let mut rng = Pcg64::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let a = random_hex(&mut rng);
        let b = random_hex(&mut rng);
        let k = rng.gen_range(-10..=10);
        for hex in [a, b, a + b, a - b, -a, a * k, a.neighbor_at(k)] {
            assert_eq!(hex.q() + hex.r() + hex.s(), 0, "bad hex {}", hex);
            assert_eq!(Hex::new(hex.q(), hex.r(), hex.s()).unwrap(), hex);
        }
    }
}

#[test]
fn test_round_trip() {
    let mut rng = Pcg64::seed_from_u64(2);
    for orientation in orientations() {
        for _ in 0..SAMPLES {
            let layout = Layout::new(
                orientation,
                Vector::new(
                    rng.gen_range(1.0..100.0),
                    rng.gen_range(1.0..100.0),
                ),
                Point::new(
                    rng.gen_range(-1000.0..1000.0),
                    rng.gen_range(-1000.0..1000.0),
                ),
            )
            .unwrap();
            let hex = random_hex(&mut rng);
            assert_eq!(
                layout.pixel_to_hex(layout.hex_to_pixel(hex)).unwrap(),
                hex,
                "round trip failed for {} in {:?}",
                hex,
                layout
            );
        }
    }
}

#[test]
fn test_metric_laws() {
    let mut rng = Pcg64::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let a = random_hex(&mut rng);
        let b = random_hex(&mut rng);
        let c = random_hex(&mut rng);
        assert_eq!(a.distance_to(a), 0);
        assert_eq!(a.distance_to(b), b.distance_to(a));
        assert_eq!(a.distance_to(b) == 0, a == b);
        assert!(a.distance_to(c) <= a.distance_to(b) + b.distance_to(c));
    }
}

#[test]
fn test_neighbors() {
    let mut rng = Pcg64::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let hex = random_hex(&mut rng);
        let neighbors: Vec<Hex> = hex.neighbors().collect();
        assert_eq!(neighbors.len(), 6);
        for (i, neighbor) in neighbors.iter().enumerate() {
            assert_eq!(hex.distance_to(*neighbor), 1);
            assert!(!neighbors[..i].contains(neighbor));
        }
        for direction in Direction::iter() {
            assert_eq!(
                hex.neighbor(direction).neighbor(direction.opposite()),
                hex
            );
        }
    }
}

#[test]
fn test_rounding_tie_break() {
    let hex = FractionalHex::new(0.5, 0.5, -1.0).round().unwrap();
    assert_eq!(hex, Hex::new(0, 1, -1).unwrap());
}

#[test]
fn test_rounding_stays_close() {
    let mut rng = Pcg64::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let q = rng.gen_range(-500.0..500.0);
        let r = rng.gen_range(-500.0..500.0);
        let hex = FractionalHex::from_axial(q, r).round().unwrap();
        // Nothing in the cell is farther than one corner away from its center
        let dq = q - f64::from(hex.q());
        let dr = r - f64::from(hex.r());
        let ds = -q - r - f64::from(hex.s());
        assert!(
            dq.abs().max(dr.abs()).max(ds.abs()) <= 2.0 / 3.0 + 1e-9,
            "({}, {}) rounded to {}",
            q,
            r,
            hex
        );
    }
}

#[test]
fn test_pointy_unit_east() {
    let layout =
        Layout::new(&POINTY_TOP, Vector::new(1.0, 1.0), Point::ORIGIN).unwrap();
    let point = layout.hex_to_pixel(Hex::new(1, 0, -1).unwrap());
    assert_approx_eq!(point.x, 3f64.sqrt(), 1e-9);
    assert_approx_eq!(point.y, 0.0, 1e-9);
}

#[test]
fn test_corner_order() {
    for orientation in orientations() {
        let layout =
            Layout::new(orientation, Vector::new(5.0, 5.0), Point::ORIGIN)
                .unwrap();
        let angles: Vec<f64> = layout
            .corner_offsets()
            .iter()
            .map(|offset| offset.angle())
            .collect();
        for i in 0..6 {
            // Each corner is a sixth of a turn past the previous one, always
            // in the same direction
            let step = (angles[(i + 1) % 6] - angles[i]).rem_euclid(2.0 * PI);
            assert_approx_eq!(step, PI / 3.0, 1e-9);
        }

        // Squashing the grid distorts the angles, but not their order
        let layout =
            Layout::new(orientation, Vector::new(9.0, 2.0), Point::ORIGIN)
                .unwrap();
        let offsets = layout.corner_offsets();
        for i in 0..6 {
            let step = (offsets[(i + 1) % 6].angle() - offsets[i].angle())
                .rem_euclid(2.0 * PI);
            assert!(step > 0.0 && step < PI, "corner {} went backwards", i);
        }
    }
}

#[test]
fn test_corners_surround_center() {
    let mut rng = Pcg64::seed_from_u64(6);
    for orientation in orientations() {
        let layout = Layout::new(
            orientation,
            Vector::new(30.0, 20.0),
            Point::new(100.0, 100.0),
        )
        .unwrap();
        for _ in 0..100 {
            let hex = random_hex(&mut rng);
            let center = layout.hex_to_pixel(hex);
            let sum: Vector =
                layout.corners(hex).iter().map(|corner| *corner - center).sum();
            assert_approx_eq!(sum.x, 0.0, 1e-6);
            assert_approx_eq!(sum.y, 0.0, 1e-6);
            // Every corner is shared with the two neighbors on either side of
            // it, so it must still resolve to one of those three cells
            for corner in layout.corners(hex) {
                let owner = layout.pixel_to_hex(corner).unwrap();
                assert!(owner.distance_to(hex) <= 1);
            }
        }
    }
}

#[test]
fn test_grid_lookup_matches_layout() {
    let mut rng = Pcg64::seed_from_u64(7);
    let grid = HexGrid::new(Default::default()).unwrap();
    for _ in 0..SAMPLES {
        let point =
            Point::new(rng.gen_range(0.0..1200.0), rng.gen_range(0.0..900.0));
        let hex = grid.layout().pixel_to_hex(point).unwrap();
        assert_eq!(
            grid.hex_at(point),
            Some(hex).filter(|hex| grid.contains(*hex))
        );
    }
}
