use hexgrid::{
    cube_distance, CubeHex, FractionalHex, HexGrid, Layout, OffsetCoord,
    Orientation, Point,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::collections::HashSet;

/// Fixed seed, so failures are always reproducible
fn rng() -> Pcg64 {
    Pcg64::seed_from_u64(0x5eed_4e78)
}

fn random_hex(rng: &mut impl Rng) -> CubeHex {
    CubeHex::new(rng.gen_range(-100..=100), rng.gen_range(-100..=100))
}

fn random_cell(rng: &mut impl Rng, grid: &HexGrid) -> OffsetCoord {
    OffsetCoord::new(
        rng.gen_range(0..i32::from(grid.constants().grid_width)),
        rng.gen_range(0..i32::from(grid.constants().grid_height)),
    )
}

fn assert_on_plane(hex: CubeHex) {
    assert_eq!(hex.q() + hex.r() + hex.s(), 0, "{} is off the plane", hex);
}

#[test]
fn test_offset_cube_round_trip() {
    let grid = HexGrid::default();
    for cell in grid.cells() {
        let hex = grid.offset_to_cube(cell);
        assert_on_plane(hex);
        assert_eq!(grid.cube_to_offset(hex), cell, "round trip via {}", hex);
    }
}

#[test]
fn test_distance_formulas_agree() {
    let mut rng = rng();
    for _ in 0..1000 {
        let a = random_hex(&mut rng);
        let b = random_hex(&mut rng);
        assert_eq!(
            a.distance_to(b),
            a.chebyshev_distance(b),
            "distance formulas disagree for {} and {}",
            a,
            b
        );
    }
}

#[test]
fn test_distance_metric() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = random_hex(&mut rng);
        let b = random_hex(&mut rng);
        let c = random_hex(&mut rng);
        assert_eq!(cube_distance(a, a), 0);
        assert_eq!(cube_distance(a, b), cube_distance(b, a));
        assert!(
            cube_distance(a, c) <= cube_distance(a, b) + cube_distance(b, c),
            "triangle inequality broken for {}, {}, {}",
            a,
            b,
            c
        );
    }
}

#[test]
fn test_algorithms_stay_on_plane() {
    let mut rng = rng();
    for _ in 0..50 {
        let a = random_hex(&mut rng);
        let b = random_hex(&mut rng);
        a.neighbors().for_each(assert_on_plane);
        a.range(2).into_iter().for_each(assert_on_plane);
        a.ring(3).into_iter().for_each(assert_on_plane);
        a.line_to(b).into_iter().for_each(assert_on_plane);
        assert_on_plane(a + b);
        assert_on_plane(a - b);
        assert_on_plane(a * 3);
    }
}

fn assert_near_plane(hex: FractionalHex) {
    let sum = hex.q() + hex.r() + hex.s();
    assert!(sum.abs() < 1e-9, "{} is off the plane by {}", hex, sum);
}

#[test]
fn test_fractional_hexes_stay_on_plane() {
    let mut rng = rng();
    for _ in 0..1000 {
        let a = FractionalHex::from(random_hex(&mut rng));
        let b = FractionalHex::from(random_hex(&mut rng));
        assert_near_plane(a.lerp(b, rng.gen_range(0.0..=1.0)));
    }

    let layouts = [
        Layout::new(
            Orientation::pointy(),
            Point::new(20.0, 20.0),
            Point::new(750.0, 650.0),
        ),
        Layout::new(
            Orientation::flat(),
            Point::new(13.0, 9.0),
            Point::new(-40.0, 25.0),
        ),
    ];
    for layout in &layouts {
        for _ in 0..500 {
            let pixel = Point::new(
                rng.gen_range(-2000.0..2000.0),
                rng.gen_range(-2000.0..2000.0),
            );
            let hex = layout.pixel_to_hex(pixel);
            assert_near_plane(hex);
            assert_on_plane(hex.round());
        }
    }
}

#[test]
fn test_ring_cardinality() {
    let mut rng = rng();
    for radius in 0..8 {
        let center = random_hex(&mut rng);
        let ring = center.ring(radius);
        let expected = if radius == 0 { 1 } else { 6 * radius as usize };
        assert_eq!(ring.len(), expected);
        // No hex shows up twice
        assert_eq!(ring.iter().collect::<HashSet<_>>().len(), expected);
    }
}

#[test]
fn test_line_length() {
    let mut rng = rng();
    for _ in 0..200 {
        let a = random_hex(&mut rng);
        let b = random_hex(&mut rng);
        let line = a.line_to(b);
        assert_eq!(line.len() as i32, a.distance_to(b) + 1);
        assert_eq!(line.first(), Some(&a));
        assert_eq!(line.last(), Some(&b));
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1, "gap in {:?}", line);
        }
    }
}

#[test]
fn test_closest_neighbors() {
    let grid = HexGrid::default();
    let center = OffsetCoord::new(17, 17);
    let closest = grid.closest_neighbors(center, 5);

    assert_eq!(closest.len(), 5);
    assert_eq!(closest.iter().collect::<HashSet<_>>().len(), 5);
    let distances: Vec<i32> = closest
        .iter()
        .map(|cell| grid.offset_distance(center, *cell))
        .collect();
    assert!(distances.iter().all(|distance| *distance >= 1));
    assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
    // Same input, same output
    assert_eq!(grid.closest_neighbors(center, 5), closest);
}

#[test]
fn test_closest_neighbors_everywhere() {
    let grid = HexGrid::default();
    for cell in grid.cells() {
        let closest = grid.closest_neighbors(cell, 5);
        assert_eq!(closest.len(), 5, "too few neighbors for {}", cell);
        assert!(closest.iter().all(|neighbor| grid.contains(*neighbor)));
    }
}

#[test]
fn test_build_path_pinned() {
    let grid = HexGrid::default();
    let cell = OffsetCoord::new(5, 5);
    assert_eq!(grid.build_path(cell, cell), vec![cell, cell]);

    let from = OffsetCoord::new(0, 0);
    let to = OffsetCoord::new(0, 2);
    let path = grid.build_path(from, to);
    assert_eq!(path.first(), Some(&from));
    assert_eq!(path.last(), Some(&to));
    assert!(path.windows(2).all(|pair| pair[0] != pair[1]));
    assert!(path.iter().all(|cell| grid.contains(*cell)));
}

#[test]
fn test_build_path_properties() {
    let grid = HexGrid::default();
    let mut rng = rng();
    for _ in 0..500 {
        let from = random_cell(&mut rng, &grid);
        let to = random_cell(&mut rng, &grid);
        let distance = grid.offset_distance(from, to);
        let path = grid.build_path(from, to);

        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        assert!(path.iter().all(|cell| grid.contains(*cell)));
        if distance > 1 {
            assert!(
                path.windows(2).all(|pair| pair[0] != pair[1]),
                "duplicate cells in path {:?}",
                path
            );
            assert!(path.len() as i32 <= distance + 1);
        }
    }
}

#[test]
fn test_neighbors_within_distance_on_map() {
    let grid = HexGrid::default();
    let mut rng = rng();
    for _ in 0..100 {
        let center = random_cell(&mut rng, &grid);
        let neighbors = grid.neighbors_within_distance(center, 3);
        assert!(neighbors.len() <= 36);
        for neighbor in neighbors {
            assert!(grid.contains(neighbor));
            let distance = grid.offset_distance(center, neighbor);
            assert!((1..=3).contains(&distance));
        }
    }
}
