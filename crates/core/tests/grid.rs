use warhex::{
    GridConfig, GridGeometry, Hex, HexGrid, MapLabel, MapShape,
    OrientationKind, Point, Vector,
};

fn rectangle_grid(columns: u16, rows: u16) -> HexGrid {
    HexGrid::new(GridConfig {
        shape: MapShape::Rectangle { columns, rows },
        ..Default::default()
    })
    .unwrap()
}

/// Labels count up row by row, the same way cells are laid out in a map file
#[test]
fn test_rectangle_labels() {
    let grid = rectangle_grid(6, 4);
    assert_eq!(grid.len(), 24);
    for (i, (hex, label)) in grid.cells().enumerate() {
        assert_eq!(
            label,
            MapLabel {
                row: (i / 6) as u16,
                column: (i % 6) as u16
            },
            "wrong label for {}",
            hex
        );
    }

    // Columns stay stacked on screen, despite the shift in q between rows
    let layout = grid.layout();
    let column_x = |column: u16| -> Vec<f64> {
        grid.cells()
            .filter(|(_, label)| label.column == column)
            .map(|(hex, _)| layout.hex_to_pixel(hex).x)
            .collect()
    };
    for column in 0..6 {
        let xs = column_x(column);
        assert_eq!(xs.len(), 4);
        // Odd rows are offset by half a cell, so x only takes two values
        let spread = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - xs.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!(
            spread <= layout.size().x,
            "column {} wanders: {:?}",
            column,
            xs
        );
    }
}

#[test]
fn test_empty_rectangle() {
    let grid = rectangle_grid(0, 7);
    assert!(grid.is_empty());
    assert_eq!(grid.hex_at(grid.config().origin), None);
    assert_eq!(grid.polygons().count(), 0);
}

#[test]
fn test_hex_at_every_cell() {
    for orientation in [OrientationKind::Pointy, OrientationKind::Flat] {
        let grid = HexGrid::new(GridConfig {
            orientation,
            hex_width: 12.0,
            hex_height: 8.0,
            shape: MapShape::Hexagon { radius: 6 },
            ..Default::default()
        })
        .unwrap();
        for (hex, _) in grid.cells() {
            let center = grid.layout().hex_to_pixel(hex);
            assert_eq!(grid.hex_at(center), Some(hex));
            // A little way in from each corner still lands in the cell
            for corner in grid.layout().corners(hex) {
                let inside = corner + (center - corner) * 0.1;
                assert_eq!(grid.hex_at(inside), Some(hex));
            }
        }
    }
}

#[test]
fn test_neighbors_stay_in_grid() {
    let grid = rectangle_grid(5, 5);
    for (hex, _) in grid.cells() {
        let neighbors: Vec<Hex> = grid.neighbors(hex).collect();
        assert!(!neighbors.is_empty() && neighbors.len() <= 6);
        for neighbor in neighbors {
            assert!(grid.contains(neighbor));
            assert!(hex.is_adjacent(neighbor));
            // Adjacency is symmetric
            assert!(grid.neighbors(neighbor).any(|other| other == hex));
        }
    }
}

#[test]
fn test_pan() {
    let mut grid = rectangle_grid(3, 3);
    let before = grid.geometry();
    grid.pan(Vector::new(25.0, -10.0));
    let after = grid.geometry();

    assert_eq!(after.origin, before.origin + Vector::new(25.0, -10.0));
    for (old, new) in before.cells.iter().zip(&after.cells) {
        assert_eq!(old.hex, new.hex);
        let moved = new.center - old.center;
        assert!(
            (moved.x - 25.0).abs() < 1e-9 && (moved.y + 10.0).abs() < 1e-9,
            "{} moved by {}",
            new.hex,
            moved
        );
    }
    assert_eq!(grid.hex_at(after.origin), Some(Hex::ORIGIN));
    // The config follows the pan, so the grid can be rebuilt where it is now
    assert_eq!(grid.config().origin, Point::new(625.0, 440.0));
}

#[test]
fn test_geometry_serialization() {
    let grid = rectangle_grid(2, 2);
    let geometry = grid.geometry();
    let json = serde_json::to_value(&geometry).unwrap();

    assert_eq!(json["orientation"], "pointy");
    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0]["label"], serde_json::json!({"row": 0, "column": 0}));
    assert_eq!(cells[3]["label"], serde_json::json!({"row": 1, "column": 1}));
    assert_eq!(cells[0]["corners"].as_array().unwrap().len(), 6);

    let parsed: GridGeometry = serde_json::from_value(json).unwrap();
    let hexes = |geometry: &GridGeometry| -> Vec<(Hex, MapLabel)> {
        geometry.cells.iter().map(|cell| (cell.hex, cell.label)).collect()
    };
    assert_eq!(hexes(&parsed), hexes(&geometry));
}

#[cfg(feature = "json")]
#[test]
fn test_to_json() {
    let grid = rectangle_grid(4, 3);
    let parsed: GridGeometry =
        serde_json::from_str(&grid.to_json().unwrap()).unwrap();
    assert_eq!(parsed.cells.len(), 12);
    assert_eq!(parsed.orientation, OrientationKind::Pointy);
    for (cell, (hex, label)) in parsed.cells.iter().zip(grid.cells()) {
        assert_eq!((cell.hex, cell.label), (hex, label));
    }
}
