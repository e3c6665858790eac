use crate::{
    config::{GridConfig, OrientationKind},
    hex::{Hex, HexIndexMap},
    screen::{Layout, Point, Vector},
    timed,
};
use anyhow::Context;
use derive_more::Display;
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The position of a cell in a map file: which row it's in, and which column
/// within that row. Rows and columns both count up from 0. Displays as the
/// four-digit `RRCC` code that map files use.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{:02}{:02}", row, column)]
pub struct MapLabel {
    pub row: u16,
    pub column: u16,
}

/// A configured map: a [Layout] that places cells on screen, plus the ordered
/// set of cells that make up the map. Cells are stored row by row, which is
/// also the order that [MapLabel]s are handed out in.
///
/// The grid only ever changes by panning. Which cells exist is fixed by the
/// config it was built from.
#[derive(Clone, Debug)]
pub struct HexGrid {
    config: GridConfig,
    layout: Layout,
    cells: HexIndexMap<MapLabel>,
}

impl HexGrid {
    /// Build a new grid from a config. Returns an error if the config is
    /// invalid: a failed field check (wrapping
    /// [ValidationErrors](validator::ValidationErrors)) or a shape that's too
    /// large.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        info!("Building grid with config {:#?}", config);

        config.validate().context("invalid grid config")?;
        config.shape.ensure_bounds().context("invalid grid config")?;
        let layout = config.layout().context("invalid grid config")?;

        let cells = timed!(
            "Grid construction",
            log::Level::Info,
            label_cells(config.shape.hexes())
        );
        debug_assert_eq!(cells.len(), config.shape.len());

        Ok(Self {
            config,
            layout,
            cells,
        })
    }

    /// The config that describes this grid. Panning is reflected in the
    /// config's origin, so building a new grid from this config reproduces
    /// the current one exactly.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Is the given hex one of this grid's cells?
    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    /// Get the map label of a cell, or `None` if it isn't in the grid
    pub fn label(&self, hex: Hex) -> Option<MapLabel> {
        self.cells.get(&hex).copied()
    }

    /// Iterate over every cell and its label, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Hex, MapLabel)> + '_ {
        self.cells.iter().map(|(hex, label)| (*hex, *label))
    }

    /// Get the cell under a screen position. Returns `None` if the position
    /// falls outside the grid, or isn't a finite point at all.
    pub fn hex_at(&self, point: Point) -> Option<Hex> {
        self.layout
            .pixel_to_hex(point)
            .ok()
            .filter(|hex| self.contains(*hex))
    }

    /// Get the neighbors of a cell that are also in this grid, in direction
    /// order. Cells along the edge of the map have fewer than six. The given
    /// hex doesn't need to be in the grid itself.
    pub fn neighbors(&self, hex: Hex) -> impl Iterator<Item = Hex> + '_ {
        hex.neighbors().filter(move |neighbor| self.contains(*neighbor))
    }

    /// Shift the whole grid on screen by some offset. The new origin must be
    /// finite, otherwise the config would no longer be valid.
    pub fn pan(&mut self, offset: Vector) {
        self.layout.pan(offset);
        self.config.origin = self.layout.origin();
    }

    /// Get the outline of every cell, row by row. Each outline is the cell's
    /// six corners in corner order.
    pub fn polygons(&self) -> impl Iterator<Item = (Hex, [Point; 6])> + '_ {
        self.cells
            .keys()
            .map(move |hex| (*hex, self.layout.corners(*hex)))
    }

    /// Compute the screen geometry of every cell in the grid
    pub fn geometry(&self) -> GridGeometry {
        let cells = self
            .cells()
            .map(|(hex, label)| CellGeometry {
                hex,
                label,
                center: self.layout.hex_to_pixel(hex),
                corners: self.layout.corners(hex),
            })
            .collect();
        GridGeometry {
            orientation: self.config.orientation,
            size: self.layout.size(),
            origin: self.layout.origin(),
            cells,
        }
    }

    /// Serialize the screen geometry of this grid to JSON. See
    /// [GridGeometry] for the format.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(&self.geometry())
            .context("error serializing grid geometry")
    }
}

/// Hand out labels to a row-major list of hexes. A new row starts every time
/// `r` changes.
fn label_cells(hexes: Vec<Hex>) -> HexIndexMap<MapLabel> {
    let mut cells = HexIndexMap::default();
    cells.reserve(hexes.len());

    let mut label = MapLabel { row: 0, column: 0 };
    let mut previous_r = hexes.first().map(|hex| hex.r());
    for hex in hexes {
        if previous_r != Some(hex.r()) {
            label = MapLabel {
                row: label.row + 1,
                column: 0,
            };
            previous_r = Some(hex.r());
        }
        cells.insert(hex, label);
        label.column += 1;
    }
    cells
}

/// Everything a renderer needs to draw a grid, in a serializable form. All
/// positions are in screen space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub orientation: OrientationKind,
    pub size: Vector,
    pub origin: Point,
    /// Cells in row-major order
    pub cells: Vec<CellGeometry>,
}

/// Screen geometry of a single cell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub hex: Hex,
    pub label: MapLabel,
    pub center: Point,
    /// The six corners of the cell, in corner order
    pub corners: [Point; 6],
}
