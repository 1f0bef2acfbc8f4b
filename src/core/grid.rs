/// Top-left pixel coordinate of one grid slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub x: f32,
    pub y: f32,
}

/// Row-major tiling of a surface with square cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    pub cells: Vec<Cell>,
    pub rows: u32,
    pub columns: u32,
    pub cell_size: u32,
}

impl Grid {
    /// Tile a `width x height` surface. Partial cells along the right and
    /// bottom edges are included, so there are `ceil(h / s) * ceil(w / s)`
    /// cells. A zero-sized surface or `cell_size == 0` yields an empty grid.
    pub fn tile(width: u32, height: u32, cell_size: u32) -> Self {
        if cell_size == 0 || width == 0 || height == 0 {
            return Self {
                cell_size,
                ..Self::default()
            };
        }
        let rows = height.div_ceil(cell_size);
        let columns = width.div_ceil(cell_size);
        let mut cells = Vec::with_capacity(rows as usize * columns as usize);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell {
                    x: (column * cell_size) as f32,
                    y: (row * cell_size) as f32,
                });
            }
        }
        Self {
            cells,
            rows,
            columns,
            cell_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
