use ndarray::Array2;

/// Single coordinate axis used for grid rows, columns and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts a row-major linear position back into coordinates on a grid of `size`.
pub const fn coords_of(position: CellCount, size: Coord2) -> Coord2 {
    let cols = size.1 as CellCount;
    ((position / cols) as Coord, (position % cols) as Coord)
}

/// Chebyshev distance of at most one, i.e. `other` lies in the 3×3 block around `center`.
pub const fn is_within_block(center: Coord2, other: Coord2) -> bool {
    center.0.abs_diff(other.0) <= 1 && center.1.abs_diff(other.1) <= 1
}

pub trait NeighborIterExt {
    fn dims(&self) -> Coord2;

    /// The clipped Moore neighborhood of `index`, excluding `index` itself.
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.dims(), &NEIGHBORS)
    }

    /// The clipped 3×3 block centered on `index`, including `index` itself.
    fn iter_block(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.dims(), &BLOCK)
    }
}

impl<T> NeighborIterExt for Array2<T> {
    fn dims(&self) -> Coord2 {
        let (rows, cols) = self.dim();
        (rows as Coord, cols as Coord)
    }
}

const NEIGHBORS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BLOCK: [(i8, i8); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: &'static [(i8, i8)],
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2, deltas: &'static [(i8, i8)]) -> Self {
        Self {
            center,
            bounds,
            deltas,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.deltas.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}
