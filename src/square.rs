//! A square grid of cells addressed by [`Coord`].

use std::fmt;
use std::ops::{Index, IndexMut};

/// A (row, column) cell position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row index, from the top.
    pub row: usize,
    /// Column index, from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn index(self, width: usize) -> usize {
        self.row * width + self.col
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square grid stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Creates a square of the given width with every cell set to `value`.
    pub fn with_width_and_value(width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            elements: vec![value; width * width],
        }
    }

    /// Builds a square from rows. Panics if the input is not square.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let width = rows.len();
        assert!(rows.iter().all(|row| row.len() == width), "rows must form a square");
        Self {
            width,
            elements: rows.into_iter().flatten().collect(),
        }
    }

    /// Width (and height) of the square.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the square has no cells.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `coord` lies inside the square.
    pub fn contains_coord(&self, coord: Coord) -> bool {
        coord.row < self.width && coord.col < self.width
    }

    /// Iterates over cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Iterates over `(Coord, &T)` in row-major order.
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i / width, i % width), e))
    }

    /// The orthogonal neighbors of `coord` that lie inside the square.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        let Coord { row, col } = coord;
        let candidates = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        (0..candidates.len())
            .map(move |i| candidates[i])
            .filter(move |&(r, c)| r < width && c < width)
            .map(|(r, c)| Coord::new(r, c))
    }
}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        assert!(self.contains_coord(coord));
        &self.elements[coord.index(self.width)]
    }
}

impl<T> IndexMut<Coord> for Square<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        assert!(self.contains_coord(coord));
        let width = self.width;
        &mut self.elements[coord.index(width)]
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, Square};

    #[test]
    fn index_round_trip() {
        let mut square = Square::with_width_and_value(3, 0);
        square[Coord::new(1, 2)] = 7;
        assert_eq!(7, square[Coord::new(1, 2)]);
        assert_eq!(0, square[Coord::new(2, 1)]);
    }

    #[test]
    fn from_rows_layout() {
        let square = Square::from_rows(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(2, square.width());
        assert_eq!(4, square[Coord::new(1, 1)]);
        let coords: Vec<_> = square.iter_coord().map(|(c, _)| c).collect();
        assert_eq!(Coord::new(0, 1), coords[1]);
        assert_eq!(Coord::new(1, 0), coords[2]);
    }

    #[test]
    #[should_panic]
    fn from_rows_ragged() {
        Square::from_rows(vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn neighbors_clipped_at_edges() {
        let square = Square::with_width_and_value(3, ());
        let mut corner: Vec<_> = square.neighbors(Coord::new(0, 0)).collect();
        corner.sort_by_key(|c| (c.row, c.col));
        assert_eq!(vec![Coord::new(0, 1), Coord::new(1, 0)], corner);
        assert_eq!(4, square.neighbors(Coord::new(1, 1)).count());
    }
}
