//! Fixed-size 2D grid storage
//!
//! The outermost ring of the grid belongs to the border frame. Feature
//! painters write through [`Tilemap::set_tile`], which clamps every target
//! instead of failing. The clamp leaves the east column open: the border
//! pass runs last and overwrites it.

/// A 2D tilemap grid with bounds-checked access (no wrapping).
#[derive(Clone, Debug, PartialEq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Get the index into the data array, or None outside the grid.
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|idx| &self.data[idx])
    }

    /// Signed lookup for walkers whose columns may step off the grid.
    pub fn at(&self, x: i32, y: i32) -> Option<&T> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.get(x, y)
    }

    /// Raw write. Out-of-range positions are ignored.
    ///
    /// Only the border pass writes this way; everything else goes through
    /// [`Tilemap::set_tile`].
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx] = value;
        }
    }

    /// Inclusive interior range `(min_x, max_x, min_y, max_y)`, or None when
    /// the grid is too small to have an interior.
    pub fn interior(&self) -> Option<(usize, usize, usize, usize)> {
        if self.width < 3 || self.height < 3 {
            return None;
        }
        Some((1, self.width - 2, 1, self.height - 2))
    }

    /// Clamp a signed position to `[1, width-1] x [1, height-2]`, each axis
    /// independently. None when that range is empty.
    pub fn clamp_for_write(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if self.width < 2 || self.height < 3 {
            return None;
        }
        let x = (x.max(1) as usize).min(self.width - 1);
        let y = (y.max(1) as usize).min(self.height - 2);
        Some((x, y))
    }

    /// Write `value` at the cell nearest to `(x, y)` inside the write range.
    ///
    /// Never fails and never touches the top row, bottom row or west column;
    /// off-grid requests are redirected to the nearest valid edge. Returns the
    /// cell written.
    pub fn set_tile(&mut self, x: i32, y: i32, value: T) -> Option<(usize, usize)> {
        let (cx, cy) = self.clamp_for_write(x, y)?;
        self.set(cx, cy, value);
        Some((cx, cy))
    }

    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        match self.interior() {
            Some((min_x, max_x, min_y, max_y)) => {
                (min_x..=max_x).contains(&x) && (min_y..=max_y).contains(&y)
            }
            None => false,
        }
    }

    /// Iterate over all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    /// Iterate over the cells of one row.
    pub fn row(&self, y: usize) -> impl Iterator<Item = &T> {
        let start = (y * self.width).min(self.data.len());
        let end = (start + self.width).min(self.data.len());
        self.data[start..end].iter()
    }
}
