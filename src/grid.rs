/// Square-capable pixel grid with opaque cell values
/// The permutation engine moves whole values around; what a value encodes
/// (RGBA packing, luma, a test marker) is entirely the caller's business

/// Row-major matrix of `Copy` cells addressed by `(x, y)`
///
/// Equality is a full value-wise comparison of dimensions and every cell,
/// never a hash or a sample. The engine relies on that for period detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T: Copy> PixelGrid<T> {
    /// Create a grid with every cell set to `fill`
    pub fn new(width: u32, height: u32, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; (width as usize) * (height as usize)],
        }
    }

    /// Create a grid by evaluating `f(x, y)` for every position
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Read the cell at `(x, y)`; positions must be in bounds
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> T {
        self.cells[self.index(x, y)]
    }

    /// Overwrite the cell at `(x, y)`; positions must be in bounds
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        let i = self.index(x, y);
        self.cells[i] = value;
    }
}
