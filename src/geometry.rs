use crate::error::SnakeError;

/// Side length of a grid cell in canvas units.
pub const CELL_SIZE: i32 = 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// A single grid cell with its top left corner at (x, y).
    pub fn cell(x: i32, y: i32) -> Self {
        Rect::new(x, y, CELL_SIZE, CELL_SIZE)
    }

    /// Strict overlap: rectangles that only share an edge don't overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Size of the playing canvas, in canvas units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Result<Self, SnakeError> {
        if width <= CELL_SIZE || height <= CELL_SIZE {
            return Err(SnakeError::InvalidBounds { width, height });
        }

        Ok(Bounds { width, height })
    }

    /// Canvas holding exactly `cols` x `rows` cells.
    pub fn from_cells(cols: u16, rows: u16) -> Result<Self, SnakeError> {
        Bounds::new(cols as i32 * CELL_SIZE, rows as i32 * CELL_SIZE)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Middle of the canvas, snapped down onto the cell grid.
    pub fn center(&self) -> (i32, i32) {
        let snap = |v: i32| (v / 2) / CELL_SIZE * CELL_SIZE;
        (snap(self.width), snap(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_cells() {
        let a = Rect::cell(200, 200);
        assert!(a.overlaps(&Rect::cell(200, 200)));
        assert!(a.overlaps(&Rect::cell(219, 181)));
        assert!(a.overlaps(&Rect::new(215, 210, 5, 5)));
    }

    #[test]
    fn test_small_rect_beside_the_cell() {
        let a = Rect::cell(200, 200);
        assert!(!a.overlaps(&Rect::new(190, 210, 5, 5)));
        assert!(!a.overlaps(&Rect::new(195, 210, 5, 5)));
        assert!(a.overlaps(&Rect::new(196, 210, 5, 5)));
    }

    #[test]
    fn test_touching_edges_dont_overlap() {
        let a = Rect::cell(200, 200);
        assert!(!a.overlaps(&Rect::cell(220, 200)));
        assert!(!a.overlaps(&Rect::cell(180, 200)));
        assert!(!a.overlaps(&Rect::cell(200, 220)));
        assert!(!a.overlaps(&Rect::cell(200, 180)));
    }

    #[test]
    fn test_bounds_validation() {
        assert!(Bounds::new(400, 400).is_ok());
        assert!(Bounds::new(21, 21).is_ok());
        assert_eq!(Bounds::new(20, 400), Err(SnakeError::InvalidBounds { width: 20, height: 400 }));
        assert_eq!(Bounds::new(400, 0), Err(SnakeError::InvalidBounds { width: 400, height: 0 }));
        assert!(Bounds::new(-100, 400).is_err());
    }

    #[test]
    fn test_bounds_from_cells() {
        let bounds = Bounds::from_cells(30, 10).unwrap();
        assert_eq!((bounds.width(), bounds.height()), (600, 200));
        assert!(Bounds::from_cells(1, 10).is_err());
    }

    #[test]
    fn test_center_is_cell_aligned() {
        assert_eq!(Bounds::new(400, 400).unwrap().center(), (200, 200));
        assert_eq!(Bounds::new(450, 330).unwrap().center(), (220, 160));
    }
}
