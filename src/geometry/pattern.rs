//! Tiling pattern descriptor

use super::bbox::BoundingBox;

/// Rule for repeating a segment's region across a grid of cells
///
/// Every field is optional and falls back on its own: no cell size means the
/// segment region supplies the stride with a zero offset, and a missing count
/// means the grid runs until it reaches the image edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    /// Cell offset (x, y) and stride (width, height)
    pub cell_size: Option<BoundingBox>,
    /// Maximum number of columns
    pub horizontal_count: Option<u32>,
    /// Maximum number of rows
    pub vertical_count: Option<u32>,
}

impl Pattern {
    pub fn new(cell_size: Option<BoundingBox>, horizontal_count: Option<u32>, vertical_count: Option<u32>) -> Self {
        Pattern { cell_size, horizontal_count, vertical_count }
    }

    /// Resolve the cell to use for a segment with the given region
    pub fn cell_for(&self, region: &BoundingBox) -> BoundingBox {
        self.cell_size
            .unwrap_or_else(|| BoundingBox::new(0, 0, region.width, region.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_cell_uses_region_size_without_offset() {
        let region = BoundingBox::new(5, 7, 16, 8);
        let pattern = Pattern::default();
        assert_eq!(pattern.cell_for(&region), BoundingBox::new(0, 0, 16, 8));
    }

    #[test]
    fn test_explicit_cell_wins() {
        let region = BoundingBox::new(5, 7, 16, 8);
        let cell = BoundingBox::new(1, 2, 20, 10);
        let pattern = Pattern::new(Some(cell), Some(3), None);
        assert_eq!(pattern.cell_for(&region), cell);
    }
}
