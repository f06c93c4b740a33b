//! Expansion of segments into concrete tiles
//!
//! A segment without a pattern yields itself. A patterned segment is walked
//! row by row over a grid of cells:
//!
//! ```text
//! x = region.x + cell.x + column * cell.width
//! y = region.y + cell.y + row    * cell.height
//! ```
//!
//! Every tile has the segment region's size. A tile crossing the right edge
//! of the image ends its row; a tile crossing the bottom edge ends the whole
//! expansion, since every later row lies further down.

use crate::geometry::{BoundingBox, Pattern};
use crate::segment::Segment;
use crate::template::errors::{SnipError, SnipResult};
use super::tile::Tile;

/// Expand a segment against an image of the given size
///
/// # Arguments
/// * `segment` - The segment to expand
/// * `image_width` - Width of the image the tiles will be read from
/// * `image_height` - Height of the image the tiles will be read from
///
/// # Returns
/// A lazy iterator of tiles. An arithmetic overflow is yielded as a single
/// error, after which the iterator is exhausted.
pub fn expand(segment: &Segment, image_width: u32, image_height: u32) -> TileIter<'_> {
    let grid = segment.pattern().map(|pattern| GridCursor {
        pattern: *pattern,
        cell: pattern.cell_for(&segment.region()),
        column: 0,
        row: 0,
    });

    TileIter {
        segment,
        image_width,
        image_height,
        grid,
        finished: false,
    }
}

/// Position within a pattern's grid
#[derive(Debug, Clone, Copy)]
struct GridCursor {
    pattern: Pattern,
    cell: BoundingBox,
    column: u32,
    row: u32,
}

impl GridCursor {
    /// Step right; a column counter that cannot grow ends the row
    fn next_column(self) -> Option<GridCursor> {
        match self.column.checked_add(1) {
            Some(column) => Some(GridCursor { column, ..self }),
            None => self.next_row(),
        }
    }

    /// Move to the start of the next row
    fn next_row(self) -> Option<GridCursor> {
        let row = self.row.checked_add(1)?;
        Some(GridCursor { column: 0, row, ..self })
    }
}

/// Iterator over the tiles of one segment
#[derive(Debug, Clone)]
pub struct TileIter<'s> {
    segment: &'s Segment,
    image_width: u32,
    image_height: u32,
    grid: Option<GridCursor>,
    finished: bool,
}

impl<'s> TileIter<'s> {
    fn overflow(&mut self, what: &str) -> Option<SnipResult<Tile>> {
        self.finished = true;
        Some(Err(SnipError::ArithmeticOverflow(
            format!("{} for segment {}", what, self.segment.name()))))
    }

    fn next_grid_tile(&mut self) -> Option<SnipResult<Tile>> {
        let region = self.segment.region();

        loop {
            let cursor = self.grid?;

            if cursor.pattern.vertical_count.is_some_and(|rows| cursor.row >= rows) {
                self.finished = true;
                return None;
            }

            let Some(y) = offset(region.y, cursor.cell.y, cursor.row, cursor.cell.height) else {
                return self.overflow("tile row position");
            };
            let Some(bottom) = y.checked_add(region.height) else {
                return self.overflow("tile bottom edge");
            };
            if bottom > self.image_height {
                self.finished = true;
                return None;
            }

            let row_full = cursor.pattern.horizontal_count.is_some_and(|columns| cursor.column >= columns);
            let right = if row_full {
                None
            } else {
                let Some(x) = offset(region.x, cursor.cell.x, cursor.column, cursor.cell.width) else {
                    return self.overflow("tile column position");
                };
                let Some(right) = x.checked_add(region.width) else {
                    return self.overflow("tile right edge");
                };
                Some((x, right))
            };

            match right {
                Some((x, right)) if right <= self.image_width => {
                    let tile = Tile::new(
                        format!("{}.{}.{}", self.segment.name(), cursor.column, cursor.row),
                        BoundingBox::new(x, y, region.width, region.height),
                    );
                    self.grid = cursor.next_column();
                    self.finished = self.grid.is_none();
                    return Some(Ok(tile));
                },
                _ => {
                    let Some(next) = cursor.next_row() else {
                        self.finished = true;
                        return None;
                    };
                    self.grid = Some(next);
                },
            }
        }
    }
}

/// `origin + cell_offset + index * stride`, or `None` on overflow
fn offset(origin: u32, cell_offset: u32, index: u32, stride: u32) -> Option<u32> {
    origin.checked_add(cell_offset)?
        .checked_add(index.checked_mul(stride)?)
}

impl<'s> Iterator for TileIter<'s> {
    type Item = SnipResult<Tile>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.grid.is_none() {
            self.finished = true;
            return Some(Ok(Tile::new(self.segment.name(), self.segment.region())));
        }

        self.next_grid_tile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned(region: BoundingBox, pattern: Pattern) -> Segment {
        Segment::new("seg", region, Some(pattern), None).unwrap()
    }

    fn origins(segment: &Segment, width: u32, height: u32) -> Vec<(u32, u32)> {
        expand(segment, width, height)
            .map(|tile| tile.unwrap())
            .map(|tile| (tile.region.x, tile.region.y))
            .collect()
    }

    #[test]
    fn test_unpatterned_segment_yields_itself() {
        let region = BoundingBox::new(500, 500, 40, 40);
        let segment = Segment::new("whole", region, None, None).unwrap();

        for (width, height) in [(0, 0), (10, 10), (10_000, 10_000)] {
            let tiles: Vec<Tile> = expand(&segment, width, height).map(|t| t.unwrap()).collect();
            assert_eq!(tiles, vec![Tile::new("whole", region)]);
        }
    }

    #[test]
    fn test_row_clipping_and_termination() {
        let segment = patterned(BoundingBox::new(0, 0, 40, 40), Pattern::default());
        assert_eq!(origins(&segment, 100, 100), vec![(0, 0), (40, 0), (0, 40), (40, 40)]);
    }

    #[test]
    fn test_tile_names_use_column_and_row() {
        let segment = patterned(BoundingBox::new(0, 0, 40, 40), Pattern::default());
        let names: Vec<String> = expand(&segment, 100, 100).map(|t| t.unwrap().name).collect();
        assert_eq!(names, vec!["seg.0.0", "seg.1.0", "seg.0.1", "seg.1.1"]);
    }

    #[test]
    fn test_counts_limit_the_grid() {
        let segment = patterned(BoundingBox::new(0, 0, 10, 10), Pattern::new(None, Some(3), Some(2)));
        assert_eq!(
            origins(&segment, 1000, 1000),
            vec![(0, 0), (10, 0), (20, 0), (0, 10), (10, 10), (20, 10)]
        );
    }

    #[test]
    fn test_cell_offset_and_stride() {
        let cell = BoundingBox::new(2, 3, 12, 20);
        let segment = patterned(BoundingBox::new(5, 5, 8, 8), Pattern::new(Some(cell), Some(2), Some(2)));
        let tiles: Vec<Tile> = expand(&segment, 100, 100).map(|t| t.unwrap()).collect();

        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].region, BoundingBox::new(7, 8, 8, 8));
        assert_eq!(tiles[1].region, BoundingBox::new(19, 8, 8, 8));
        assert_eq!(tiles[2].region, BoundingBox::new(7, 28, 8, 8));
        assert_eq!(tiles[3].region, BoundingBox::new(19, 28, 8, 8));
    }

    #[test]
    fn test_tiles_stay_inside_image() {
        let cell = BoundingBox::new(0, 0, 7, 9);
        let segment = patterned(BoundingBox::new(3, 1, 5, 6), Pattern::new(Some(cell), None, None));
        let tiles: Vec<Tile> = expand(&segment, 37, 29).map(|t| t.unwrap()).collect();

        assert!(!tiles.is_empty());
        for tile in tiles {
            assert!(tile.region.fits_within(37, 29).unwrap(), "{} escapes the image", tile.region);
        }
    }

    #[test]
    fn test_region_right_of_image_yields_nothing() {
        let segment = patterned(BoundingBox::new(200, 0, 10, 10), Pattern::default());
        assert!(origins(&segment, 100, 100).is_empty());
    }

    #[test]
    fn test_zero_horizontal_count_yields_nothing() {
        let segment = patterned(BoundingBox::new(0, 0, 10, 10), Pattern::new(None, Some(0), None));
        assert!(origins(&segment, 100, 100).is_empty());
    }

    #[test]
    fn test_expansion_is_restartable() {
        let segment = patterned(BoundingBox::new(0, 0, 30, 30), Pattern::default());
        assert_eq!(origins(&segment, 100, 100), origins(&segment, 100, 100));
    }

    #[test]
    fn test_exhausted_column_counter_moves_to_next_row() {
        let cursor = GridCursor {
            pattern: Pattern::default(),
            cell: BoundingBox::new(0, 0, 1, 1),
            column: u32::MAX,
            row: 4,
        };

        let next = cursor.next_column().unwrap();
        assert_eq!((next.column, next.row), (0, 5));

        let last = GridCursor { row: u32::MAX, ..cursor };
        assert!(last.next_column().is_none());
        assert!(last.next_row().is_none());
    }

    #[test]
    fn test_position_overflow_is_reported() {
        let cell = BoundingBox::new(u32::MAX, 0, 1, 1);
        let segment = patterned(BoundingBox::new(1, 0, 1, 1), Pattern::new(Some(cell), None, None));
        let results: Vec<SnipResult<Tile>> = expand(&segment, u32::MAX, u32::MAX).collect();

        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(SnipError::ArithmeticOverflow(_))));
    }
}
