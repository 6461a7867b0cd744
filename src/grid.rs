use crate::cells::{offset_coordinate, Cartesian2DCoordinate, CellFlags, CompassPrimary,
                   CoordinateSmallVec, DIRECTIONS};
use crate::errors::*;
use crate::grid_displays::GridDisplay;
use crate::units::{Height, Width};
use error_chain::bail;
use std::fmt;
use std::rc::Rc;

/// A rectangular grid of cells storing carved-wall and visited bits per cell.
///
/// The cell array is allocated once at construction with every cell clear and
/// is never resized. Storage is row major: `y * width + x`.
pub struct Grid {
    width: Width,
    height: Height,
    cells: Vec<CellFlags>,
    grid_display: Option<Rc<dyn GridDisplay>>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: width: {:?}, height: {:?}, cells: {:?}",
               self.width,
               self.height,
               self.cells)
    }
}

impl Grid {
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        if width.0 < 1 || height.0 < 1 {
            bail!(ErrorKind::InvalidDimension(width.0, height.0));
        }

        Ok(Grid {
            width,
            height,
            cells: vec![CellFlags::CLEAR; width.0 * height.0],
            grid_display: None,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width.0 * self.height.0
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn set_grid_display(&mut self, grid_display: Option<Rc<dyn GridDisplay>>) {
        self.grid_display = grid_display;
    }

    #[inline]
    pub fn grid_display(&self) -> &Option<Rc<dyn GridDisplay>> {
        &self.grid_display
    }

    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// The flags of one cell.
    ///
    /// Panics if the coordinate is out of bounds - callers are expected to
    /// pre-check with `is_valid_coordinate` or use the bounds safe neighbour
    /// lookups.
    pub fn cell(&self, coord: Cartesian2DCoordinate) -> CellFlags {
        assert!(self.is_valid_coordinate(coord),
                "cell coordinate out of bounds: {:?}",
                coord);
        self.cells[self.coordinate_index(coord)]
    }

    /// Overwrite the flags of one cell. Same bounds contract as `cell`.
    pub fn set_cell(&mut self, coord: Cartesian2DCoordinate, flags: CellFlags) {
        assert!(self.is_valid_coordinate(coord),
                "cell coordinate out of bounds: {:?}",
                coord);
        let index = self.coordinate_index(coord);
        self.cells[index] = flags;
    }

    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cell(coord).is_visited()
    }

    pub fn mark_visited(&mut self, coord: Cartesian2DCoordinate) {
        let flags = self.cell(coord) | CellFlags::VISITED;
        self.set_cell(coord, flags);
    }

    /// Carve open the wall between a cell and its neighbour in the given direction.
    ///
    /// Both sides of the wall are opened in one operation so that carved
    /// connections are always bidirectional. Returns the neighbour coordinate,
    /// or None (without mutating) when the neighbour would be outside the grid.
    pub fn link(&mut self,
                coord: Cartesian2DCoordinate,
                direction: CompassPrimary)
                -> Option<Cartesian2DCoordinate> {
        let neighbour = self.neighbour_at_direction(coord, direction)?;

        let here = self.cell(coord) | CellFlags::path_bit(direction);
        self.set_cell(coord, here);
        let there = self.cell(neighbour) | CellFlags::path_bit(direction.opposite());
        self.set_cell(neighbour, there);

        Some(neighbour)
    }

    /// Is the wall of a cell in the given direction carved open?
    pub fn is_neighbour_linked(&self,
                               coord: Cartesian2DCoordinate,
                               direction: CompassPrimary)
                               -> bool {
        self.cell(coord).is_open(direction)
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        offset_coordinate(coord, direction)
            .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Cells that are to the North, East, South or West of a particular cell,
    /// but not necessarily connected by a carved passage.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        DIRECTIONS.iter()
                  .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
                  .collect()
    }

    /// Number of carved passages in the whole grid.
    /// Each passage opens a wall bit on both of its cells.
    pub fn links_count(&self) -> usize {
        self.cells
            .iter()
            .map(|flags| flags.open_walls_count())
            .sum::<usize>() / 2
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_length: self.width.0,
            cells_count: self.size(),
        }
    }

    pub fn iter_row(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Row,
            current_index: 0,
            width: self.width.0,
            height: self.height.0,
        }
    }

    pub fn iter_column(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Column,
            current_index: 0,
            width: self.width.0,
            height: self.height.0,
        }
    }

    #[inline]
    fn coordinate_index(&self, coord: Cartesian2DCoordinate) -> usize {
        coord.y as usize * self.width.0 + coord.x as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";
        let default_cell_body = String::from("   ");

        let columns_count = self.width.0;
        let rows_count = self.height.0;

        // Start by special case rendering the text for the north most boundary
        let first_grid_row: &Vec<Cartesian2DCoordinate> =
            &self.iter_row().take(1).collect::<Vec<Vec<_>>>()[0];
        let mut output = String::from(WALL_RD);
        for (index, coord) in first_grid_row.iter().enumerate() {
            output.push_str(WALL_LR_3);
            let is_east_open = self.is_neighbour_linked(*coord, CompassPrimary::East);
            if is_east_open {
                output.push_str(WALL_LR);
            } else {
                let is_last_cell = index == (columns_count - 1);
                if is_last_cell {
                    output.push_str(WALL_LD);
                } else {
                    output.push_str(WALL_LRD);
                }
            }
        }
        output.push_str("\n");

        for (index_row, row) in self.iter_row().enumerate() {

            let is_last_row = index_row == (rows_count - 1);

            // Starts off by special case rendering the west most boundary of the row
            // The top section of the cell is done by the previous row.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::from("");

            for (index_column, cell_coord) in row.into_iter().enumerate() {

                let is_first_column = index_column == 0;
                let is_last_column = index_column == (columns_count - 1);
                let east_open = self.is_neighbour_linked(cell_coord, CompassPrimary::East);
                let south_open = self.is_neighbour_linked(cell_coord, CompassPrimary::South);

                // Each cell will simply use the southern wall of the cell above
                // it as its own northern wall, so we only need to worry about the cell’s
                // body (room space), its eastern boundary ('|'), and its southern
                // boundary ('---+') minus the south west corner.
                let east_boundary = if east_open { " " } else { WALL_UD };

                // Cell Body
                if let Some(ref displayer) = self.grid_display {
                    row_middle_section_render.push_str(displayer.render_cell_body(cell_coord)
                                                               .as_str());
                } else {
                    row_middle_section_render.push_str(default_cell_body.as_str());
                }

                row_middle_section_render.push_str(east_boundary);

                if is_first_column {
                    row_bottom_section_render = if is_last_row {
                        String::from(WALL_RU)
                    } else if south_open {
                        String::from(WALL_UD)
                    } else {
                        String::from(WALL_RUD)
                    };
                }
                let south_boundary = if south_open { "   " } else { WALL_LR_3 };
                row_bottom_section_render.push_str(south_boundary);

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let access_se_from_east =
                            self.neighbour_at_direction(cell_coord, CompassPrimary::East)
                                .map_or(false,
                                        |c| self.is_neighbour_linked(c, CompassPrimary::South));
                        let access_se_from_south =
                            self.neighbour_at_direction(cell_coord, CompassPrimary::South)
                                .map_or(false,
                                        |c| self.is_neighbour_linked(c, CompassPrimary::East));
                        let show_right_section = !access_se_from_east;
                        let show_down_section = !access_se_from_south;
                        let show_up_section = !east_open;
                        let show_left_section = !south_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(row_middle_section_render.as_ref());
            output.push_str("\n");
            output.push_str(row_bottom_section_render.as_ref());
            output.push_str("\n");
        }

        write!(f, "{}", output)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_length: usize,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let y = self.current_cell_number / self.row_length;
            let x = self.current_cell_number - (y * self.row_length);
            self.current_cell_number += 1;
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        (lower_bound, Some(lower_bound))
    }
}

#[derive(Debug, Copy, Clone)]
enum BatchIterType {
    Row,
    Column,
}

#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    width: usize,
    height: usize,
}
impl Iterator for BatchIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let (batches_count, batch_length) = match self.iter_type {
            BatchIterType::Row => (self.height, self.width),
            BatchIterType::Column => (self.width, self.height),
        };
        if self.current_index < batches_count {
            let coords = (0..batch_length)
                .map(|i| {
                    if let BatchIterType::Row = self.iter_type {
                        Cartesian2DCoordinate::new(i as u32, self.current_index as u32)
                    } else {
                        Cartesian2DCoordinate::new(self.current_index as u32, i as u32)
                    }
                })
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let batches_count = match self.iter_type {
            BatchIterType::Row => self.height,
            BatchIterType::Column => self.width,
        };
        let lower_bound = batches_count - self.current_index;
        (lower_bound, Some(lower_bound))
    }
}
