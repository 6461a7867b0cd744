use bitflags::bitflags;
use smallvec::SmallVec;
use std::convert::From;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

/// Candidate enumeration order for every random carve choice.
/// The filtered subset keeps this order, so a given choice index always
/// selects the same direction for a given cursor cell.
pub const DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                             CompassPrimary::East,
                                             CompassPrimary::South,
                                             CompassPrimary::West];

impl CompassPrimary {
    /// The (dx, dy) grid offset of a one cell move in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            CompassPrimary::North => (0, -1),
            CompassPrimary::East => (1, 0),
            CompassPrimary::South => (0, 1),
            CompassPrimary::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

bitflags! {
    /// Per-cell wall openness and bookkeeping state.
    /// A set `PATH_*` bit means the wall in that direction has been carved open.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const CLEAR = 0x00;
        const PATH_NORTH = 0x01;
        const PATH_EAST = 0x02;
        const PATH_SOUTH = 0x04;
        const PATH_WEST = 0x08;
        const VISITED = 0x10;
    }
}

impl CellFlags {
    pub fn path_bit(direction: CompassPrimary) -> CellFlags {
        match direction {
            CompassPrimary::North => CellFlags::PATH_NORTH,
            CompassPrimary::East => CellFlags::PATH_EAST,
            CompassPrimary::South => CellFlags::PATH_SOUTH,
            CompassPrimary::West => CellFlags::PATH_WEST,
        }
    }

    /// Is the wall in the given direction carved open?
    pub fn is_open(self, direction: CompassPrimary) -> bool {
        self.contains(CellFlags::path_bit(direction))
    }

    pub fn is_visited(self) -> bool {
        self.contains(CellFlags::VISITED)
    }

    /// Number of open walls on this cell.
    pub fn open_walls_count(self) -> usize {
        DIRECTIONS.iter().filter(|&&dir| self.is_open(dir)).count()
    }
}

/// Creates a new `Cartesian2DCoordinate` offset 1 cell away in the given direction.
/// Returns None if the coordinate is not representable (coordinates are unsigned,
/// so only the zero boundaries are checked - the grid checks its own extents).
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: CompassPrimary)
                         -> Option<Cartesian2DCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        CompassPrimary::North => {
            if y > 0 {
                Some(Cartesian2DCoordinate { x, y: y - 1 })
            } else {
                None
            }
        }
        CompassPrimary::East => Some(Cartesian2DCoordinate { x: x + 1, y }),
        CompassPrimary::South => Some(Cartesian2DCoordinate { x, y: y + 1 }),
        CompassPrimary::West => {
            if x > 0 {
                Some(Cartesian2DCoordinate { x: x - 1, y })
            } else {
                None
            }
        }
    }
}
