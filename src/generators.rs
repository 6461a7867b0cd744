use crate::cells::{Cartesian2DCoordinate, DirectionSmallVec, DIRECTIONS};
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_displays::GridDisplay;
use crate::units::{Height, Width};
use error_chain::bail;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::rc::Rc;

/// Source of uniform random choices over an ordered candidate list.
///
/// The maze generator draws exactly one choice per carved passage, so any two
/// sources producing the same index sequence produce the same maze. Abstracting
/// the source lets tests drive the generator with a scripted sequence of
/// choices instead of a real random number stream.
pub trait ChoiceSource {
    /// A uniform index in `[0, upper)`. `upper` is always at least 1.
    fn choose_index(&mut self, upper: usize) -> usize;
}

/// The default `ChoiceSource`, backed by the xorshift generator seeded from a
/// single integer.
#[derive(Clone)]
pub struct XorShiftChoice {
    rng: XorShiftRng,
}

impl XorShiftChoice {
    pub fn new(seed: u64) -> XorShiftChoice {
        // Xorshift state must never be all zeroes, which the mixing constants
        // guarantee for every input seed.
        let lo = seed as u32;
        let hi = (seed >> 32) as u32;
        let state = [lo ^ 0x9e37_79b9,
                     hi ^ 0x85eb_ca6b,
                     lo.wrapping_shl(1) ^ 0xc2b2_ae35,
                     hi ^ 0x27d4_eb2f];
        XorShiftChoice { rng: XorShiftRng::from_seed(state) }
    }
}

impl ChoiceSource for XorShiftChoice {
    fn choose_index(&mut self, upper: usize) -> usize {
        self.rng.gen::<usize>() % upper
    }
}

/// What one `step` call did.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct StepOutcome {
    /// False once every cell has been visited - generation is finished and
    /// further steps are no-ops.
    pub still_advancing: bool,
    /// True when this step carved a passage into a fresh cell rather than
    /// backtracking out of a dead end.
    pub cell_carved: bool,
}

/// The randomized depth-first-search ("recursive backtracker") maze builder,
/// driven one step at a time.
///
/// The search stack holds the simple path of visited coordinates from the
/// start cell to the current cursor (the top entry). Each step either carves
/// into a randomly chosen unvisited neighbour of the cursor, or pops the stack
/// when the cursor is a dead end. The caller owns the pacing: repeatedly call
/// `step` (or `advance_tick`) until `still_advancing` is false.
///
/// Resetting or reparameterizing means constructing a fresh generator - stack,
/// grid and random state are never partially reused.
#[derive(Debug)]
pub struct RecursiveBacktracker<R: ChoiceSource = XorShiftChoice> {
    grid: Grid,
    stack: Vec<Cartesian2DCoordinate>,
    visited_count: usize,
    choices: R,
}

impl RecursiveBacktracker<XorShiftChoice> {
    pub fn new(width: Width,
               height: Height,
               start: Cartesian2DCoordinate,
               seed: u64)
               -> Result<RecursiveBacktracker<XorShiftChoice>> {
        RecursiveBacktracker::with_choice_source(width, height, start, XorShiftChoice::new(seed))
    }
}

impl<R: ChoiceSource> RecursiveBacktracker<R> {
    pub fn with_choice_source(width: Width,
                              height: Height,
                              start: Cartesian2DCoordinate,
                              choices: R)
                              -> Result<RecursiveBacktracker<R>> {
        let mut grid = Grid::new(width, height)?;
        if !grid.is_valid_coordinate(start) {
            bail!(ErrorKind::OutOfBounds(start.x, start.y));
        }
        grid.mark_visited(start);

        Ok(RecursiveBacktracker {
            grid,
            stack: vec![start],
            visited_count: 1,
            choices,
        })
    }

    /// Advance the maze construction by one step.
    ///
    /// A step is one of:
    /// - a no-op once every cell is visited: `(still_advancing: false, cell_carved: false)`
    /// - a carve into a random unvisited neighbour of the cursor: `(true, true)`
    /// - a backtrack pop when the cursor has no unvisited neighbour: `(true, false)`
    ///
    /// Exactly one random choice is drawn per carve, over the in-bounds
    /// unvisited neighbours kept in North, East, South, West order.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_done() {
            return StepOutcome {
                still_advancing: false,
                cell_carved: false,
            };
        }

        let current = *self.stack
                           .last()
                           .expect("the search stack cannot empty before the grid is full");

        let candidates = self.unvisited_neighbours(current);
        if candidates.is_empty() {
            // Dead end: back out towards the last cell with unvisited neighbours.
            self.stack.pop();
            return StepOutcome {
                still_advancing: true,
                cell_carved: false,
            };
        }

        let direction = candidates[self.choices.choose_index(candidates.len())];
        let neighbour = self.grid
                            .link(current, direction)
                            .expect("candidate directions are always in bounds");
        self.grid.mark_visited(neighbour);
        self.stack.push(neighbour);
        self.visited_count += 1;

        StepOutcome {
            still_advancing: true,
            cell_carved: true,
        }
    }

    /// Run `step` until a cell is carved or generation completes - one visual
    /// tick of progress for a driving render loop. Returns false once the maze
    /// is finished.
    pub fn advance_tick(&mut self) -> bool {
        loop {
            let outcome = self.step();
            if outcome.cell_carved {
                return true;
            }
            if !outcome.still_advancing {
                return false;
            }
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.visited_count >= self.grid.size()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The live search stack, bottom (search start) to top (current cursor).
    #[inline]
    pub fn stack(&self) -> &[Cartesian2DCoordinate] {
        &self.stack
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn set_grid_display(&mut self, grid_display: Option<Rc<dyn GridDisplay>>) {
        self.grid.set_grid_display(grid_display);
    }

    fn unvisited_neighbours(&self, coord: Cartesian2DCoordinate) -> DirectionSmallVec {
        DIRECTIONS.iter()
                  .cloned()
                  .filter(|&dir| {
                      self.grid
                          .neighbour_at_direction(coord, dir)
                          .map_or(false, |neighbour| !self.grid.is_visited(neighbour))
                  })
                  .collect::<DirectionSmallVec>()
    }
}
