//! **mazetrace** is an incremental maze construction library: a randomized
//! depth-first-search generator that is stepped one carve at a time by an
//! external driver, with live goal-path extraction from the in-progress
//! search stack and textual grid rendering.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod pathing;
pub mod units;
mod utils;
