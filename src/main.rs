use docopt::Docopt;
use mazetrace::{
    cells::{Cartesian2DCoordinate, CoordinateSmallVec},
    generators::RecursiveBacktracker,
    grid_displays::{GridDisplay, PathDisplay, StartEndPointsDisplay},
    pathing::GoalTracker,
    units::{Height, Width},
};
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    rc::Rc,
};

const USAGE: &str = "Mazetrace

Usage:
    mazetrace_driver -h | --help
    mazetrace_driver [--grid-width=<w> --grid-height=<h>] [--start-x=<x> --start-y=<y>] [--seed=<n>] [--trace-goal [--goal-x=<e1> --goal-y=<e2>]] [--text-out=<path>]

Options:
    -h --help          Show this screen.
    --grid-width=<w>   The grid width in a w*h grid [default: 20].
    --grid-height=<h>  The grid height in a w*h grid [default: 20].
    --start-x=<x>      x coordinate of the cell the carving starts from [default: 0].
    --start-y=<y>      y coordinate of the cell the carving starts from [default: 0].
    --seed=<n>         Seed for the maze random source [default: 1234].
    --trace-goal       Check for the goal cell on the live search stack after every carve and overlay the traced path on the rendering.
    --goal-x=<e1>      x coordinate of the goal cell. Defaults to the far corner.
    --goal-y=<e2>      y coordinate of the goal cell. Defaults to the far corner.
    --text-out=<path>  Output file path for the textual rendering of the maze.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_start_x: u32,
    flag_start_y: u32,
    flag_seed: u64,
    flag_trace_goal: bool,
    flag_goal_x: Option<u32>,
    flag_goal_y: Option<u32>,
    flag_text_out: String,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazetrace::errors::Error, ::mazetrace::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let start = Cartesian2DCoordinate::new(args.flag_start_x, args.flag_start_y);
    let mut generator = RecursiveBacktracker::new(Width(args.flag_grid_width),
                                                  Height(args.flag_grid_height),
                                                  start,
                                                  args.flag_seed)?;

    let goal = if args.flag_trace_goal {
        let far_corner = Cartesian2DCoordinate::new(args.flag_grid_width as u32 - 1,
                                                    args.flag_grid_height as u32 - 1);
        Some(Cartesian2DCoordinate::new(args.flag_goal_x.unwrap_or(far_corner.x),
                                        args.flag_goal_y.unwrap_or(far_corner.y)))
    } else {
        None
    };

    // The driving pattern an animating render loop would use: one tick per
    // carved cell, checking the goal against the live stack after each tick.
    let mut tracker = GoalTracker::new();
    let mut ticks = 0;
    while generator.advance_tick() {
        ticks += 1;
        if let Some(goal_coord) = goal {
            tracker.check_goal_reached(generator.stack(), goal_coord);
        }
    }

    let display: Rc<dyn GridDisplay> = if tracker.goal_found() {
        Rc::new(PathDisplay::new(tracker.goal_path()))
    } else {
        let starts: CoordinateSmallVec = [start].iter().cloned().collect();
        let ends: CoordinateSmallVec = goal.iter().cloned().collect();
        Rc::new(StartEndPointsDisplay::new(starts, ends))
    };
    generator.set_grid_display(Some(display));

    let rendered = format!("{}", generator.grid());
    if args.flag_text_out.is_empty() {
        println!("{}", rendered);
    } else {
        write_text_to_file(&rendered, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    println!("seed: {}, visited: {} cells in {} ticks",
             args.flag_seed,
             generator.visited_count(),
             ticks);
    if let Some(goal_coord) = goal {
        if tracker.goal_found() {
            println!("goal ({}, {}) is on the final search stack, traced {} cells back to the start",
                     goal_coord.x,
                     goal_coord.y,
                     tracker.goal_path().len());
        } else {
            println!("goal ({}, {}) was backtracked off the live search stack",
                     goal_coord.x,
                     goal_coord.y);
        }
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
