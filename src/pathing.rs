use crate::cells::Cartesian2DCoordinate;

/// Extracts the live goal path from a generator's search stack.
///
/// A goal is "reached" only while it sits on the live DFS stack, i.e. it is an
/// ancestor of the current cursor in the growing spanning tree. A goal cell
/// that has already been visited and backtracked away reports not-found even
/// though the finished maze connects it to the start - this tracks the live
/// search, not final maze connectivity.
///
/// The last *found* goal is cached: repeating that query returns the stored
/// path untouched, even if the generator has advanced in between.
#[derive(Debug, Clone, Default)]
pub struct GoalTracker {
    goal_path: Vec<Cartesian2DCoordinate>,
    last_goal: Option<Cartesian2DCoordinate>,
    goal_found: bool,
}

impl GoalTracker {
    pub fn new() -> GoalTracker {
        GoalTracker::default()
    }

    /// Scan the search stack for `goal` and remember the path from it back to
    /// the search start.
    ///
    /// The stack is scanned from its top (current cursor) down to its bottom
    /// (search start). When the goal is found, the stored path is the
    /// contiguous run from that entry through the bottom of the stack, ordered
    /// goal first. When it is not found the stored path is cleared.
    pub fn check_goal_reached(&mut self,
                              stack: &[Cartesian2DCoordinate],
                              goal: Cartesian2DCoordinate)
                              -> bool {
        if self.goal_found && self.last_goal == Some(goal) {
            return true;
        }

        let mut path = Vec::new();
        let mut found = false;
        for &coord in stack.iter().rev() {
            if coord == goal {
                found = true;
            }
            if found {
                path.push(coord);
            }
        }

        self.goal_path = path;
        self.last_goal = Some(goal);
        self.goal_found = found;
        found
    }

    /// The most recently extracted path, ordered goal to search start.
    /// Empty when the last queried goal was not on the stack.
    #[inline]
    pub fn goal_path(&self) -> &[Cartesian2DCoordinate] {
        &self.goal_path
    }

    #[inline]
    pub fn goal_found(&self) -> bool {
        self.goal_found
    }

    #[inline]
    pub fn last_goal(&self) -> Option<Cartesian2DCoordinate> {
        self.last_goal
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators::{ChoiceSource, RecursiveBacktracker};
    use crate::units::{Height, Width};

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn goal_scan_extracts_stack_suffix() {
        // Stack bottom to top [S, A, B, C]; scanning top down finds A and
        // keeps the remainder of the scan: [A, S].
        let s = gc(0, 0);
        let a = gc(1, 0);
        let b = gc(1, 1);
        let c = gc(0, 1);
        let stack = [s, a, b, c];

        let mut tracker = GoalTracker::new();
        assert!(tracker.check_goal_reached(&stack, a));
        assert!(tracker.goal_found());
        assert_eq!(tracker.goal_path(), &[a, s]);
        assert_eq!(tracker.last_goal(), Some(a));
    }

    #[test]
    fn goal_at_cursor_yields_whole_stack_reversed() {
        let stack = [gc(0, 0), gc(0, 1), gc(1, 1)];
        let mut tracker = GoalTracker::new();
        assert!(tracker.check_goal_reached(&stack, gc(1, 1)));
        assert_eq!(tracker.goal_path(), &[gc(1, 1), gc(0, 1), gc(0, 0)]);
    }

    #[test]
    fn absent_goal_clears_the_path() {
        let stack = [gc(0, 0), gc(1, 0)];
        let mut tracker = GoalTracker::new();
        assert!(tracker.check_goal_reached(&stack, gc(1, 0)));
        assert!(!tracker.goal_path().is_empty());

        assert!(!tracker.check_goal_reached(&stack, gc(5, 5)));
        assert!(!tracker.goal_found());
        assert!(tracker.goal_path().is_empty());
        assert_eq!(tracker.last_goal(), Some(gc(5, 5)));
    }

    #[test]
    fn repeated_found_goal_short_circuits() {
        let goal = gc(1, 0);
        let mut tracker = GoalTracker::new();
        assert!(tracker.check_goal_reached(&[gc(0, 0), goal, gc(1, 1)], goal));
        let cached_path = tracker.goal_path().to_vec();

        // The search has since backtracked the goal off the stack - the cached
        // result is returned unchanged.
        assert!(tracker.check_goal_reached(&[gc(0, 0)], goal));
        assert_eq!(tracker.goal_path(), cached_path.as_slice());
    }

    #[test]
    fn not_found_goal_is_rescanned() {
        let goal = gc(1, 0);
        let mut tracker = GoalTracker::new();
        assert!(!tracker.check_goal_reached(&[gc(0, 0)], goal));

        // Same goal again, but the stack has grown to include it now.
        assert!(tracker.check_goal_reached(&[gc(0, 0), goal], goal));
        assert_eq!(tracker.goal_path(), &[goal, gc(0, 0)]);
    }

    #[test]
    fn changing_goal_recomputes() {
        let stack = [gc(0, 0), gc(0, 1), gc(1, 1)];
        let mut tracker = GoalTracker::new();
        assert!(tracker.check_goal_reached(&stack, gc(0, 1)));
        assert_eq!(tracker.goal_path(), &[gc(0, 1), gc(0, 0)]);

        assert!(tracker.check_goal_reached(&stack, gc(1, 1)));
        assert_eq!(tracker.goal_path(), &[gc(1, 1), gc(0, 1), gc(0, 0)]);
    }

    #[test]
    fn tracks_a_live_generator() {
        struct FirstCandidate;
        impl ChoiceSource for FirstCandidate {
            fn choose_index(&mut self, _: usize) -> usize {
                0
            }
        }

        // Always taking the first candidate on a 2x2 carves
        // (0,0) -> (1,0) -> (1,1) -> (0,1).
        let mut generator = RecursiveBacktracker::with_choice_source(Width(2),
                                                                     Height(2),
                                                                     gc(0, 0),
                                                                     FirstCandidate)
            .unwrap();
        let mut tracker = GoalTracker::new();
        let goal = gc(1, 1);

        assert!(!tracker.check_goal_reached(generator.stack(), goal));

        while generator.advance_tick() {
            tracker.check_goal_reached(generator.stack(), goal);
        }
        assert!(tracker.goal_found());
        assert_eq!(tracker.goal_path(), &[gc(1, 1), gc(1, 0), gc(0, 0)]);
    }
}
