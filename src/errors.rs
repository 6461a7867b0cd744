use error_chain::*;

error_chain! {

    errors {
        InvalidDimension(width: usize, height: usize) {
            description("grid dimensions must be at least 1x1")
            display("invalid grid dimension: {}x{}", width, height)
        }
        OutOfBounds(x: u32, y: u32) {
            description("coordinate is outside the grid")
            display("coordinate ({}, {}) is outside the grid", x, y)
        }
    }
}
