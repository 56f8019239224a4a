use crate::{Liveness, Topology};
use std::time::Duration;

/// Immutable per-run configuration, resolved from the command line before the
/// window opens.
#[derive(Clone, Debug)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    /// On-screen side length of one cell, in pixels.
    pub pixel_size: u32,
    pub fullscreen: bool,
    pub step_interval: Duration,
    /// Population density divisor: a cell starts alive with probability
    /// `1 / rand_mod`.
    pub rand_mod: u32,
    pub seed: u64,
    pub topology: Topology,
    pub liveness: Liveness,
    pub fade: bool,
}

impl Settings {
    /// Field dimensions in cells: the window measured in `pixel_size` units,
    /// never smaller than one cell a side.
    pub fn canvas_size(&self) -> (usize, usize) {
        let width = (self.window_width / self.pixel_size).max(1) as usize;
        let height = (self.window_height / self.pixel_size).max(1) as usize;
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(window: (u32, u32), pixel_size: u32) -> Settings {
        Settings {
            window_width: window.0,
            window_height: window.1,
            pixel_size,
            fullscreen: false,
            step_interval: Duration::from_millis(100),
            rand_mod: 5,
            seed: 0,
            topology: Topology::Bounded,
            liveness: Liveness::Lit,
            fade: false,
        }
    }

    #[test]
    fn canvas_is_the_window_in_cell_units() {
        assert_eq!(settings((1920, 1080), 10).canvas_size(), (192, 108));
        assert_eq!(settings((1925, 1085), 10).canvas_size(), (192, 108));
    }

    #[test]
    fn canvas_never_collapses_to_zero() {
        assert_eq!(settings((4, 4), 10).canvas_size(), (1, 1));
    }
}
