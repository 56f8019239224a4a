/// One grid position: a color triple. Dead cells are black and newborn cells
/// are full white; fading survivors pass through the shades in between.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Predicate deciding whether a cell counts as alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Liveness {
    /// First channel is nonzero. Used together with fading, where survivors
    /// keep a residual intensity above zero.
    Lit,
    /// First channel equals the maximum sentinel exactly.
    Saturated,
}

impl Cell {
    pub const CHANNEL_MAX: u8 = u8::MAX;

    /// Fading stops touching a channel once it is at or below a quarter of
    /// the full range.
    const FADE_FLOOR: u8 = Self::CHANNEL_MAX / 4;
    /// One fade tick removes a tenth of the full range from one channel.
    const FADE_STEP: u8 = Self::CHANNEL_MAX / 10;

    pub const DEAD: Self = Self { r: 0, g: 0, b: 0 };
    pub const BORN: Self = Self {
        r: Self::CHANNEL_MAX,
        g: Self::CHANNEL_MAX,
        b: Self::CHANNEL_MAX,
    };

    pub fn is_alive(self, liveness: Liveness) -> bool {
        match liveness {
            Liveness::Lit => self.r != 0,
            Liveness::Saturated => self.r == Self::CHANNEL_MAX,
        }
    }

    /// One fade tick: the first channel (r, then g, then b) still above the
    /// floor loses `FADE_STEP`. Exactly one channel moves per tick.
    #[must_use]
    pub fn faded(mut self) -> Self {
        for channel in [&mut self.r, &mut self.g, &mut self.b] {
            if *channel > Self::FADE_FLOOR {
                *channel = channel.saturating_sub(Self::FADE_STEP);
                break;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_drains_channels_in_priority_order() {
        let mut cell = Cell::BORN;
        for _ in 0..8 {
            let prev = cell;
            cell = cell.faded();
            assert!(cell.r < prev.r);
            assert_eq!((cell.g, cell.b), (Cell::CHANNEL_MAX, Cell::CHANNEL_MAX));
        }
        assert!(cell.r <= Cell::CHANNEL_MAX / 4);

        for _ in 0..8 {
            let prev = cell;
            cell = cell.faded();
            assert_eq!(cell.r, prev.r);
            assert!(cell.g < prev.g);
            assert_eq!(cell.b, Cell::CHANNEL_MAX);
        }

        for _ in 0..8 {
            let prev = cell;
            cell = cell.faded();
            assert_eq!((cell.r, cell.g), (prev.r, prev.g));
            assert!(cell.b < prev.b);
        }
    }

    #[test]
    fn fade_stops_at_the_floor() {
        let mut cell = Cell::BORN;
        for _ in 0..24 {
            cell = cell.faded();
        }
        assert!(cell.r <= Cell::CHANNEL_MAX / 4);
        assert!(cell.g <= Cell::CHANNEL_MAX / 4);
        assert!(cell.b <= Cell::CHANNEL_MAX / 4);
        assert_eq!(cell.faded(), cell);
    }

    #[test]
    fn faded_survivor_is_alive_only_when_lit_counts() {
        let faded = Cell {
            r: 100,
            g: Cell::CHANNEL_MAX,
            b: Cell::CHANNEL_MAX,
        };
        assert!(faded.is_alive(Liveness::Lit));
        assert!(!faded.is_alive(Liveness::Saturated));

        assert!(Cell::BORN.is_alive(Liveness::Lit));
        assert!(Cell::BORN.is_alive(Liveness::Saturated));
        assert!(!Cell::DEAD.is_alive(Liveness::Lit));
        assert!(!Cell::DEAD.is_alive(Liveness::Saturated));
    }
}
