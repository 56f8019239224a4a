use super::{Cell, Liveness};
use crate::Topology;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Double-buffered Game of Life field.
///
/// `cells_curr` is read during a step while `cells_next` is rebuilt from a
/// cleared state; afterwards the buffers swap roles, so a step never observes
/// its own writes and no partially written cell survives the swap.
pub struct LifeField {
    cells_curr: Vec<Cell>,
    cells_next: Vec<Cell>,
    width: usize,
    height: usize,
    topology: Topology,
    liveness: Liveness,
    fade: bool,
    generation: u64,
}

impl LifeField {
    pub fn blank(
        width: usize,
        height: usize,
        topology: Topology,
        liveness: Liveness,
        fade: bool,
    ) -> Self {
        assert!(width >= 1 && height >= 1);
        let size = width * height;
        Self {
            cells_curr: vec![Cell::DEAD; size],
            cells_next: vec![Cell::DEAD; size],
            width,
            height,
            topology,
            liveness,
            fade,
            generation: 0,
        }
    }

    /// Populates the field from an explicitly seeded generator: every cell
    /// independently starts alive with probability `1 / rand_mod`.
    pub fn randomize(&mut self, seed: u64, rand_mod: u32) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for cell in self.cells_curr.iter_mut() {
            *cell = if rng.gen_range(0..rand_mod) == 0 {
                Cell::BORN
            } else {
                Cell::DEAD
            };
        }
        self.cells_next.fill(Cell::DEAD);
        self.generation = 0;
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current buffer, row-major, `width * height` cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells_curr
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Cell {
        self.cells_curr[x + y * self.width]
    }

    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells_curr[x + y * self.width] = cell;
    }

    fn alive(&self, x: usize, y: usize) -> bool {
        self.cells_curr[x + y * self.width].is_alive(self.liveness)
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        match self.topology {
            Topology::Torus => {
                let x1 = if x == 0 { self.width - 1 } else { x - 1 };
                let x2 = if x == self.width - 1 { 0 } else { x + 1 };
                let y1 = if y == 0 { self.height - 1 } else { y - 1 };
                let y2 = if y == self.height - 1 { 0 } else { y + 1 };
                self.alive(x1, y1) as usize
                    + self.alive(x, y1) as usize
                    + self.alive(x2, y1) as usize
                    + self.alive(x1, y) as usize
                    + self.alive(x2, y) as usize
                    + self.alive(x1, y2) as usize
                    + self.alive(x, y2) as usize
                    + self.alive(x2, y2) as usize
            }
            Topology::Bounded => {
                let mut neibs = 0;
                for ny in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
                    for nx in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                        if nx != x || ny != y {
                            neibs += self.alive(nx, ny) as usize;
                        }
                    }
                }
                neibs
            }
        }
    }

    /// Advances the field `n` generations.
    pub fn update(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// One generation: reads `cells_curr` and writes the pre-cleared
    /// `cells_next`, then swaps the buffers.
    pub fn step(&mut self) {
        self.cells_next.fill(Cell::DEAD);
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neibs(x, y);
                let i = x + y * self.width;
                let cell = self.cells_curr[i];
                if cell.is_alive(self.liveness) {
                    if neibs == 2 || neibs == 3 {
                        self.cells_next[i] = if self.fade { cell.faded() } else { cell };
                    }
                } else if neibs == 3 {
                    self.cells_next[i] = Cell::BORN;
                }
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: usize, height: usize, topology: Topology) -> LifeField {
        LifeField::blank(width, height, topology, Liveness::Lit, false)
    }

    #[test]
    fn neighbor_count_wraps_around_corners() {
        let mut torus = blank(4, 4, Topology::Torus);
        torus.set_cell(3, 3, Cell::BORN);
        assert_eq!(torus.count_neibs(0, 0), 1);
        assert_eq!(torus.count_neibs(2, 2), 1);
        assert_eq!(torus.count_neibs(1, 1), 0);

        let mut bounded = blank(4, 4, Topology::Bounded);
        bounded.set_cell(3, 3, Cell::BORN);
        assert_eq!(bounded.count_neibs(0, 0), 0);
        assert_eq!(bounded.count_neibs(2, 2), 1);
    }

    #[test]
    fn neighbor_count_sees_the_full_moore_neighborhood() {
        let mut field = blank(3, 3, Topology::Bounded);
        for y in 0..3 {
            for x in 0..3 {
                field.set_cell(x, y, Cell::BORN);
            }
        }
        assert_eq!(field.count_neibs(1, 1), 8);
        assert_eq!(field.count_neibs(0, 0), 3);
        assert_eq!(field.count_neibs(1, 0), 5);
    }

    #[test]
    fn step_clears_stale_state_from_the_back_buffer() {
        let mut field = blank(4, 4, Topology::Bounded);
        field.set_cell(1, 1, Cell::BORN);
        // The lone cell dies; two steps later nothing of it may linger in
        // either buffer.
        field.update(2);
        assert!(field.cells().iter().all(|&c| c == Cell::DEAD));
    }

    #[test]
    fn generation_counter_tracks_steps() {
        let mut field = blank(4, 4, Topology::Torus);
        field.randomize(7, 3);
        assert_eq!(field.generation(), 0);
        field.update(5);
        assert_eq!(field.generation(), 5);
        field.randomize(7, 3);
        assert_eq!(field.generation(), 0);
    }
}
