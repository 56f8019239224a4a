mod gui;
mod life;
mod utils;

pub use gui::App;
pub use life::{Cell, LifeField, Liveness};
pub use utils::{clock_seed, seed_from_phrase, Settings, StepLimiter, Topology};
