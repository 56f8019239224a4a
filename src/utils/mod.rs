mod seed;
mod settings;
mod step_limit;
mod topology;

pub use seed::{clock_seed, seed_from_phrase};
pub use settings::Settings;
pub use step_limit::StepLimiter;
pub use topology::Topology;
