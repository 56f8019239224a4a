use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed for a user-supplied phrase. `DefaultHasher::new()` uses fixed keys,
/// so the same phrase reproduces the same simulation on every run.
pub fn seed_from_phrase(phrase: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    phrase.hash(&mut hasher);
    hasher.finish()
}

/// Clock-derived seed for runs without an explicit phrase.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::seed_from_phrase;

    #[test]
    fn phrases_hash_deterministically() {
        assert_eq!(seed_from_phrase("glider"), seed_from_phrase("glider"));
        assert_ne!(seed_from_phrase("glider"), seed_from_phrase("blinker"));
        assert_ne!(seed_from_phrase(""), seed_from_phrase(" "));
    }
}
