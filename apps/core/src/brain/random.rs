use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform choices for reply templates and tips.
pub trait ReplyRng: Send {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// `ReplyRng` backed by `rand`'s standard generator.
pub struct StdReplyRng {
    rng: StdRng,
}

impl StdReplyRng {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, used for scripted sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ReplyRng for StdReplyRng {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Picks one item uniformly, `None` for an empty pool.
pub fn choose<'a>(rng: &mut dyn ReplyRng, items: &'a [String]) -> Option<&'a str> {
    if items.is_empty() {
        return None;
    }
    let idx = rng.pick(items.len()).min(items.len() - 1);
    Some(items[idx].as_str())
}
