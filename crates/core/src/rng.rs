use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

/// Seeded game randomness. The seed is kept so a game can be replayed.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().next_u64())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_permutation() {
        let mut left: Vec<u32> = (0..40).collect();
        let mut right = left.clone();
        RngState::from_seed(7).shuffle(&mut left);
        RngState::from_seed(7).shuffle(&mut right);
        assert_eq!(left, right);
        assert_ne!(left, (0..40).collect::<Vec<_>>());
    }
}
