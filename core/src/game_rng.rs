use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    // Callers must pass a non-zero len.
    pub fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut first = GameRng::new(42);
        let mut second = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(first.random_bool(), second.random_bool());
            assert_eq!(first.choose_index(9), second.choose_index(9));
        }
    }

    #[test]
    fn test_choose_index_stays_in_range() {
        let mut rng = GameRng::new(7);

        for _ in 0..100 {
            assert!(rng.choose_index(3) < 3);
        }
    }

    #[test]
    fn test_from_random_remembers_its_seed() {
        let rng = GameRng::from_random();
        let mut replay = GameRng::new(rng.seed());

        assert!(replay.choose_index(9) < 9);
    }
}
