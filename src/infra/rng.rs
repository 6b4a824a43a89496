use crate::bracket::RandomSource;

/// Перемешать состав через любой генератор `rand`.
#[cfg(not(target_arch = "wasm32"))]
fn draw_with<G: rand::Rng + ?Sized, T>(rng: &mut G, roster: &mut [T]) {
    use rand::seq::SliceRandom;
    roster.shuffle(rng);
}

/// Жеребьёвка на системной энтропии (оффчейн, без повторяемости).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        draw_with(&mut rand::thread_rng(), slice);
    }
}

/// Повторяемая жеребьёвка: одинаковый seed = одинаковый порядок команд
/// = одинаковая сетка. Seed хранится, чтобы его можно было показать
/// участникам и перепроверить результат.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    seed: u64,
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            seed,
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        draw_with(&mut self.inner, slice);
    }
}

// В контракте Linera rand недоступен, а исполнение должно быть
// детерминированным: состав остаётся в порядке регистрации.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(target_arch = "wasm32")]
impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}
