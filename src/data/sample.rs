use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::model::Table;

pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
pub const DEFAULT_SEED: u64 = 1;

/// How many rows to draw and which seed drives the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpec {
    pub sample_size: usize,
    pub seed: u64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Draw `spec.sample_size` rows without replacement.
///
/// Tables no larger than the sample size come back whole. Otherwise the rows
/// are returned in draw order, and the same table, size and seed always
/// select the same rows. The generator is local to the call.
pub fn random_sample_data(data: &Table, spec: SampleSpec) -> Table {
    if data.len() <= spec.sample_size {
        info!("Data only has {} entries, returning all entries", data.len());
        return data.clone();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed);
    let picked = rand::seq::index::sample(&mut rng, data.len(), spec.sample_size);
    let sampled = data.select_rows(picked.into_iter());

    info!(
        "Randomly sampled {} entries from {} entries",
        spec.sample_size,
        data.len()
    );
    sampled
}
