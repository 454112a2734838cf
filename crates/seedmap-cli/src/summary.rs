//! Biome coverage of a rendered area.

use std::collections::BTreeMap;

use seedmap_world::BiomeId;

/// Count of each biome id in a sampled area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BiomeHistogram {
    counts: BTreeMap<BiomeId, usize>,
    total: usize,
}

impl BiomeHistogram {
    pub fn from_ids(ids: &[BiomeId]) -> Self {
        let mut counts = BTreeMap::new();
        for &id in ids {
            *counts.entry(id).or_insert(0) += 1;
        }
        Self {
            counts,
            total: ids.len(),
        }
    }

    /// Number of samples.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct biomes.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, id: BiomeId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// `count` as a fraction of all samples.
    pub fn share(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    /// The `n` most common biomes, most common first; ties by ascending id.
    pub fn top(&self, n: usize) -> Vec<(BiomeId, usize)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(&id, &c)| (id, c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}
