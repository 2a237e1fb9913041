use crate::core::data::region::Region;

/// Dense `density × density` grid of escape counts.
///
/// Row `i` holds the counts for the `i`-th real-axis sample, column `j`
/// those for the `j`-th imaginary-axis sample. The atlas is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultAtlas {
    region: Region,
    density: usize,
    threshold: u32,
    counts: Vec<u32>,
}

impl ResultAtlas {
    /// Wraps row-major `counts`; panics if the length is not `density²`.
    pub(crate) fn from_counts(region: Region, density: usize, threshold: u32, counts: Vec<u32>) -> Self {
        assert_eq!(
            counts.len(),
            density * density,
            "atlas of density {} needs {} counts",
            density,
            density * density
        );

        Self {
            region,
            density,
            threshold,
            counts,
        }
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn density(&self) -> usize {
        self.density
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Upper end of the value range, `threshold - 1`.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.threshold - 1
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.density && j < self.density, "atlas index ({}, {}) out of range", i, j);
        self.counts[i * self.density + j]
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[u32] {
        let start = i * self.density;
        &self.counts[start..start + self.density]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks_exact(self.density)
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}
