//! Precomputed cubic Hermite basis coefficients.

use crate::error::Error;

/// The four cubic Hermite basis functions evaluated at one parameter value.
///
/// `c1` and `c2` weight the start and end positions, `c3` and `c4` the start
/// and end tangents (`h00`, `h01`, `h10`, `h11` in the usual notation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasisEntry {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
}

/// Basis coefficients for a fixed number of subdivisions.
///
/// The entries are laid out as `subdivisions + 2` values: the `t = 0`
/// limit, the interior samples at `t = i / subdivisions` for
/// `i in 0..subdivisions`, then the `t = 1` limit. Sampling only ever reads
/// the interior run (see [`BasisCache::steps`]); the two outer entries record
/// the limiting values at the ends of a segment.
#[derive(Clone, Debug, PartialEq)]
pub struct BasisCache {
    entries: Vec<BasisEntry>,
}

impl BasisEntry {
    /// The basis at `t = 0`, which selects the start point.
    pub const START: BasisEntry = BasisEntry {
        c1: 1.0,
        c2: 0.0,
        c3: 0.0,
        c4: 0.0,
    };

    /// The basis at `t = 1`, which selects the end point.
    pub const END: BasisEntry = BasisEntry {
        c1: 0.0,
        c2: 1.0,
        c3: 0.0,
        c4: 0.0,
    };

    /// Evaluate the basis at parameter `t`.
    pub fn at(t: f64) -> BasisEntry {
        let t2 = t * t;
        let t3 = t2 * t;
        BasisEntry {
            c1: 2.0 * t3 - 3.0 * t2 + 1.0,
            c2: 3.0 * t2 - 2.0 * t3,
            c3: t3 - 2.0 * t2 + t,
            c4: t3 - t2,
        }
    }
}

impl BasisCache {
    /// Build the cache for `subdivisions` samples per segment.
    pub fn new(subdivisions: usize) -> Result<BasisCache, Error> {
        if subdivisions < 1 {
            return Err(Error::ZeroSubdivisions);
        }
        let mut entries = Vec::with_capacity(subdivisions + 2);
        entries.push(BasisEntry::START);
        let n = subdivisions as f64;
        entries.extend((0..subdivisions).map(|i| BasisEntry::at(i as f64 / n)));
        entries.push(BasisEntry::END);
        Ok(BasisCache { entries })
    }

    /// The number of samples taken per segment.
    pub fn subdivisions(&self) -> usize {
        self.entries.len() - 2
    }

    /// The interior entries, one per sample, in increasing `t`.
    pub fn steps(&self) -> &[BasisEntry] {
        &self.entries[1..self.entries.len() - 1]
    }

    pub fn start(&self) -> BasisEntry {
        self.entries[0]
    }

    pub fn end(&self) -> BasisEntry {
        self.entries[self.entries.len() - 1]
    }

    /// All entries, sentinels included.
    pub fn entries(&self) -> &[BasisEntry] {
        &self.entries
    }
}
