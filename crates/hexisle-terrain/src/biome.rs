//! Biome categories and the ordered elevation classifier.

/// Terrain category of one tile, determined solely by its height.
///
/// The enumeration is closed: batching indexes fixed-size storage by it.
/// `Water` is reserved — the classifier never returns it, because `Sand`
/// catches every height down to its own threshold and everything below
/// falls through to `Dirt`. The water line still exists as a configured
/// fraction (see [`BiomeThresholds::water`]) for the sea surface placed
/// around the island.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Highest elevations; also receives all decoration rocks.
    Stone,
    /// Fallback for the lowest elevations.
    Dirt,
    /// Upland dirt band between grass and stone.
    Dirt2,
    /// Mid elevations.
    Grass,
    /// Low shoreline band.
    Sand,
    /// Reserved; unreachable by classification.
    Water,
}

impl Biome {
    /// Number of biome categories.
    pub const COUNT: usize = 6;

    /// Every category, in declaration order.
    pub const ALL: [Biome; Biome::COUNT] = [
        Biome::Stone,
        Biome::Dirt,
        Biome::Dirt2,
        Biome::Grass,
        Biome::Sand,
        Biome::Water,
    ];

    /// Dense index for array storage keyed by biome.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Biome::Stone => "stone",
            Biome::Dirt => "dirt",
            Biome::Dirt2 => "dirt2",
            Biome::Grass => "grass",
            Biome::Sand => "sand",
            Biome::Water => "water",
        }
    }
}

/// Classification thresholds as fractions of the maximum height.
///
/// Must be strictly decreasing from `stone` down to `sand`; each band is
/// entered with an inclusive lower bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeThresholds {
    /// Stone at and above this fraction.
    pub stone: f64,
    /// Upland dirt band.
    pub dirt2: f64,
    /// Grass band.
    pub grass: f64,
    /// Sand band; everything below is plain dirt.
    pub sand: f64,
    /// Reserved water line. Not consulted by classification; marks the sea
    /// surface level for the scenery around the island.
    pub water: f64,
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self {
            stone: 0.8,
            dirt2: 0.7,
            grass: 0.5,
            sand: 0.3,
            water: 0.2,
        }
    }
}

/// Maps a height sample to its biome by the ordered threshold table.
#[derive(Clone, Copy, Debug)]
pub struct BiomeClassifier {
    max_height: f64,
    thresholds: BiomeThresholds,
}

impl BiomeClassifier {
    /// Creates a classifier for heights in `[0, max_height]`.
    pub fn new(max_height: f64, thresholds: BiomeThresholds) -> Self {
        debug_assert!(
            thresholds.stone > thresholds.dirt2
                && thresholds.dirt2 > thresholds.grass
                && thresholds.grass > thresholds.sand,
            "thresholds must be strictly decreasing"
        );
        Self {
            max_height,
            thresholds,
        }
    }

    /// Classifies a height. Total: every finite height maps to a biome,
    /// and boundary equality resolves to the higher band.
    pub fn classify(&self, height: f64) -> Biome {
        let t = &self.thresholds;
        if height >= self.max_height * t.stone {
            Biome::Stone
        } else if height >= self.max_height * t.dirt2 {
            Biome::Dirt2
        } else if height >= self.max_height * t.grass {
            Biome::Grass
        } else if height >= self.max_height * t.sand {
            Biome::Sand
        } else {
            Biome::Dirt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> BiomeClassifier {
        BiomeClassifier::new(10.0, BiomeThresholds::default())
    }

    #[test]
    fn test_band_interiors() {
        let c = classifier();
        assert_eq!(c.classify(9.5), Biome::Stone);
        assert_eq!(c.classify(7.5), Biome::Dirt2);
        assert_eq!(c.classify(5.0), Biome::Grass);
        assert_eq!(c.classify(3.0), Biome::Sand);
        assert_eq!(c.classify(0.0), Biome::Dirt);
    }

    #[test]
    fn test_boundaries_are_inclusive_upward() {
        let c = classifier();
        assert_eq!(c.classify(8.0), Biome::Stone);
        assert_eq!(c.classify(7.9), Biome::Dirt2);
        assert_eq!(c.classify(7.0), Biome::Dirt2);
        assert_eq!(c.classify(5.0), Biome::Grass);
        assert_eq!(c.classify(3.0), Biome::Sand);
        assert_eq!(c.classify(2.999_999), Biome::Dirt);
    }

    #[test]
    fn test_water_is_never_produced() {
        let c = classifier();
        let mut height = 0.0;
        while height <= 10.0 {
            assert_ne!(c.classify(height), Biome::Water, "height {height}");
            height += 0.01;
        }
    }

    #[test]
    fn test_indices_are_dense_and_unique() {
        let mut seen = [false; Biome::COUNT];
        for biome in Biome::ALL {
            assert!(!seen[biome.index()]);
            seen[biome.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
