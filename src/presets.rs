//! Named example illustrations.
//!
//! Each preset is a fixed dataset plus the encoding and transform used to
//! draw it: the word "theo" in binary and Morse, planet radii under
//! several transforms, the solar system with the Moon beside Earth, and a
//! hand-picked irregular sample.

use crate::error::{Error, Result};
use crate::normalize::Transform;
use crate::pipeline::{Illustration, Source};
use std::fmt;
use std::str::FromStr;

/// Word drawn by the text presets.
pub const PRESET_WORD: &str = "theo";

/// Mean radii in km: Sun, Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune.
pub const PLANET_RADII_KM: [f32; 9] =
    [695_508.0, 2_440.0, 6_052.0, 6_371.0, 3_390.0, 69_911.0, 58_232.0, 25_362.0, 24_622.0];

/// [`PLANET_RADII_KM`] with the Moon inserted after Earth.
pub const SOLAR_SYSTEM_RADII_KM: [f32; 10] = [
    695_508.0, 2_440.0, 6_052.0, 6_371.0, 1_737.0, 3_390.0, 69_911.0, 58_232.0, 25_362.0,
    24_622.0,
];

/// Mean orbital distance from the Sun in km, Mercury through Neptune.
pub const PLANET_DISTANCES_KM: [f32; 8] = [
    57_900_000.0,
    108_200_000.0,
    149_600_000.0,
    227_900_000.0,
    778_600_000.0,
    1_433_500_000.0,
    2_872_500_000.0,
    4_495_100_000.0,
];

/// Position of the Moon tick, just right of Earth at 3.
pub const MOON_POSITION: f32 = 3.15;

const RANDOM_LENGTHS: [f32; 10] = [0.5, 0.8, 0.3, 1.0, 0.6, 0.4, 1.2, 0.7, 0.9, 0.5];
const RANDOM_POSITIONS: [f32; 10] = [0.5, 1.0, 1.5, 2.5, 3.0, 3.5, 5.0, 6.0, 7.5, 9.0];

/// A named example illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// "theo" as 8-bit character codes.
    BinaryWord,
    /// "theo" in Morse code.
    MorseWord,
    /// Planet radii, linearly normalized.
    PlanetRadiiLinear,
    /// Planet radii through a square root.
    PlanetRadiiSqrt,
    /// Planet radii through log10.
    PlanetRadiiLog10,
    /// Sun, planets and Moon through ln, Moon beside Earth.
    SolarSystemLn,
    /// Irregular lengths at irregular positions, drawn as given.
    Random,
    /// Orbital distances through log10.
    PlanetDistancesLog10,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::BinaryWord,
        Self::MorseWord,
        Self::PlanetRadiiLinear,
        Self::PlanetRadiiSqrt,
        Self::PlanetRadiiLog10,
        Self::SolarSystemLn,
        Self::Random,
        Self::PlanetDistancesLog10,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BinaryWord => "binary-word",
            Self::MorseWord => "morse-word",
            Self::PlanetRadiiLinear => "planet-radii-linear",
            Self::PlanetRadiiSqrt => "planet-radii-sqrt",
            Self::PlanetRadiiLog10 => "planet-radii-log10",
            Self::SolarSystemLn => "solar-system-ln",
            Self::Random => "random",
            Self::PlanetDistancesLog10 => "planet-distances-log10",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BinaryWord => "the word \"theo\", one tick per bit",
            Self::MorseWord => "the word \"theo\" in Morse code",
            Self::PlanetRadiiLinear => "Sun and planet radii, linear",
            Self::PlanetRadiiSqrt => "Sun and planet radii, square root",
            Self::PlanetRadiiLog10 => "Sun and planet radii, log10",
            Self::SolarSystemLn => "Sun, planets and Moon radii, natural log",
            Self::Random => "irregular hand-picked ticks",
            Self::PlanetDistancesLog10 => "planet distances from the Sun, log10",
        }
    }

    /// The illustration this preset draws.
    #[must_use]
    pub fn illustration(self) -> Illustration {
        let radii = |transform| {
            Illustration::new(Source::Magnitudes(PLANET_RADII_KM.to_vec())).transform(transform)
        };

        match self {
            Self::BinaryWord => Illustration::new(Source::Binary(PRESET_WORD.to_string())),
            Self::MorseWord => Illustration::new(Source::Morse(PRESET_WORD.to_string())),
            Self::PlanetRadiiLinear => radii(Transform::Linear),
            Self::PlanetRadiiSqrt => radii(Transform::Sqrt),
            Self::PlanetRadiiLog10 => radii(Transform::Log10),
            Self::SolarSystemLn => {
                let positions = solar_system_positions();
                let baseline = (positions.len() - 1) as f32;
                Illustration::new(Source::Magnitudes(SOLAR_SYSTEM_RADII_KM.to_vec()))
                    .transform(Transform::Ln)
                    .positions(&positions)
                    .baseline(baseline)
            }
            Self::Random => Illustration::new(Source::Lengths(RANDOM_LENGTHS.to_vec()))
                .positions(&RANDOM_POSITIONS),
            Self::PlanetDistancesLog10 => {
                Illustration::new(Source::Magnitudes(PLANET_DISTANCES_KM.to_vec()))
                    .transform(Transform::Log10)
                    .first_position(1.0)
            }
        }
    }
}

/// Sun at 0, planets at 1..=8, Moon at [`MOON_POSITION`] after Earth.
fn solar_system_positions() -> Vec<f32> {
    let mut positions: Vec<f32> = (0..9).map(|i| i as f32).collect();
    positions.insert(4, MOON_POSITION);
    positions
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|p| p.name() == wanted).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
            Error::InvalidInput(format!("unknown preset '{s}' (known: {})", known.join(", ")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{MAX_TICK_LENGTH, MIN_TICK_LENGTH};
    use approx::assert_relative_eq;

    #[test]
    fn test_every_preset_builds() {
        for preset in Preset::ALL {
            let chart = preset.illustration().chart().unwrap();
            assert!(chart.tick_count() > 0, "{preset}");
        }
    }

    #[test]
    fn test_name_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        assert_eq!("Solar_System_Ln".parse::<Preset>().unwrap(), Preset::SolarSystemLn);
        assert!("pluto".parse::<Preset>().is_err());
    }

    #[test]
    fn test_binary_word() {
        let ticks = Preset::BinaryWord.illustration().ticks().unwrap();
        assert_eq!(ticks.len(), 32);
        assert_eq!(ticks[0].position, 0.0);
    }

    #[test]
    fn test_morse_word() {
        // t=-  h=....  e=.  o=---  with three gaps
        let lengths = Preset::MorseWord.illustration().lengths().unwrap();
        assert_eq!(
            lengths,
            vec![1.0, 0.0, 0.5, 0.5, 0.5, 0.5, 0.0, 0.5, 0.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_planet_radii_endpoints() {
        let lengths = Preset::PlanetRadiiLinear.illustration().lengths().unwrap();
        // Sun is the largest, Mercury the smallest
        assert_eq!(lengths[0], MAX_TICK_LENGTH);
        assert_eq!(lengths[1], MIN_TICK_LENGTH);
    }

    #[test]
    fn test_solar_system_layout() {
        let chart = Preset::SolarSystemLn.illustration().chart().unwrap();
        assert_eq!(
            chart.tick_positions(),
            vec![0.0, 1.0, 2.0, 3.0, 3.15, 4.0, 5.0, 6.0, 7.0, 8.0]
        );
        assert_eq!(chart.baseline_length(), 9.0);

        let ticks = chart.ticks();
        // The Moon is the smallest body
        assert_eq!(ticks[4].length, MIN_TICK_LENGTH);
        assert_eq!(ticks[0].length, MAX_TICK_LENGTH);
    }

    #[test]
    fn test_random_drawn_as_given() {
        let ticks = Preset::Random.illustration().ticks().unwrap();
        assert_eq!(ticks.len(), 10);
        assert_relative_eq!(ticks[6].length, 1.2);
        assert_relative_eq!(ticks[6].position, 5.0);
    }

    #[test]
    fn test_distances_start_at_one() {
        let chart = Preset::PlanetDistancesLog10.illustration().chart().unwrap();
        assert_eq!(chart.tick_positions().first(), Some(&1.0));
        assert_eq!(chart.baseline_length(), 9.0);
    }
}
