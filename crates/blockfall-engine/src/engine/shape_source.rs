use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParseShapeSeedError, ParseShapeSequenceError, ShapeKind};

/// Supplies the shape of each newly spawned piece.
///
/// The session only ever asks for "the next shape", so any strategy can be
/// plugged in: uniform random choice, a fixed script, or a bag randomizer.
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeKind;
}

impl<S> ShapeSource for &mut S
where
    S: ShapeSource + ?Sized,
{
    fn next_shape(&mut self) -> ShapeKind {
        (**self).next_shape()
    }
}

impl<S> ShapeSource for Box<S>
where
    S: ShapeSource + ?Sized,
{
    fn next_shape(&mut self) -> ShapeKind {
        (**self).next_shape()
    }
}

/// Seed for deterministic shape generation.
///
/// A 128-bit seed for [`UniformShapes`]. The same seed always yields the
/// same sequence of shapes, which makes sessions reproducible.
///
/// Seeds are written as 32 hex digits, both by [`fmt::Display`] and in
/// serialized form.
///
/// # Example
///
/// ```
/// use blockfall_engine::ShapeSeed;
///
/// let seed: ShapeSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// assert_eq!(seed.to_string(), "0123456789abcdef0123456789abcdef");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSeed([u8; 16]);

impl ShapeSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for ShapeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = u128::from_be_bytes(self.0);
        write!(f, "{num:032x}")
    }
}

impl FromStr for ShapeSeed {
    type Err = ParseShapeSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseShapeSeedError::InvalidLength(s.len()));
        }
        let num = u128::from_str_radix(s, 16).map_err(ParseShapeSeedError::InvalidHex)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for ShapeSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShapeSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<ShapeSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ShapeSeed(seed)
    }
}

/// Picks each shape uniformly at random from the five-shape catalog.
///
/// There is no bag: any shape may repeat any number of times.
#[derive(Debug, Clone)]
pub struct UniformShapes {
    seed: ShapeSeed,
    rng: Pcg32,
}

impl Default for UniformShapes {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformShapes {
    /// Creates a source with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic play.
    #[must_use]
    pub fn with_seed(seed: ShapeSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// The seed this source was created from.
    #[must_use]
    pub fn seed(&self) -> ShapeSeed {
        self.seed
    }
}

impl ShapeSource for UniformShapes {
    fn next_shape(&mut self) -> ShapeKind {
        self.rng.random()
    }
}

/// Replays a fixed list of shapes, wrapping around at the end.
///
/// # Panics
///
/// [`SequenceShapes::new`] panics if the list is empty.
#[derive(Debug, Clone)]
pub struct SequenceShapes {
    shapes: Vec<ShapeKind>,
    next: usize,
}

impl SequenceShapes {
    #[must_use]
    pub fn new(shapes: impl Into<Vec<ShapeKind>>) -> Self {
        let shapes = shapes.into();
        assert!(!shapes.is_empty(), "shape sequence must not be empty");
        Self { shapes, next: 0 }
    }
}

/// Written as its shape letters, e.g. `IJOST`.
impl fmt::Display for SequenceShapes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.shapes
            .iter()
            .try_for_each(|kind| write!(f, "{}", kind.as_char()))
    }
}

/// Parses a string of shape letters such as `IJOST`, case-insensitively.
/// Replay starts from the first letter.
impl FromStr for SequenceShapes {
    type Err = ParseShapeSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shapes = s
            .chars()
            .map(|c| {
                ShapeKind::from_char(c.to_ascii_uppercase())
                    .ok_or(ParseShapeSequenceError::InvalidShape(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if shapes.is_empty() {
            return Err(ParseShapeSequenceError::Empty);
        }
        Ok(Self { shapes, next: 0 })
    }
}

impl ShapeSource for SequenceShapes {
    fn next_shape(&mut self) -> ShapeKind {
        let shape = self.shapes[self.next];
        self.next = (self.next + 1) % self.shapes.len();
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod shape_seed {
        use super::*;

        #[test]
        fn test_roundtrip_random_seed() {
            let seed: ShapeSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let deserialized: ShapeSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(seed, deserialized);
        }

        #[test]
        fn test_known_value_sequential_bytes() {
            let seed = ShapeSeed::from_bytes([
                0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
                0x32, 0x10,
            ]);
            assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
            assert_eq!(
                serde_json::to_string(&seed).unwrap(),
                "\"0123456789abcdeffedcba9876543210\""
            );
        }

        #[test]
        fn test_parse_accepts_uppercase() {
            let seed: ShapeSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
            assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
        }

        #[test]
        fn test_parse_rejects_wrong_length() {
            let err = "0123".parse::<ShapeSeed>().unwrap_err();
            assert!(matches!(err, ParseShapeSeedError::InvalidLength(4)));
            assert!(err.to_string().contains("invalid seed"));
            assert!("".parse::<ShapeSeed>().is_err());
        }

        #[test]
        fn test_parse_rejects_non_hex() {
            let err = "ghijklmnopqrstuvwxyzghijklmnopqr"
                .parse::<ShapeSeed>()
                .unwrap_err();
            assert!(matches!(err, ParseShapeSeedError::InvalidHex(_)));
        }

        #[test]
        fn test_deserialize_error_is_reported() {
            let result: Result<ShapeSeed, _> = serde_json::from_str("\"abc\"");
            assert!(result.unwrap_err().to_string().contains("invalid seed"));
        }
    }

    #[test]
    fn test_same_seed_same_shapes() {
        let seed: ShapeSeed = rand::rng().random();
        let mut a = UniformShapes::with_seed(seed);
        let mut b = UniformShapes::with_seed(seed);
        for _ in 0..50 {
            assert_eq!(a.next_shape(), b.next_shape());
        }
        assert_eq!(a.seed(), seed);
    }

    #[test]
    fn test_uniform_shapes_cover_catalog() {
        let mut shapes = UniformShapes::with_seed(ShapeSeed::from_bytes([7; 16]));
        let mut counts = [0usize; ShapeKind::LEN];
        for _ in 0..5000 {
            counts[shapes.next_shape() as usize] += 1;
        }
        // Roughly 1000 each; loose bounds keep this robust.
        for count in counts {
            assert!((700..1300).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn test_sequence_wraps_around() {
        let mut shapes = SequenceShapes::new([ShapeKind::I, ShapeKind::T]);
        let drawn: Vec<_> = (0..5).map(|_| shapes.next_shape()).collect();
        assert_eq!(
            drawn,
            [
                ShapeKind::I,
                ShapeKind::T,
                ShapeKind::I,
                ShapeKind::T,
                ShapeKind::I
            ]
        );
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_sequence_rejects_empty() {
        let _ = SequenceShapes::new(Vec::new());
    }

    #[test]
    fn test_sequence_from_letters() {
        let mut shapes: SequenceShapes = "ijOsT".parse().unwrap();
        assert_eq!(shapes.to_string(), "IJOST");
        let drawn: Vec<_> = (0..6).map(|_| shapes.next_shape()).collect();
        assert_eq!(
            drawn,
            [
                ShapeKind::I,
                ShapeKind::J,
                ShapeKind::O,
                ShapeKind::S,
                ShapeKind::T,
                ShapeKind::I,
            ]
        );
    }

    #[test]
    fn test_sequence_rejects_bad_letters() {
        assert_eq!(
            "".parse::<SequenceShapes>().unwrap_err(),
            ParseShapeSequenceError::Empty
        );
        assert_eq!(
            "IZT".parse::<SequenceShapes>().unwrap_err(),
            ParseShapeSequenceError::InvalidShape('Z')
        );
    }

    #[test]
    fn test_boxed_source() {
        let mut shapes: Box<dyn ShapeSource> = Box::new(SequenceShapes::new([ShapeKind::O]));
        assert_eq!(shapes.next_shape(), ShapeKind::O);
    }
}
