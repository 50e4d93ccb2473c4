use rand::Rng;
use serde::{Deserialize, Serialize};

/// An RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a uniform random color.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }

    /// Draw a uniform random color that differs from `other`.
    ///
    /// Rejection sampling: terminates with probability 1 since the draw
    /// space has 2^24 values.
    pub fn sample_distinct<R: Rng + ?Sized>(rng: &mut R, other: Color) -> Self {
        loop {
            let color = Self::sample(rng);
            if color != other {
                return color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_distinct_differs() {
        let mut rng = StdRng::seed_from_u64(11);
        let background = Color::sample(&mut rng);
        for _ in 0..64 {
            assert_ne!(Color::sample_distinct(&mut rng, background), background);
        }
    }
}
