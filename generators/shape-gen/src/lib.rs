use std::error::Error;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// These are the core components from our shared library.
use playdata_helpers::DataPoint;
use rand::Rng;
use rand_distr::StandardNormal;

/// Errors that can occur when sampling a synthetic dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Cannot sample a dataset with zero points
    ZeroSamples,
    /// The requested name does not match any known shape
    UnknownShape(String),
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::ZeroSamples => write!(f, "Cannot sample a dataset with zero points"),
            ShapeError::UnknownShape(name) => {
                write!(f, "Unrecognized shape name: {}", name)
            }
        }
    }
}

impl Error for ShapeError {}

/// The four synthetic dataset shapes.
///
/// Each variant is a self-contained point sampler: two Gaussian clusters,
/// two concentric rings, two interleaved spiral arms, or uniformly
/// scattered XOR quadrants. The variant also names the dataset file the
/// generator writes (`gaussian.json`, `circle.json`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Gaussian,
    Circle,
    Spiral,
    Xor,
}

impl Shape {
    /// Every shape, in the order the generator runs them.
    pub const ALL: [Shape; 4] = [Shape::Gaussian, Shape::Circle, Shape::Spiral, Shape::Xor];

    /// The lowercase name used for dataset file stems.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Gaussian => "gaussian",
            Shape::Circle => "circle",
            Shape::Spiral => "spiral",
            Shape::Xor => "xor",
        }
    }

    /// Samples a dataset of `num_samples` points from this shape.
    ///
    /// `noise` scales the random perturbation where the shape uses one:
    /// it is the standard deviation of the Gaussian clusters and the
    /// amplitude of the spiral jitter. The circle and xor shapes carry
    /// fixed perturbations and do not consult it.
    ///
    /// Shapes that split samples between the two classes round
    /// `num_samples` down to an even count, so the result may hold one
    /// point fewer than requested. Point order is deterministic per
    /// shape; callers that need a de-correlated ordering shuffle
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::ZeroSamples` if `num_samples` is 0.
    pub fn sample<R: Rng>(
        &self,
        num_samples: usize,
        noise: f64,
        rng: &mut R,
    ) -> Result<Vec<DataPoint>, ShapeError> {
        if num_samples == 0 {
            return Err(ShapeError::ZeroSamples);
        }
        let points = match self {
            Shape::Gaussian => gaussian(num_samples, noise, rng),
            Shape::Circle => circle(num_samples, rng),
            Shape::Spiral => spiral(num_samples, noise, rng),
            Shape::Xor => xor(num_samples, rng),
        };
        Ok(points)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gaussian" => Ok(Shape::Gaussian),
            "circle" => Ok(Shape::Circle),
            "spiral" => Ok(Shape::Spiral),
            "xor" => Ok(Shape::Xor),
            other => Err(ShapeError::UnknownShape(other.to_string())),
        }
    }
}

/// Two isotropic Gaussian clusters, one per class.
///
/// The class-0 cluster sits at (-2, 3) and the class-1 cluster at (2, -3);
/// `noise` is the standard deviation of both.
fn gaussian<R: Rng>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<DataPoint> {
    let half = num_samples / 2;
    let mut points = Vec::with_capacity(2 * half);
    for (cx, cy, label) in [(-2.0, 3.0, 0), (2.0, -3.0, 1)] {
        for _ in 0..half {
            let x = cx + noise * rng.sample::<f64, _>(StandardNormal);
            let y = cy + noise * rng.sample::<f64, _>(StandardNormal);
            points.push(DataPoint::new([x, y], label));
        }
    }
    points
}

/// Two concentric rings: the inner ring is class 0, the outer class 1.
///
/// Ring angles are evenly spaced over [0, 2pi); every point is nudged by a
/// per-axis uniform jitter, with a wider jitter band on the outer ring.
fn circle<R: Rng>(num_samples: usize, rng: &mut R) -> Vec<DataPoint> {
    const OUTER_RADIUS: f64 = 10.0;
    const INNER_RADIUS: f64 = 8.0;
    const OUTER_JITTER: f64 = 2.0;
    const INNER_JITTER: f64 = 1.0;

    let half = num_samples / 2;
    let mut points = Vec::with_capacity(2 * half);
    for i in 0..half {
        let theta = 2.0 * PI * i as f64 / half as f64;
        let inner = [
            INNER_RADIUS * theta.cos() + INNER_JITTER * rng.random::<f64>(),
            INNER_RADIUS * theta.sin() + INNER_JITTER * rng.random::<f64>(),
        ];
        points.push(DataPoint::new(inner, 0));
        let outer = [
            OUTER_RADIUS * theta.cos() + OUTER_JITTER * rng.random::<f64>(),
            OUTER_RADIUS * theta.sin() + OUTER_JITTER * rng.random::<f64>(),
        ];
        points.push(DataPoint::new(outer, 1));
    }
    points
}

/// Two interleaved spiral arms half a turn apart.
///
/// The arm with no angular offset carries label 1 and the opposite arm
/// label 0. Both coordinates pick up uniform jitter in [-noise, noise].
fn spiral<R: Rng>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<DataPoint> {
    let half = num_samples / 2;
    let mut points = Vec::with_capacity(2 * half);
    for i in 0..half {
        let frac = i as f64 / half as f64;
        for (offset, label) in [(0.0, 1), (PI, 0)] {
            let r = 10.0 * frac;
            let t = 1.75 * frac * 2.0 * PI + offset;
            let x = r * t.sin() + rng.random_range(-1.0..1.0) * noise;
            let y = r * t.cos() + rng.random_range(-1.0..1.0) * noise;
            points.push(DataPoint::new([x, y], label));
        }
    }
    points
}

/// Uniform points on the unit square centered at the origin.
///
/// Points whose coordinates share a sign are class 0, the opposite-sign
/// quadrants class 1.
fn xor<R: Rng>(num_samples: usize, rng: &mut R) -> Vec<DataPoint> {
    let mut points = Vec::with_capacity(num_samples);
    for _ in 0..num_samples {
        let x = rng.random_range(-0.5..0.5);
        let y = rng.random_range(-0.5..0.5);
        let label = if x * y > 0.0 { 0 } else { 1 };
        points.push(DataPoint::new([x, y], label));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_gaussian_counts_and_means() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let points = Shape::Gaussian.sample(2000, 0.5, &mut rng).unwrap();
        assert_eq!(points.len(), 2000);

        let class0: Vec<_> = points.iter().filter(|p| p.label == 0).collect();
        let class1: Vec<_> = points.iter().filter(|p| p.label == 1).collect();
        assert_eq!(class0.len(), 1000);
        assert_eq!(class1.len(), 1000);

        let mean = |pts: &[&DataPoint], axis: usize| {
            pts.iter().map(|p| p.features[axis]).sum::<f64>() / pts.len() as f64
        };
        // Sample means sit within a few standard errors of the centers.
        assert_abs_diff_eq!(mean(&class0, 0), -2.0, epsilon = 0.15);
        assert_abs_diff_eq!(mean(&class0, 1), 3.0, epsilon = 0.15);
        assert_abs_diff_eq!(mean(&class1, 0), 2.0, epsilon = 0.15);
        assert_abs_diff_eq!(mean(&class1, 1), -3.0, epsilon = 0.15);
    }

    #[test]
    fn test_odd_sample_count_truncates() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let points = Shape::Gaussian.sample(7, 0.5, &mut rng).unwrap();
        assert_eq!(points.len(), 6);

        let points = Shape::Spiral.sample(7, 0.5, &mut rng).unwrap();
        assert_eq!(points.len(), 6);

        // xor draws every sample individually, so nothing is truncated.
        let points = Shape::Xor.sample(7, 0.5, &mut rng).unwrap();
        assert_eq!(points.len(), 7);
    }

    #[test]
    fn test_circle_radii_and_labels() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let points = Shape::Circle.sample(200, 0.5, &mut rng).unwrap();
        assert_eq!(points.len(), 200);

        for p in &points {
            let radius = (p.x() * p.x() + p.y() * p.y()).sqrt();
            match p.label {
                // Inner ring: radius 8 plus a jitter vector no longer than sqrt(2).
                0 => assert!((6.5..=9.5).contains(&radius), "inner radius {}", radius),
                // Outer ring: radius 10 plus a jitter vector no longer than 2*sqrt(2).
                1 => assert!((7.0..=13.0).contains(&radius), "outer radius {}", radius),
                other => panic!("unexpected label {}", other),
            }
        }
        assert_eq!(points.iter().filter(|p| p.label == 0).count(), 100);
        assert_eq!(points.iter().filter(|p| p.label == 1).count(), 100);
    }

    #[test]
    fn test_spiral_arms_within_noise() {
        let noise = 0.5;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let points = Shape::Spiral.sample(200, noise, &mut rng).unwrap();
        assert_eq!(points.len(), 200);

        let half = 100usize;
        for (k, p) in points.iter().enumerate() {
            let i = k / 2;
            // Per index the offset-0 point (label 1) precedes the
            // offset-pi point (label 0).
            let (offset, label) = if k % 2 == 0 { (0.0, 1) } else { (PI, 0) };
            assert_eq!(p.label, label);

            let frac = i as f64 / half as f64;
            let r = 10.0 * frac;
            let t = 1.75 * frac * 2.0 * PI + offset;
            assert!((p.x() - r * t.sin()).abs() <= noise + 1e-12);
            assert!((p.y() - r * t.cos()).abs() <= noise + 1e-12);
        }
    }

    #[test]
    fn test_xor_labels_match_quadrants() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let points = Shape::Xor.sample(500, 0.5, &mut rng).unwrap();
        assert_eq!(points.len(), 500);

        for p in &points {
            assert!(p.x().abs() <= 0.5);
            assert!(p.y().abs() <= 0.5);
            let expected = if p.x() * p.y() > 0.0 { 0 } else { 1 };
            assert_eq!(p.label, expected);
        }
    }

    #[test]
    fn test_zero_samples_is_an_error() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for shape in Shape::ALL {
            let result = shape.sample(0, 0.5, &mut rng);
            assert!(matches!(result, Err(ShapeError::ZeroSamples)));
        }
    }

    #[test]
    fn test_shape_names_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(shape.name().parse::<Shape>().unwrap(), shape);
        }
        let result = "swirl".parse::<Shape>();
        assert!(matches!(result, Err(ShapeError::UnknownShape(_))));
    }

    #[test]
    fn test_sampling_is_deterministic_per_seed() {
        for shape in Shape::ALL {
            let mut rng_a = Xoshiro256PlusPlus::seed_from_u64(9);
            let mut rng_b = Xoshiro256PlusPlus::seed_from_u64(9);
            let a = shape.sample(40, 0.5, &mut rng_a).unwrap();
            let b = shape.sample(40, 0.5, &mut rng_b).unwrap();
            assert_eq!(a, b);
        }
    }
}
