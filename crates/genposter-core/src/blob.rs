use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Vertex count the composer uses for every blob.
pub const DEFAULT_BLOB_POINTS: usize = 200;

/// Outline of one irregular closed shape: a circle of radius `r` around
/// `center` whose radius is perturbed independently at every vertex.
///
/// Angles are spaced evenly over `[0, 2π]` including both ends, so the last
/// vertex sits at the same angle as the first and the outline closes. Each
/// vertex radius is `r * (1 + wobble * (u - 0.5))` with `u` drawn from
/// `rng` in `[0, 1)`, in vertex order.
///
/// Input is not validated: `points < 3` or `r <= 0` give a degenerate
/// outline, and a negative `wobble` just flips the perturbation.
pub fn blob<R: Rng>(
    rng: &mut R,
    center: Point,
    r: f64,
    points: usize,
    wobble: f64,
) -> Vec<Point> {
    (0..points)
        .map(|i| {
            let angle = sample_angle(i, points);
            let radius = r * (1.0 + wobble * (rng.random::<f64>() - 0.5));
            Point::from_polar(center, radius, angle)
        })
        .collect()
}

/// The `i`-th of `points` angles evenly spaced over `[0, 2π]`.
fn sample_angle(i: usize, points: usize) -> f64 {
    if points < 2 {
        return 0.0;
    }
    if i == points - 1 {
        return TAU;
    }
    TAU * i as f64 / (points - 1) as f64
}

/// A generated blob together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    pub center: Point,
    pub radius: f64,
    pub wobble: f64,
    pub vertices: Vec<Point>,
}

impl Blob {
    pub fn generate<R: Rng>(
        rng: &mut R,
        center: Point,
        radius: f64,
        points: usize,
        wobble: f64,
    ) -> Self {
        Self {
            center,
            radius,
            wobble,
            vertices: blob(rng, center, radius, points, wobble),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Radial band every vertex must fall in: `r * (1 ± wobble/2)`.
    pub fn radius_bounds(&self) -> (f64, f64) {
        let spread = self.radius * self.wobble.abs() / 2.0;
        (self.radius - spread, self.radius + spread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    const EPS: f64 = 1e-9;

    fn angle_around(p: &Point, center: &Point) -> f64 {
        (p.y - center.y).atan2(p.x - center.x)
    }

    #[test]
    fn test_vertex_count() {
        let mut rng = Pcg64::seed_from_u64(1);
        for points in [3, 7, 200] {
            let outline = blob(&mut rng, Point::new(0.5, 0.5), 0.3, points, 0.15);
            assert_eq!(outline.len(), points);
        }
    }

    #[test]
    fn test_outline_closes() {
        let mut rng = Pcg64::seed_from_u64(2);
        let center = Point::new(0.4, 0.6);
        for points in [3, 4, 50, 200] {
            let outline = blob(&mut rng, center, 0.2, points, 0.3);
            let first = angle_around(outline.first().unwrap(), &center);
            let last = angle_around(outline.last().unwrap(), &center);
            // atan2 maps both 0 and 2π onto the same direction.
            assert!(first.abs() < EPS, "first angle {}", first);
            assert!(last.abs() < EPS, "last angle {}", last);
        }
        assert_eq!(sample_angle(0, 200), 0.0);
        assert_eq!(sample_angle(199, 200), TAU);
    }

    #[test]
    fn test_radius_within_wobble_bound() {
        let mut rng = Pcg64::seed_from_u64(3);
        let center = Point::new(0.5, 0.5);
        for &(r, w) in &[(0.15, 0.05), (0.3, 0.2), (0.45, 0.6), (0.25, 0.0)] {
            let shape = Blob::generate(&mut rng, center, r, 200, w);
            let (lo, hi) = shape.radius_bounds();
            for v in &shape.vertices {
                let d = v.distance_to(&center);
                assert!(d >= lo - EPS && d <= hi + EPS, "distance {} outside [{}, {}]", d, lo, hi);
            }
        }
    }

    #[test]
    fn test_zero_wobble_is_circle() {
        let mut rng = Pcg64::seed_from_u64(4);
        let center = Point::new(0.1, 0.9);
        let outline = blob(&mut rng, center, 0.2, 64, 0.0);
        assert!(outline.iter().all(|p| (p.distance_to(&center) - 0.2).abs() < EPS));
    }

    #[test]
    fn test_wobble_is_per_vertex() {
        let mut rng = Pcg64::seed_from_u64(5);
        let center = Point::new(0.5, 0.5);
        let outline = blob(&mut rng, center, 0.3, 200, 0.5);
        let first = outline[0].distance_to(&center);
        assert!(outline.iter().any(|p| (p.distance_to(&center) - first).abs() > 1e-6));
    }

    #[test]
    fn test_degenerate_input_is_accepted() {
        let mut rng = Pcg64::seed_from_u64(6);
        let center = Point::new(0.5, 0.5);
        assert!(blob(&mut rng, center, 0.3, 0, 0.1).is_empty());
        let single = blob(&mut rng, center, 0.3, 1, 0.1);
        assert_eq!(single.len(), 1);
        assert!((single[0].y - 0.5).abs() < EPS);
        assert_eq!(blob(&mut rng, center, 0.0, 5, 0.1).len(), 5);
        assert_eq!(blob(&mut rng, center, 0.3, 5, -0.4).len(), 5);
    }

    #[test]
    fn test_consumes_one_draw_per_vertex() {
        let mut a = Pcg64::seed_from_u64(7);
        let mut b = Pcg64::seed_from_u64(7);
        blob(&mut a, Point::new(0.5, 0.5), 0.3, 10, 0.2);
        for _ in 0..10 {
            b.random::<f64>();
        }
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
