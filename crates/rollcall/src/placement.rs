//! Rejection-sampling placement of slot centers.
//!
//! [`Placer`] places points one at a time. Each point is sampled uniformly
//! from the placement area until it keeps the minimum distance to every
//! point placed before it, or until the attempt cap is exhausted. A point
//! that exhausts the cap is placed at one more sample regardless of distance
//! and reported as [`Placement::PlacedDegraded`]. Dense boards therefore
//! degrade instead of failing; callers that care can count degraded points.

use log::{debug, info, trace, warn};
use rand::Rng;

use rollcall_core::geometry::{Bounds, Point};

use crate::{config::BoardConfig, error::InvalidInput};

/// How a point ended up where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The point keeps the minimum distance to every earlier point.
    Placed { attempts: u32 },
    /// The attempt cap was exhausted; the distance guarantee does not hold.
    PlacedDegraded,
}

impl Placement {
    pub fn is_degraded(self) -> bool {
        matches!(self, Self::PlacedDegraded)
    }
}

/// A placed point together with how it was placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPoint {
    position: Point,
    placement: Placement,
}

impl PlacedPoint {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// Places points inside an area with a best-effort minimum separation.
#[derive(Debug, Clone, Copy)]
pub struct Placer {
    area: Bounds,
    min_distance: f32,
    max_attempts: u32,
}

impl Placer {
    /// Creates a placer sampling from `area`.
    ///
    /// `area` must have a positive width and height.
    pub fn new(area: Bounds, min_distance: f32, max_attempts: u32) -> Self {
        Self {
            area,
            min_distance,
            max_attempts,
        }
    }

    /// Creates a placer for the board described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::BoardConfig`] for unusable board dimensions
    /// and [`InvalidInput::BoardTooSmall`] when the board margin leaves
    /// no area to sample from.
    pub fn from_config(config: &BoardConfig) -> Result<Self, InvalidInput> {
        Ok(Self::new(
            config.placement_area()?,
            config.min_distance(),
            config.max_attempts(),
        ))
    }

    pub fn area(&self) -> Bounds {
        self.area
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Places `count` points.
    ///
    /// Always returns exactly `count` points and always terminates: every
    /// point takes at most `max_attempts + 1` samples.
    pub fn place<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<PlacedPoint> {
        debug!(
            count,
            min_distance = self.min_distance,
            max_attempts = self.max_attempts;
            "Placing points"
        );

        let mut placed: Vec<PlacedPoint> = Vec::with_capacity(count);

        for index in 0..count {
            let accepted = (1..=self.max_attempts).find_map(|attempt| {
                let candidate = self.sample(rng);
                self.is_clear(candidate, &placed)
                    .then_some((candidate, attempt))
            });

            let point = match accepted {
                Some((position, attempts)) => {
                    trace!(index, x = position.x(), y = position.y(), attempts; "Point placed");
                    PlacedPoint {
                        position,
                        placement: Placement::Placed { attempts },
                    }
                }
                None => {
                    warn!(
                        index,
                        max_attempts = self.max_attempts;
                        "No clear position found, placing without separation"
                    );
                    PlacedPoint {
                        position: self.sample(rng),
                        placement: Placement::PlacedDegraded,
                    }
                }
            };

            placed.push(point);
        }

        let positions: Vec<Point> = placed.iter().map(PlacedPoint::position).collect();
        let degraded = placed.iter().filter(|p| p.placement.is_degraded()).count();
        info!(
            count,
            degraded,
            min_actual_distance:? = min_pairwise_distance(&positions);
            "Points placed"
        );

        placed
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(self.area.min_x()..self.area.max_x()),
            rng.random_range(self.area.min_y()..self.area.max_y()),
        )
    }

    fn is_clear(&self, candidate: Point, placed: &[PlacedPoint]) -> bool {
        placed
            .iter()
            .all(|other| candidate.distance_to(other.position) >= self.min_distance)
    }
}

/// Smallest distance between any two of `points`, `None` for fewer than two.
pub fn min_pairwise_distance(points: &[Point]) -> Option<f32> {
    points
        .iter()
        .enumerate()
        .flat_map(|(i, a)| points[i + 1..].iter().map(move |b| a.distance_to(*b)))
        .reduce(f32::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rollcall_core::geometry::Size;

    fn default_placer() -> Placer {
        Placer::from_config(&BoardConfig::default()).unwrap()
    }

    #[test]
    fn test_places_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(default_placer().place(10, &mut rng).len(), 10);
        assert!(default_placer().place(0, &mut rng).is_empty());
    }

    #[test]
    fn test_points_stay_in_area() {
        let placer = default_placer();
        let mut rng = StdRng::seed_from_u64(3);

        for point in placer.place(30, &mut rng) {
            assert!(placer.area().contains(point.position()));
        }
    }

    #[test]
    fn test_ten_slots_keep_separation_unless_degraded() {
        let placer = default_placer();
        assert_approx_eq!(f32, placer.min_distance(), 117.0);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = placer.place(10, &mut rng);

            for (i, a) in points.iter().enumerate() {
                for b in &points[i + 1..] {
                    let distance = a.position().distance_to(b.position());
                    if !a.placement().is_degraded() && !b.placement().is_degraded() {
                        assert!(
                            distance >= 117.0,
                            "seed {seed}: distance {distance} below separation"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_attempts_degrades_every_point() {
        let placer = Placer::from_config(&BoardConfig::default().with_max_attempts(0)).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let points = placer.place(5, &mut rng);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.placement().is_degraded()));
    }

    #[test]
    fn test_overcrowded_board_degrades_instead_of_failing() {
        // The sampling area is 40x40, far too small for a separation of 117
        let config = BoardConfig::new(178.0, 178.0).with_max_attempts(50);
        let placer = Placer::from_config(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let points = placer.place(4, &mut rng);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].placement(), Placement::Placed { attempts: 1 });
        assert!(points[1..].iter().all(|p| p.placement().is_degraded()));
    }

    #[test]
    fn test_min_pairwise_distance() {
        assert_eq!(min_pairwise_distance(&[]), None);
        assert_eq!(min_pairwise_distance(&[Point::new(1.0, 1.0)]), None);

        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 3.0),
        ];
        assert_approx_eq!(f32, min_pairwise_distance(&points).unwrap(), 3.0);
    }

    #[test]
    fn test_new_uses_given_area() {
        let area = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(5.0, 5.0));
        let placer = Placer::new(area, 1.0, 10);
        let mut rng = StdRng::seed_from_u64(5);

        for point in placer.place(3, &mut rng) {
            assert!(area.contains(point.position()));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn placed_points_respect_separation(seed in any::<u64>(), count in 2usize..=30) {
            let placer = default_placer();
            let mut rng = StdRng::seed_from_u64(seed);
            let points = placer.place(count, &mut rng);

            prop_assert_eq!(points.len(), count);
            for (i, a) in points.iter().enumerate() {
                // A non-degraded point was checked against every earlier point
                if a.placement().is_degraded() {
                    continue;
                }
                for b in &points[..i] {
                    prop_assert!(a.position().distance_to(b.position()) >= placer.min_distance());
                }
            }
        }
    }
}
