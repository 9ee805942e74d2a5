/// A closed range `[min, max]` of ray parameters or coordinates.
///
/// An interval with `min > max` is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Open-ended interval `(min, +inf)`, the usual window for secondary rays.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Returns true if x is within `[min, max]` (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within `(min, max)` (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Linear interpolation from `min` (at 0) to `max` (at 1).
    pub fn lerp(&self, f: f32) -> f32 {
        self.min + f * (self.max - self.min)
    }

    /// Smallest interval enclosing both `a` and `b`.
    pub fn surrounding(a: &Interval, b: &Interval) -> Interval {
        Interval::new(a.min.min(b.min), a.max.max(b.max))
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        assert_eq!(Interval::new(2.0, 7.0).size(), 5.0);
        assert_eq!(Interval::new(-5.0, 5.0).size(), 10.0);
    }

    #[test]
    fn test_interval_contains_is_inclusive() {
        let interval = Interval::new(0.0, 10.0);

        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds_is_exclusive() {
        let interval = Interval::new(0.0, 10.0);

        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_interval_from_min() {
        let interval = Interval::from_min(0.001);
        assert!(!interval.surrounds(0.0005));
        assert!(interval.surrounds(1.0e30));
    }

    #[test]
    fn test_interval_lerp() {
        let shutter = Interval::new(1.0, 3.0);
        assert_eq!(shutter.lerp(0.0), 1.0);
        assert_eq!(shutter.lerp(0.5), 2.0);
        assert_eq!(shutter.lerp(1.0), 3.0);

        let instant = Interval::new(0.25, 0.25);
        assert_eq!(instant.lerp(0.7), 0.25);
    }

    #[test]
    fn test_interval_empty_and_universe() {
        let empty = Interval::EMPTY;
        assert!(empty.is_empty());
        assert!(!empty.contains(0.0));
        assert_eq!(Interval::default(), empty);

        let universe = Interval::UNIVERSE;
        assert!(universe.contains(1e10));
        assert!(universe.contains(-1e10));
        assert_eq!(universe.size(), f32::INFINITY);
    }

    #[test]
    fn test_interval_surrounding() {
        let merged = Interval::surrounding(&Interval::new(1.0, 2.0), &Interval::new(-3.0, 0.5));
        assert_eq!(merged, Interval::new(-3.0, 2.0));

        let with_empty = Interval::surrounding(&Interval::EMPTY, &Interval::new(1.0, 2.0));
        assert_eq!(with_empty, Interval::new(1.0, 2.0));
    }
}
