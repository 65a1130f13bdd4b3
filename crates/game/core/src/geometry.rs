//! Positions and distance helpers.

/// A point on a named map.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPosition {
    pub map: String,
    pub x: f64,
    pub y: f64,
}

impl MapPosition {
    pub fn new(map: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            map: map.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to `other`, or infinity when the maps differ.
    pub fn distance(&self, other: &MapPosition) -> f64 {
        if self.map != other.map {
            return f64::INFINITY;
        }
        planar_distance(self.x, self.y, other.x, other.y)
    }
}

/// Euclidean distance between two points on the same plane.
pub fn planar_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Axis-aligned rectangle used by spawn areas, `[x1, y1, x2, y2]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Boundary {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean_on_same_map() {
        let a = MapPosition::new("main", 0.0, 0.0);
        let b = MapPosition::new("main", 3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn different_maps_are_infinitely_far() {
        let a = MapPosition::new("main", 0.0, 0.0);
        let b = MapPosition::new("cave", 0.0, 0.0);
        assert!(a.distance(&b).is_infinite());
    }

    #[test]
    fn boundary_center_and_containment() {
        let area = Boundary::new(-100.0, -50.0, 100.0, 150.0);
        assert_eq!(area.center(), (0.0, 50.0));
        assert!(area.contains(0.0, 0.0));
        assert!(area.contains(100.0, 150.0));
        assert!(!area.contains(101.0, 0.0));
    }
}
