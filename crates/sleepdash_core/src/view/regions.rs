//! Region-to-key hit testing.
//!
//! # Responsibility
//! - Map charted rectangles to lookup keys so click handlers stay decoupled
//!   from chart internals.
//!
//! # Invariants
//! - Containment is half-open: min edges inclusive, max edges exclusive.
//! - `hit_test` returns the first matching region in insertion order.

/// Axis-aligned rectangle in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment check.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        self.x <= px && px < self.x + self.width && self.y <= py && py < self.y + self.height
    }
}

/// Ordered mapping from charted regions to lookup keys.
#[derive(Debug, Clone, Default)]
pub struct RegionMap<K> {
    regions: Vec<(Rect, K)>,
}

impl<K> RegionMap<K> {
    pub fn new() -> Self {
        Self { regions: Vec::new() }
    }

    pub fn insert(&mut self, rect: Rect, key: K) {
        self.regions.push((rect, key));
    }

    /// Key of the first region containing the point, if any.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<&K> {
        self.regions
            .iter()
            .find(|(rect, _)| rect.contains(px, py))
            .map(|(_, key)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rect, &K)> {
        self.regions.iter().map(|(rect, key)| (rect, key))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, RegionMap};

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new(2.0, 3.0, 1.0, 1.0);
        assert!(rect.contains(2.0, 3.0));
        assert!(rect.contains(2.9, 3.9));
        assert!(!rect.contains(3.0, 3.5));
        assert!(!rect.contains(2.5, 4.0));
        assert!(!rect.contains(1.9, 3.5));
    }

    #[test]
    fn hit_test_returns_first_match_in_insertion_order() {
        let mut map = RegionMap::new();
        map.insert(Rect::new(0.0, 0.0, 2.0, 2.0), "first");
        map.insert(Rect::new(1.0, 1.0, 2.0, 2.0), "second");

        assert_eq!(map.hit_test(1.5, 1.5), Some(&"first"));
        assert_eq!(map.hit_test(2.5, 2.5), Some(&"second"));
        assert_eq!(map.hit_test(5.0, 5.0), None);
    }

    #[test]
    fn empty_map_never_matches() {
        let map: RegionMap<u32> = RegionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.hit_test(0.0, 0.0), None);
    }
}
