use crate::models::Property;
use rand::Rng;
use serde::Serialize;

/// A listing pinned to a point on the schematic map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub property_id: String,
    pub x: f64,
    pub y: f64,
}

/// Schematic (non-geographic) map frame the markers are laid out on.
///
/// Listings are bucketed into a roughly square grid of
/// `ceil(sqrt(n))` columns, then each marker gets a bounded random
/// offset so co-bucketed pins do not stack exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapLayout {
    pub width: f64,
    pub height: f64,
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl MapLayout {
    /// One marker per listing, in input order. Markers land within
    /// `[0, width + 150] x [0, height + 150]`; the 50px inset plus up to
    /// 100px of jitter lets edge pins overhang the nominal frame.
    pub fn positions<R: Rng>(&self, properties: &[Property], rng: &mut R) -> Vec<MapMarker> {
        if properties.is_empty() {
            return Vec::new();
        }
        let cols = (properties.len() as f64).sqrt().ceil() as usize;
        properties
            .iter()
            .enumerate()
            .map(|(index, property)| {
                let row = index / cols;
                let col = index % cols;
                MapMarker {
                    property_id: property.id.clone(),
                    x: (col as f64 / cols as f64) * self.width + 50.0 + rng.gen_range(0.0..100.0),
                    y: (row as f64 / cols as f64) * self.height + 50.0 + rng.gen_range(0.0..100.0),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_properties;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_listing_gets_exactly_one_marker() {
        let seed = seed_properties();
        let mut rng = StdRng::seed_from_u64(7);
        let markers = MapLayout::default().positions(&seed, &mut rng);
        assert_eq!(markers.len(), seed.len());
        for (marker, property) in markers.iter().zip(seed.iter()) {
            assert_eq!(marker.property_id, property.id);
        }
    }

    #[test]
    fn markers_stay_within_map_bounds() {
        let layout = MapLayout::default();
        let seed = seed_properties();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            for marker in layout.positions(&seed, &mut rng) {
                assert!(marker.x >= 0.0 && marker.x <= layout.width + 150.0);
                assert!(marker.y >= 0.0 && marker.y <= layout.height + 150.0);
            }
        }
    }

    #[test]
    fn empty_collection_yields_no_markers() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(MapLayout::default().positions(&[], &mut rng).is_empty());
    }

    #[test]
    fn six_listings_fill_a_three_column_grid() {
        let seed = seed_properties();
        let mut rng = StdRng::seed_from_u64(3);
        let markers = MapLayout::default().positions(&seed, &mut rng);
        // ceil(sqrt(6)) = 3 columns, so index 3 opens the second row:
        // same column band as index 0 but strictly lower on the map
        assert!((markers[3].x - markers[0].x).abs() < 100.0);
        assert!(markers[3].y > markers[0].y);
        // index 2 sits in the rightmost column of row one
        assert!(markers[2].x > markers[0].x + 800.0 / 3.0 - 100.0);
    }
}
