//! Ordered collection of the map's tile sources.
//!
//! The container owns the sources bottom-to-top and derives the effective
//! zoom range as the intersection of every source's range, which the map then
//! clamps its configured limits against.

use log::debug;

use crate::core::constants::DEFAULT_MAX_ZOOM;
use crate::core::geo::LatLng;
use crate::tiles::source::TileSource;
use crate::{MapError, Result};

struct TileSourceEntry {
    source: Box<dyn TileSource>,
    hidden: bool,
}

/// The tile sources of a map view, ordered from bottom to top
#[derive(Default)]
pub struct TileSourcesContainer {
    entries: Vec<TileSourceEntry>,
}

impl TileSourcesContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a source above the current ones
    pub fn add(&mut self, source: Box<dyn TileSource>) {
        debug!("adding tile source at index {}", self.entries.len());
        self.entries.push(TileSourceEntry {
            source,
            hidden: false,
        });
    }

    /// Inserts a source at the given index; zero puts it below all others
    pub fn insert(&mut self, index: usize, source: Box<dyn TileSource>) -> Result<()> {
        if index > self.entries.len() {
            return Err(MapError::TileSource(format!(
                "insert index {index} out of range for {} sources",
                self.entries.len()
            )));
        }
        self.entries.insert(
            index,
            TileSourceEntry {
                source,
                hidden: false,
            },
        );
        Ok(())
    }

    /// Removes and returns the source at the given index
    pub fn remove(&mut self, index: usize) -> Result<Box<dyn TileSource>> {
        if index >= self.entries.len() {
            return Err(MapError::TileSource(format!(
                "remove index {index} out of range for {} sources",
                self.entries.len()
            )));
        }
        Ok(self.entries.remove(index).source)
    }

    /// Moves the source at one index to another index
    pub fn move_source(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.entries.len() || to >= self.entries.len() {
            return Err(MapError::TileSource(format!(
                "move {from} -> {to} out of range for {} sources",
                self.entries.len()
            )));
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Hides or shows the source at the given index
    pub fn set_hidden(&mut self, index: usize, hidden: bool) -> Result<()> {
        let len = self.entries.len();
        let entry = self.entries.get_mut(index).ok_or_else(|| {
            MapError::TileSource(format!(
                "index {index} out of range for {len} sources"
            ))
        })?;
        entry.hidden = hidden;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&dyn TileSource> {
        self.entries.get(index).map(|entry| entry.source.as_ref())
    }

    /// Iterates the visible sources, bottom to top
    pub fn visible(&self) -> impl Iterator<Item = &dyn TileSource> {
        self.entries
            .iter()
            .filter(|entry| !entry.hidden)
            .map(|entry| entry.source.as_ref())
    }

    /// The zoom range every source can serve: the intersection of all source
    /// ranges. An empty container reports the default full range. If the
    /// ranges do not overlap, the range collapses to the common minimum.
    pub fn zoom_range(&self) -> (u8, u8) {
        if self.entries.is_empty() {
            return (0, DEFAULT_MAX_ZOOM as u8);
        }

        let min = self
            .entries
            .iter()
            .map(|entry| entry.source.min_zoom())
            .max()
            .unwrap_or(0);
        let max = self
            .entries
            .iter()
            .map(|entry| entry.source.max_zoom())
            .min()
            .unwrap_or(DEFAULT_MAX_ZOOM as u8);

        (min, max.max(min))
    }

    /// Whether at least one visible source can supply imagery at the given
    /// coordinate
    pub fn coverage_contains(&self, coordinate: &LatLng) -> bool {
        self.visible().any(|source| {
            source
                .coverage()
                .map(|bounds| bounds.contains(coordinate))
                .unwrap_or(true)
        })
    }
}

impl std::fmt::Debug for TileSourcesContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileSourcesContainer")
            .field("sources", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLngBounds;
    use crate::core::tiling::TileCoord;

    struct FakeSource {
        min: u8,
        max: u8,
        coverage: Option<LatLngBounds>,
    }

    impl FakeSource {
        fn boxed(min: u8, max: u8) -> Box<dyn TileSource> {
            Box::new(Self {
                min,
                max,
                coverage: None,
            })
        }
    }

    impl TileSource for FakeSource {
        fn url(&self, coord: TileCoord) -> String {
            format!("fake://{}/{}/{}", coord.z, coord.x, coord.y)
        }

        fn min_zoom(&self) -> u8 {
            self.min
        }

        fn max_zoom(&self) -> u8 {
            self.max
        }

        fn coverage(&self) -> Option<LatLngBounds> {
            self.coverage.clone()
        }
    }

    #[test]
    fn test_empty_container_reports_default_range() {
        let container = TileSourcesContainer::new();
        assert_eq!(container.zoom_range(), (0, DEFAULT_MAX_ZOOM as u8));
    }

    #[test]
    fn test_zoom_range_is_the_intersection() {
        let mut container = TileSourcesContainer::new();
        container.add(FakeSource::boxed(0, 19));
        container.add(FakeSource::boxed(3, 15));
        container.add(FakeSource::boxed(1, 17));

        assert_eq!(container.zoom_range(), (3, 15));
    }

    #[test]
    fn test_disjoint_ranges_collapse() {
        let mut container = TileSourcesContainer::new();
        container.add(FakeSource::boxed(10, 19));
        container.add(FakeSource::boxed(0, 5));

        assert_eq!(container.zoom_range(), (10, 10));
    }

    #[test]
    fn test_reordering_and_removal() {
        let mut container = TileSourcesContainer::new();
        container.add(FakeSource::boxed(0, 10));
        container.add(FakeSource::boxed(0, 12));
        assert_eq!(container.len(), 2);

        container.move_source(1, 0).unwrap();
        assert_eq!(container.get(0).unwrap().max_zoom(), 12);

        container.remove(0).unwrap();
        assert_eq!(container.len(), 1);
        assert!(container.remove(5).is_err());
    }

    #[test]
    fn test_hidden_sources_do_not_count_for_coverage() {
        let mut container = TileSourcesContainer::new();
        container.add(Box::new(FakeSource {
            min: 0,
            max: 18,
            coverage: Some(LatLngBounds::from_coords(40.0, -75.0, 41.0, -73.0)),
        }));

        let inside = LatLng::new(40.5, -74.0);
        let outside = LatLng::new(50.0, 10.0);
        assert!(container.coverage_contains(&inside));
        assert!(!container.coverage_contains(&outside));

        container.set_hidden(0, true).unwrap();
        assert!(!container.coverage_contains(&inside));
    }
}
