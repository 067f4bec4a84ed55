use crate::core::constants::TILE_SIZE;
use crate::core::geo::LatLngBounds;
use crate::core::tiling::TileCoord;

/// Trait representing anything that can supply map tiles for a coordinate.
///
/// The core only consumes the metadata (zoom range, tile size, coverage) and
/// produces tile addresses; actually fetching and caching imagery is the
/// collaborating layer's job.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;

    /// The lowest zoom level this source has tiles for.
    fn min_zoom(&self) -> u8 {
        0
    }

    /// The highest zoom level this source has tiles for.
    fn max_zoom(&self) -> u8 {
        18
    }

    /// Pixel size of this source's tiles.
    fn tile_size(&self) -> u32 {
        TILE_SIZE
    }

    /// Attribution text the host application must display.
    fn attribution(&self) -> &str {
        ""
    }

    /// Geographic coverage of this source. `None` means worldwide.
    fn coverage(&self) -> Option<LatLngBounds> {
        None
    }
}

/// Simple implementation that hits the default OpenStreetMap tile servers
pub struct OpenStreetMapSource {
    subdomains: Vec<&'static str>,
}

impl OpenStreetMapSource {
    pub fn new() -> Self {
        Self {
            subdomains: vec!["a", "b", "c"],
        }
    }
}

impl Default for OpenStreetMapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for OpenStreetMapSource {
    fn url(&self, coord: TileCoord) -> String {
        if self.subdomains.is_empty() {
            return format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                coord.z, coord.x, coord.y
            );
        }

        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        let sub = self.subdomains[idx];
        format!(
            "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
            sub, coord.z, coord.x, coord.y
        )
    }

    fn max_zoom(&self) -> u8 {
        19
    }

    fn attribution(&self) -> &str {
        "© OpenStreetMap contributors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osm_url_shape() {
        let source = OpenStreetMapSource::new();
        let url = source.url(TileCoord::new(575, 931, 11));

        assert!(url.starts_with("https://"));
        assert!(url.ends_with("/11/575/931.png"));
    }

    #[test]
    fn test_osm_defaults() {
        let source = OpenStreetMapSource::new();
        assert_eq!(source.min_zoom(), 0);
        assert_eq!(source.max_zoom(), 19);
        assert_eq!(source.tile_size(), TILE_SIZE);
        assert!(source.coverage().is_none());
    }
}
