//! Classic colormaps defined by channel segments.
//!
//! `jet` follows the well-known segment table; `terrain` and `gist_earth` are
//! defined by colour stops.

use super::colormap::{Rgba, DEFAULT_RESOLUTION};
use super::segmented::{LinearSegmentedColormap, Segment, SegmentData};
use crate::error::Result;

/// Blue through cyan, yellow and red
pub fn jet() -> Result<LinearSegmentedColormap> {
    let segments = SegmentData {
        red: vec![
            Segment::point(0.00, 0.0),
            Segment::point(0.35, 0.0),
            Segment::point(0.66, 1.0),
            Segment::point(0.89, 1.0),
            Segment::point(1.00, 0.5),
        ],
        green: vec![
            Segment::point(0.000, 0.0),
            Segment::point(0.125, 0.0),
            Segment::point(0.375, 1.0),
            Segment::point(0.640, 1.0),
            Segment::point(0.910, 0.0),
            Segment::point(1.000, 0.0),
        ],
        blue: vec![
            Segment::point(0.00, 0.5),
            Segment::point(0.11, 1.0),
            Segment::point(0.34, 1.0),
            Segment::point(0.65, 0.0),
            Segment::point(1.00, 0.0),
        ],
        alpha: None,
    };
    LinearSegmentedColormap::new("jet", segments, DEFAULT_RESOLUTION)
}

/// Water blues, lowland greens, highland browns and snow
pub fn terrain() -> Result<LinearSegmentedColormap> {
    const STOPS: [(f64, Rgba); 6] = [
        (0.00, [0.2, 0.2, 0.6, 1.0]),
        (0.15, [0.0, 0.6, 1.0, 1.0]),
        (0.25, [0.0, 0.8, 0.4, 1.0]),
        (0.50, [1.0, 1.0, 0.6, 1.0]),
        (0.75, [0.5, 0.36, 0.33, 1.0]),
        (1.00, [1.0, 1.0, 1.0, 1.0]),
    ];
    LinearSegmentedColormap::from_stops("terrain", &STOPS, DEFAULT_RESOLUTION)
}

/// Black through deep blue, green and tan to white
pub fn gist_earth() -> Result<LinearSegmentedColormap> {
    const STOPS: [(f64, Rgba); 8] = [
        (0.00, [0.00, 0.00, 0.00, 1.0]),
        (0.10, [0.15, 0.17, 0.47, 1.0]),
        (0.25, [0.17, 0.40, 0.47, 1.0]),
        (0.40, [0.24, 0.55, 0.34, 1.0]),
        (0.55, [0.45, 0.63, 0.31, 1.0]),
        (0.70, [0.68, 0.67, 0.36, 1.0]),
        (0.85, [0.78, 0.63, 0.53, 1.0]),
        (1.00, [0.99, 0.98, 0.98, 1.0]),
    ];
    LinearSegmentedColormap::from_stops("gist_earth", &STOPS, DEFAULT_RESOLUTION)
}

/// Black to white
pub fn gray() -> Result<LinearSegmentedColormap> {
    LinearSegmentedColormap::from_list(
        "gray",
        &[[0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0]],
        DEFAULT_RESOLUTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::Colormap;

    #[test]
    fn test_jet_endpoints() {
        let cmap = jet().unwrap();
        assert_eq!(cmap.map_normalized(0.0), [0.0, 0.0, 0.5, 1.0]);
        assert_eq!(cmap.map_normalized(1.0), [0.5, 0.0, 0.0, 1.0]);

        // Green dominates around the middle
        let middle = cmap.map_normalized(0.5);
        assert!(middle[1] > 0.9);
    }

    #[test]
    fn test_terrain_starts_blue() {
        let low = terrain().unwrap().map_normalized(0.0);
        assert!(low[2] > low[0]);
        assert_eq!(terrain().unwrap().map_normalized(1.0), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_gray_is_neutral() {
        let cmap = gray().unwrap();
        let c = cmap.map_normalized(0.3);
        assert_eq!(c[0], c[1]);
        assert_eq!(c[1], c[2]);
        assert_eq!(gist_earth().unwrap().map_normalized(0.0), [0.0, 0.0, 0.0, 1.0]);
    }
}
