//! Precomputed colormaps that are handy for topographic drapes.
//!
//! - `niceterrain`: `terrain` without the blue used for low-lying land
//! - `darkearth`: the middle of `gist_earth`, dropping the near-black low end
//!
//! Both are built once on first access and shared afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use crate::colormaps::{classic, Colormap, LinearSegmentedColormap};
use crate::error::Result;
use crate::truncate::truncate;

const TRUNCATION: (f64, f64) = (0.25, 0.9);

type Builder = fn() -> Result<LinearSegmentedColormap>;

const USEFUL: [(&str, Builder); 2] = [
    ("niceterrain", classic::terrain),
    ("darkearth", classic::gist_earth),
];

static USEFUL_COLORMAPS: Lazy<HashMap<&'static str, Arc<dyn Colormap>>> = Lazy::new(|| {
    USEFUL
        .iter()
        .map(|&(name, build)| {
            let base: Arc<dyn Colormap> =
                Arc::new(build().expect("built-in colormap tables are well formed"));
            let cmap = truncate(base, TRUNCATION.0, TRUNCATION.1, None)
                .expect("truncating a built-in colormap cannot fail");
            (name, Arc::new(cmap) as Arc<dyn Colormap>)
        })
        .collect()
});

/// `terrain` restricted to `[0.25, 0.9]`
pub fn nice_terrain() -> Arc<dyn Colormap> {
    Arc::clone(&USEFUL_COLORMAPS["niceterrain"])
}

/// `gist_earth` restricted to `[0.25, 0.9]`
pub fn dark_earth() -> Arc<dyn Colormap> {
    Arc::clone(&USEFUL_COLORMAPS["darkearth"])
}

pub(crate) fn get(name: &str) -> Option<Arc<dyn Colormap>> {
    USEFUL_COLORMAPS.get(name).cloned()
}

pub(crate) fn names() -> impl Iterator<Item = &'static str> {
    USEFUL.iter().map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::get_colormap;

    #[test]
    fn test_nice_terrain_skips_water() {
        let cmap = nice_terrain();
        assert_eq!(cmap.name(), "trunc(terrain,0.25,0.90)");

        let terrain = get_colormap("terrain").unwrap();
        let low = cmap.map_normalized(0.0);
        let expected = terrain.map_normalized(0.25);
        for c in 0..4 {
            assert!((low[c] - expected[c]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_shared_instances() {
        assert!(Arc::ptr_eq(&dark_earth(), &dark_earth()));
        assert_eq!(get_colormap("DarkEarth").unwrap().name(), "trunc(gist_earth,0.25,0.90)");
    }
}
