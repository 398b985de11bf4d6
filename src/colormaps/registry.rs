//! Registry of built-in colormaps.
//!
//! The table is built once, on first use, and is read-only afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use super::colormap::{Colormap, Reversed};
use super::segmented::LinearSegmentedColormap;
use super::{classic, diverging, sequential};
use crate::error::{CmapError, Result};
use crate::useful;

type Builder = fn() -> Result<LinearSegmentedColormap>;

const BUILTINS: [(&str, Builder); 14] = [
    ("jet", classic::jet),
    ("terrain", classic::terrain),
    ("gist_earth", classic::gist_earth),
    ("gray", classic::gray),
    ("grey", classic::gray),
    ("coolwarm", diverging::coolwarm),
    ("rdbu", diverging::rdbu),
    ("seismic", diverging::seismic),
    ("viridis", sequential::viridis),
    ("plasma", sequential::plasma),
    ("inferno", sequential::inferno),
    ("magma", sequential::magma),
    ("cividis", sequential::cividis),
    ("turbo", sequential::turbo),
];

static REGISTRY: Lazy<HashMap<&'static str, Arc<dyn Colormap>>> = Lazy::new(|| {
    BUILTINS
        .iter()
        .map(|&(name, build)| {
            let cmap = build().expect("built-in colormap tables are well formed");
            (name, Arc::new(cmap) as Arc<dyn Colormap>)
        })
        .collect()
});

/// Get a colormap by name.
///
/// Names are case-insensitive. Built-in maps are searched first, then the
/// precomputed maps in [`useful`]; a trailing `_r` selects the reversed map.
pub fn get_colormap(name: &str) -> Result<Arc<dyn Colormap>> {
    let key = name.to_lowercase();

    if let Some(cmap) = REGISTRY.get(key.as_str()) {
        return Ok(Arc::clone(cmap));
    }
    if let Some(cmap) = useful::get(&key) {
        return Ok(cmap);
    }
    if let Some(base) = key.strip_suffix("_r") {
        if let Ok(cmap) = get_colormap(base) {
            return Ok(Arc::new(Reversed::new(cmap)));
        }
    }

    Err(CmapError::InvalidColormapReference {
        reference: format!("Unknown colormap: {}", name),
    })
}

/// Names accepted by [`get_colormap`], excluding reversed variants
pub fn available_colormaps() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTINS.iter().map(|&(name, _)| name).collect();
    names.extend(useful::names());
    names.sort_unstable();
    names
}
