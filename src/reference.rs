//! Colormap arguments given either by name or as a colormap object.

use std::fmt;
use std::sync::Arc;

use crate::colormaps::{get_colormap, Colormap};
use crate::error::{CmapError, Result};

/// A colormap argument, resolved once at the entry point of each builder
#[derive(Clone)]
pub enum ColormapRef {
    /// Name looked up in the registry
    Named(String),
    /// A colormap object used as is
    Map(Arc<dyn Colormap>),
}

impl ColormapRef {
    /// Look up or unwrap the colormap
    pub fn resolve(self) -> Result<Arc<dyn Colormap>> {
        match self {
            ColormapRef::Named(name) => get_colormap(&name),
            ColormapRef::Map(cmap) => Ok(cmap),
        }
    }
}

impl fmt::Debug for ColormapRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColormapRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            ColormapRef::Map(cmap) => f.debug_tuple("Map").field(&cmap.name()).finish(),
        }
    }
}

impl From<&str> for ColormapRef {
    fn from(name: &str) -> Self {
        ColormapRef::Named(name.to_string())
    }
}

impl From<String> for ColormapRef {
    fn from(name: String) -> Self {
        ColormapRef::Named(name)
    }
}

impl From<Arc<dyn Colormap>> for ColormapRef {
    fn from(cmap: Arc<dyn Colormap>) -> Self {
        ColormapRef::Map(cmap)
    }
}

/// Colormap references read from JSON must be strings.
impl TryFrom<serde_json::Value> for ColormapRef {
    type Error = CmapError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(name) => Ok(ColormapRef::Named(name)),
            other => Err(CmapError::InvalidColormapReference {
                reference: format!(
                    "Expected the name of a colormap or a Colormap object, got {}",
                    other
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_named() {
        let cmap = ColormapRef::from("jet").resolve().unwrap();
        assert_eq!(cmap.name(), "jet");
    }

    #[test]
    fn test_resolve_object() {
        let jet = get_colormap("jet").unwrap();
        let cmap = ColormapRef::from(Arc::clone(&jet)).resolve().unwrap();
        assert!(Arc::ptr_eq(&cmap, &jet));
    }

    #[test]
    fn test_json_reference() {
        let named = ColormapRef::try_from(json!("terrain")).unwrap();
        assert_eq!(named.resolve().unwrap().name(), "terrain");

        let err = ColormapRef::try_from(json!(42)).unwrap_err();
        assert!(matches!(err, CmapError::InvalidColormapReference { .. }));
    }
}
