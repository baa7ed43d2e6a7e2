//! Embedded assets for ui-kit
//!
//! Uses rust-embed to bundle the spinner icon, falling back to the
//! gpui-component icon set for everything else.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our own icons win over component icons with the same path
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SPINNER_ICON;

    #[test]
    fn spinner_is_embedded() {
        let data = Assets.load(SPINNER_ICON).expect("load").expect("spinner present");
        assert!(std::str::from_utf8(&data).expect("utf8").contains("<svg"));
    }

    #[test]
    fn empty_path_loads_nothing() {
        assert!(Assets.load("").expect("load").is_none());
    }

    #[test]
    fn listing_includes_spinner() {
        let files = Assets.list("icons/").expect("list");
        assert!(files.iter().any(|f| f.to_string() == SPINNER_ICON));
    }
}
