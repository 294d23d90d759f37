//! Page-supplied configuration.
//!
//! The host page mounts the app on `<div id="style-canvas">` and may attach a
//! JSON [`StudioConfig`] as its `data-config` attribute.

use style_canvas_core::{ConfigError, StudioConfig};
use web_sys::Element;

/// Id of the element the app renders into.
pub const MOUNT_ID: &str = "style-canvas";

const CONFIG_ATTRIBUTE: &str = "data-config";

/// The mount element, if the page has one.
pub fn mount_point() -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(MOUNT_ID)
}

/// Read the config from the mount element.
///
/// # Errors
///
/// Returns `ConfigError` if the attribute is present but does not hold a
/// valid config. A missing attribute yields the defaults.
pub fn from_mount(mount: Option<&Element>) -> Result<StudioConfig, ConfigError> {
    let raw = mount.and_then(|element| element.get_attribute(CONFIG_ATTRIBUTE));
    resolve(raw.as_deref())
}

fn resolve(raw: Option<&str>) -> Result<StudioConfig, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(StudioConfig::default()),
        Some(json) => StudioConfig::from_json(json),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_uses_defaults() {
        assert_eq!(resolve(None).unwrap(), StudioConfig::default());
        assert_eq!(resolve(Some("   ")).unwrap(), StudioConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = resolve(Some(r#"{"toast_limit": 1}"#)).unwrap();
        assert_eq!(config.toast_limit, 1);
        assert!((config.canvas_width - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(matches!(
            resolve(Some(r#"{"item_width": 900}"#)),
            Err(ConfigError::ItemLargerThanCanvas { .. })
        ));
        assert!(matches!(resolve(Some("not json")), Err(ConfigError::Parse(_))));
    }
}
