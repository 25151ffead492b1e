//! Build-time configuration for the API endpoint, token slot and log level with
//! an optional runtime override. The runtime config is read from
//! `window.PORTAL_CONFIG` (if present) so static deployments can point at a
//! different API without rebuilding. Configuration values are public; do not
//! store secrets here.

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TOKEN_STORAGE_KEY: &str = "authToken";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Name of the localStorage slot holding the raw bearer token.
    pub token_storage_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: build_value(option_env!("PORTAL_API_BASE_URL"))
                .unwrap_or(defaults.api_base_url),
            token_storage_key: build_value(option_env!("PORTAL_TOKEN_KEY"))
                .unwrap_or(defaults.token_storage_key),
            log_level: build_value(option_env!("PORTAL_LOG_LEVEL")).unwrap_or(defaults.log_level),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    token_storage_key: Option<String>,
    log_level: Option<String>,
}

fn build_value(value: Option<&str>) -> Option<String> {
    value.and_then(normalize_runtime_value)
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.token_storage_key {
        config.token_storage_key = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        token_storage_key: read_runtime_value(&object, "token_storage_key"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    fn base_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            token_storage_key: "defaultKey".to_string(),
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.shecodes.dev "),
            Some("https://api.shecodes.dev".to_string())
        );
    }

    #[test]
    fn defaults_point_at_local_api_and_auth_token_slot() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.token_storage_key, "authToken");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn load_without_browser_uses_build_values() {
        // No window on native targets, so no runtime override applies.
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.token_storage_key.is_empty());
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            token_storage_key: normalize_runtime_value("  "),
            log_level: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, base_config());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            token_storage_key: normalize_runtime_value("overrideKey"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.token_storage_key, "overrideKey");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn apply_runtime_overrides_keeps_unset_fields() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            log_level: normalize_runtime_value("trace"),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.log_level, "trace");
    }
}
