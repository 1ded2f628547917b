//! Build-time configuration for the simulated backend with an optional runtime
//! override. The runtime config is read from `window.SCHOLARIS_CONFIG` (if
//! present) so static deployments can tune the demo without rebuilding.
//! Configuration values are public; do not store secrets here.

use crate::registration::{RESEND_COOLDOWN_SECS, SIMULATED_LATENCY};
use std::time::Duration;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub simulated_latency: Duration,
    pub resend_cooldown_secs: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulated_latency: SIMULATED_LATENCY,
            resend_cooldown_secs: RESEND_COOLDOWN_SECS,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("SCHOLARIS_SIMULATED_LATENCY_MS"),
            option_env!("SCHOLARIS_RESEND_COOLDOWN_SECS"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(latency_ms: Option<&str>, cooldown_secs: Option<&str>) -> Self {
        let mut config = Self::default();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                simulated_latency_ms: latency_ms.and_then(parse_number),
                resend_cooldown_secs: cooldown_secs.and_then(parse_number),
            },
        );
        config
    }

    /// Simulated backend driven by browser timers.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn service(&self) -> crate::registration::SimulatedService<crate::registration::TimerDelay> {
        crate::registration::SimulatedService::new(crate::registration::TimerDelay)
            .with_latency(self.simulated_latency)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    simulated_latency_ms: Option<u64>,
    resend_cooldown_secs: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.simulated_latency_ms {
        config.simulated_latency = Duration::from_millis(value);
    }
    if let Some(value) = runtime.resend_cooldown_secs {
        config.resend_cooldown_secs = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SCHOLARIS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        simulated_latency_ms: read_runtime_value(&object, "simulated_latency_ms")
            .as_deref()
            .and_then(parse_number),
        resend_cooldown_secs: read_runtime_value(&object, "resend_cooldown_secs")
            .as_deref()
            .and_then(parse_number),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

// Numbers and numeric strings are both accepted.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Option<T> {
    normalize_runtime_value(value)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value, parse_number};
    use std::time::Duration;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(normalize_runtime_value(" 250 "), Some("250".to_string()));
    }

    #[test]
    fn parse_number_ignores_garbage() {
        assert_eq!(parse_number::<u64>(" 1500 "), Some(1500));
        assert_eq!(parse_number::<u32>("-1"), None);
        assert_eq!(parse_number::<u32>("soon"), None);
        assert_eq!(parse_number::<u32>(""), None);
    }

    #[test]
    fn defaults_match_the_simulated_backend() {
        let config = AppConfig::from_build_env(None, None);
        assert_eq!(config.simulated_latency, Duration::from_millis(1500));
        assert_eq!(config.resend_cooldown_secs, 60);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn build_env_values_are_applied_when_valid() {
        let config = AppConfig::from_build_env(Some("0"), Some("5"));
        assert_eq!(config.simulated_latency, Duration::ZERO);
        assert_eq!(config.resend_cooldown_secs, 5);

        let config = AppConfig::from_build_env(Some("fast"), Some(" "));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = AppConfig::default();
        apply_runtime_overrides(&mut config, RuntimeConfig::default());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            simulated_latency_ms: Some(200),
            resend_cooldown_secs: Some(10),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.simulated_latency, Duration::from_millis(200));
        assert_eq!(config.resend_cooldown_secs, 10);
    }

    #[test]
    fn load_without_browser_uses_build_values() {
        let config = AppConfig::load();
        if option_env!("SCHOLARIS_SIMULATED_LATENCY_MS").is_none()
            && option_env!("SCHOLARIS_RESEND_COOLDOWN_SECS").is_none()
        {
            assert_eq!(config, AppConfig::default());
        }
    }
}
