use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub asset_base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Fills gaps in `self` from `other`; values already set win.
    pub fn merge(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            asset_base_url: self.asset_base_url.or(other.asset_base_url),
            request_timeout_ms: self.request_timeout_ms.or(other.request_timeout_ms),
            log_level: self.log_level.or(other.log_level),
        }
    }

    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn asset_base_url(&self) -> String {
        self.asset_base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.api_base_url())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.request_timeout_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn read_global(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let text = |keys: &[&str]| {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string().or_else(|| v.as_f64().map(|n| n.to_string())))
        })
    };
    Some(RuntimeConfig {
        api_base_url: text(&["API_BASE_URL", "api_base_url"]),
        asset_base_url: text(&["ASSET_BASE_URL", "asset_base_url"]),
        request_timeout_ms: text(&["REQUEST_TIMEOUT_MS", "request_timeout_ms"])
            .and_then(|v| v.parse().ok()),
        log_level: text(&["LOG_LEVEL", "log_level"]),
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__MAGMARINE_ENV (env.js) takes precedence over window.__MAGMARINE_CONFIG.
    let env = read_global("__MAGMARINE_ENV").unwrap_or_default();
    env.merge(read_global("__MAGMARINE_CONFIG").unwrap_or_default())
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn load() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let mut config = snapshot_from_globals();
    if config.api_base_url.is_none() {
        if let Some(file) = fetch_runtime_config().await {
            config = config.merge(file);
        }
    }
    if RUNTIME_CONFIG.set(config).is_err() {
        log::debug!("runtime config already initialised");
    }
    current()
}

pub async fn await_api_base_url() -> String {
    load().await.api_base_url()
}

pub async fn await_asset_base_url() -> String {
    load().await.asset_base_url()
}

pub async fn init() {
    let config = load().await;
    log::info!("API base URL: {}", config.api_base_url());
}

/// Joins an uploaded file path (e.g. `uploads/news/a.png`) onto the asset host.
pub fn asset_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
