use serde::{Deserialize, Serialize};

const DEFAULT_BRAND_TITLE: &str = "\"亦企办\"接诉即办服务平台";
pub const DEFAULT_ANALYSIS_STEP_MS: u64 = 600;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub brand_title: String,
    pub profile: AppProfile,
    /// 分析弹窗每个加载步骤之间的停顿毫秒数。
    pub analysis_step_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_title: DEFAULT_BRAND_TITLE.to_string(),
            profile: AppProfile::Dev,
            analysis_step_ms: DEFAULT_ANALYSIS_STEP_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let mut config = Self::default();

        if let Some(title) = read_env("YIQIBAN_BRAND_TITLE") {
            config.brand_title = title;
        }

        let profile_raw = read_env("YIQIBAN_PROFILE");
        config.profile = AppProfile::from_env(profile_raw);

        if let Some(ms) =
            read_env("YIQIBAN_ANALYSIS_STEP_MS").and_then(|value| value.parse::<u64>().ok())
        {
            config.analysis_step_ms = ms.clamp(50, 5_000);
        }

        config
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "YIQIBAN_BRAND_TITLE" => option_env!("YIQIBAN_BRAND_TITLE"),
        "YIQIBAN_PROFILE" => option_env!("YIQIBAN_PROFILE"),
        "YIQIBAN_ANALYSIS_STEP_MS" => option_env!("YIQIBAN_ANALYSIS_STEP_MS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_prod_aliases() {
        assert_eq!(AppProfile::from_env(Some("prod".into())), AppProfile::Prod);
        assert_eq!(
            AppProfile::from_env(Some("production".into())),
            AppProfile::Prod
        );
        assert_eq!(AppProfile::from_env(Some("dev".into())), AppProfile::Dev);
        assert_eq!(AppProfile::from_env(None), AppProfile::Dev);
    }

    #[test]
    fn default_config_has_brand_and_step() {
        let config = AppConfig::default();
        assert!(config.brand_title.contains("接诉即办"));
        assert_eq!(config.analysis_step_ms, DEFAULT_ANALYSIS_STEP_MS);
    }
}
