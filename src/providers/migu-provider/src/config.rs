use serde::Deserialize;

pub const API_BASE_URL: &str = "https://m.music.migu.cn";
pub const STREAM_BASE_URL: &str = "https://app.pd.nf.migu.cn";
pub const REFERER: &str = "https://m.music.migu.cn/migu/l/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 11; ONEPLUS A6003) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/86.0.4240.198 Mobile Safari/537.36";
/// Anonymous listener id accepted by the stream endpoint.
pub const STREAM_USER_ID: &str = "15548614588710179085069";
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Vendor endpoints and identity. Everything defaults to the public mobile site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiguConfig {
    pub api_base_url: String,
    pub stream_base_url: String,
    pub referer: String,
    pub user_agent: String,
    pub stream_user_id: String,
    pub page_size: u32,
}

impl Default for MiguConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.into(),
            stream_base_url: STREAM_BASE_URL.into(),
            referer: REFERER.into(),
            user_agent: USER_AGENT.into(),
            stream_user_id: STREAM_USER_ID.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Optional `[providers.migu]` table in the host config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MiguConfigOverrides {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub stream_base_url: Option<String>,
    #[serde(default)]
    pub referer: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub stream_user_id: Option<String>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl MiguConfig {
    pub fn with_overrides(mut self, overrides: MiguConfigOverrides) -> Self {
        if let Some(v) = overrides.api_base_url {
            self.api_base_url = v;
        }
        if let Some(v) = overrides.stream_base_url {
            self.stream_base_url = v;
        }
        if let Some(v) = overrides.referer {
            self.referer = v;
        }
        if let Some(v) = overrides.user_agent {
            self.user_agent = v;
        }
        if let Some(v) = overrides.stream_user_id {
            self.stream_user_id = v;
        }
        if let Some(v) = overrides.page_size.filter(|n| *n > 0) {
            self.page_size = v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let config = MiguConfig::default().with_overrides(MiguConfigOverrides {
            api_base_url: Some("http://127.0.0.1:9000".into()),
            page_size: Some(0),
            ..Default::default()
        });
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.stream_base_url, STREAM_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
