use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct PortalApiConfig {
    /// 门户后端的基础地址
    pub base_url: String,
    /// 普通请求的超时秒数
    pub timeout_secs: u64,
    /// 证件验证请求的超时秒数。服务端要逐份分析文件，比普通请求慢得多。
    pub verify_timeout_secs: u64,
}

impl PortalApiConfig {
    /// v1 默认值（**非常重要：永远保留**）
    pub fn defaults() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            verify_timeout_secs: 120,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_secs)
    }
}
