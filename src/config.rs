use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    /// 单次 LLM 调用超时（秒），0 表示不限时
    pub llm_timeout_secs: u64,
    // --- 批处理配置 ---
    /// 两次 LLM 调用之间的最小间隔（毫秒）
    pub throttle_interval_ms: u64,
    /// 结果输出文件
    pub output_file: String,
    /// 项目清单文件（package.json）
    pub project_manifest: String,
    /// 项目说明文档（README）
    pub project_readme: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.0-flash".to_string(),
            llm_temperature: 0.7,
            llm_max_tokens: 4096,
            llm_timeout_secs: 120,
            // 免费额度 15 次/分钟
            throttle_interval_ms: 4000,
            output_file: "analysis.json".to_string(),
            project_manifest: "package.json".to_string(),
            project_readme: "README.md".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            llm_api_key: std::env::var("LLM_API_KEY")
                .or_else(|_| std::env::var("GEMINI_API_KEY"))
                .unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_temperature: std::env::var("LLM_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_temperature),
            llm_max_tokens: std::env::var("LLM_MAX_TOKENS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_max_tokens),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_timeout_secs),
            throttle_interval_ms: std::env::var("THROTTLE_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.throttle_interval_ms),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            project_manifest: std::env::var("PROJECT_MANIFEST").unwrap_or(default.project_manifest),
            project_readme: std::env::var("PROJECT_README").unwrap_or(default.project_readme),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 单次调用超时，`None` 表示一直等待
    pub fn llm_timeout(&self) -> Option<Duration> {
        match self.llm_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_rate_budget() {
        let config = Config::default();
        assert_eq!(config.throttle_interval(), Duration::from_millis(4000));
        assert_eq!(config.output_file, "analysis.json");
    }

    #[test]
    fn test_zero_timeout_disables_limit() {
        let config = Config {
            llm_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.llm_timeout().is_none());

        let config = Config::default();
        assert_eq!(config.llm_timeout(), Some(Duration::from_secs(120)));
    }
}
