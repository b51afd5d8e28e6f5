use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SentimentError};
use crate::utils::validation::{
    validate_file_extension, validate_location, validate_non_empty_string, validate_range,
    validate_required, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

pub const DEFAULT_CONFIG_FILE: &str = "sentiment.toml";
const MAX_FRAME_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub artifacts: ArtifactsConfig,
    pub display: DisplayConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Directory or http(s) base URL holding both artifacts.
    pub base: String,
    pub model: String,
    pub vectorizer: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            base: ".".to_string(),
            model: "sentiment_model.json".to_string(),
            vectorizer: "tfidf_vectorizer.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub animations: bool,
    pub frame_delay_ms: u64,
    pub show_banner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animations: true,
            frame_delay_ms: 120,
            show_banner: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub text_column: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            text_column: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SentimentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Falls back to defaults when the file does not exist.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "No config file at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SentimentError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MODEL_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn artifacts_are_remote(&self) -> bool {
        crate::utils::validation::looks_like_url(&self.artifacts.base)
    }
}

impl ConfigProvider for AppConfig {
    fn artifact_base(&self) -> &str {
        &self.artifacts.base
    }

    fn model_artifact(&self) -> &str {
        &self.artifacts.model
    }

    fn vectorizer_artifact(&self) -> &str {
        &self.artifacts.vectorizer
    }

    fn text_column(&self) -> &str {
        &self.batch.text_column
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_location("artifacts.base", &self.artifacts.base)?;
        validate_required("artifacts.model", &self.artifacts.model)?;
        validate_required("artifacts.vectorizer", &self.artifacts.vectorizer)?;
        validate_file_extension("artifacts.model", &self.artifacts.model, &["json"])?;
        validate_file_extension("artifacts.vectorizer", &self.artifacts.vectorizer, &["json"])?;
        validate_range(
            "display.frame_delay_ms",
            self.display.frame_delay_ms,
            0,
            MAX_FRAME_DELAY_MS,
        )?;
        validate_non_empty_string("batch.text_column", &self.batch.text_column)?;
        Ok(())
    }
}
