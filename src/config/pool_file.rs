use crate::core::generator::DrawSettings;
use crate::domain::model::{Exclusion, Participant, PoolRoster};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML definition of one pool: who takes part, who may not draw whom, and
/// optional draw settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolFile {
    pub pool: PoolSection,
    pub draw: Option<DrawSection>,
    pub participants: Vec<Participant>,
    pub exclusions: Option<Vec<Exclusion>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawSection {
    pub year: Option<i32>,
    pub max_attempts: Option<u32>,
    pub seed: Option<u64>,
}

impl PoolFile {
    /// 從 TOML 檔案載入池定義
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析池定義
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SantaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SANTA_SEED})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// 取得抽籤年份（檔案未指定時使用當前年份）
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.draw
            .as_ref()
            .and_then(|d| d.year)
            .unwrap_or_else(|| chrono::Utc::now().year())
    }

    pub fn draw_settings(&self) -> DrawSettings {
        DrawSettings {
            max_attempts: self
                .draw
                .as_ref()
                .and_then(|d| d.max_attempts)
                .unwrap_or(DrawSettings::DEFAULT_MAX_ATTEMPTS),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.draw.as_ref().and_then(|d| d.seed)
    }

    /// Converts the file representation into the roster the engine runs on.
    pub fn into_roster(self) -> PoolRoster {
        PoolRoster {
            name: self.pool.name,
            participants: self.participants,
            exclusions: self.exclusions.unwrap_or_default(),
        }
    }
}

impl Validate for PoolFile {
    fn validate(&self) -> Result<()> {
        if let Some(max_attempts) = self.draw.as_ref().and_then(|d| d.max_attempts) {
            crate::utils::validation::validate_positive_number(
                "draw.max_attempts",
                max_attempts as usize,
                1,
            )?;
        }

        // 池本身的結構檢查與引擎共用
        self.clone().into_roster().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ParticipantId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_pool_file() {
        let toml_content = r#"
[pool]
name = "family"
description = "Family exchange"

[draw]
year = 2026
max_attempts = 500

[[participants]]
id = 1
name = "Alice"
email = "alice@example.com"

[[participants]]
id = 2
name = "Bob"

[[exclusions]]
giver = 1
receiver = 2
"#;

        let pool_file = PoolFile::from_toml_str(toml_content).unwrap();

        assert_eq!(pool_file.pool.name, "family");
        assert_eq!(pool_file.year(), 2026);
        assert_eq!(pool_file.draw_settings().max_attempts, 500);
        assert_eq!(pool_file.seed(), None);
        assert!(pool_file.validate().is_ok());

        let roster = pool_file.into_roster();
        assert_eq!(roster.participants.len(), 2);
        assert_eq!(roster.exclusions.len(), 1);
        assert_eq!(roster.exclusions[0].giver, ParticipantId(1));
    }

    #[test]
    fn test_defaults_without_draw_section() {
        let toml_content = r#"
[pool]
name = "office"

[[participants]]
id = 1
name = "Alice"

[[participants]]
id = 2
name = "Bob"
"#;

        let pool_file = PoolFile::from_toml_str(toml_content).unwrap();

        assert_eq!(
            pool_file.draw_settings().max_attempts,
            DrawSettings::DEFAULT_MAX_ATTEMPTS
        );
        use chrono::Datelike;
        assert_eq!(pool_file.year(), chrono::Utc::now().year());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SANTA_TEST_POOL_NAME", "env-pool");

        let toml_content = r#"
[pool]
name = "${SANTA_TEST_POOL_NAME}"

[[participants]]
id = 1
name = "Alice"
"#;

        let pool_file = PoolFile::from_toml_str(toml_content).unwrap();
        assert_eq!(pool_file.pool.name, "env-pool");

        std::env::remove_var("SANTA_TEST_POOL_NAME");
    }

    #[test]
    fn test_validation_rejects_zero_attempts() {
        let toml_content = r#"
[pool]
name = "family"

[draw]
max_attempts = 0

[[participants]]
id = 1
name = "Alice"

[[participants]]
id = 2
name = "Bob"
"#;

        let pool_file = PoolFile::from_toml_str(toml_content).unwrap();
        assert!(pool_file.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_exclusion_target() {
        let toml_content = r#"
[pool]
name = "family"

[[participants]]
id = 1
name = "Alice"

[[participants]]
id = 2
name = "Bob"

[[exclusions]]
giver = 1
receiver = 3
"#;

        let pool_file = PoolFile::from_toml_str(toml_content).unwrap();
        assert!(pool_file.validate().is_err());
    }

    #[test]
    fn test_pool_file_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pool]
name = "file-pool"

[draw]
seed = 42

[[participants]]
id = 1
name = "Alice"

[[participants]]
id = 2
name = "Bob"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let pool_file = PoolFile::from_file(temp_file.path()).unwrap();
        assert_eq!(pool_file.pool.name, "file-pool");
        assert_eq!(pool_file.seed(), Some(42));
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = PoolFile::from_toml_str("not toml at all [").unwrap_err();
        assert!(matches!(err, SantaError::ConfigValidationError { .. }));
    }
}
