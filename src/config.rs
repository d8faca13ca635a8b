use crate::domain::formatter::{CurrencyFormatter, DEFAULT_SYMBOL, FormatPolicy};
use crate::error::{EstimatorError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_PATH: &str = "models/salary_model.json";

/// Optional settings file. Every key may be omitted.
///
/// ```toml
/// model_path = "models/salary_model.json"
/// policy = "abbreviated"
/// currency_symbol = "₹"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub model_path: Option<PathBuf>,
    pub policy: Option<FormatPolicy>,
    pub currency_symbol: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| EstimatorError::Config(e.to_string()))
    }
}

/// Values supplied on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub model_path: Option<PathBuf>,
    pub policy: Option<FormatPolicy>,
    pub currency_symbol: Option<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model_path: PathBuf,
    pub policy: FormatPolicy,
    pub currency_symbol: String,
}

impl Settings {
    /// Merges command line over file over defaults, then validates.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let settings = Self {
            model_path: overrides
                .model_path
                .or(file.model_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            policy: overrides.policy.or(file.policy).unwrap_or_default(),
            currency_symbol: overrides
                .currency_symbol
                .or(file.currency_symbol)
                .unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.model_path.as_os_str().is_empty() {
            return Err(EstimatorError::Config("model path cannot be empty".to_string()));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(EstimatorError::Config(
                "currency symbol cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(self.policy, self.currency_symbol.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(FileConfig::default(), Overrides::default()).unwrap();
        assert_eq!(settings.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(settings.policy, FormatPolicy::Grouped);
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn test_file_values_used() {
        let file = FileConfig::parse(
            "model_path = \"other.json\"\npolicy = \"abbreviated\"\ncurrency_symbol = \"Rs. \"\n",
        )
        .unwrap();
        let settings = Settings::resolve(file, Overrides::default()).unwrap();
        assert_eq!(settings.model_path, PathBuf::from("other.json"));
        assert_eq!(settings.policy, FormatPolicy::Abbreviated);
        assert_eq!(settings.formatter().symbol(), "Rs. ");
    }

    #[test]
    fn test_overrides_win() {
        let file = FileConfig::parse("policy = \"abbreviated\"").unwrap();
        let overrides = Overrides {
            policy: Some(FormatPolicy::Grouped),
            model_path: Some(PathBuf::from("cli.json")),
            currency_symbol: None,
        };
        let settings = Settings::resolve(file, overrides).unwrap();
        assert_eq!(settings.policy, FormatPolicy::Grouped);
        assert_eq!(settings.model_path, PathBuf::from("cli.json"));
    }

    #[test]
    fn test_rejects_unknown_keys_and_values() {
        assert!(matches!(
            FileConfig::parse("colour = \"red\""),
            Err(EstimatorError::Config(_))
        ));
        assert!(matches!(
            FileConfig::parse("policy = \"lakhs\""),
            Err(EstimatorError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_blank_symbol() {
        let overrides = Overrides {
            currency_symbol: Some("  ".to_string()),
            ..Overrides::default()
        };
        assert!(matches!(
            Settings::resolve(FileConfig::default(), overrides),
            Err(EstimatorError::Config(_))
        ));
    }
}
