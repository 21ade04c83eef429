use crate::core::AtmConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_strictly_descending, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DENOMINATIONS: [u32; 3] = [50, 20, 10];
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// File-based dispenser configuration, e.g.:
///
/// ```toml
/// [chain]
/// denominations = [50, 20, 10]
/// currency_symbol = "$"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmConfig {
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub denominations: Vec<u32>,
    pub currency_symbol: Option<String>,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            chain: ChainConfig {
                denominations: DEFAULT_DENOMINATIONS.to_vec(),
                currency_symbol: Some(DEFAULT_CURRENCY_SYMBOL.to_string()),
            },
        }
    }
}

impl AtmConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AtmConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AtmConfig {
    fn validate(&self) -> Result<()> {
        validate_strictly_descending("chain.denominations", &self.chain.denominations)?;

        if let Some(symbol) = &self.chain.currency_symbol {
            validate_non_empty_string("chain.currency_symbol", symbol)?;
        }

        Ok(())
    }
}

impl AtmConfigProvider for AtmConfig {
    fn denominations(&self) -> &[u32] {
        &self.chain.denominations
    }

    fn currency_symbol(&self) -> &str {
        self.chain
            .currency_symbol
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = AtmConfig::from_toml_str(
            r#"
            [chain]
            denominations = [100, 50, 20, 10]
            "#,
        )
        .unwrap();
        assert_eq!(config.denominations(), &[100, 50, 20, 10]);
        assert_eq!(config.currency_symbol(), "$");
    }

    #[test]
    fn test_parse_custom_symbol() {
        let config = AtmConfig::from_toml_str(
            r#"
            [chain]
            denominations = [50, 20, 10]
            currency_symbol = "€"
            "#,
        )
        .unwrap();
        assert_eq!(config.currency_symbol(), "€");
    }

    #[test]
    fn test_rejects_ascending_denominations() {
        let result = AtmConfig::from_toml_str(
            r#"
            [chain]
            denominations = [10, 20, 50]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_blank_symbol() {
        let result = AtmConfig::from_toml_str(
            r#"
            [chain]
            denominations = [50, 20, 10]
            currency_symbol = " "
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_default_matches_classic_chain() {
        let config = AtmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.denominations(), &[50, 20, 10]);
    }
}
