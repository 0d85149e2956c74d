use serde::Deserialize;

use crate::constants::EUROPEAN_POCKETS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub pocket_count: u32,
    /// Fixed seed for reproducible spins; entropy when unset
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            pocket_count: EUROPEAN_POCKETS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: TableConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TableConfig::default());
        assert_eq!(config.pocket_count, 37);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_override() {
        let config: TableConfig = serde_json::from_str(r#"{"pocket_count":38}"#).unwrap();
        assert_eq!(config.pocket_count, 38);
        assert_eq!(config.seed, None);
    }
}
