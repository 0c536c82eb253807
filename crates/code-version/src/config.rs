use serde::{Deserialize, Serialize};

/// Resolver behavior toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Restrict resolution to the caller's repository allow-list. With
    /// this set, an empty allow-list resolves to an empty result without
    /// touching the store.
    pub enforce_repository_privileges: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforcement_defaults_off() {
        assert!(!ResolverConfig::default().enforce_repository_privileges);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ResolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());

        let config: ResolverConfig =
            serde_json::from_str(r#"{"enforce_repository_privileges": true}"#).unwrap();
        assert!(config.enforce_repository_privileges);
    }
}
