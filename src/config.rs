//! Game identity and storage settings

/// Names and storage settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Display name
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Prepended to every key in the progress store
    pub storage_prefix: String,
}

impl GameConfig {
    /// The Konekcije game
    #[must_use]
    pub fn konekcije() -> Self {
        Self {
            name: "Konekcije".to_string(),
            slug: "konekcije".to_string(),
            description: "Pronađi četiri grupe od po četiri povezane riječi".to_string(),
            storage_prefix: "konekcije_".to_string(),
        }
    }

    /// Replace the display name, keeping everything else
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::konekcije()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_konekcije() {
        let config = GameConfig::default();
        assert_eq!(config.name, "Konekcije");
        assert_eq!(config.storage_prefix, "konekcije_");
    }

    #[test]
    fn name_override_keeps_prefix() {
        let config = GameConfig::default().with_name("Veze");
        assert_eq!(config.name, "Veze");
        assert_eq!(config.slug, "konekcije");
        assert_eq!(config.storage_prefix, "konekcije_");
    }
}
