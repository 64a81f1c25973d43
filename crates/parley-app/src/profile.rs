use std::fs;
use std::path::PathBuf;

use parley_config::Config;
use serde::{Deserialize, Serialize};

pub const MAIN_PROFILE: &str = "main";

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Named configuration profiles stored as JSON under the user config folder
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<config dir>/parley`, falling back to `~/.config/parley`
    pub fn user_default() -> Self {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("parley"))
    }

    fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Initialize user config folders and main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())?;

        let main_profile = self.profile_path(MAIN_PROFILE);

        if !main_profile.exists() {
            let profile = Profile {
                name: MAIN_PROFILE.into(),
                value: Config::default(),
            };
            fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    fn read(&self, name: &str) -> anyhow::Result<Option<Config>> {
        let path = self.profile_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&path)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(Some(profile.value))
    }

    /// Load a profile by name, falling back to main and then to built-in defaults
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        if let Some(config) = self.read(name)? {
            return Ok(config);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        Ok(self.read(MAIN_PROFILE)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use parley_types::ProviderKind;

    use super::*;

    #[test]
    fn test_init_creates_main_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        store.init().unwrap();
        assert!(dir.path().join("profiles/main.json").exists());

        let config = store.load(MAIN_PROFILE).unwrap();
        assert_eq!(config.translator.provider, ProviderKind::Google);
    }

    #[test]
    fn test_unknown_profile_falls_back_to_main() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        store.init().unwrap();

        let mut main: Profile =
            serde_json::from_str(&fs::read_to_string(store.profile_path(MAIN_PROFILE)).unwrap())
                .unwrap();
        main.value.translator.to_lang = "ja".into();
        fs::write(
            store.profile_path(MAIN_PROFILE),
            serde_json::to_string_pretty(&main).unwrap(),
        )
        .unwrap();

        let config = store.load("work").unwrap();
        assert_eq!(config.translator.to_lang, "ja");
    }

    #[test]
    fn test_no_profiles_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("missing"));
        let config = store.load("anything").unwrap();
        assert_eq!(config.history.limit, 20);
    }

    #[test]
    fn test_broken_profile_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        fs::create_dir_all(store.profiles_dir()).unwrap();
        fs::write(store.profile_path("main"), "{").unwrap();

        assert!(store.load("main").is_err());
    }
}
