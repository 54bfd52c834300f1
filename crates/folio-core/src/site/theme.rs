//! Light/dark theme resolution and its persisted preference slot.

use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use sled::Db;
use std::fmt;
use std::path::Path;

const PREFS_TREE: &str = "preferences";
const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Exact stored value only; anything else reads as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome icon shown on the toggle button.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-sun",
            Theme::Dark => "fas fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme applied on page load. `None` means no explicit theme attribute is set.
pub fn resolve_theme(saved: Option<Theme>, prefers_dark: bool) -> Option<Theme> {
    match saved {
        Some(theme) => Some(theme),
        None if prefers_dark => Some(Theme::Dark),
        None => None,
    }
}

/// The toggle reads a missing theme attribute as dark.
pub fn effective_theme(resolved: Option<Theme>) -> Theme {
    resolved.unwrap_or(Theme::Dark)
}

/// Single-slot theme preference backed by Sled.
pub struct PreferenceStore {
    db: Db,
}

impl PreferenceStore {
    /// Opens or creates the preference DB at the given path.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, FolioError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Saved theme, if any. Unknown stored values are treated as unset.
    pub fn load_theme(&self) -> Result<Option<Theme>, FolioError> {
        let tree = self.db.open_tree(PREFS_TREE)?;
        let value = tree.get(THEME_KEY)?;
        Ok(value.and_then(|v| std::str::from_utf8(&v).ok().and_then(Theme::parse)))
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), FolioError> {
        let tree = self.db.open_tree(PREFS_TREE)?;
        tree.insert(THEME_KEY, theme.as_str().as_bytes())?;
        tree.flush()?;
        tracing::info!(target: "folio::prefs", theme = theme.as_str(), "Theme preference saved");
        Ok(())
    }

    pub fn clear_theme(&self) -> Result<(), FolioError> {
        let tree = self.db.open_tree(PREFS_TREE)?;
        tree.remove(THEME_KEY)?;
        Ok(())
    }

    /// Flips `current` (missing reads as dark) and persists the result.
    pub fn toggle(&self, current: Option<Theme>) -> Result<Theme, FolioError> {
        let next = effective_theme(current).toggled();
        self.save_theme(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, PreferenceStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open_path(dir.path().join("prefs")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_resolution_table() {
        assert_eq!(resolve_theme(Some(Theme::Light), true), Some(Theme::Light));
        assert_eq!(resolve_theme(Some(Theme::Dark), false), Some(Theme::Dark));
        assert_eq!(resolve_theme(None, true), Some(Theme::Dark));
        assert_eq!(resolve_theme(None, false), None);
        assert_eq!(effective_theme(None), Theme::Dark);
    }

    #[test]
    fn test_save_load_clear() {
        let (_dir, store) = store();
        assert_eq!(store.load_theme().unwrap(), None);
        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Light));
        store.clear_theme().unwrap();
        assert_eq!(store.load_theme().unwrap(), None);
    }

    #[test]
    fn test_toggle_from_unset_goes_light() {
        let (_dir, store) = store();
        assert_eq!(store.toggle(None).unwrap(), Theme::Light);
        assert_eq!(store.toggle(Some(Theme::Light)).unwrap(), Theme::Dark);
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_unknown_stored_value_reads_as_unset() {
        let (_dir, store) = store();
        store.db.open_tree(PREFS_TREE).unwrap().insert(THEME_KEY, "sepia").unwrap();
        assert_eq!(store.load_theme().unwrap(), None);
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
        assert_eq!(Theme::parse("Dark"), None);
    }
}
