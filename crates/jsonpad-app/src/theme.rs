//! Theme coordination
//!
//! Page mode and editor color theme move together: toggling the page mode
//! forces the paired default editor theme, while the theme list changes only
//! the editor theme. Every change is applied to both surfaces and persisted.

use jsonpad_core::prelude::*;
use jsonpad_core::{PageMode, ThemePreference};

use crate::store::{persist, SessionStore, KEY_EDITOR_THEME, KEY_PAGE_THEME};
use crate::surface::EditorSurface;

/// Editor color themes offered in the theme list: `(name, display label)`
pub const EDITOR_THEMES: &[(&str, &str)] = &[
    ("github", "GitHub"),
    ("monokai", "Monokai"),
    ("dracula", "Dracula"),
    ("solarized_light", "Solarized Light"),
    ("solarized_dark", "Solarized Dark"),
    ("tomorrow", "Tomorrow"),
    ("tomorrow_night", "Tomorrow Night"),
    ("twilight", "Twilight"),
];

/// Position of `name` in [`EDITOR_THEMES`]
pub fn theme_index(name: &str) -> Option<usize> {
    EDITOR_THEMES.iter().position(|(n, _)| *n == name)
}

/// Theme list selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeList {
    /// Highlighted entry; `None` when the active theme isn't listed
    pub selected: Option<usize>,
}

impl ThemeList {
    /// Highlight the entry for `name`
    pub fn sync(&mut self, name: &str) {
        self.selected = theme_index(name);
    }

    pub fn select_next(&mut self) {
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % EDITOR_THEMES.len(),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        self.selected = Some(match self.selected {
            Some(0) | None => EDITOR_THEMES.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn selected_name(&self) -> Option<&'static str> {
        self.selected
            .and_then(|i| EDITOR_THEMES.get(i))
            .map(|(name, _)| *name)
    }
}

/// Borrowed view over everything a theme change touches
pub struct ThemeCoordinator<'a> {
    pub preference: &'a mut ThemePreference,
    pub list: &'a mut ThemeList,
    pub input: &'a mut dyn EditorSurface,
    pub output: &'a mut dyn EditorSurface,
    pub store: &'a mut dyn SessionStore,
}

impl ThemeCoordinator<'_> {
    /// Apply `page` app-wide and `editor_theme` to both surfaces, persisting both
    pub fn set_theme(&mut self, page: PageMode, editor_theme: &str) {
        self.preference.page = page;
        self.apply_editor_theme(editor_theme);
        persist(self.store, KEY_PAGE_THEME, page.as_str());
        persist(self.store, KEY_EDITOR_THEME, editor_theme);
        info!("Theme set to {} / {}", page, editor_theme);
    }

    /// Flip page mode and switch to its paired default editor theme
    pub fn toggle(&mut self) {
        let page = self.preference.page.toggled();
        self.set_theme(page, page.paired_editor_theme());
    }

    /// Apply an editor theme without touching page mode
    pub fn select_editor_theme(&mut self, name: &str) {
        self.apply_editor_theme(name);
        persist(self.store, KEY_EDITOR_THEME, name);
        info!("Editor theme set to {}", name);
    }

    fn apply_editor_theme(&mut self, name: &str) {
        self.preference.editor_theme = name.to_string();
        self.input.set_theme(name);
        self.output.set_theme(name);
        self.list.sync(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, MockSessionStore};
    use crate::surface::{MockEditorSurface, TextSurface};
    use jsonpad_core::SurfaceRole;

    struct Fixture {
        preference: ThemePreference,
        list: ThemeList,
        input: TextSurface,
        output: TextSurface,
        store: MemoryStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                preference: ThemePreference::default(),
                list: ThemeList::default(),
                input: TextSurface::new(SurfaceRole::Input, "github", 2),
                output: TextSurface::new(SurfaceRole::Output, "github", 2),
                store: MemoryStore::new(),
            }
        }

        fn coordinator(&mut self) -> ThemeCoordinator<'_> {
            ThemeCoordinator {
                preference: &mut self.preference,
                list: &mut self.list,
                input: &mut self.input,
                output: &mut self.output,
                store: &mut self.store,
            }
        }
    }

    #[test]
    fn test_set_theme_applies_everywhere() {
        let mut f = Fixture::new();
        f.coordinator().set_theme(PageMode::Dark, "dracula");

        assert_eq!(f.preference, ThemePreference::new(PageMode::Dark, "dracula"));
        assert_eq!(f.input.theme(), "dracula");
        assert_eq!(f.output.theme(), "dracula");
        assert_eq!(f.list.selected_name(), Some("dracula"));
        assert_eq!(f.store.get(KEY_PAGE_THEME).as_deref(), Some("dark"));
        assert_eq!(f.store.get(KEY_EDITOR_THEME).as_deref(), Some("dracula"));
    }

    #[test]
    fn test_toggle_twice_restores_defaults() {
        let mut f = Fixture::new();

        f.coordinator().toggle();
        assert_eq!(f.preference, ThemePreference::new(PageMode::Dark, "monokai"));
        assert_eq!(f.preference.page.toggle_glyph(), "🌞");

        f.coordinator().toggle();
        assert_eq!(f.preference, ThemePreference::default());
        assert_eq!(f.output.theme(), "github");
        assert_eq!(f.preference.page.toggle_glyph(), "🌙");
    }

    #[test]
    fn test_toggle_overrides_list_choice() {
        let mut f = Fixture::new();
        f.coordinator().select_editor_theme("twilight");
        f.coordinator().toggle();
        assert_eq!(f.preference.editor_theme, "monokai");
    }

    #[test]
    fn test_select_editor_theme_persists_only_editor_key() {
        let mut preference = ThemePreference::new(PageMode::Dark, "monokai");
        let mut list = ThemeList::default();
        let mut input = MockEditorSurface::new();
        let mut output = MockEditorSurface::new();
        let mut store = MockSessionStore::new();

        input
            .expect_set_theme()
            .withf(|name| name == "solarized_dark")
            .times(1)
            .return_const(());
        output
            .expect_set_theme()
            .withf(|name| name == "solarized_dark")
            .times(1)
            .return_const(());
        store
            .expect_set()
            .withf(|key, value| key == KEY_EDITOR_THEME && value == "solarized_dark")
            .times(1)
            .returning(|_, _| Ok(()));

        ThemeCoordinator {
            preference: &mut preference,
            list: &mut list,
            input: &mut input,
            output: &mut output,
            store: &mut store,
        }
        .select_editor_theme("solarized_dark");

        assert_eq!(preference.page, PageMode::Dark);
        assert_eq!(preference.editor_theme, "solarized_dark");
    }

    #[test]
    fn test_unknown_theme_clears_list_selection() {
        let mut f = Fixture::new();
        f.coordinator().set_theme(PageMode::Light, "chaos");
        assert_eq!(f.list.selected, None);
        assert_eq!(f.input.theme(), "chaos");
    }

    #[test]
    fn test_theme_list_navigation_wraps() {
        let mut list = ThemeList::default();
        list.select_previous();
        assert_eq!(list.selected_name(), Some("twilight"));
        list.select_next();
        assert_eq!(list.selected_name(), Some("github"));

        let mut list = ThemeList::default();
        list.select_next();
        assert_eq!(list.selected_name(), Some("github"));
    }
}
