use crate::theme::{apply_theme, load_initial_theme, Theme};
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    /// Global theme; applied to `<html>` at construction and on every toggle.
    pub theme: RwSignal<Theme>,

    /// Global UI state. In-memory only; resets on reload.
    pub sidebar_collapsed: RwSignal<bool>,
    pub discovery_collapsed: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        let theme = load_initial_theme();
        apply_theme(theme);

        Self {
            theme: RwSignal::new(theme),
            sidebar_collapsed: RwSignal::new(false),
            discovery_collapsed: RwSignal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
