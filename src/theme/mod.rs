//! Light/dark theme: load order is storage, then the OS preference media
//! query, then light. Applied as a `dark` class on `<html>` so Tailwind's
//! `dark:` variants pick it up.

use crate::storage::{
    load_string_from_storage, save_string_to_storage, NIGHT_MODE_KEY, THEME_KEY,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Theme {
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

    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// The boolean night-mode key wins over the string key; it is the one a manual
/// toggle wrote last in older saved state.
pub(crate) fn load_initial_theme() -> Theme {
    if let Some(v) = load_string_from_storage(NIGHT_MODE_KEY) {
        return if v == "true" { Theme::Dark } else { Theme::Light };
    }
    if let Some(t) = load_string_from_storage(THEME_KEY).as_deref().and_then(Theme::parse) {
        return t;
    }
    if prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

pub(crate) fn persist_theme(theme: Theme) {
    save_string_to_storage(THEME_KEY, theme.as_str());
    save_string_to_storage(NIGHT_MODE_KEY, if theme.is_dark() { "true" } else { "false" });
}

pub(crate) fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = if theme.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
}

/// Edge-docked toggle that expands on hover. The hover-out collapse is
/// debounced so moving between the tab and the button does not flicker.
#[component]
pub(crate) fn FloatingThemeToggle() -> impl IntoView {
    let app_state = expect_context::<crate::state::AppContext>();
    let theme = app_state.0.theme;

    let expanded = RwSignal::new(false);
    let collapse_timer_id: RwSignal<Option<i32>> = RwSignal::new(None);

    let clear_collapse_timer = move || {
        if let Some(win) = web_sys::window() {
            if let Some(tid) = collapse_timer_id.get_untracked() {
                let _ = win.clear_timeout_with_handle(tid);
            }
        }
        collapse_timer_id.set(None);
    };

    let on_enter = move |_| {
        clear_collapse_timer();
        expanded.set(true);
    };

    let on_leave = move |_| {
        clear_collapse_timer();
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
            expanded.set(false);
            collapse_timer_id.set(None);
        });
        let tid = window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref::<js_sys::Function>(),
                150,
            )
            .unwrap_or(0);
        collapse_timer_id.set(Some(tid));
    };

    let on_toggle = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        apply_theme(next);
        persist_theme(next);
    };

    view! {
        <div
            class="fixed right-0 top-1/2 z-40 -translate-y-1/2"
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <div class=move || {
                if expanded.get() {
                    "flex items-center translate-x-0 transition-transform duration-200"
                } else {
                    "flex items-center translate-x-10 transition-transform duration-200"
                }
            }>
                <div class="flex h-10 w-4 items-center justify-center rounded-l-md border border-r-0 border-border bg-card text-muted-foreground shadow-sm">
                    <svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m15 18-6-6 6-6"/></svg>
                </div>
                <button
                    class="flex h-10 w-10 items-center justify-center border border-border bg-card text-foreground shadow-sm hover:bg-accent"
                    aria-label="Toggle theme"
                    on:click=on_toggle
                >
                    <Show
                        when=move || theme.get().is_dark()
                        fallback=|| view! {
                            // moon: click to switch into dark mode
                            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/></svg>
                        }
                    >
                        // sun: click to switch into light mode
                        <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/></svg>
                    </Show>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_roundtrip() {
        for t in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_theme_parse_rejects_unknown() {
        assert_eq!(Theme::parse("blue"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
