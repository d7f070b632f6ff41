pub(crate) const THEME_KEY: &str = "pulsefeed_theme";
/// Legacy boolean flag ("true"/"false"). Read first, written alongside
/// THEME_KEY so older saved preferences keep working.
pub(crate) const NIGHT_MODE_KEY: &str = "pulsefeed_night_mode";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_string_from_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub(crate) fn save_string_to_storage(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_string_roundtrip() {
        save_string_to_storage("pulsefeed_test_key", "dark");
        assert_eq!(
            load_string_from_storage("pulsefeed_test_key"),
            Some("dark".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn test_missing_key_is_none() {
        assert_eq!(load_string_from_storage("pulsefeed_never_written"), None);
    }
}
