use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm shadow-sm"}
    clx! {AlertTitle, h4, "mb-1 pr-6 font-medium tracking-tight leading-none"}
    clx! {AlertDescription, p, "text-sm leading-relaxed text-muted-foreground"}
}

#[allow(unused_imports)]
pub use components::*;
