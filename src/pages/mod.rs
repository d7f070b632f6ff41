//! Page shell: top navigation, the three-column home layout and the right
//! discovery panel. All content here is static mock data.

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input, Label};
use crate::feed::{ActivityFeed, QuickPost};
use crate::sidebar::CategorySidebar;
use crate::state::AppContext;
use crate::theme::FloatingThemeToggle;
use leptos::prelude::*;

#[component]
pub(crate) fn TopNavigation() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="flex h-14 shrink-0 items-center gap-3 border-b border-border bg-card px-4">
            <span class="text-lg font-semibold tracking-tight">"Pulsefeed"</span>
            <div class="flex-1"></div>

            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                class="relative"
                attr:aria-label="Notifications"
            >
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M10.268 21a2 2 0 0 0 3.464 0"/><path d="M3.262 15.326A1 1 0 0 0 4 17h16a1 1 0 0 0 .74-1.673C19.41 13.956 18 12.499 18 8A6 6 0 0 0 6 8c0 4.499-1.411 5.956-2.738 7.326"/></svg>
                <span class="absolute -right-0.5 -top-0.5 flex size-4 items-center justify-center rounded-full bg-destructive text-[10px] font-medium text-white">
                    "3"
                </span>
            </Button>

            <div class="relative">
                <button
                    class="flex size-8 items-center justify-center rounded-full bg-primary/10 text-xs font-semibold text-primary hover:ring-2 hover:ring-ring/50"
                    aria-label="Account menu"
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                >
                    "ME"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="absolute right-0 top-10 z-30 w-40 rounded-md border border-border bg-card py-1 shadow-md">
                        <button class="block w-full px-3 py-1.5 text-left text-sm hover:bg-accent">"Profile"</button>
                        <button class="block w-full px-3 py-1.5 text-left text-sm hover:bg-accent">"Settings"</button>
                        <div class="my-1 border-t border-border"></div>
                        <button class="block w-full px-3 py-1.5 text-left text-sm text-destructive hover:bg-accent">"Sign out"</button>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub(crate) fn DiscoveryPanel() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let collapsed = app_state.0.discovery_collapsed;

    let search = RwSignal::new(String::new());

    let type_counts = StoredValue::new(vec![
        ("Posts", 128u32),
        ("Likes", 342),
        ("Comments", 96),
        ("Follows", 41),
    ]);
    let trending = StoredValue::new(vec![
        "#rustlang", "#wasm", "#buildinpublic", "#sideprojects", "#design",
    ]);

    view! {
        <aside class=move || {
            if collapsed.get() {
                "flex h-full w-12 shrink-0 flex-col items-center gap-2 border-l border-border bg-card py-2"
            } else {
                "flex h-full w-72 shrink-0 flex-col gap-4 overflow-y-auto border-l border-border bg-card p-4"
            }
        }>
            <Show
                when=move || !collapsed.get()
                fallback=move || view! {
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::IconSm
                        attr:aria-label="Expand discovery panel"
                        on:click=move |_| collapsed.set(false)
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/></svg>
                    </Button>
                }
            >
                <div class="flex items-center justify-between">
                    <span class="text-sm font-semibold">"Discover"</span>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::IconSm
                        attr:aria-label="Collapse discovery panel"
                        on:click=move |_| collapsed.set(true)
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m9 18 6-6-6-6"/></svg>
                    </Button>
                </div>

                <div class="flex flex-col gap-1.5">
                    <Label
                        html_for="discovery-search"
                        class="text-xs font-medium uppercase tracking-wide text-muted-foreground"
                    >
                        "Search"
                    </Label>
                    <Input
                        id="discovery-search"
                        placeholder="Search activity..."
                        bind_value=search
                    />
                </div>

                <div class="flex flex-col gap-1">
                    <span class="text-xs font-medium uppercase tracking-wide text-muted-foreground">
                        "Activity"
                    </span>
                    <ul class="flex flex-col gap-0.5">
                        {type_counts
                            .get_value()
                            .into_iter()
                            .map(|(label, count)| view! {
                                <li class="flex items-center justify-between rounded-md px-2 py-1 text-sm hover:bg-accent">
                                    <span>{label}</span>
                                    <span class="text-xs tabular-nums text-muted-foreground">{count}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="flex flex-col gap-1">
                    <span class="text-xs font-medium uppercase tracking-wide text-muted-foreground">
                        "Trending"
                    </span>
                    <ul class="flex flex-col gap-0.5">
                        {trending
                            .get_value()
                            .into_iter()
                            .map(|topic| view! {
                                <li class="rounded-md px-2 py-1 text-sm text-primary hover:bg-accent">
                                    {topic}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </aside>
    }
}

#[component]
pub(crate) fn HomePage() -> impl IntoView {
    view! {
        <div class="flex h-screen flex-col bg-background text-foreground">
            <TopNavigation />
            <div class="flex min-h-0 flex-1">
                <CategorySidebar />
                <main class="min-w-0 flex-1 overflow-y-auto">
                    <div class="mx-auto flex max-w-2xl flex-col gap-4 p-4">
                        <QuickPost />
                        <ActivityFeed />
                    </div>
                </main>
                <DiscoveryPanel />
            </div>
            <FloatingThemeToggle />
        </div>
    }
}
