//! Center column: post composer and the mock activity feed. Nothing here is
//! persisted; the feed is rebuilt from static seeds on every load.

use crate::components::ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, Textarea,
};
use crate::models::{Activity, ActivityKind};
use leptos::prelude::*;

pub(crate) fn mock_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "a1".to_string(),
            kind: ActivityKind::Post,
            user_name: "Sarah Chen".to_string(),
            username: "sarahc".to_string(),
            content: "Finally shipped the new onboarding flow. Three weeks of iteration \
                      but the numbers already look much better."
                .to_string(),
            timestamp: "2h ago".to_string(),
            likes: Some(24),
            comments: Some(6),
        },
        Activity {
            id: "a2".to_string(),
            kind: ActivityKind::Like,
            user_name: "Marcus Webb".to_string(),
            username: "mwebb".to_string(),
            content: "liked a post about incremental static regeneration".to_string(),
            timestamp: "3h ago".to_string(),
            likes: None,
            comments: None,
        },
        Activity {
            id: "a3".to_string(),
            kind: ActivityKind::Post,
            user_name: "Priya Nair".to_string(),
            username: "priyan".to_string(),
            content: "Weekend reading list: two papers on CRDTs and one very long blog \
                      post about build systems. Recommendations welcome."
                .to_string(),
            timestamp: "5h ago".to_string(),
            likes: Some(41),
            comments: Some(12),
        },
        Activity {
            id: "a4".to_string(),
            kind: ActivityKind::Comment,
            user_name: "Tom Okafor".to_string(),
            username: "tokafor".to_string(),
            content: "commented: \"Have you tried profiling the layout pass first?\""
                .to_string(),
            timestamp: "8h ago".to_string(),
            likes: Some(3),
            comments: None,
        },
        Activity {
            id: "a5".to_string(),
            kind: ActivityKind::Follow,
            user_name: "Lena Fischer".to_string(),
            username: "lenaf".to_string(),
            content: "started following you".to_string(),
            timestamp: "1d ago".to_string(),
            likes: None,
            comments: None,
        },
    ]
}

fn kind_icon(kind: ActivityKind) -> impl IntoView {
    match kind {
        ActivityKind::Post => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 20h9"/><path d="M16.376 3.622a1 1 0 0 1 3.002 3.002L7.368 18.635a2 2 0 0 1-.855.506l-2.872.838a.5.5 0 0 1-.62-.62l.838-2.872a2 2 0 0 1 .506-.854z"/></svg>
        }
        .into_any(),
        ActivityKind::Like => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/></svg>
        }
        .into_any(),
        ActivityKind::Comment => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/></svg>
        }
        .into_any(),
        ActivityKind::Follow => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M2 21a8 8 0 0 1 13.292-6"/><circle cx="10" cy="8" r="5"/><path d="M19 16v6"/><path d="M22 19h-6"/></svg>
        }
        .into_any(),
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect()
}

/// Composer with an edit/preview toggle. Posting only clears the buffer.
#[component]
pub(crate) fn QuickPost() -> impl IntoView {
    let content = RwSignal::new(String::new());
    let preview = RwSignal::new(false);

    let can_post = move || !content.with(|c| c.trim().is_empty());

    let on_post = move |_| {
        if !can_post() {
            return;
        }
        content.set(String::new());
        preview.set(false);
    };

    view! {
        <Card class="gap-3 py-4">
            <CardContent class="flex flex-col gap-3 px-4">
                <Show
                    when=move || preview.get()
                    fallback=move || view! {
                        <Textarea
                            placeholder="What's on your mind?"
                            bind_value=content
                        />
                    }
                >
                    <div class="min-h-[4.5rem] whitespace-pre-wrap rounded-md border border-dashed border-border px-3 py-2 text-sm">
                        {move || {
                            let c = content.get();
                            if c.trim().is_empty() {
                                "Nothing to preview yet.".to_string()
                            } else {
                                c
                            }
                        }}
                    </div>
                </Show>
                <div class="flex items-center justify-between">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        on:click=move |_| preview.update(|p| *p = !*p)
                    >
                        {move || if preview.get() { "Edit" } else { "Preview" }}
                    </Button>
                    <Button
                        size=ButtonSize::Sm
                        attr:disabled=move || !can_post()
                        on:click=on_post
                    >
                        "Post"
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
pub(crate) fn ActivityFeed() -> impl IntoView {
    let activities = StoredValue::new(mock_activities());

    view! {
        <div class="flex flex-col gap-3">
            {activities
                .get_value()
                .into_iter()
                .map(|a| {
                    let avatar = initials(&a.user_name);
                    let kind_label = a.kind.label();
                    let icon = kind_icon(a.kind);
                    view! {
                        <Card class="gap-2 py-4" attr:id=format!("activity-{}", a.id)>
                            <CardContent class="flex flex-col gap-2 px-4">
                                <div class="flex items-center gap-2">
                                    <span class="flex size-8 shrink-0 items-center justify-center rounded-full bg-primary/10 text-xs font-semibold text-primary">
                                        {avatar}
                                    </span>
                                    <div class="min-w-0 flex-1">
                                        <span class="text-sm font-medium">{a.user_name.clone()}</span>
                                        <span class="ml-1 text-xs text-muted-foreground">
                                            {format!("@{}", a.username)}
                                        </span>
                                    </div>
                                    <Badge variant=BadgeVariant::Secondary>
                                        {icon}
                                        {kind_label}
                                    </Badge>
                                </div>
                                <p class="text-sm">{a.content.clone()}</p>
                                <div class="flex items-center gap-4 text-xs text-muted-foreground">
                                    <span>{a.timestamp.clone()}</span>
                                    {a.likes.map(|n| view! { <span>{format!("{n} likes")}</span> })}
                                    {a.comments.map(|n| view! { <span>{format!("{n} comments")}</span> })}
                                </div>
                            </CardContent>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_feed_is_non_empty_with_unique_ids() {
        let xs = mock_activities();
        assert!(!xs.is_empty());
        let mut ids: Vec<&str> = xs.iter().map(|a| a.id.as_str()).collect();
        let n = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);
    }

    #[test]
    fn test_initials_takes_first_two_words() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("Plato"), "P");
        assert_eq!(initials("Anna Maria van Dyk"), "AM");
    }
}
