//! Collapsible category sidebar with an edit mode: drag-and-drop reorder,
//! cross-group moves, trash-zone deletion and multi-select batch deletion.
//! All tree/staging semantics live in [`engine`]; this module is DOM wiring.

pub(crate) mod engine;

use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle,
};
use crate::models::{GroupIcon, NodeId, NodeRef};
use crate::state::AppContext;
use engine::{
    apply_drop, apply_staged_deletion, resolve_labels, trash_drop, CategoryTree, DeletionStaging,
    DragSession, DropTarget, TrashOutcome,
};
use icons::{Check, ChevronDown, ChevronRight, X};
use leptos::prelude::*;
use std::collections::HashSet;
use strum::IntoEnumIterator;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Before/after decision from pointer position vs the target row midpoint.
fn insert_after_from_pointer(ev: &web_sys::DragEvent) -> bool {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.get_bounding_client_rect())
        .map(|rect| {
            let mid = rect.top() + rect.height() / 2.0;
            (ev.client_y() as f64) >= mid
        })
        .unwrap_or(true)
}

fn drag_payload(ev: &web_sys::DragEvent) -> Option<NodeRef> {
    let raw = ev
        .data_transfer()
        .and_then(|dt| dt.get_data("text/plain").ok())
        .unwrap_or_default();
    NodeRef::parse(&raw)
}

#[component]
pub(crate) fn GroupIconView(icon: GroupIcon, #[prop(into, optional)] class: String) -> impl IntoView {
    match icon {
        GroupIcon::Code => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class><polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/></svg>
        }
        .into_any(),
        GroupIcon::BookOpen => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class><path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/></svg>
        }
        .into_any(),
        GroupIcon::Rocket => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class><path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/></svg>
        }
        .into_any(),
        GroupIcon::Heart => view! {
            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class=class><path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/></svg>
        }
        .into_any(),
    }
}

#[component]
pub(crate) fn CategorySidebar() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let collapsed = app_state.0.sidebar_collapsed;

    let tree = RwSignal::new(CategoryTree::seeded());
    // Keyed by name so the open set survives reorders.
    let open_groups = RwSignal::new(
        tree.with_untracked(|t| {
            t.groups()
                .iter()
                .take(2)
                .map(|g| g.name.clone())
                .collect::<HashSet<String>>()
        }),
    );

    let editing = RwSignal::new(false);
    let drag: RwSignal<DragSession> = RwSignal::new(DragSession::Idle);
    let staged: RwSignal<DeletionStaging> = RwSignal::new(DeletionStaging::default());
    let confirm_open = RwSignal::new(false);
    let confirm_refs: RwSignal<Vec<NodeRef>> = RwSignal::new(vec![]);
    let notice: RwSignal<Option<String>> = RwSignal::new(None);

    let long_press_timer: RwSignal<Option<i32>> = RwSignal::new(None);
    let collapse_timer: RwSignal<Option<i32>> = RwSignal::new(None);

    // Collapse fades row text out before the rail shrinks; expanding restores
    // the width first, then fades text back in.
    let show_text = RwSignal::new(!collapsed.get_untracked());

    let adding_group = RwSignal::new(false);
    let new_group_icon = RwSignal::new(GroupIcon::Code);
    let renaming_sub: RwSignal<Option<NodeId>> = RwSignal::new(None);
    let rename_value = RwSignal::new(String::new());

    let multi_active = move || staged.with(|s| !s.is_empty());

    let cancel_long_press = move || {
        if let Some(win) = web_sys::window() {
            if let Some(tid) = long_press_timer.get_untracked() {
                let _ = win.clear_timeout_with_handle(tid);
            }
        }
        long_press_timer.set(None);
    };

    let begin_long_press = move || {
        if editing.get_untracked() {
            return;
        }
        cancel_long_press();
        let cb = Closure::once_into_js(move || {
            editing.set(true);
            long_press_timer.set(None);
        });
        let tid = window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 500)
            .unwrap_or(0);
        long_press_timer.set(Some(tid));
    };

    // Leaving edit mode discards everything in flight.
    let exit_edit = move || {
        editing.set(false);
        drag.update(|d| d.cancel());
        staged.update(|s| s.clear());
        confirm_open.set(false);
        confirm_refs.set(vec![]);
        notice.set(None);
        adding_group.set(false);
        renaming_sub.set(None);
    };

    let on_toggle_edit = move |_| {
        if editing.get_untracked() {
            exit_edit();
        } else {
            editing.set(true);
        }
    };

    // A stale fade timer from a rapid re-toggle must never fire; always
    // cancel the previous one before scheduling.
    let clear_collapse_timer = move || {
        if let Some(win) = web_sys::window() {
            if let Some(tid) = collapse_timer.get_untracked() {
                let _ = win.clear_timeout_with_handle(tid);
            }
        }
        collapse_timer.set(None);
    };

    let expand_sidebar = move || {
        clear_collapse_timer();
        collapsed.set(false);
        let cb = Closure::once_into_js(move || {
            collapse_timer.set(None);
            if !collapsed.get_untracked() {
                show_text.set(true);
            }
        });
        let tid = window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 200)
            .unwrap_or(0);
        collapse_timer.set(Some(tid));
    };

    let on_toggle_collapse = move |_| {
        if collapsed.get_untracked() {
            expand_sidebar();
        } else {
            clear_collapse_timer();
            show_text.set(false);
            let cb = Closure::once_into_js(move || {
                collapse_timer.set(None);
                collapsed.set(true);
            });
            let tid = window()
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    200,
                )
                .unwrap_or(0);
            collapse_timer.set(Some(tid));
        }
    };

    let on_trash_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let src = drag_payload(&ev);
        drag.set(DragSession::Idle);
        let Some(src) = src else { return };

        if multi_active() {
            // Multi mode: a trash drop stages instead of proposing.
            tree.with_untracked(|t| {
                staged.update(|s| {
                    s.stage(src);
                    if let NodeRef::Group(gid) = src {
                        for sid in t.sub_ids_of_group(gid) {
                            s.stage(NodeRef::Sub(sid));
                        }
                    }
                });
            });
            return;
        }

        match tree.with_untracked(|t| trash_drop(t, src)) {
            TrashOutcome::Propose(r) => {
                confirm_refs.set(vec![r]);
                confirm_open.set(true);
            }
            TrashOutcome::BlockedNonEmptyGroup => {
                notice.set(Some(
                    "This group still has sub-items. Remove them first.".to_string(),
                ));
            }
            TrashOutcome::Missing => {}
        }
    };

    let on_open_batch_confirm = move |_| {
        let refs = staged.with_untracked(|s| s.refs().to_vec());
        if refs.is_empty() {
            return;
        }
        confirm_refs.set(refs);
        confirm_open.set(true);
    };

    let on_confirm_delete = move |_| {
        let refs = confirm_refs.get_untracked();
        tree.update(|t| {
            apply_staged_deletion(t, &refs);
        });
        staged.update(|s| s.clear());
        confirm_refs.set(vec![]);
        confirm_open.set(false);
    };

    let on_cancel_delete = move |_| {
        confirm_refs.set(vec![]);
        confirm_open.set(false);
    };

    let commit_rename = move |sid: NodeId| {
        let name = rename_value.get_untracked();
        tree.update(|t| {
            t.rename_sub(sid, &name);
        });
        renaming_sub.set(None);
    };

    let groups_view = move || {
        tree.with(|t| {
            t.groups()
                .iter()
                .map(|g| {
                    let gid = g.id;
                    let gref = NodeRef::Group(gid);
                    let gname = StoredValue::new(g.name.clone());
                    let gicon = g.icon;
                    let sub_count = g.subs.len();
                    let is_open = move || open_groups.with(|o| o.contains(&gname.get_value()));

                    let row_class = move || {
                        let mut c = String::from(
                            "group/row flex w-full items-center gap-2 rounded-md px-2 py-1.5 text-sm font-medium hover:bg-accent hover:text-accent-foreground",
                        );
                        if staged.with(|s| s.is_staged(gref)) {
                            c.push_str(" bg-destructive/10 text-destructive");
                        }
                        match drag.get() {
                            DragSession::Over(_, DropTarget::GroupRow { group, after })
                                if group == gid =>
                            {
                                c.push_str(if after {
                                    " border-b-2 border-primary"
                                } else {
                                    " border-t-2 border-primary"
                                });
                            }
                            _ => {}
                        }
                        c
                    };

                    let subs_rows = move || {
                        tree.with(|t| {
                            t.group_index(gid).map(|gi| {
                                t.groups()[gi]
                                    .subs
                                    .iter()
                                    .map(|s| {
                            let sid = s.id;
                            let sref = NodeRef::Sub(sid);
                            let sname = StoredValue::new(s.name.clone());
                            let count = s.count;

                            let sub_class = move || {
                                let mut c = String::from(
                                    "flex w-full items-center gap-2 rounded-md px-2 py-1 text-sm text-muted-foreground hover:bg-accent hover:text-accent-foreground",
                                );
                                if staged.with(|st| st.is_staged(sref)) {
                                    c.push_str(" bg-destructive/10 text-destructive");
                                }
                                match drag.get() {
                                    DragSession::Over(_, DropTarget::SubRow { sub, after })
                                        if sub == sid =>
                                    {
                                        c.push_str(if after {
                                            " border-b-2 border-primary"
                                        } else {
                                            " border-t-2 border-primary"
                                        });
                                    }
                                    _ => {}
                                }
                                c
                            };

                            view! {
                                <li
                                    class=sub_class
                                    draggable="true"
                                    on:dragstart=move |ev: web_sys::DragEvent| {
                                        if !editing.get_untracked()
                                            || staged.with_untracked(|st| st.is_staged(sref))
                                        {
                                            ev.prevent_default();
                                            return;
                                        }
                                        let mut started = false;
                                        drag.update(|d| started = d.start(sref));
                                        if !started {
                                            ev.prevent_default();
                                            return;
                                        }
                                        if let Some(dt) = ev.data_transfer() {
                                            let _ = dt.set_data("text/plain", &sref.encode());
                                            dt.set_drop_effect("move");
                                        }
                                    }
                                    on:dragover=move |ev: web_sys::DragEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                        if let Some(dt) = ev.data_transfer() {
                                            dt.set_drop_effect("move");
                                        }
                                        let after = insert_after_from_pointer(&ev);
                                        drag.update(|d| d.hover(DropTarget::SubRow { sub: sid, after }));
                                    }
                                    on:dragleave=move |_| drag.update(|d| d.leave())
                                    on:drop=move |ev: web_sys::DragEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                        let src = drag_payload(&ev);
                                        let after = insert_after_from_pointer(&ev);
                                        drag.set(DragSession::Idle);
                                        if let Some(src) = src {
                                            tree.update(|t| {
                                                let _ = apply_drop(
                                                    t,
                                                    src,
                                                    DropTarget::SubRow { sub: sid, after },
                                                );
                                            });
                                        }
                                    }
                                    on:dragend=move |_| drag.set(DragSession::Idle)
                                    on:mousedown=move |_| begin_long_press()
                                    on:mouseup=move |_| cancel_long_press()
                                    on:mouseleave=move |_| cancel_long_press()
                                    on:touchstart=move |_| begin_long_press()
                                    on:touchend=move |_| cancel_long_press()
                                    on:touchcancel=move |_| cancel_long_press()
                                >
                                    <Show when=move || editing.get()>
                                        <button
                                            class=move || {
                                                if staged.with(|st| st.is_staged(sref)) {
                                                    "flex size-4 shrink-0 items-center justify-center rounded border border-destructive bg-destructive text-white"
                                                } else {
                                                    "flex size-4 shrink-0 items-center justify-center rounded border border-input"
                                                }
                                            }
                                            aria-label="Select for deletion"
                                            on:click=move |ev: web_sys::MouseEvent| {
                                                ev.stop_propagation();
                                                staged.update(|st| st.toggle_sub(sid));
                                            }
                                        >
                                            <Show when=move || staged.with(|st| st.is_staged(sref))>
                                                <Check class="size-3" />
                                            </Show>
                                        </button>
                                    </Show>
                                    <Show
                                        when=move || renaming_sub.get() == Some(sid)
                                        fallback=move || view! {
                                            <span
                                                class="min-w-0 flex-1 truncate text-left"
                                                on:click=move |_| {
                                                    if editing.get_untracked() {
                                                        rename_value.set(sname.get_value());
                                                        renaming_sub.set(Some(sid));
                                                    }
                                                }
                                            >
                                                {sname.get_value()}
                                            </span>
                                            <span class="ml-auto rounded-full bg-muted px-2 py-0.5 text-xs tabular-nums">
                                                {count}
                                            </span>
                                        }
                                    >
                                        <input
                                            class="h-6 min-w-0 flex-1 rounded border border-input bg-transparent px-1 text-sm outline-none focus-visible:ring-2 focus-visible:ring-ring/50"
                                            autofocus=true
                                            prop:value=move || rename_value.get()
                                            on:input=move |ev: web_sys::Event| {
                                                if let Some(el) = ev
                                                    .target()
                                                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                                {
                                                    rename_value.set(el.value());
                                                }
                                            }
                                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                match ev.key().as_str() {
                                                    "Enter" => commit_rename(sid),
                                                    "Escape" => renaming_sub.set(None),
                                                    _ => {}
                                                }
                                            }
                                            on:blur=move |_| {
                                                if renaming_sub.get_untracked() == Some(sid) {
                                                    commit_rename(sid);
                                                }
                                            }
                                        />
                                    </Show>
                                </li>
                            }
                                    })
                                    .collect_view()
                            })
                        })
                    };

                    view! {
                        <li class="select-none">
                            <div
                                class=row_class
                                draggable="true"
                                on:click=move |_| {
                                    if !editing.get_untracked() {
                                        open_groups.update(|o| {
                                            let name = gname.get_value();
                                            if !o.remove(&name) {
                                                o.insert(name);
                                            }
                                        });
                                    }
                                }
                                on:dragstart=move |ev: web_sys::DragEvent| {
                                    if !editing.get_untracked()
                                        || staged.with_untracked(|st| st.is_staged(gref))
                                    {
                                        ev.prevent_default();
                                        return;
                                    }
                                    let mut started = false;
                                    drag.update(|d| started = d.start(gref));
                                    if !started {
                                        ev.prevent_default();
                                        return;
                                    }
                                    if let Some(dt) = ev.data_transfer() {
                                        let _ = dt.set_data("text/plain", &gref.encode());
                                        dt.set_drop_effect("move");
                                    }
                                }
                                on:dragover=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    if let Some(dt) = ev.data_transfer() {
                                        dt.set_drop_effect("move");
                                    }
                                    let after = insert_after_from_pointer(&ev);
                                    drag.update(|d| d.hover(DropTarget::GroupRow { group: gid, after }));
                                }
                                on:dragleave=move |_| drag.update(|d| d.leave())
                                on:drop=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    let src = drag_payload(&ev);
                                    let after = insert_after_from_pointer(&ev);
                                    drag.set(DragSession::Idle);
                                    if let Some(src) = src {
                                        tree.update(|t| {
                                            let _ = apply_drop(
                                                t,
                                                src,
                                                DropTarget::GroupRow { group: gid, after },
                                            );
                                        });
                                    }
                                }
                                on:dragend=move |_| drag.set(DragSession::Idle)
                                on:mousedown=move |_| begin_long_press()
                                on:mouseup=move |_| cancel_long_press()
                                on:mouseleave=move |_| cancel_long_press()
                                on:touchstart=move |_| begin_long_press()
                                on:touchend=move |_| cancel_long_press()
                                on:touchcancel=move |_| cancel_long_press()
                            >
                                <Show when=move || editing.get()>
                                    <button
                                        class=move || {
                                            if staged.with(|st| st.is_staged(gref)) {
                                                "flex size-4 shrink-0 items-center justify-center rounded border border-destructive bg-destructive text-white"
                                            } else {
                                                "flex size-4 shrink-0 items-center justify-center rounded border border-input"
                                            }
                                        }
                                        aria-label="Select group for deletion"
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            ev.stop_propagation();
                                            tree.with_untracked(|t| {
                                                staged.update(|st| st.toggle_group(t, gid));
                                            });
                                        }
                                    >
                                        <Show when=move || staged.with(|st| st.is_staged(gref))>
                                            <Check class="size-3" />
                                        </Show>
                                    </button>
                                </Show>
                                <GroupIconView icon=gicon class="shrink-0" />
                                <span class="min-w-0 flex-1 truncate text-left">{gname.get_value()}</span>
                                <span class="text-xs text-muted-foreground">{sub_count}</span>
                                <Show
                                    when=is_open
                                    fallback=|| view! { <ChevronRight class="size-4 shrink-0 text-muted-foreground" /> }
                                >
                                    <ChevronDown class="size-4 shrink-0 text-muted-foreground" />
                                </Show>
                            </div>

                            <Show when=is_open>
                                <ul
                                    class="ml-5 mt-0.5 flex min-h-6 flex-col gap-0.5 border-l border-border pl-2"
                                    on:dragover=move |ev: web_sys::DragEvent| {
                                        ev.prevent_default();
                                        if let Some(dt) = ev.data_transfer() {
                                            dt.set_drop_effect("move");
                                        }
                                        drag.update(|d| d.hover(DropTarget::GroupBody(gid)));
                                    }
                                    on:dragleave=move |_| drag.update(|d| d.leave())
                                    on:drop=move |ev: web_sys::DragEvent| {
                                        ev.prevent_default();
                                        let src = drag_payload(&ev);
                                        drag.set(DragSession::Idle);
                                        if let Some(src) = src {
                                            tree.update(|t| {
                                                let _ = apply_drop(t, src, DropTarget::GroupBody(gid));
                                            });
                                        }
                                    }
                                >
                                    {subs_rows}
                                    <Show when=move || editing.get()>
                                        <li>
                                            <button
                                                class="flex w-full items-center gap-2 rounded-md px-2 py-1 text-xs text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                                                on:click=move |_| {
                                                    tree.update(|t| {
                                                        let _ = t.add_sub(gid, "New item", 0);
                                                    });
                                                }
                                            >
                                                <svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M5 12h14"/><path d="M12 5v14"/></svg>
                                                "Add item"
                                            </button>
                                        </li>
                                    </Show>
                                </ul>
                            </Show>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    // Icon-only rail shown while collapsed; clicking a group expands the
    // sidebar and opens that group.
    let rail_view = move || {
        tree.with(|t| {
            t.groups()
                .iter()
                .map(|g| {
                    let gname = StoredValue::new(g.name.clone());
                    let gicon = g.icon;
                    view! {
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            attr:title=gname.get_value()
                            on:click=move |_| {
                                open_groups.update(|o| {
                                    o.insert(gname.get_value());
                                });
                                expand_sidebar();
                            }
                        >
                            <GroupIconView icon=gicon />
                        </Button>
                    }
                })
                .collect_view()
        })
    };

    let icon_picker = move || {
        GroupIcon::iter()
            .map(|icon| {
                view! {
                    <button
                        class=move || {
                            if new_group_icon.get() == icon {
                                "flex size-8 items-center justify-center rounded-md border border-primary bg-primary/10 text-primary"
                            } else {
                                "flex size-8 items-center justify-center rounded-md border border-input text-muted-foreground hover:bg-accent"
                            }
                        }
                        aria-label=move || { <&'static str>::from(icon) }
                        on:click=move |_| new_group_icon.set(icon)
                    >
                        <GroupIconView icon=icon />
                    </button>
                }
            })
            .collect_view()
    };

    let confirm_items = move || {
        tree.with(|t| confirm_refs.with(|refs| resolve_labels(t, refs)))
    };

    view! {
        <aside class=move || {
            if collapsed.get() {
                "relative flex h-full w-14 shrink-0 flex-col border-r border-border bg-card transition-[width] duration-200"
            } else {
                "relative flex h-full w-64 shrink-0 flex-col border-r border-border bg-card transition-[width] duration-200"
            }
        }>
            <div class="flex items-center gap-1 border-b border-border px-2 py-2">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::IconSm
                    attr:aria-label="Toggle sidebar"
                    on:click=on_toggle_collapse
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect width="18" height="18" x="3" y="3" rx="2"/><path d="M9 3v18"/></svg>
                </Button>
                <Show when=move || !collapsed.get()>
                    <span class=move || {
                        if show_text.get() {
                            "flex-1 text-sm font-semibold opacity-100 transition-opacity duration-200"
                        } else {
                            "flex-1 text-sm font-semibold opacity-0 transition-opacity duration-200"
                        }
                    }>
                        "Categories"
                    </span>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        attr:aria-label="Toggle edit mode"
                        on:click=on_toggle_edit
                    >
                        <Show
                            when=move || editing.get()
                            fallback=|| view! {
                                <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z"/></svg>
                            }
                        >
                            "Done"
                        </Show>
                    </Button>
                </Show>
            </div>

            <Show
                when=move || !collapsed.get()
                fallback=move || view! {
                    <div class="flex flex-col items-center gap-1 py-2">{rail_view}</div>
                }
            >
                <nav class=move || {
                    if show_text.get() {
                        "flex-1 overflow-y-auto px-2 py-2 opacity-100 transition-opacity duration-200"
                    } else {
                        "flex-1 overflow-y-auto px-2 py-2 opacity-0 transition-opacity duration-200"
                    }
                }>
                    <ul class="flex flex-col gap-0.5">{groups_view}</ul>

                    <Show when=move || editing.get()>
                        <div class="mt-2 border-t border-border pt-2">
                            <Show
                                when=move || adding_group.get()
                                fallback=move || view! {
                                    <button
                                        class="flex w-full items-center gap-2 rounded-md px-2 py-1.5 text-sm text-muted-foreground hover:bg-accent hover:text-accent-foreground"
                                        on:click=move |_| adding_group.set(true)
                                    >
                                        <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M5 12h14"/><path d="M12 5v14"/></svg>
                                        "Add group"
                                    </button>
                                }
                            >
                                <div class="flex flex-col gap-2 rounded-md border border-border p-2">
                                    <div class="flex items-center gap-1">{icon_picker}</div>
                                    <div class="flex gap-1">
                                        <Button
                                            size=ButtonSize::Sm
                                            class="flex-1"
                                            on:click=move |_| {
                                                tree.update(|t| {
                                                    let _ = t.add_group(
                                                        "New group",
                                                        new_group_icon.get_untracked(),
                                                    );
                                                });
                                                adding_group.set(false);
                                            }
                                        >
                                            "Add"
                                        </Button>
                                        <Button
                                            variant=ButtonVariant::Ghost
                                            size=ButtonSize::Sm
                                            on:click=move |_| adding_group.set(false)
                                        >
                                            "Cancel"
                                        </Button>
                                    </div>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </nav>
            </Show>

            // Trash drop zone, shown only while a drag is active.
            <Show when=move || editing.get() && drag.with(|d| d.source().is_some())>
                <div
                    class=move || {
                        if drag.with(|d| d.current_target() == Some(DropTarget::Trash)) {
                            "absolute inset-x-2 bottom-2 z-10 flex h-16 items-center justify-center gap-2 rounded-lg border-2 border-destructive bg-destructive/20 text-sm text-destructive"
                        } else {
                            "absolute inset-x-2 bottom-2 z-10 flex h-16 items-center justify-center gap-2 rounded-lg border-2 border-dashed border-destructive/50 bg-card/90 text-sm text-muted-foreground"
                        }
                    }
                    on:dragover=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        if let Some(dt) = ev.data_transfer() {
                            dt.set_drop_effect("move");
                        }
                        drag.update(|d| d.hover(DropTarget::Trash));
                    }
                    on:dragleave=move |_| drag.update(|d| d.leave())
                    on:drop=on_trash_drop
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/></svg>
                    "Drop here to delete"
                </div>
            </Show>

            // Batch-delete button, shown once a multi selection exists.
            <Show when=move || editing.get() && multi_active() && drag.with(|d| d.source().is_none())>
                <div class="absolute inset-x-2 bottom-2 z-10">
                    <Button
                        variant=ButtonVariant::Destructive
                        size=ButtonSize::Sm
                        class="w-full"
                        on:click=on_open_batch_confirm
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/></svg>
                        {move || format!("Delete selected ({})", staged.with(|s| s.len()))}
                    </Button>
                </div>
            </Show>

            // Blocked-deletion notice.
            <Show when=move || notice.get().is_some()>
                <div class="absolute inset-x-2 bottom-20 z-10">
                    <Alert class="bg-card">
                        <AlertTitle>"Cannot delete group"</AlertTitle>
                        <AlertDescription>
                            {move || notice.get().unwrap_or_default()}
                        </AlertDescription>
                        <button
                            class="absolute right-2 top-2 text-muted-foreground hover:text-foreground"
                            aria-label="Dismiss"
                            on:click=move |_| notice.set(None)
                        >
                            <X class="size-4" />
                        </button>
                    </Alert>
                </div>
            </Show>

            // Deletion confirmation overlay.
            <Show when=move || confirm_open.get()>
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                    <Card class="w-full max-w-sm">
                        <CardHeader>
                            <CardTitle>"Confirm deletion"</CardTitle>
                        </CardHeader>
                        <CardContent class="flex flex-col gap-3">
                            <ul class="flex max-h-48 flex-col gap-1 overflow-y-auto text-sm">
                                {move || {
                                    confirm_items()
                                        .into_iter()
                                        .map(|(r, label)| {
                                            let kind = match r {
                                                NodeRef::Group(_) => "group",
                                                NodeRef::Sub(_) => "item",
                                            };
                                            view! {
                                                <li class="flex items-center justify-between rounded bg-muted px-2 py-1">
                                                    <span class="truncate">{label}</span>
                                                    <span class="text-xs text-muted-foreground">{kind}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                            <div class="flex justify-end gap-2">
                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::Sm
                                    on:click=on_cancel_delete
                                >
                                    "Cancel"
                                </Button>
                                <Button
                                    variant=ButtonVariant::Destructive
                                    size=ButtonSize::Sm
                                    on:click=on_confirm_delete
                                >
                                    "Delete"
                                </Button>
                            </div>
                        </CardContent>
                    </Card>
                </div>
            </Show>
        </aside>
    }
}
