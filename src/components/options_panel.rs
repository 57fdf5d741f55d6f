//! The options panel: tabbed property editing for the selected node.
//!
//! ARCHITECTURE
//! ============
//! The panel is a pure projection of the two context signals. Every render
//! re-derives its rows from the selected node's props, so edits flow
//! store -> state -> render with no copies of tree data held here.

use leptos::prelude::*;

use crate::app::StoreHandle;
use crate::components::option_row::{AddOptionRow, OptionRow};
use crate::components::style_inputs::StyleRowView;
use crate::schema::catalog::StyleCatalog;
use crate::schema::reconcile::{StyleSection, style_sections};
use crate::state::panel::PanelTab;
use crate::store::dispatch;
use crate::util::prop_list::option_entries;

const PANEL_TABS: [PanelTab; 2] = [PanelTab::QuickStyle, PanelTab::Properties];

/// Property-editing panel for the currently selected node.
#[component]
pub fn OptionsPanel() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let catalog = expect_context::<StyleCatalog>();

    view! {
        <div class="options-panel">
            {move || {
                let Some(node) = store.workspace.get().current else {
                    return view! {
                        <div class="options-panel__empty">
                            <span class="options-panel__empty-label">
                                "Properties are not available"
                            </span>
                        </div>
                    }
                        .into_any();
                };

                let panel = store.panel.get();
                let active = panel.active_tab;

                let tabs = PANEL_TABS
                    .iter()
                    .map(|&tab| {
                        view! {
                            <button
                                class="options-panel__tab"
                                class:options-panel__tab--active=(tab == active)
                                on:click=move |_| {
                                    dispatch::select_tab(store, PanelTab::from_id(tab.id()))
                                }
                            >
                                {tab.title()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>();

                let body = match active {
                    PanelTab::QuickStyle => {
                        let sections = style_sections(&catalog.groups, &node.props, &panel);
                        let section_views = sections
                            .into_iter()
                            .map(|section| view! { <StyleSectionView section=section/> })
                            .collect::<Vec<_>>();
                        view! { <div class="options-panel__sections">{section_views}</div> }
                            .into_any()
                    }
                    PanelTab::Properties => {
                        let rows = option_entries(&node.props)
                            .into_iter()
                            .map(|entry| view! { <OptionRow entry=entry/> })
                            .collect::<Vec<_>>();
                        view! {
                            <div class="options-panel__props">
                                <AddOptionRow/>
                                <div class="options-panel__rows">{rows}</div>
                            </div>
                        }
                            .into_any()
                    }
                };

                view! {
                    <div class="options-panel__header">
                        <span class="options-panel__kind">{node.kind.clone()}</span>
                    </div>
                    <div class="options-panel__tabs">{tabs}</div>
                    {body}
                }
                    .into_any()
            }}
        </div>
    }
}

/// One collapsible style section with its set-count badge.
#[component]
fn StyleSectionView(section: StyleSection) -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let StyleSection {
        key,
        title,
        set_count,
        expanded,
        rows,
    } = section;

    view! {
        <section class="options-panel__section" class:options-panel__section--open=expanded>
            <button
                class="options-panel__section-header"
                on:click=move |_| dispatch::toggle_style_section(store, &key)
            >
                <span class="options-panel__section-title">{title}</span>
                <Show when={move || set_count > 0}>
                    <span class="options-panel__badge">{set_count}</span>
                </Show>
            </button>
            <Show when=move || expanded>
                <div class="options-panel__section-rows">
                    {rows
                        .iter()
                        .cloned()
                        .map(|row| view! { <StyleRowView row=row/> })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </section>
    }
}
