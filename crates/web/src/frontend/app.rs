//! Leptos catalog components.

use leptos::*;

use shwcare_products::{CatalogState, Group, ProgramSelection};

use crate::card::card_view;
use crate::catalog::{CatalogView, Controls, PageLayout, Subhead, TileView};
use crate::site;

/// Root component: controls plus a body re-laid-out on every state change.
#[component]
pub fn Catalog(catalog: CatalogView) -> impl IntoView {
    let controls = catalog.controls();
    let state = create_rw_signal(catalog.initial_state());
    let catalog = store_value(catalog);

    view! {
        {controls.map(|controls| view! { <CatalogControls controls=controls state=state/> })}
        <div class="catalog-body">
            {move || {
                let current = state.get();
                catalog.with_value(|c| page_body(c.layout(&current)))
            }}
        </div>
    }
}

fn owned(groups: Vec<&Group>) -> Vec<Group> {
    groups.into_iter().cloned().collect()
}

fn page_body(layout: PageLayout<'_>) -> View {
    match layout {
        PageLayout::Locked { subhead, groups } => view! {
            <CatalogSubhead subhead=subhead/>
            <CardGrid groups={owned(groups)} show_program=false/>
        }
        .into_view(),
        PageLayout::Sections {
            sections,
            show_program,
        } => sections
            .into_iter()
            .map(|section| {
                view! {
                    <div class="catalog-section">
                        <h2 class="section-title">{section.program.to_string()}</h2>
                        <CardGrid groups={owned(section.groups)} show_program=show_program/>
                    </div>
                }
            })
            .collect_view(),
        PageLayout::Grid {
            groups,
            show_program,
        } => view! { <CardGrid groups={owned(groups)} show_program=show_program/> }.into_view(),
        PageLayout::Icons { subhead, tiles } => view! {
            {subhead.map(|subhead| view! { <CatalogSubhead subhead=subhead/> })}
            <TherapyGrid tiles=tiles/>
        }
        .into_view(),
    }
}

#[component]
fn CatalogControls(controls: Controls, state: RwSignal<CatalogState>) -> impl IntoView {
    let selected = state.with_untracked(|s| s.program.as_value().to_string());

    view! {
        <div class="catalog-controls">
            <input
                class="catalog-search"
                type="search"
                placeholder={controls.placeholder}
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    state.update(|s| s.query = query);
                }
            />
            {controls.categories.map(|programs| view! {
                <select
                    class="catalog-filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.program = ProgramSelection::from_value(&value));
                    }
                >
                    <option value={ProgramSelection::ALL_VALUE} selected={selected == ProgramSelection::ALL_VALUE}>
                        {site::ALL_CATEGORIES_LABEL}
                    </option>
                    {programs
                        .into_iter()
                        .map(|program| {
                            let is_selected = program == selected;
                            view! { <option value={program.clone()} selected=is_selected>{program}</option> }
                        })
                        .collect_view()}
                </select>
            })}
        </div>
    }
}

#[component]
fn CatalogSubhead(subhead: Subhead) -> impl IntoView {
    view! {
        <div class="catalog-subhead">
            <a class="smalllink" href={subhead.back_href}>{subhead.back_label}</a>
            <h2>{subhead.title}</h2>
            <p class="muted">{subhead.note}</p>
        </div>
    }
}

#[component]
fn CardGrid(groups: Vec<Group>, show_program: bool) -> impl IntoView {
    view! {
        <div class="catalog-grid">
            {groups
                .into_iter()
                .map(|group| view! { <CatalogCard group=group show_program=show_program/> })
                .collect_view()}
        </div>
    }
}

/// One group card. Stage selection only re-renders the pills and the price row.
#[component]
fn CatalogCard(group: Group, show_program: bool) -> impl IntoView {
    let head = card_view(&group, 0, show_program);
    let bar_class = head.stage_bar.class();
    let group = store_value(group);
    let selected = create_rw_signal(0usize);
    let current = move || group.with_value(|g| card_view(g, selected.get(), show_program));

    view! {
        <div class="catalog-card">
            <img class="card-img" src={head.image.src} alt={head.image.alt} loading="lazy"/>
            <div class="card-body">
                <div class="card-head-left">
                    <div class="card-title">{head.title}</div>
                    <div class="card-meta">{head.meta}</div>
                </div>
                <div class=bar_class role="tablist" aria-label="Stages">
                    {move || {
                        current()
                            .stage_bar
                            .pills
                            .into_iter()
                            .enumerate()
                            .map(|(index, pill)| {
                                view! {
                                    <button
                                        class={pill.class()}
                                        type="button"
                                        data-id={pill.id.to_string()}
                                        role="tab"
                                        on:click=move |_| selected.set(index)
                                    >
                                        {pill.label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="price-block">
                    <div class="price-row">
                        {move || {
                            current()
                                .prices
                                .into_iter()
                                .map(|link| view! { <a class={link.class()} href={link.href}>{link.label}</a> })
                                .collect_view()
                        }}
                    </div>
                </div>
                <div class="card-note">{head.note}</div>
            </div>
        </div>
    }
}

#[component]
fn TherapyGrid(tiles: Vec<TileView>) -> impl IntoView {
    view! {
        <div class="therapy-grid" role="list">
            {tiles
                .into_iter()
                .map(|tile| {
                    let TileView { name, image, meta, .. } = tile;
                    let title = name.clone();
                    let alt = name.clone();
                    view! {
                        <div class="therapy-tile" role="listitem" title=title>
                            <div class="therapy-icon">
                                <img src=image alt=alt/>
                            </div>
                            <div class="therapy-name">{name}</div>
                            <div class="therapy-meta">{meta}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
