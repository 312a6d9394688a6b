//! Static HTML rendering of the catalog (prerender / no-JS fallback).
//!
//! Produces the same markup and class names as the Leptos frontend.

use shwcare_products::{CatalogState, Group, ProgramSelection};

use crate::card::{CardView, card_view};
use crate::catalog::{CatalogView, Controls, PageLayout, Subhead, TileView};
use crate::site;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_card(card: &CardView) -> String {
    let pills: String = card
        .stage_bar
        .pills
        .iter()
        .map(|pill| {
            format!(
                r#"<button class="{}" type="button" data-id="{}" role="tab">{}</button>"#,
                pill.class(),
                escape(pill.id.as_str()),
                escape(&pill.label)
            )
        })
        .collect();

    let links: String = card
        .prices
        .iter()
        .map(|link| {
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                link.class(),
                escape(&link.href),
                escape(&link.label)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<div class="catalog-card">"#,
            r#"<img class="card-img" src="{src}" alt="{alt}" loading="lazy">"#,
            r#"<div class="card-body">"#,
            r#"<div class="card-head-left"><div class="card-title">{title}</div><div class="card-meta">{meta}</div></div>"#,
            r#"<div class="{bar_class}" role="tablist" aria-label="Stages">{pills}</div>"#,
            r#"<div class="price-block"><div class="price-row">{links}</div></div>"#,
            r#"<div class="card-note">{note}</div>"#,
            r#"</div></div>"#
        ),
        src = escape(&card.image.src),
        alt = escape(&card.image.alt),
        title = escape(&card.title),
        meta = escape(&card.meta),
        bar_class = card.stage_bar.class(),
        pills = pills,
        links = links,
        note = escape(card.note),
    )
}

fn render_grid(groups: &[&Group], show_program: bool) -> String {
    let cards: String = groups
        .iter()
        .map(|g| render_card(&card_view(g, 0, show_program)))
        .collect();
    format!(r#"<div class="catalog-grid">{cards}</div>"#)
}

fn render_subhead(subhead: &Subhead) -> String {
    format!(
        r#"<div class="catalog-subhead"><a class="smalllink" href="{}">{}</a><h2>{}</h2><p class="muted">{}</p></div>"#,
        escape(subhead.back_href),
        escape(subhead.back_label),
        escape(&subhead.title),
        escape(subhead.note)
    )
}

fn render_tiles(tiles: &[TileView]) -> String {
    let tiles: String = tiles
        .iter()
        .map(|tile| {
            let name = escape(&tile.name);
            format!(
                concat!(
                    r#"<div class="therapy-tile" role="listitem" title="{name}">"#,
                    r#"<div class="therapy-icon"><img src="{image}" alt="{name}"></div>"#,
                    r#"<div class="therapy-name">{name}</div>"#,
                    r#"<div class="therapy-meta">{meta}</div>"#,
                    r#"</div>"#
                ),
                name = name,
                image = escape(&tile.image),
                meta = escape(&tile.meta),
            )
        })
        .collect();
    format!(r#"<div class="therapy-grid" role="list">{tiles}</div>"#)
}

/// Search box and category selector reflecting `state`.
pub fn render_controls(controls: &Controls, state: &CatalogState) -> String {
    let mut out = format!(
        r#"<div class="catalog-controls"><input class="catalog-search" type="search" placeholder="{}" value="{}">"#,
        escape(controls.placeholder),
        escape(&state.query)
    );

    if let Some(programs) = &controls.categories {
        let selected = state.program.as_value();
        let option = |value: &str, label: &str| {
            let flag = if value == selected { " selected" } else { "" };
            format!(r#"<option value="{}"{flag}>{}</option>"#, escape(value), escape(label))
        };

        out.push_str(r#"<select class="catalog-filter">"#);
        out.push_str(&option(ProgramSelection::ALL_VALUE, site::ALL_CATEGORIES_LABEL));
        for program in programs {
            out.push_str(&option(program, program));
        }
        out.push_str("</select>");
    }

    out.push_str("</div>");
    out
}

pub fn render_layout(layout: &PageLayout<'_>) -> String {
    match layout {
        PageLayout::Locked { subhead, groups } => {
            format!("{}{}", render_subhead(subhead), render_grid(groups, false))
        }
        PageLayout::Sections {
            sections,
            show_program,
        } => sections
            .iter()
            .map(|section| {
                format!(
                    r#"<div class="catalog-section"><h2 class="section-title">{}</h2>{}</div>"#,
                    escape(section.program),
                    render_grid(&section.groups, *show_program)
                )
            })
            .collect(),
        PageLayout::Grid {
            groups,
            show_program,
        } => render_grid(groups, *show_program),
        PageLayout::Icons { subhead, tiles } => {
            let head = subhead.as_ref().map(render_subhead).unwrap_or_default();
            format!("{head}{}", render_tiles(tiles))
        }
    }
}

/// Controls (when enabled) followed by the catalog body for `state`.
pub fn render_page(view: &CatalogView, state: &CatalogState) -> String {
    let controls = view
        .controls()
        .map(|c| render_controls(&c, state))
        .unwrap_or_default();
    format!(
        r#"{controls}<div class="catalog-body">{}</div>"#,
        render_layout(&view.layout(state))
    )
}
