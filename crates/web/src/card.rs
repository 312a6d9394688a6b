//! Card rendering as a pure function of `(group, selected stage)`.
//!
//! The DOM (Leptos) and HTML-string presenters both draw from [`CardView`], so
//! what a card shows can be tested without a browser.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use shwcare_core::{Entity, Sku};
use shwcare_products::{Group, Money, ProductRecord, Term};

use crate::site;

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

/// Stage selector button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePill {
    pub id: Sku,
    pub label: String,
    pub active: bool,
}

impl StagePill {
    pub fn class(&self) -> &'static str {
        if self.active { "stage-pill active" } else { "stage-pill" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageBar {
    pub pills: Vec<StagePill>,
}

impl StageBar {
    /// Single-member groups have nothing to choose between.
    pub fn hidden(&self) -> bool {
        self.pills.is_empty()
    }

    pub fn class(&self) -> &'static str {
        if self.hidden() { "stage-bar hidden" } else { "stage-bar" }
    }
}

/// Checkout link for one package term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLink {
    pub term: Term,
    pub price: Option<Money>,
    pub label: String,
    pub href: String,
}

impl PriceLink {
    pub fn class(&self) -> &'static str {
        match self.term {
            Term::ThirtyDay => "btn primary",
            Term::NinetyDay => "btn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub meta: String,
    pub image: ImageView,
    pub stage_bar: StageBar,
    /// Prices of the selected member, 30-day first.
    pub prices: Vec<PriceLink>,
    pub note: &'static str,
}

/// `start.html?sku=…&term=30`
pub fn checkout_href(sku: &Sku, term: Term) -> String {
    format!(
        "{}?sku={}&term={}",
        site::CHECKOUT_PAGE,
        utf8_percent_encode(sku.as_str(), URI_COMPONENT),
        term.days()
    )
}

/// `30‑Day Package — $299.00`, or the checkout placeholder without a price.
pub fn price_label(term: Term, price: Option<Money>) -> String {
    let amount = price.map_or_else(|| site::PRICE_PLACEHOLDER.to_string(), |m| m.to_string());
    format!("{}\u{2011}Day Package — {amount}", term.days())
}

pub fn price_links(item: &ProductRecord) -> Vec<PriceLink> {
    Term::ALL
        .into_iter()
        .map(|term| {
            let price = item.price(term);
            PriceLink {
                term,
                price,
                label: price_label(term, price),
                href: checkout_href(item.id(), term),
            }
        })
        .collect()
}

fn pill_label(member: &ProductRecord, index: usize) -> String {
    match member.stage {
        Some(stage) => format!("Stage {stage}"),
        None => format!("Option {}", index + 1),
    }
}

/// Render a group with the member at `selected` active (clamped to the last member).
pub fn card_view(group: &Group, selected: usize, show_program: bool) -> CardView {
    let selected = selected.min(group.members.len().saturating_sub(1));

    let forms = group.dosage_forms.join(" / ");
    let meta = if show_program {
        format!("{} • {forms}", group.program)
    } else {
        forms
    };

    let pills = if group.is_multi_stage() {
        group
            .members
            .iter()
            .enumerate()
            .map(|(index, member)| StagePill {
                id: member.id().clone(),
                label: pill_label(member, index),
                active: index == selected,
            })
            .collect()
    } else {
        Vec::new()
    };

    CardView {
        title: group.base_name.clone(),
        meta,
        image: ImageView {
            src: group
                .image
                .clone()
                .unwrap_or_else(|| site::GENERIC_IMAGE.to_string()),
            alt: group.base_name.clone(),
        },
        stage_bar: StageBar { pills },
        prices: group.member(selected).map(price_links).unwrap_or_default(),
        note: site::CLINICIAN_NOTE,
    }
}
