//! Catalog controller: deep-link filtering, grouping and page layout.
//!
//! A [`CatalogView`] is built once per page view from the loaded records. Every
//! input change produces a new [`CatalogState`] and the page is laid out again
//! from scratch with [`CatalogView::layout`].

use shwcare_products::{
    CatalogState, Group, ProductRecord, ProgramFilter, TherapyClass, classify, collate,
    filter_by_program, filter_groups, group_items, order_programs,
};

use crate::config::{Layout, MountOptions};
use crate::site;

/// Search/category controls shown above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub placeholder: &'static str,
    /// Selector options (after "All Categories"); `None` when the program is locked.
    pub categories: Option<Vec<String>>,
}

/// Heading shown instead of the normal controls on deep-linked pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subhead {
    pub back_href: &'static str,
    pub back_label: &'static str,
    pub title: String,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub program: &'a str,
    pub groups: Vec<&'a Group>,
}

/// Compact icon-layout entry (one per record, not grouped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub name: String,
    pub image: String,
    pub meta: String,
    pub class: TherapyClass,
}

/// What the mount element shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLayout<'a> {
    /// Deep-linked to a program: subhead plus one flat grid, no program prefix.
    Locked {
        subhead: Subhead,
        groups: Vec<&'a Group>,
    },
    /// Per-program sections, alphabetical.
    Sections {
        sections: Vec<Section<'a>>,
        show_program: bool,
    },
    Grid {
        groups: Vec<&'a Group>,
        show_program: bool,
    },
    Icons {
        subhead: Option<Subhead>,
        tiles: Vec<TileView>,
    },
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    options: MountOptions,
    filter: Option<ProgramFilter>,
    label: Option<String>,
    items: Vec<ProductRecord>,
    groups: Vec<Group>,
    programs: Vec<String>,
}

impl CatalogView {
    pub fn new(items: &[ProductRecord], filter: Option<ProgramFilter>, options: MountOptions) -> Self {
        let filtered = filter_by_program(filter.as_ref(), items);
        let groups = group_items(&filtered.items);
        let programs = order_programs(groups.iter().map(|g| g.program.as_str()));

        tracing::debug!(
            items = items.len(),
            shown = filtered.items.len(),
            groups = groups.len(),
            label = filtered.label.as_deref().unwrap_or(""),
            "catalog view built"
        );

        Self {
            options,
            filter,
            label: filtered.label,
            items: filtered.items,
            groups,
            programs,
        }
    }

    pub fn options(&self) -> &MountOptions {
        &self.options
    }

    pub fn filter(&self) -> Option<&ProgramFilter> {
        self.filter.as_ref()
    }

    /// Section heading of a deep-linked page.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Deep-linked pages lock the category selector.
    pub fn is_locked(&self) -> bool {
        self.filter.is_some()
    }

    /// Records left after the deep-link filter.
    pub fn items(&self) -> &[ProductRecord] {
        &self.items
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Distinct programs in selector order.
    pub fn programs(&self) -> &[String] {
        &self.programs
    }

    pub fn initial_state(&self) -> CatalogState {
        CatalogState::initial(self.filter.as_ref())
    }

    pub fn controls(&self) -> Option<Controls> {
        if self.options.layout == Layout::Icons || !self.options.enable_search {
            return None;
        }
        Some(Controls {
            placeholder: site::SEARCH_PLACEHOLDER,
            categories: (!self.is_locked()).then(|| self.programs.clone()),
        })
    }

    /// Groups passing the current search/category state.
    pub fn visible_groups(&self, state: &CatalogState) -> Vec<&Group> {
        filter_groups(&self.groups, state, self.is_locked())
    }

    pub fn layout(&self, state: &CatalogState) -> PageLayout<'_> {
        if self.options.layout == Layout::Icons {
            return PageLayout::Icons {
                subhead: self.subhead(site::PRODUCTS_PAGE, site::BACK_TO_ALL_THERAPIES),
                tiles: self.tiles(),
            };
        }

        let groups = self.visible_groups(state);
        let show_program = self.options.show_program;

        if let Some(subhead) = self.subhead(site::PROGRAMS_PAGE, site::BACK_TO_PROGRAMS) {
            return PageLayout::Locked { subhead, groups };
        }

        if self.options.program_sections {
            PageLayout::Sections {
                sections: sections(groups),
                show_program,
            }
        } else {
            PageLayout::Grid {
                groups,
                show_program,
            }
        }
    }

    fn subhead(&self, back_href: &'static str, back_label: &'static str) -> Option<Subhead> {
        self.label.as_ref().map(|title| Subhead {
            back_href,
            back_label,
            title: title.clone(),
            note: site::TRACK_NOTE,
        })
    }

    /// Icon tiles: GLP-1s first, then peptide-like, then the rest, each by name.
    pub fn tiles(&self) -> Vec<TileView> {
        let mut tiles: Vec<TileView> = self
            .items
            .iter()
            .map(|item| TileView {
                name: item.name.clone(),
                image: item
                    .image
                    .clone()
                    .unwrap_or_else(|| site::GENERIC_IMAGE.to_string()),
                meta: item.form.clone().unwrap_or_default(),
                class: classify(item),
            })
            .collect();

        tiles.sort_by(|a, b| {
            a.class
                .rank()
                .cmp(&b.class.rank())
                .then_with(|| collate(&a.name, &b.name))
        });
        tiles
    }
}

fn sections(groups: Vec<&Group>) -> Vec<Section<'_>> {
    let mut sections: Vec<Section<'_>> = Vec::new();
    for group in groups {
        match sections.iter_mut().find(|s| s.program == group.program) {
            Some(section) => section.groups.push(group),
            None => sections.push(Section {
                program: &group.program,
                groups: vec![group],
            }),
        }
    }
    sections.sort_by(|a, b| collate(a.program, b.program));
    sections
}
