use shwcare_products::{CatalogState, ProgramFilter, ProgramSelection};
use shwcare_web::html::render_page;
use shwcare_web::{CatalogView, Layout, MountOptions, PageLayout, card_view, parse_catalog};

const CATALOG: &str = r#"[
  {"id": "tirz-1", "name": "Tirzepatide (Stage 1)", "program": "Weight Loss & Metabolic Optimization", "stage": 1,
   "dosageForm": ["Injection"], "image": "assets/products/tirz.png", "category": "GLP-1",
   "packages": [{"days": 30, "msrp": 299}, {"days": 90, "msrp": 849}]},
  {"id": "tirz-2", "name": "Tirzepatide (Stage 2)", "program": "Weight Loss & Metabolic Optimization", "stage": 2,
   "dosageForm": ["Injection"], "packages": [{"days": 30, "msrp": 349}]},
  {"id": "tirz-3", "name": "Tirzepatide (Stage 3)", "program": "Weight Loss & Metabolic Optimization", "stage": 3,
   "dosageForm": ["Injection"], "packages": []},
  {"id": "sema-1", "name": "Semaglutide", "program": "Weight Loss & Metabolic Optimization",
   "dosageForm": ["Injection", "Oral Drops"], "packages": [{"days": 30, "msrp": 199}]},
  {"id": "fin", "name": "Finasteride", "program": "Hair Loss & Scalp Health", "dosageForm": ["Tablet"],
   "packages": [{"days": 30, "msrp": 29}, {"days": 90, "msrp": 79}]},
  {"id": "bpc", "name": "BPC-157", "program": "Regenerative & Injury Recovery", "dosageForm": ["Injection"],
   "category": "Peptide", "packages": [{"days": 30, "msrp": 189}]},
  {"id": "sermo", "name": "Sermorelin", "program": "Growth Hormone Optimization", "dosageForm": ["Injection"]},
  {"id": "nad", "name": "NAD+ — Injection", "program": "Dermatology & Aesthetics", "dosageForm": ["Injection"]},
  {"id": "trt", "name": "Testosterone Cypionate", "program": "Men’s Health & Performance", "dosageForm": ["Injection"]},
  {"id": "epi", "name": "Epithalon", "program": "Longevity & Cellular Health", "dosageForm": ["Injection"]}
]"#;

fn items() -> Vec<shwcare_products::ProductRecord> {
    parse_catalog(CATALOG.as_bytes()).expect("fixture parses")
}

fn locked_ids(view: &CatalogView) -> Vec<String> {
    view.items().iter().map(|i| i.id.to_string()).collect()
}

#[test]
fn weight_loss_deep_link_shows_only_that_program() {
    let filter = ProgramFilter::from_query("?program=weight-loss");
    let view = CatalogView::new(&items(), filter, MountOptions::default());

    assert_eq!(view.label(), Some("Weight Loss & Metabolic Optimization"));
    assert!(view
        .items()
        .iter()
        .all(|i| i.program == "Weight Loss & Metabolic Optimization"));
    assert_eq!(view.items().len(), 4);

    let html = render_page(&view, &view.initial_state());
    assert!(html.contains(r#"<a class="smalllink" href="programs.html">← Programs</a>"#));
    assert!(html.contains("<h2>Weight Loss &amp; Metabolic Optimization</h2>"));
    assert!(!html.contains("catalog-filter"));
    assert!(!html.contains("catalog-section"));
}

#[test]
fn peptides_deep_link_is_program_union_plus_name_heuristic() {
    let view = CatalogView::new(&items(), ProgramFilter::resolve("peptides"), MountOptions::default());

    assert_eq!(view.label(), Some("Peptide Programs"));
    assert_eq!(locked_ids(&view), vec!["bpc", "sermo", "nad", "epi"]);
}

#[test]
fn wellness_deep_link_includes_named_compounds() {
    let view = CatalogView::new(&items(), ProgramFilter::resolve("Wellness"), MountOptions::default());

    assert_eq!(view.label(), Some("Wellness & Vitality"));
    assert_eq!(locked_ids(&view), vec!["nad", "trt", "epi"]);
}

#[test]
fn search_for_tirzepatide_hides_everything_else() {
    let view = CatalogView::new(&items(), None, MountOptions::default());
    let state = CatalogState::default().with_query("Tirzepatide");

    let visible = view.visible_groups(&state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].base_name, "Tirzepatide");
    assert!(visible[0].search_text().contains("tirzepatide"));
}

#[test]
fn three_stage_group_renders_three_pills_with_first_active() {
    let view = CatalogView::new(&items(), None, MountOptions::default());
    let group = view
        .groups()
        .iter()
        .find(|g| g.base_name == "Tirzepatide")
        .expect("tirzepatide group");

    let card = card_view(group, 0, false);
    assert_eq!(card.title, "Tirzepatide");
    assert_eq!(card.stage_bar.pills.len(), 3);
    assert!(card.stage_bar.pills[0].active);
    assert!(card.stage_bar.pills[1..].iter().all(|p| !p.active));

    // Stage 3 has no packages: both links fall back to the placeholder.
    let stage3 = card_view(group, 2, false);
    assert!(stage3.prices.iter().all(|p| p.label.ends_with("See at checkout")));
    assert_eq!(stage3.prices[0].href, "start.html?sku=tirz-3&term=30");
}

#[test]
fn thirty_day_only_package_prices() {
    let view = CatalogView::new(&items(), None, MountOptions::default());
    let group = view
        .groups()
        .iter()
        .find(|g| g.base_name == "Semaglutide")
        .expect("semaglutide group");

    let card = card_view(group, 0, false);
    assert_eq!(card.prices[0].label, "30\u{2011}Day Package — $199.00");
    assert_eq!(card.prices[1].label, "90\u{2011}Day Package — See at checkout");
}

#[test]
fn category_selection_and_search_combine_in_sections() {
    let view = CatalogView::new(&items(), None, MountOptions::default());
    let state = CatalogState::default()
        .with_query("injection")
        .with_program(ProgramSelection::Program("Regenerative & Injury Recovery".into()));

    let PageLayout::Sections { sections, .. } = view.layout(&state) else {
        panic!("expected sections layout");
    };
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].program, "Regenerative & Injury Recovery");
    assert_eq!(sections[0].groups[0].base_name, "BPC-157");
}

#[test]
fn flat_grid_with_program_prefix() {
    let options = MountOptions {
        program_sections: false,
        show_program: true,
        ..MountOptions::default()
    };
    let view = CatalogView::new(&items(), None, options);
    let html = render_page(&view, &CatalogState::default().with_query("finasteride"));

    assert!(html.contains(r#"<div class="card-meta">Hair Loss &amp; Scalp Health • Tablet</div>"#));
    assert!(!html.contains("catalog-section"));
    assert!(html.contains(r#"<option value="All" selected>All Categories</option>"#));
}

#[test]
fn icons_layout_orders_glp1_then_peptides() {
    let options = MountOptions {
        layout: Layout::Icons,
        ..MountOptions::default()
    };
    let view = CatalogView::new(&items(), None, options);
    let PageLayout::Icons { tiles, .. } = view.layout(&view.initial_state()) else {
        panic!("expected icons layout");
    };

    let names: Vec<_> = tiles.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Semaglutide",
            "Tirzepatide (Stage 1)",
            "Tirzepatide (Stage 2)",
            "Tirzepatide (Stage 3)",
            "BPC-157",
            "Epithalon",
            "NAD+ — Injection",
            "Sermorelin",
            "Finasteride",
            "Testosterone Cypionate",
        ]
    );

    let html = render_page(&view, &view.initial_state());
    assert!(html.contains(r#"<div class="therapy-grid" role="list">"#));
    assert!(!html.contains("catalog-controls"));
}

#[test]
fn regrouping_is_stable_across_views() {
    let a = CatalogView::new(&items(), None, MountOptions::default());
    let b = CatalogView::new(&items(), None, MountOptions::default());
    assert_eq!(a.groups(), b.groups());
    for group in a.groups() {
        let stages: Vec<u32> = group.members.iter().map(|m| m.stage_number()).collect();
        assert!(stages.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn deep_linked_search_narrows_the_locked_grid() {
    let view = CatalogView::new(
        &items(),
        ProgramFilter::from_query("?program=weight-loss"),
        MountOptions::default(),
    );
    let state = view
        .initial_state()
        .with_query("semaglutide")
        .with_program(ProgramSelection::Program("Hair Loss & Scalp Health".into()));

    let PageLayout::Locked { subhead, groups } = view.layout(&state) else {
        panic!("expected locked layout");
    };
    assert_eq!(subhead.title, "Weight Loss & Metabolic Optimization");
    let names: Vec<_> = groups.iter().map(|g| g.base_name.as_str()).collect();
    assert_eq!(names, vec!["Semaglutide"]);
}
