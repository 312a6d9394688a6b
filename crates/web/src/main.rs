//! Catalog prerender entry point.
//!
//! Renders the catalog's initial state to static HTML, e.g. for a no-JS
//! fallback or to check a data file before publishing it.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use shwcare_products::{ProgramFilter, ProgramSelection};
    use shwcare_web::loader::{CatalogSource, load_catalog};
    use shwcare_web::{CatalogView, Layout, MountOptions, html, site};

    #[derive(Parser)]
    #[command(version, about = "Prerender the therapy catalog to static HTML")]
    struct Cli {
        /// Catalog JSON file or http(s) URL
        #[arg(short, long, env = "SHWCARE_CATALOG_DATA", default_value = site::DATA_PATH)]
        data: String,

        /// Deep-link program slug or label, as passed in `?program=`
        #[arg(short, long)]
        program: Option<String>,

        /// Initial search text
        #[arg(short, long, default_value = "")]
        query: String,

        /// Initial category selection (ignored when a program is deep-linked)
        #[arg(long)]
        category: Option<String>,

        /// `cards` or `icons`
        #[arg(long, default_value = "cards")]
        layout: Layout,

        /// Prefix card meta lines with the program name
        #[arg(long)]
        show_program: bool,

        /// Omit the search/category controls
        #[arg(long)]
        no_search: bool,

        /// One flat grid instead of per-program sections
        #[arg(long)]
        flat: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    }

    pub async fn run() -> anyhow::Result<()> {
        shwcare_observability::init();
        let cli = Cli::parse();

        let source = CatalogSource::parse(&cli.data);
        let items = load_catalog(&source)
            .await
            .with_context(|| format!("failed to load catalog from {source}"))?;

        let filter = cli.program.as_deref().and_then(ProgramFilter::resolve);
        if let Some(filter) = &filter {
            tracing::info!(
                label = filter.label(),
                pseudo = filter.is_pseudo(),
                "rendering deep-linked program"
            );
        }

        let options = MountOptions {
            show_program: cli.show_program,
            enable_search: !cli.no_search,
            program_sections: !cli.flat,
            layout: cli.layout,
        };
        let view = CatalogView::new(&items, filter, options);

        let mut state = view.initial_state().with_query(cli.query);
        if let (false, Some(category)) = (view.is_locked(), cli.category.as_deref()) {
            state = state.with_program(ProgramSelection::from_value(category));
        }

        let page = html::render_page(&view, &state);
        match &cli.output {
            Some(path) => tokio::fs::write(path, &page)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => println!("{page}"),
        }

        tracing::info!(
            groups = view.visible_groups(&state).len(),
            bytes = page.len(),
            "catalog rendered"
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
