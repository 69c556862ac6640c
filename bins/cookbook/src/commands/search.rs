//! Search command - filter and page a recipe listing

use super::{read_input, Context};
use cookbook_cli::output::{format_count, print_json, Status};
use cookbook_core::config::Config;
use cookbook_core::{Error, Result, ResultExt};
use cookbook_search::{
    items_from_json, sort_by_attribute, validate_page_size, visible_items, PageView, SearchItem, SortDirection,
    ViewState,
};
use cookbook_telemetry::{metrics, Timer};
use owo_colors::OwoColorize;
use std::path::Path;

/// What the reader asked for on the command line
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: String,
    pub pages: usize,
    pub only_saved: bool,
    pub sort: Option<String>,
    pub descending: bool,
}

impl SearchOptions {
    fn view_state(&self) -> ViewState {
        let mut state = ViewState::new()
            .with_query(self.query.clone())
            .with_only_saved(self.only_saved);
        state.pages = self.pages.max(1);
        state
    }
}

/// Sort, filter and page `items` with the configured search settings
pub fn search_items(items: &mut [SearchItem], options: &SearchOptions, config: &Config) -> Result<PageView> {
    let filter = config.search_filter()?;
    let page_size = validate_page_size(config.schema.search.page_size)?;

    if let Some(attribute) = &options.sort {
        let direction = if options.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        sort_by_attribute(items, attribute, direction);
    }

    let timer = Timer::start("search_ms");
    let view = visible_items(items, &options.view_state(), &filter, page_size);
    timer.stop();

    metrics().increment("searches");
    metrics().gauge("visible_cards", view.visible.len() as u64);
    Ok(view)
}

/// Run search command
pub fn run(path: &Path, options: &SearchOptions, ctx: &Context) -> Result<()> {
    let json = read_input(path)?;
    let mut items = items_from_json(&json)
        .map_err(Error::from)
        .context(format!("Parsing {}", path.display()))
        .with_suggestion("Listings are JSON arrays of objects with \"id\" and \"searchable\"")?;

    let view = search_items(&mut items, options, &ctx.config)?;

    if ctx.json {
        print_json(&view)?;
        return Ok(());
    }

    let summary = format_count(view.total, "recipe", "recipes");
    if view.filtering {
        Status::header(&format!("{} matching \"{}\"", summary, options.query.trim()));
    } else {
        Status::header(&summary);
    }

    for id in &view.visible {
        let text = items
            .iter()
            .find(|item| &item.id == id)
            .map_or("", |item| item.searchable.as_str());
        println!("  {}  {}", id.dimmed(), text);
    }

    if view.has_more {
        Status::detail(&format!(
            "{} more, use --pages {} to load them",
            view.total - view.visible.len(),
            options.pages.max(1) + 1
        ));
    }
    Ok(())
}
