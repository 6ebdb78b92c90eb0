use std::{
    fs,
    io::{self, Read},
    path::Path,
    sync::Arc,
};

use anyhow::{Context, Result};
use marquee_config::Config;
use marquee_core::{
    CatalogService,
    catalog::{CatalogRow, RowState},
    image::resolve_document,
    model::GenreRow,
    providers::{ContentProvider, OfflineProvider},
};
use tracing::{info, warn};

use crate::cli::Command;
use crate::output::{self, BrowseView};

pub async fn run(command: Command, config: &Config) -> Result<String> {
    let provider: Arc<dyn ContentProvider> = if command.is_local() {
        Arc::new(OfflineProvider)
    } else {
        config
            .content_provider()
            .context("failed to initialize content provider")?
    };
    let catalog = config.catalog_service_with(provider);

    match command {
        Command::Browse { offline, json } => browse(&catalog, offline, json).await,
        Command::Row { genre, json } => {
            let row = catalog.load_row(&genre).await;
            let genre_row = row.into_genre_row().unwrap_or_else(|| {
                info!(genre = %genre, "Row is empty");
                GenreRow::new(genre, Vec::new())
            });
            render(json, &genre_row, output::row)
        }
        Command::Search { query, json } => {
            let results = catalog.search(&query).await;
            if results.is_empty() {
                info!(query = %query, "No search results");
            }
            render(json, &results, |movies| output::movie_list(movies))
        }
        Command::Details { title, year, json } => {
            let movie = catalog.lookup(&title, year).await;
            let details = catalog.details(movie).await;
            render(json, &details, output::details)
        }
        Command::Resolve { file } => resolve(&catalog, file.as_deref()),
        Command::Placeholder { title, kind } => Ok(format!(
            "{}\n",
            catalog.resolver().placeholder_url(&title, kind.into())
        )),
        Command::Genres => Ok(catalog
            .options()
            .genres
            .iter()
            .map(|genre| format!("{genre}\n"))
            .collect()),
        Command::Config => {
            let rendered = toml::to_string_pretty(&config.to_file_config())
                .context("failed to render configuration")?;
            Ok(rendered)
        }
    }
}

fn render<T, F>(json: bool, value: &T, text: F) -> Result<String>
where
    T: serde::Serialize,
    F: FnOnce(&T) -> String,
{
    if json {
        Ok(format!("{}\n", output::json(value)?))
    } else {
        Ok(text(value))
    }
}

async fn browse(
    catalog: &CatalogService,
    offline: bool,
    json: bool,
) -> Result<String> {
    let rows: Vec<CatalogRow> = if offline {
        Vec::new()
    } else {
        catalog.load_rows().await
    };

    let hidden = rows
        .iter()
        .filter(|row| row.state == RowState::FailedEmpty)
        .count();
    if hidden > 0 && !offline {
        warn!(hidden, total = rows.len(), "Some rows could not be loaded");
    }

    let hero = catalog.hero(&rows);
    let mut visible: Vec<_> =
        rows.into_iter().filter_map(CatalogRow::into_genre_row).collect();
    if visible.is_empty() {
        visible.push(catalog.fallback_row());
    }

    let view = BrowseView {
        hero,
        rows: visible,
    };
    render(json, &view, output::browse)
}

fn resolve(catalog: &CatalogService, file: Option<&Path>) -> Result<String> {
    let input = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let resolved = resolve_document(catalog.resolver(), &input)
        .context("input is not a movie record or an array of movie records")?;
    Ok(format!("{}\n", output::json(&resolved)?))
}
