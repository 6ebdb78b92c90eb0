mod support;

use std::sync::{Arc, atomic::Ordering};
use std::time::Duration;

use marquee_core::catalog::{CatalogOptions, CatalogService, FALLBACK_ROW_TITLE, RowState};
use marquee_core::image::ImageResolver;
use marquee_core::model::{DetailsExtras, FetchState, Movie};
use marquee_core::providers::OfflineProvider;

use support::provider::{StubProvider, movie};

fn service(provider: Arc<StubProvider>, genres: &[&str]) -> CatalogService {
    CatalogService::new(provider).with_options(CatalogOptions {
        genres: genres.iter().map(|g| g.to_string()).collect(),
        stagger_max: Duration::ZERO,
    })
}

#[tokio::test]
async fn rows_keep_configured_order() {
    let provider = StubProvider::with_movies(vec![movie("1", "Heat")]);
    let genres = ["Dark Comedies", "Trending Now", "Sci-Fi & Cyberpunk"];
    let rows = service(provider.clone(), &genres).load_rows().await;

    let titles: Vec<_> = rows.iter().map(|row| row.title.as_str()).collect();
    assert_eq!(titles, genres);
    assert_eq!(provider.call_count(), 3);
    assert!(rows.iter().all(|row| row.state.fetch_state() == FetchState::Success));
}

#[tokio::test]
async fn failed_row_is_hidden_and_others_survive() {
    let provider = Arc::new(StubProvider {
        movies: vec![movie("1", "Heat"), movie("2", "Ronin")],
        failing: vec!["Dark Comedies".to_string()],
        ..StubProvider::default()
    });
    let rows = service(provider, &["Trending Now", "Dark Comedies"])
        .load_rows()
        .await;

    assert_eq!(rows[0].movies().len(), 2);
    assert_eq!(rows[1].state, RowState::FailedEmpty);
    assert!(!rows[1].state.is_visible());
    assert!(rows[1].clone().into_genre_row().is_none());
}

#[tokio::test]
async fn empty_provider_result_hides_row() {
    let provider = StubProvider::with_movies(Vec::new());
    let row = service(provider, &[]).load_row("Award-Winning Dramas").await;
    assert_eq!(row.state, RowState::FailedEmpty);
}

#[tokio::test]
async fn row_titles_are_resolved_and_scored() {
    let mut with_path = movie("1", "Blade Runner");
    with_path.poster_path = Some("/br.jpg".into());
    let mut scored = movie("2", "Akira");
    scored.match_score = Some(64);

    let provider = StubProvider::with_movies(vec![with_path, scored]);
    let movies = service(provider, &[]).fetch_row("Sci-Fi & Cyberpunk").await;

    assert_eq!(
        movies[0].image_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/br.jpg")
    );
    assert!(movies[0].backdrop_url.as_deref().unwrap().contains("seed/BladeRunner"));
    assert!((80..100).contains(&movies[0].match_score.unwrap()));
    assert_eq!(movies[1].match_score, Some(64));
}

#[tokio::test]
async fn offline_provider_yields_hidden_rows() {
    let catalog = CatalogService::new(Arc::new(OfflineProvider)).with_options(
        CatalogOptions {
            stagger_max: Duration::ZERO,
            ..CatalogOptions::default()
        },
    );
    let rows = catalog.load_rows().await;
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|row| row.state == RowState::FailedEmpty));
}

#[tokio::test]
async fn stagger_delays_stay_within_bound() {
    let provider = StubProvider::with_movies(vec![movie("1", "Heat")]);
    let catalog = CatalogService::new(provider).with_options(CatalogOptions {
        genres: vec!["A".into(), "B".into()],
        stagger_max: Duration::from_millis(40),
    });

    let started = std::time::Instant::now();
    let rows = catalog.load_rows().await;
    assert_eq!(rows.len(), 2);
    // Rows load concurrently, so the whole batch is bounded by one stagger
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn hero_prefers_first_populated_row() {
    let provider = Arc::new(StubProvider {
        movies: vec![movie("7", "Drive")],
        failing: vec!["Trending Now".to_string()],
        ..StubProvider::default()
    });
    let catalog = service(provider, &["Trending Now", "Dark Comedies"]);
    let rows = catalog.load_rows().await;

    assert_eq!(catalog.hero(&rows).unwrap().title, "Drive");
}

#[tokio::test]
async fn hero_falls_back_to_static_pick() {
    let catalog = CatalogService::new(Arc::new(OfflineProvider));
    let hero = catalog.hero(&[]).unwrap();
    assert_eq!(hero.title, catalog.fallback_row().movies[0].title);
    assert!(hero.backdrop_url.unwrap().starts_with("https://image.tmdb.org/t/p/original/"));
}

#[test]
fn fallback_row_uses_service_resolver() {
    let catalog = CatalogService::new(Arc::new(OfflineProvider))
        .with_resolver(ImageResolver::new("https://cdn.test", "https://ph.test"));
    let row = catalog.fallback_row();

    assert_eq!(row.title, FALLBACK_ROW_TITLE);
    assert_eq!(row.movies.len(), 5);
    assert!(
        row.movies
            .iter()
            .all(|m| m.image_url.as_deref().unwrap().starts_with("https://cdn.test/w500/"))
    );
}

#[tokio::test]
async fn blank_search_skips_provider() {
    let provider = StubProvider::with_movies(vec![movie("1", "Heat")]);
    let catalog = service(provider.clone(), &[]);

    assert!(catalog.search("   ").await.is_empty());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn search_trims_query_and_resolves_results() {
    let provider = StubProvider::with_movies(vec![movie("1", "Heat")]);
    let catalog = service(provider.clone(), &[]);

    let results = catalog.search("  heist movies ").await;
    assert_eq!(results.len(), 1);
    assert!(results[0].image_url.is_some());
    assert_eq!(*provider.queries.lock().unwrap(), vec!["heist movies".to_string()]);
}

#[tokio::test]
async fn failed_search_is_empty() {
    let provider = Arc::new(StubProvider {
        movies: vec![movie("1", "Heat")],
        failing: vec!["heat".to_string()],
        ..StubProvider::default()
    });
    assert!(service(provider, &[]).search("heat").await.is_empty());
}

#[tokio::test]
async fn lookup_prefers_exact_title_and_year() {
    let mut remake = movie("1", "Dune");
    remake.year = 2021;
    let mut original = movie("2", "Dune");
    original.year = 1984;
    let provider =
        StubProvider::with_movies(vec![movie("0", "Dune: Part Two"), remake, original]);
    let catalog = service(provider, &[]);

    assert_eq!(catalog.lookup("dune", Some(1984)).await.id, "2");
    assert_eq!(catalog.lookup("DUNE", None).await.id, "1");
    assert_eq!(catalog.lookup("Arrakis", None).await.id, "0");
}

#[tokio::test]
async fn lookup_without_hits_builds_placeholder_record() {
    let provider = StubProvider::with_movies(Vec::new());
    let found = service(provider, &[]).lookup("Obscure Film", Some(1971)).await;

    assert_eq!(found.title, "Obscure Film");
    assert_eq!(found.year, 1971);
    assert_eq!(
        found.image_url.as_deref(),
        Some("https://picsum.photos/seed/ObscureFilm/300/450")
    );
}

#[tokio::test]
async fn details_merge_provider_extras() {
    let extras = DetailsExtras {
        cast: vec!["Al Pacino".into(), "Robert De Niro".into(), "Val Kilmer".into()],
        duration: "2h 50m".into(),
        mood: "Tense".into(),
    };
    let provider = Arc::new(StubProvider {
        details: Some(extras.clone()),
        ..StubProvider::default()
    });
    let details = service(provider, &[]).details(movie("1", "Heat")).await;

    assert_eq!(details.cast, extras.cast);
    assert_eq!(details.duration, "2h 50m");
    assert_eq!(details.movie.title, "Heat");
    assert!(details.movie.backdrop_url.is_some());
}

#[tokio::test]
async fn details_without_payload_use_unknown_defaults() {
    let provider = Arc::new(StubProvider::default());
    let details = service(provider, &[]).details(movie("1", "Heat")).await;

    assert_eq!(details.cast, vec!["Unknown".to_string()]);
    assert_eq!(details.duration, "Unknown");
    assert_eq!(details.mood, "N/A");
}

#[tokio::test]
async fn details_failure_keeps_base_record() {
    let provider = Arc::new(StubProvider {
        details_fail: true,
        ..StubProvider::default()
    });
    let mut base: Movie = movie("1", "Heat");
    base.description = "L.A. crime saga".into();
    let details = service(provider, &[]).details(base).await;

    assert!(details.cast.is_empty());
    assert_eq!(details.duration, "N/A");
    assert_eq!(details.mood, "");
    assert_eq!(details.movie.description, "L.A. crime saga");
}
