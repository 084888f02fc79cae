// src/main.rs
//
// Interactive shell standing in for the screens: it renders command
// output and forwards user input to the application boundary. All
// behavior lives behind the command handlers; navigation between
// "screens" passes only a movie id.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;

use moviehub::application::commands;
use moviehub::application::error_handling::{ErrorResponse, ErrorType};
use moviehub::application::state::AppState;
use moviehub::db::{create_connection_pool, initialize_database};
use moviehub::dto::{FavoriteMovieDto, MovieDto};
use moviehub::integrations::MovieProvider;
use moviehub::repositories::{
    FavoritesRepository, KeyValueRepository, KvFavoritesRepository, SqliteKeyValueRepository,
};
use moviehub::services::{FavoritesService, MovieService};
use moviehub::{Genre, TmdbClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool()?);

    // Initialize schema (idempotent)
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }

    let provider: Arc<dyn MovieProvider> = Arc::new(
        TmdbClient::from_env()
            .context("TMDB_ACCESS_TOKEN must hold a TMDB API read access token")?,
    );

    // 2. REPOSITORIES
    let kv_repo: Arc<dyn KeyValueRepository> = Arc::new(SqliteKeyValueRepository::new(pool.clone()));
    let favorites_repo: Arc<dyn FavoritesRepository> =
        Arc::new(KvFavoritesRepository::new(kv_repo.clone()));

    // 3. SERVICES
    let movie_service = Arc::new(MovieService::new(provider));
    let favorites_service = Arc::new(FavoritesService::new(favorites_repo));

    // 4. STATE
    let state = AppState {
        movie_service,
        favorites_service,
    };

    run_shell(&state).await
}

async fn run_shell(state: &AppState) -> anyhow::Result<()> {
    println!("moviehub - type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "help" => print_help(),
            "search" => match commands::search_movies(state, rest.to_string()).await {
                Ok(movies) => print_movie_list(&movies),
                Err(e) => print_error(&e),
            },
            "category" => {
                if rest.is_empty() {
                    println!("categories:");
                    for genre in Genre::ALL {
                        println!("  {}", genre);
                    }
                    continue;
                }
                match commands::browse_category(state, rest.to_string()).await {
                    Ok(movies) => print_movie_list(&movies),
                    Err(e) => print_error(&e),
                }
            }
            "popular" => match commands::popular_movies(state).await {
                Ok(movies) => print_movie_list(&movies),
                Err(e) => print_error(&e),
            },
            "detail" => match parse_id(rest) {
                Some(id) => show_detail(state, id).await,
                None => println!("usage: detail <movie id>"),
            },
            "recs" => match parse_id(rest) {
                Some(id) => match commands::get_recommendations(state, id).await {
                    Ok(movies) => print_movie_list(&movies),
                    Err(e) => print_error(&e),
                },
                None => println!("usage: recs <movie id>"),
            },
            "favorites" => match commands::list_favorites(state).await {
                Ok(view) => {
                    if let Some(notice) = &view.notice {
                        println!("! {}", notice);
                    }
                    if view.movies.is_empty() {
                        println!("No favorite movies yet.");
                    } else {
                        print_movie_list(&view.movies);
                    }
                }
                Err(e) => print_error(&e),
            },
            "toggle" => match parse_id(rest) {
                Some(id) => toggle_favorite(state, id).await,
                None => println!("usage: toggle <movie id>"),
            },
            "remove" => match parse_id(rest) {
                Some(id) => match commands::remove_favorite(state, id).await {
                    Ok(()) => println!("removed."),
                    Err(e) => print_error(&e),
                },
                None => println!("usage: remove <movie id>"),
            },
            "quit" | "exit" => break,
            _ => println!("unknown command '{}', type 'help'", command),
        }
    }

    Ok(())
}

/// Detail screen: re-fetch the full record from the handed-off id
async fn show_detail(state: &AppState, movie_id: i64) {
    match commands::get_movie_detail(state, movie_id).await {
        Ok(detail) => {
            let marker = if detail.is_favorite { " [favorite]" } else { "" };
            println!("{} (#{}){}", detail.title, detail.id, marker);
            if let Some(url) = &detail.poster_url {
                println!("  poster: {}", url);
            }
            if let Some(overview) = &detail.overview {
                println!("  {}", overview);
            }
        }
        Err(e) => print_error(&e),
    }
}

/// Toggle goes through the detail fetch so the stored record carries
/// the full shape the favorites screen renders from
async fn toggle_favorite(state: &AppState, movie_id: i64) {
    let detail = match commands::get_movie_detail(state, movie_id).await {
        Ok(detail) => detail,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    let dto = FavoriteMovieDto {
        id: detail.id,
        title: detail.title.clone(),
        poster_path: detail.poster_path.clone(),
        overview: detail.overview.clone(),
    };

    match commands::toggle_favorite(state, dto).await {
        Ok(true) => println!("{} is now a favorite.", detail.title),
        Ok(false) => println!("{} is no longer a favorite.", detail.title),
        Err(e) => print_error(&e),
    }
}

fn print_movie_list(movies: &[MovieDto]) {
    for movie in movies {
        println!("  #{:<9} {}", movie.id, movie.title);
    }
}

/// Command errors arrive as serialized ErrorResponse; empty results
/// render as a plain "no results" state, not as a failure
fn print_error(raw: &str) {
    match serde_json::from_str::<ErrorResponse>(raw) {
        Ok(response) if response.error_type == ErrorType::EmptyResult => {
            println!("No results.");
        }
        Ok(response) => {
            println!("! {}", response.message);
            if let Some(details) = response.details {
                println!("  {}", details);
            }
        }
        Err(_) => println!("! {}", raw),
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

fn print_help() {
    println!("commands:");
    println!("  search <keyword>     search movies by keyword");
    println!("  category [name]      browse one category (bare: list categories)");
    println!("  popular              currently popular movies");
    println!("  detail <id>          full detail for one movie");
    println!("  recs <id>            recommendations for one movie");
    println!("  favorites            your favorite movies");
    println!("  toggle <id>          add/remove a favorite");
    println!("  remove <id>          remove a favorite");
    println!("  quit                 exit");
}
