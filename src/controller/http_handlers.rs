use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use tracing::error;

use crate::controller::extract::{extract_live, extract_player, extract_schedule};
use crate::error::ScrapeError;
use crate::model::ErrorResponse;
use crate::state::AppState;
use crate::view::index::render_index_template;

pub const PLAYER_NOT_FOUND: &str = "Player profile not found.";
pub const SEARCH_FAILED: &str = "Search failed";
pub const PLAYER_FAILED: &str = "Failed to extract player data";
pub const SCHEDULE_FAILED: &str = "Failed to fetch schedule";
pub const LIVE_FAILED: &str = "Failed to fetch live matches";

fn error_response(status: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse { error: message })
}

/// Single failure boundary for an endpoint: log in full, answer with the
/// error kind only.
fn failure(context: &str, e: &ScrapeError) -> HttpResponse {
    error!(context, error = ?e, "request failed");
    error_response(e.status_code(), format!("{context}: {e}"))
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_index_template().into_string())
}

pub async fn player(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let player_name = path.into_inner();

    let profile_url = match state
        .resolver
        .resolve(state.search.as_ref(), &player_name)
        .await
    {
        Ok(url) => url,
        Err(ScrapeError::NotFound) => {
            return error_response(StatusCode::NOT_FOUND, PLAYER_NOT_FOUND.to_string());
        }
        Err(e) => return failure(SEARCH_FAILED, &e),
    };

    match scrape(&state, &profile_url, extract_player).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => failure(PLAYER_FAILED, &e),
    }
}

/// Fetches one page and runs one extractor over it.
async fn scrape<T>(
    state: &AppState,
    url: &str,
    extract: fn(&str) -> Result<T, ScrapeError>,
) -> Result<T, ScrapeError> {
    let markup = state.fetcher.fetch(url).await?;
    extract(&markup)
}

pub async fn schedule(state: Data<AppState>) -> impl Responder {
    match scrape(&state, &state.upstream.schedule, extract_schedule).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => failure(SCHEDULE_FAILED, &e),
    }
}

pub async fn live(state: Data<AppState>) -> impl Responder {
    match scrape(&state, &state.upstream.live, extract_live).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => failure(LIVE_FAILED, &e),
    }
}

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/players/{name}", web::get().to(player))
        .route("/schedule", web::get().to(schedule))
        .route("/live", web::get().to(live))
        .route("/health", web::get().to(HttpResponse::Ok));
}
