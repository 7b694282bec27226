use crate::AppState;
use crate::views::{ContentFetcher, Home, HttpFetcher, RouterFetcher};
use axum::{Router, extract::State, response::Html, routing::get};
use std::sync::Arc;

#[derive(Clone)]
struct HomeState {
    fetcher: Arc<dyn ContentFetcher>,
    site_title: String,
}

/// Builds the home route with one fetcher shared by every request.
pub fn home_router(state: &AppState) -> Router<AppState> {
    let fetcher: Arc<dyn ContentFetcher> = match &state.config.api_base_url {
        Some(base_url) => Arc::new(HttpFetcher::new(base_url.clone())),
        None => Arc::new(RouterFetcher::new(
            Router::new()
                .nest("/api", super::api_router())
                .with_state(state.clone()),
        )),
    };

    home_router_with_fetcher(fetcher, state.config.site_title.clone())
}

pub fn home_router_with_fetcher(
    fetcher: Arc<dyn ContentFetcher>,
    site_title: String,
) -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .with_state(HomeState {
            fetcher,
            site_title,
        })
}

// every request mounts a fresh Home, which fetches its two lists exactly once
async fn home_handler(State(home_state): State<HomeState>) -> Html<String> {
    let mut home = Home::new(home_state.site_title.clone());
    home.mount(home_state.fetcher.as_ref()).await;

    Html(home.render_document())
}
