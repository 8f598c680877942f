//! Joke HTTP Routes
//!
//! Listing, random selection, lookup, create/update/delete and likes.
//!
//! Routes keyed by a joke id and routes keyed by a joke type share the
//! `/jokes/:key` segment; each handler decides how to read it.

use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::log_event;
use crate::observability::Event;
use crate::query::{
    filter_by_type, list, random_n, random_one, ListQuery, Page, PageRequest, SortSpec,
};
use crate::store::{save_jokes, Joke, JokePatch, JokeStore, NewJoke};

use super::errors::{ApiError, ApiResult, JOKES_NOT_FOUND, JOKE_NOT_FOUND};

/// Number of jokes returned by the `ten` endpoints
pub const TEN: usize = 10;

// ==================
// Shared State
// ==================

/// Joke state shared across handlers.
///
/// One lock guards the whole collection; every mutation and every
/// snapshot write takes it exclusively.
#[derive(Debug)]
pub struct JokesState {
    store: RwLock<JokeStore>,
    data_file: PathBuf,
}

impl JokesState {
    pub fn new(store: JokeStore, data_file: impl Into<PathBuf>) -> Self {
        Self {
            store: RwLock::new(store),
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &std::path::Path {
        &self.data_file
    }

    pub fn read(&self) -> ApiResult<RwLockReadGuard<'_, JokeStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::internal("Joke store lock poisoned"))
    }

    pub fn write(&self) -> ApiResult<RwLockWriteGuard<'_, JokeStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::internal("Joke store lock poisoned"))
    }

    /// Write the current collection to the data file while holding the
    /// write lock. Returns the number of jokes saved.
    pub fn persist(&self) -> ApiResult<usize> {
        let store = self.write()?;
        let path = self.data_file.display();
        match save_jokes(&self.data_file, store.all()) {
            Ok(()) => {
                let count = store.len();
                log_event!(Event::SnapshotSaved, path = %path, jokes = count);
                Ok(count)
            }
            Err(e) => {
                log_event!(Event::SnapshotFailed, path = %path, reason = %e);
                Err(e.into())
            }
        }
    }
}

// ==================
// Request/Response Types
// ==================

/// Query string for listing endpoints. Values stay raw strings so that
/// unusable numbers fall back to defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default)]
    pub search_text: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            kind: None,
            search_text: self.search_text.clone(),
            sort: self.sort.as_deref().and_then(SortSpec::parse),
            page: PageRequest::parse(self.page.as_deref(), self.limit.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateJokeRequest {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub punchline: Option<String>,
}

impl CreateJokeRequest {
    /// Check required fields in order: type, setup, punchline.
    /// Empty strings count as missing.
    pub fn validate(self) -> ApiResult<NewJoke> {
        let kind = required(self.kind, "Type is required")?;
        let setup = required(self.setup, "Setup is required")?;
        let punchline = required(self.punchline, "Punchline is required")?;
        Ok(NewJoke::new(kind, setup, punchline))
    }
}

fn required(value: Option<String>, message: &str) -> ApiResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::validation(message))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Joke Routes
// ==================

/// Create joke routes
pub fn joke_routes(state: Arc<JokesState>) -> Router {
    Router::new()
        // Collection
        .route(
            "/jokes",
            get(list_jokes_handler)
                .post(create_joke_handler)
                .delete(delete_jokes_handler),
        )
        .route("/jokes/all", get(list_jokes_handler))
        .route("/random_ten", get(list_jokes_handler))
        // Random selection
        .route("/jokes/random", get(random_joke_handler))
        .route("/random_joke", get(random_joke_handler))
        .route("/jokes/ten", get(random_ten_handler))
        .route("/jokes/random/:count", get(random_count_handler))
        // By type
        .route("/jokes/:key/random", get(list_by_type_handler))
        .route("/jokes/:key/ten", get(random_ten_by_type_handler))
        // By id
        .route(
            "/jokes/:key",
            get(get_joke_handler)
                .put(update_joke_handler)
                .delete(delete_joke_handler),
        )
        .route("/jokes/:key/like", post(like_joke_handler))
        .route("/jokes/:key/dislike", post(dislike_joke_handler))
        // Persistence
        .route("/admin/save", post(save_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// A path id that is not a number cannot name a joke
fn parse_id(key: &str) -> ApiResult<u64> {
    key.parse::<u64>()
        .map_err(|_| ApiError::not_found(JOKE_NOT_FOUND))
}

// ==================
// Listing Handlers
// ==================

async fn list_jokes_handler(
    State(state): State<Arc<JokesState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Page<Joke>>> {
    let store = state.read()?;
    Ok(Json(list(store.all(), &params.to_query())))
}

async fn list_by_type_handler(
    State(state): State<Arc<JokesState>>,
    Path(kind): Path<String>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Page<Joke>>> {
    let query = ListQuery {
        search_text: None,
        ..params.to_query()
    }
    .with_kind(kind);

    let store = state.read()?;
    Ok(Json(list(store.all(), &query)))
}

// ==================
// Random Handlers
// ==================

async fn random_joke_handler(State(state): State<Arc<JokesState>>) -> ApiResult<Json<Page<Joke>>> {
    let store = state.read()?;
    let data: Vec<Joke> = random_one(store.all(), &mut rand::thread_rng())
        .into_iter()
        .collect();
    Ok(Json(Page::single(data, 1)))
}

async fn random_ten_handler(State(state): State<Arc<JokesState>>) -> ApiResult<Json<Page<Joke>>> {
    let store = state.read()?;
    let data = random_n(store.all(), TEN, &mut rand::thread_rng());
    Ok(Json(Page::single(data, TEN)))
}

/// Over-counts are capped like every other random endpoint
async fn random_count_handler(
    State(state): State<Arc<JokesState>>,
    Path(count): Path<String>,
) -> ApiResult<Json<Page<Joke>>> {
    let count: usize = count
        .parse()
        .map_err(|_| ApiError::validation("The passed path is not a number."))?;

    let store = state.read()?;
    let data = random_n(store.all(), count, &mut rand::thread_rng());
    Ok(Json(Page::single(data, count)))
}

async fn random_ten_by_type_handler(
    State(state): State<Arc<JokesState>>,
    Path(kind): Path<String>,
) -> ApiResult<Json<Page<Joke>>> {
    let store = state.read()?;
    let of_kind = filter_by_type(store.all(), &kind);
    let data = random_n(&of_kind, TEN, &mut rand::thread_rng());
    Ok(Json(Page::single(data, TEN)))
}

// ==================
// Record Handlers
// ==================

async fn get_joke_handler(
    State(state): State<Arc<JokesState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<Joke>> {
    let id = parse_id(&key)?;
    let store = state.read()?;
    Ok(Json(store.get(id)?.clone()))
}

async fn create_joke_handler(
    State(state): State<Arc<JokesState>>,
    body: Result<Json<CreateJokeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Joke>)> {
    let Json(request) = body?;
    let new = request.validate()?;

    let mut store = state.write()?;
    let joke = store.create(new)?;
    Ok((StatusCode::CREATED, Json(joke)))
}

async fn update_joke_handler(
    State(state): State<Arc<JokesState>>,
    Path(key): Path<String>,
    body: Result<Json<JokePatch>, JsonRejection>,
) -> ApiResult<Json<Joke>> {
    let id = parse_id(&key)?;
    let Json(patch) = body?;

    let mut store = state.write()?;
    Ok(Json(store.update(id, &patch)?))
}

async fn delete_joke_handler(
    State(state): State<Arc<JokesState>>,
    Path(key): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&key)?;
    state.write()?.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_jokes_handler(
    State(state): State<Arc<JokesState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(body) = body?;
    let ids = body
        .get("ids")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::validation("IDs must be provided in an array"))?;

    // Anything that is not a non-negative integer cannot match a joke
    let ids = ids
        .iter()
        .map(Value::as_u64)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(|| ApiError::not_found(JOKES_NOT_FOUND))?;

    state.write()?.remove_many(&ids)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn like_joke_handler(
    State(state): State<Arc<JokesState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<Joke>> {
    let id = parse_id(&key)?;
    Ok(Json(state.write()?.adjust_likes(id, 1)?))
}

async fn dislike_joke_handler(
    State(state): State<Arc<JokesState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<Joke>> {
    let id = parse_id(&key)?;
    Ok(Json(state.write()?.adjust_likes(id, -1)?))
}

// ==================
// Persistence Handlers
// ==================

async fn save_handler(State(state): State<Arc<JokesState>>) -> ApiResult<Json<MessageResponse>> {
    let count = state.persist()?;
    Ok(Json(MessageResponse {
        message: format!("Saved {} jokes", count),
    }))
}
