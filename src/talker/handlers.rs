use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::dto::{SearchQuery, TalkerPayload};
use super::validate::{validate_search, validate_talker};
use crate::{auth::extractor::ApiToken, error::ApiError, state::AppState, store::Talker};

const TALKER_NOT_FOUND: &str = "Pessoa palestrante não encontrada";

// Mirrors the original route behavior: a non-numeric id simply matches no
// record, so it falls through to 404 rather than a decode rejection.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(TALKER_NOT_FOUND))
}

#[instrument(skip(state))]
pub async fn list_talkers(State(state): State<AppState>) -> Result<Json<Vec<Talker>>, ApiError> {
    let talkers = state.store.load().await?;
    Ok(Json(talkers))
}

#[instrument(skip(state))]
pub async fn search_talkers(
    _token: ApiToken,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Talker>>, ApiError> {
    let filters = validate_search(&query)?;
    let talkers = state.store.load().await?;

    let found: Vec<Talker> = talkers
        .into_iter()
        .filter(|t| filters.q.as_deref().map_or(true, |q| t.name.contains(q)))
        .filter(|t| filters.rate.map_or(true, |r| t.talk.rate == r))
        .filter(|t| {
            filters
                .date
                .as_deref()
                .map_or(true, |d| t.talk.watched_at == d)
        })
        .collect();

    Ok(Json(found))
}

#[instrument(skip(state))]
pub async fn get_talker(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Talker>, ApiError> {
    let id = parse_id(&raw_id)?;
    let talkers = state.store.load().await?;
    let talker = talkers
        .into_iter()
        .find(|t| t.id == id)
        .ok_or(ApiError::NotFound(TALKER_NOT_FOUND))?;
    Ok(Json(talker))
}

#[instrument(skip(state, payload))]
pub async fn create_talker(
    _token: ApiToken,
    State(state): State<AppState>,
    payload: Result<Json<TalkerPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Talker>), ApiError> {
    let Json(payload) = payload?;
    let new_talker = validate_talker(&payload)?;

    let _guard = state.write_lock.lock().await;
    let mut talkers = state.store.load().await?;

    // Length-based id, as the original data file assigns them. Deleting the
    // last record frees its id for reuse by the next create.
    let talker = Talker {
        id: talkers.len() as i64 + 1,
        name: new_talker.name,
        age: new_talker.age,
        talk: new_talker.talk,
    };
    talkers.push(talker.clone());
    state.store.save(&talkers).await?;

    info!(id = talker.id, "talker created");
    Ok((StatusCode::CREATED, Json(talker)))
}

#[instrument(skip(state, payload))]
pub async fn update_talker(
    _token: ApiToken,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TalkerPayload>, JsonRejection>,
) -> Result<Json<Talker>, ApiError> {
    let Json(payload) = payload?;
    let new_talker = validate_talker(&payload)?;
    let id = parse_id(&raw_id)?;

    let _guard = state.write_lock.lock().await;
    let mut talkers = state.store.load().await?;
    let position = talkers
        .iter()
        .position(|t| t.id == id)
        .ok_or(ApiError::NotFound(TALKER_NOT_FOUND))?;

    // Full replacement, keeping the id from the path.
    talkers[position] = Talker {
        id,
        name: new_talker.name,
        age: new_talker.age,
        talk: new_talker.talk,
    };
    state.store.save(&talkers).await?;

    info!(id, "talker updated");
    Ok(Json(talkers.swap_remove(position)))
}

#[instrument(skip(state))]
pub async fn delete_talker(
    _token: ApiToken,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;

    let _guard = state.write_lock.lock().await;
    let mut talkers = state.store.load().await?;
    let position = talkers
        .iter()
        .position(|t| t.id == id)
        .ok_or(ApiError::NotFound(TALKER_NOT_FOUND))?;

    talkers.remove(position);
    state.store.save(&talkers).await?;

    info!(id, "talker deleted");
    Ok(StatusCode::NO_CONTENT)
}
