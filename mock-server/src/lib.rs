//! In-memory hero backend.
//!
//! Serves the `api/heroes` surface the way an in-memory web API does: records
//! live in a `Vec` so list order is insertion order, ids are generated as
//! `max + 1`, search is a case-insensitive substring match on `name`, and
//! `PUT`/`DELETE` answer `204 No Content`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

/// First id handed out when the store is empty.
pub const FIRST_ID: u32 = 11;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Hero>>>;

/// The ten heroes the tutorial database starts with.
pub fn seed_heroes() -> Vec<Hero> {
    [
        (11, "Dr Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Router over the seeded database.
pub fn app() -> Router {
    app_with(seed_heroes())
}

/// Router over an explicit starting set of heroes.
pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(heroes));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Next id for a new record: one past the current maximum.
pub fn gen_id(heroes: &[Hero]) -> u32 {
    heroes.iter().map(|h| h.id).max().map_or(FIRST_ID, |max| max + 1)
}

async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let matched = match params.name {
        Some(term) => {
            let term = term.to_lowercase();
            heroes
                .iter()
                .filter(|h| h.name.to_lowercase().contains(&term))
                .cloned()
                .collect()
        }
        None => heroes.clone(),
    };
    Json(matched)
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<CreateHero>,
) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    let hero = Hero {
        id: gen_id(&heroes),
        name: input.name,
    };
    heroes.push(hero.clone());
    tracing::debug!(id = hero.id, "hero created");
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes
        .iter()
        .find(|h| h.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(State(db): State<Db>, Json(input): Json<Hero>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.iter_mut().find(|h| h.id == input.id) {
        Some(hero) => {
            hero.name = input.name;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut heroes = db.write().await;
    let before = heroes.len();
    heroes.retain(|h| h.id != id);
    if heroes.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
