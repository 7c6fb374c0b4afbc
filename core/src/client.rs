//! Stateless HTTP request builder and response parser for the hero API.
//!
//! # Design
//! `HeroClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Any 2xx status counts as success; 404 maps to `ApiError::NotFound`.

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Hero, HeroId, HeroKey, NewHero};

/// Resource path of the hero collection, relative to the base URL.
pub const HEROES_PATH: &str = "api/heroes";

/// Synchronous, stateless client for the hero API.
#[derive(Debug, Clone)]
pub struct HeroClient {
    base_url: String,
}

impl HeroClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn heroes_url(&self) -> String {
        format!("{}/{HEROES_PATH}", self.base_url)
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.heroes_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_hero(&self, id: HeroId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.heroes_url()),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Returns `None` for an empty or whitespace-only term: there is nothing
    /// to ask the backend. The term is form-encoded as the `name` query value.
    pub fn build_search_heroes(&self, term: &str) -> Option<HttpRequest> {
        if term.trim().is_empty() {
            return None;
        }
        let name: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
        Some(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/?name={name}", self.heroes_url()),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_add_hero(&self, input: &NewHero) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.heroes_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.heroes_url(),
            headers: json_headers(),
            body: Some(to_json(hero)?),
        })
    }

    pub fn build_delete_hero(&self, key: impl Into<HeroKey>) -> HttpRequest {
        let id = key.into().id();
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.heroes_url()),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// The backend acknowledgement carries no payload worth decoding.
    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
