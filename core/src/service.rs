//! Hero data-access service.
//!
//! # Design
//! Each operation comes in two flavours:
//! - `try_*` returns `Result<_, ApiError>` and only reports success to the
//!   message sink.
//! - the plain name absorbs failures: it logs the error with `tracing`, posts
//!   `"<operation> failed: <detail>"` to the message sink and hands back a
//!   fallback (`Vec::new()` or `None`) so the caller's happy path always runs.
//!
//! Callers of the absorbing flavour cannot tell "no results" from "the call
//! failed".

use std::fmt::Display;

use crate::client::HeroClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::messages::MessageSink;
use crate::transport::Transport;
use crate::types::{Hero, HeroId, HeroKey, NewHero};

/// Application service for hero CRUD over a `Transport`.
#[derive(Debug)]
pub struct HeroService<T, S> {
    client: HeroClient,
    transport: T,
    messages: S,
}

impl<T: Transport, S: MessageSink> HeroService<T, S> {
    pub fn new(client: HeroClient, transport: T, messages: S) -> Self {
        Self {
            client,
            transport,
            messages,
        }
    }

    // --- absorbing operations ---

    /// All heroes in server order, or an empty list on failure.
    pub async fn list_heroes(&self) -> Vec<Hero> {
        self.try_list_heroes()
            .await
            .unwrap_or_else(|err| self.absorb("getHeroes", err, Vec::new()))
    }

    /// The hero with `id`, or `None` on failure (including 404).
    pub async fn get_hero(&self, id: HeroId) -> Option<Hero> {
        match self.try_get_hero(id).await {
            Ok(hero) => Some(hero),
            Err(err) => self.absorb(format!("getHero id={id}"), err, None),
        }
    }

    /// Heroes whose name contains `term`. Blank terms never reach the backend.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        self.try_search_heroes(term)
            .await
            .unwrap_or_else(|err| self.absorb("searchHeroes", err, Vec::new()))
    }

    /// The stored hero with its backend-assigned id, or `None` on failure.
    pub async fn add_hero(&self, hero: NewHero) -> Option<Hero> {
        match self.try_add_hero(hero).await {
            Ok(hero) => Some(hero),
            Err(err) => self.absorb("addHero", err, None),
        }
    }

    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        match self.try_update_hero(hero).await {
            Ok(()) => Some(()),
            Err(err) => self.absorb("updateHero", err, None),
        }
    }

    /// Accepts a bare id or a full record; both send the same request.
    pub async fn delete_hero(&self, key: impl Into<HeroKey>) -> Option<()> {
        match self.try_delete_hero(key).await {
            Ok(()) => Some(()),
            Err(err) => self.absorb("deleteHero", err, None),
        }
    }

    // --- strict operations ---

    #[tracing::instrument(skip(self))]
    pub async fn try_list_heroes(&self) -> Result<Vec<Hero>, ApiError> {
        let response = self.send(self.client.build_list_heroes()).await?;
        let heroes = self.client.parse_list_heroes(response)?;
        self.log("fetched heroes");
        Ok(heroes)
    }

    #[tracing::instrument(skip(self))]
    pub async fn try_get_hero(&self, id: HeroId) -> Result<Hero, ApiError> {
        let response = self.send(self.client.build_get_hero(id)).await?;
        let hero = self.client.parse_get_hero(response)?;
        self.log(format!("fetched hero id={id}"));
        Ok(hero)
    }

    #[tracing::instrument(skip(self))]
    pub async fn try_search_heroes(&self, term: &str) -> Result<Vec<Hero>, ApiError> {
        let Some(request) = self.client.build_search_heroes(term) else {
            return Ok(Vec::new());
        };
        let response = self.send(request).await?;
        let heroes = self.client.parse_search_heroes(response)?;
        self.log(format!("found heroes matching \"{term}\""));
        Ok(heroes)
    }

    #[tracing::instrument(skip(self, hero), fields(name = %hero.name))]
    pub async fn try_add_hero(&self, hero: NewHero) -> Result<Hero, ApiError> {
        let request = self.client.build_add_hero(&hero)?;
        let response = self.send(request).await?;
        let hero = self.client.parse_add_hero(response)?;
        self.log(format!("added hero w/ id={}", hero.id));
        Ok(hero)
    }

    #[tracing::instrument(skip(self, hero), fields(id = hero.id))]
    pub async fn try_update_hero(&self, hero: &Hero) -> Result<(), ApiError> {
        let request = self.client.build_update_hero(hero)?;
        let response = self.send(request).await?;
        self.client.parse_update_hero(response)?;
        self.log(format!("updated hero id={}", hero.id));
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(id))]
    pub async fn try_delete_hero(&self, key: impl Into<HeroKey>) -> Result<(), ApiError> {
        let id = key.into().id();
        tracing::Span::current().record("id", id);
        let response = self.send(self.client.build_delete_hero(id)).await?;
        self.client.parse_delete_hero(response)?;
        self.log(format!("deleted hero id={id}"));
        Ok(())
    }

    // --- helpers ---

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = ?request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }

    fn log(&self, message: impl Display) {
        self.messages.add(format!("HeroService: {message}"));
    }

    fn absorb<R>(&self, operation: impl Display, err: ApiError, fallback: R) -> R {
        tracing::error!(%operation, code = err.code(), error = %err, "hero operation failed");
        self.log(format!("{operation} failed: {err}"));
        fallback
    }
}
