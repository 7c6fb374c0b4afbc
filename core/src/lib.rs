//! Async data-access client for the hero API.
//!
//! # Overview
//! `HeroClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. A `Transport` executes the round-trip, and
//! `HeroService` ties the two together behind list/get/search/add/update/
//! delete operations that absorb failures into fallback values plus a status
//! message.
//!
//! # Design
//! - `HeroClient` is stateless: it holds only `base_url`.
//! - The service and the message log are explicit instances built once by
//!   the caller and shared by `Arc` or cheap clones; there is no global.
//! - Views in [`views`] own their displayed state and drive the service.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod messages;
pub mod routes;
pub mod service;
pub mod transport;
pub mod types;
pub mod views;

pub use client::HeroClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::{MessageService, MessageSink};
pub use routes::Route;
pub use service::HeroService;
pub use transport::{ReqwestTransport, Transport};
pub use types::{Hero, HeroId, HeroKey, NewHero};
pub use views::{DashboardView, HeroDetailView, HeroesView, ViewState};
