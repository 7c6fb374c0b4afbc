//! Dashboard view: a short row of "top heroes".

use std::sync::Arc;

use super::ViewState;
use crate::messages::MessageSink;
use crate::service::HeroService;
use crate::transport::Transport;
use crate::types::Hero;

/// Heroes shown on the dashboard are the server list's positions 1..5.
const TOP_HEROES_SKIP: usize = 1;
const TOP_HEROES_TAKE: usize = 4;

pub struct DashboardView<T, S> {
    service: Arc<HeroService<T, S>>,
    heroes: Vec<Hero>,
    state: ViewState,
}

impl<T: Transport, S: MessageSink> DashboardView<T, S> {
    pub fn new(service: Arc<HeroService<T, S>>) -> Self {
        Self {
            service,
            heroes: Vec::new(),
            state: ViewState::Idle,
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub async fn initialize(&mut self) {
        self.state = ViewState::Loading;
        self.heroes = self
            .service
            .list_heroes()
            .await
            .into_iter()
            .skip(TOP_HEROES_SKIP)
            .take(TOP_HEROES_TAKE)
            .collect();
        self.state = ViewState::Populated;
    }
}
