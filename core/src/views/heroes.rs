//! Hero list view: shows every hero, adds new ones, deletes optimistically.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::ViewState;
use crate::messages::MessageSink;
use crate::service::HeroService;
use crate::transport::Transport;
use crate::types::{Hero, NewHero};

pub struct HeroesView<T, S> {
    service: Arc<HeroService<T, S>>,
    heroes: Vec<Hero>,
    state: ViewState,
}

impl<T, S> HeroesView<T, S>
where
    T: Transport + 'static,
    S: MessageSink + 'static,
{
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

    /// Fetch the full list and replace whatever is displayed.
    pub async fn initialize(&mut self) {
        self.state = ViewState::Loading;
        self.heroes = self.service.list_heroes().await;
        self.state = ViewState::Populated;
    }

    /// Create a hero named `name` (trimmed) and append the stored record.
    ///
    /// Blank names are ignored without contacting the backend. If creation
    /// fails nothing is appended.
    pub async fn add(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(hero) = self.service.add_hero(NewHero::new(name)).await {
            self.heroes.push(hero);
        }
    }

    /// Remove `hero` from the display immediately, then delete it on the
    /// backend in a spawned task.
    ///
    /// The returned handle may be dropped; the request still runs to
    /// completion. A failed delete is not rolled back locally.
    pub fn delete(&mut self, hero: &Hero) -> JoinHandle<()> {
        let id = hero.id;
        self.heroes.retain(|h| h.id != id);
        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            service.delete_hero(id).await;
        })
    }
}
