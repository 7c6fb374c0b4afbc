//! Detail view for one hero, with rename-and-save.

use std::sync::Arc;

use crate::messages::MessageSink;
use crate::service::HeroService;
use crate::transport::Transport;
use crate::types::{Hero, HeroId};

pub struct HeroDetailView<T, S> {
    service: Arc<HeroService<T, S>>,
    hero: Option<Hero>,
}

impl<T: Transport, S: MessageSink> HeroDetailView<T, S> {
    pub fn new(service: Arc<HeroService<T, S>>) -> Self {
        Self {
            service,
            hero: None,
        }
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    /// Load the hero with `id`. A failed fetch leaves nothing loaded.
    pub async fn load(&mut self, id: HeroId) {
        self.hero = self.service.get_hero(id).await;
    }

    /// Edit the loaded hero's name locally. Returns `false` when nothing is
    /// loaded.
    pub fn rename(&mut self, name: &str) -> bool {
        match self.hero.as_mut() {
            Some(hero) => {
                hero.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Send the loaded hero to the backend. Returns whether the backend
    /// acknowledged the update.
    pub async fn save(&self) -> bool {
        match &self.hero {
            Some(hero) => self.service.update_hero(hero).await.is_some(),
            None => false,
        }
    }
}
