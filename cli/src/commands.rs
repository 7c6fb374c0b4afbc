//! Command-line routing: turns arguments into a view action and renders the
//! resulting view state as text lines.

use std::sync::Arc;

use heroes_core::{
    DashboardView, HeroDetailView, HeroId, HeroService, HeroesView, MessageSink, Route,
    Transport,
};

/// One invocation of the `heroes` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dashboard,
    Heroes,
    AddHero(String),
    DeleteHero(HeroId),
    Detail(HeroId),
    Rename(HeroId, String),
    Search(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unknown route {0:?}")]
    UnknownRoute(String),

    #[error("unknown action {action:?} for route {route}")]
    UnknownAction { route: Route, action: String },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid hero id {0:?}")]
    InvalidId(String),
}

impl Command {
    /// Parse arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] naming the first argument that does not fit.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let (first, rest) = match args.split_first() {
            Some((first, rest)) => (first.as_str(), rest),
            None => ("", args),
        };
        if first == "search" {
            return Ok(Command::Search(rest.join(" ")));
        }
        let route = Route::parse(first).ok_or_else(|| UsageError::UnknownRoute(first.to_string()))?;
        let (action, operands) = match rest.split_first() {
            Some((action, operands)) => (Some(action.as_str()), operands),
            None => (None, rest),
        };
        match (route, action) {
            (Route::Dashboard, None) => Ok(Command::Dashboard),
            (Route::Heroes, None) => Ok(Command::Heroes),
            (Route::Heroes, Some("add")) => Ok(Command::AddHero(required_text(operands, "name")?)),
            (Route::Heroes, Some("delete")) => {
                let id = operands.first().ok_or(UsageError::MissingArgument("id"))?;
                id.parse()
                    .map(Command::DeleteHero)
                    .map_err(|_| UsageError::InvalidId(id.clone()))
            }
            (Route::Detail(id), None) => Ok(Command::Detail(id)),
            (Route::Detail(id), Some("rename")) => {
                Ok(Command::Rename(id, required_text(operands, "name")?))
            }
            (route, Some(action)) => Err(UsageError::UnknownAction {
                route,
                action: action.to_string(),
            }),
        }
    }
}

fn required_text(operands: &[String], what: &'static str) -> Result<String, UsageError> {
    let text = operands.join(" ");
    if text.trim().is_empty() {
        return Err(UsageError::MissingArgument(what));
    }
    Ok(text)
}

/// Run `command` against `service` and render the view it lands on.
pub async fn execute<T, S>(command: Command, service: Arc<HeroService<T, S>>) -> Vec<String>
where
    T: Transport + 'static,
    S: MessageSink + 'static,
{
    match command {
        Command::Dashboard => {
            let mut view = DashboardView::new(service);
            view.initialize().await;
            titled_list("Top Heroes", view.heroes())
        }
        Command::Heroes => {
            let mut view = HeroesView::new(service);
            view.initialize().await;
            titled_list("My Heroes", view.heroes())
        }
        Command::AddHero(name) => {
            let mut view = HeroesView::new(service);
            view.initialize().await;
            view.add(&name).await;
            titled_list("My Heroes", view.heroes())
        }
        Command::DeleteHero(id) => {
            let mut view = HeroesView::new(service);
            view.initialize().await;
            let Some(hero) = view.heroes().iter().find(|h| h.id == id).cloned() else {
                return vec![format!("no hero with id={id} in the list")];
            };
            // The process exits after printing, so wait for the fired request.
            if let Err(err) = view.delete(&hero).await {
                tracing::warn!(%err, id, "delete task did not complete");
            }
            titled_list("My Heroes", view.heroes())
        }
        Command::Detail(id) => {
            let mut view = HeroDetailView::new(service);
            view.load(id).await;
            detail(&view, id)
        }
        Command::Rename(id, name) => {
            let mut view = HeroDetailView::new(service);
            view.load(id).await;
            if view.rename(&name) {
                view.save().await;
            }
            detail(&view, id)
        }
        Command::Search(term) => {
            let heroes = service.search_heroes(&term).await;
            titled_list("Hero Search", &heroes)
        }
    }
}

fn titled_list(title: &str, heroes: &[heroes_core::Hero]) -> Vec<String> {
    std::iter::once(title.to_string())
        .chain(heroes.iter().map(|hero| format!("  {hero}")))
        .collect()
}

fn detail<T: Transport, S: MessageSink>(view: &HeroDetailView<T, S>, id: HeroId) -> Vec<String> {
    match view.hero() {
        Some(hero) => vec![
            format!("{} Details", hero.name.to_uppercase()),
            format!("  id: {}", hero.id),
            format!("  name: {}", hero.name),
        ],
        None => vec![format!("hero id={id} not found")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_lands_on_dashboard() {
        assert_eq!(Command::parse(&[]), Ok(Command::Dashboard));
    }

    #[test]
    fn parses_routes_and_actions() {
        assert_eq!(Command::parse(&args(&["heroes"])), Ok(Command::Heroes));
        assert_eq!(
            Command::parse(&args(&["heroes", "add", "Dr", "Strange"])),
            Ok(Command::AddHero("Dr Strange".to_string()))
        );
        assert_eq!(
            Command::parse(&args(&["heroes", "delete", "12"])),
            Ok(Command::DeleteHero(12))
        );
        assert_eq!(Command::parse(&args(&["detail/15"])), Ok(Command::Detail(15)));
        assert_eq!(
            Command::parse(&args(&["detail/15", "rename", "Magnetica"])),
            Ok(Command::Rename(15, "Magnetica".to_string()))
        );
        assert_eq!(
            Command::parse(&args(&["search", "ma"])),
            Ok(Command::Search("ma".to_string()))
        );
    }

    #[test]
    fn rejects_bad_usage() {
        assert_eq!(
            Command::parse(&args(&["villains"])),
            Err(UsageError::UnknownRoute("villains".to_string()))
        );
        assert_eq!(
            Command::parse(&args(&["heroes", "delete", "twelve"])),
            Err(UsageError::InvalidId("twelve".to_string()))
        );
        assert_eq!(
            Command::parse(&args(&["heroes", "add", "  "])),
            Err(UsageError::MissingArgument("name"))
        );
        assert_eq!(
            Command::parse(&args(&["dashboard", "add", "x"])),
            Err(UsageError::UnknownAction {
                route: Route::Dashboard,
                action: "add".to_string()
            })
        );
    }
}
