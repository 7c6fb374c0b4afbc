//! View components that drive `HeroService` and own what is displayed.
//!
//! Each view holds an `Arc` of the service so that fire-and-forget work (the
//! optimistic delete) can outlive the call that started it. Display state is
//! owned by the view and only mutated through `&mut self`.

pub mod dashboard;
pub mod detail;
pub mod heroes;

pub use dashboard::DashboardView;
pub use detail::HeroDetailView;
pub use heroes::HeroesView;

/// Lifecycle of a view's displayed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Populated,
}
