//! Full lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every service
//! operation over real HTTP with `ReqwestTransport`. Validates that request
//! building, transport and response parsing agree with the actual server.

use std::sync::Arc;

use heroes_core::{
    HeroClient, HeroService, HeroesView, MessageService, NewHero, ReqwestTransport,
};
use tokio::net::TcpListener;

async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

#[tokio::test]
async fn crud_lifecycle() {
    let base_url = start_server().await;
    let messages = MessageService::new();
    let service = HeroService::new(
        HeroClient::new(&base_url),
        ReqwestTransport::new(),
        messages.clone(),
    );

    // Step 1: list the seeded heroes.
    let heroes = service.list_heroes().await;
    assert_eq!(heroes.len(), 10);
    assert_eq!(heroes[0].name, "Dr Nice");

    // Step 2: search is case-insensitive on the server side.
    let found = service.search_heroes("MAG").await;
    let names: Vec<&str> = found.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Magneta", "Magma"]);

    // Step 3: create.
    let created = service.add_hero(NewHero::new("Windstorm")).await.unwrap();
    assert_eq!(created.id, 21);
    assert_eq!(created.name, "Windstorm");

    // Step 4: get it back.
    let fetched = service.get_hero(created.id).await;
    assert_eq!(fetched.as_ref(), Some(&created));

    // Step 5: rename.
    let mut renamed = created.clone();
    renamed.name = "Stormwind".to_string();
    assert_eq!(service.update_hero(&renamed).await, Some(()));
    assert_eq!(service.get_hero(created.id).await, Some(renamed.clone()));

    // Step 6: delete by record.
    assert_eq!(service.delete_hero(&renamed).await, Some(()));

    // Step 7: get after delete is absent, and so is a second delete.
    assert_eq!(service.get_hero(created.id).await, None);
    assert_eq!(service.delete_hero(created.id).await, None);

    assert_eq!(service.list_heroes().await.len(), 10);

    let log = messages.messages();
    assert!(log.contains(&"HeroService: added hero w/ id=21".to_string()));
    assert!(log.contains(&"HeroService: getHero id=21 failed: resource not found".to_string()));
    assert!(log.contains(&"HeroService: deleteHero failed: resource not found".to_string()));
}

#[tokio::test]
async fn search_terms_with_reserved_characters_match_literally() {
    let base_url = start_server().await;
    let service = HeroService::new(
        HeroClient::new(&base_url),
        ReqwestTransport::new(),
        MessageService::new(),
    );
    service.add_hero(NewHero::new("Salt&Pepper")).await.unwrap();
    service.add_hero(NewHero::new("C++")).await.unwrap();

    let names = |heroes: Vec<heroes_core::Hero>| -> Vec<String> {
        heroes.into_iter().map(|h| h.name).collect()
    };
    assert_eq!(names(service.search_heroes("t&P").await), vec!["Salt&Pepper"]);
    assert_eq!(names(service.search_heroes("C++").await), vec!["C++"]);
    assert!(service.search_heroes("Dr#x").await.is_empty());
    assert_eq!(
        names(service.search_heroes("dr n").await),
        vec!["Dr Nice"]
    );
}

#[tokio::test]
async fn view_against_live_server() {
    let base_url = start_server().await;
    let service = Arc::new(HeroService::new(
        HeroClient::new(&base_url),
        ReqwestTransport::new(),
        MessageService::new(),
    ));
    let mut view = HeroesView::new(Arc::clone(&service));

    view.initialize().await;
    view.add("Nova").await;
    assert_eq!(view.heroes().len(), 11);
    assert_eq!(view.heroes().last().map(|h| h.name.as_str()), Some("Nova"));

    let first = view.heroes()[0].clone();
    view.delete(&first).await.unwrap();
    assert_eq!(view.heroes().len(), 10);
    assert_eq!(service.get_hero(first.id).await, None);
}

#[tokio::test]
async fn unreachable_backend_is_absorbed() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let messages = MessageService::new();
    let service = HeroService::new(
        HeroClient::new(&format!("http://{addr}")),
        ReqwestTransport::new(),
        messages.clone(),
    );

    assert!(service.list_heroes().await.is_empty());
    let log = messages.messages();
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("HeroService: getHeroes failed: transport error"));
}
