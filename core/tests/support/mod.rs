//! Scripted `Transport` doubles shared by the service and view tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use heroes_core::{
    ApiError, HeroClient, HeroService, HttpRequest, HttpResponse, MessageService, Transport,
};

pub const BASE_URL: &str = "http://localhost:3000";

/// Replays queued responses in order and records every request it sees.
/// Once the queue is empty, further requests fail with a transport error.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Arc<Mutex<Script>>,
}

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<HttpResponse, ApiError>>,
    requests: Vec<HttpRequest>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.inner.lock().unwrap().responses.push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(Err(ApiError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        let mut script = self.inner.lock().unwrap();
        script.requests.push(request);
        let result = script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())));
        async move { result }
    }
}

/// Records requests but never answers them.
#[derive(Clone, Default)]
pub struct PendingTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl PendingTransport {
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for PendingTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        self.requests.lock().unwrap().push(request);
        std::future::pending()
    }
}

pub fn service<T: Transport>(transport: T) -> (HeroService<T, MessageService>, MessageService) {
    let messages = MessageService::new();
    let service = HeroService::new(HeroClient::new(BASE_URL), transport, messages.clone());
    (service, messages)
}
