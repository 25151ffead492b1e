//! In-memory stand-ins for the browser: a token slot, a navigator that records
//! where it was sent, and a transport that replays scripted answers.

use crate::app_lib::{
    ApiClient, AppError,
    api::{ApiRequest, ApiResponse, Transport},
    navigation::Navigator,
    storage::TokenStore,
};
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};
use tokio::sync::oneshot;

type Answer = Result<ApiResponse, AppError>;

#[derive(Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

pub struct RecordingNavigator {
    path: RefCell<String>,
    soft: RefCell<Vec<String>>,
    hard: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            soft: RefCell::new(Vec::new()),
            hard: RefCell::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.soft.borrow().clone()
    }

    pub fn hard_navigations(&self) -> Vec<String> {
        self.hard.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        self.soft.borrow_mut().push(path.to_string());
        *self.path.borrow_mut() = path.to_string();
    }

    fn hard_navigate(&self, path: &str) {
        self.hard.borrow_mut().push(path.to_string());
        *self.path.borrow_mut() = path.to_string();
    }
}

enum Scripted {
    Ready(Answer),
    Pending(oneshot::Receiver<Answer>),
}

/// Replays queued answers in order. Running out of script is a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<ApiRequest>>,
    sent: Cell<usize>,
}

impl ScriptedTransport {
    pub fn push(&self, answer: Answer) {
        self.script.borrow_mut().push_back(Scripted::Ready(answer));
    }

    /// Queues an answer that arrives only when the returned sender fires.
    pub fn push_pending(&self) -> oneshot::Sender<Answer> {
        let (sender, receiver) = oneshot::channel();
        self.script
            .borrow_mut()
            .push_back(Scripted::Pending(receiver));
        sender
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.sent.get()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Answer {
        self.requests.borrow_mut().push(request);
        self.sent.set(self.sent.get() + 1);
        let next = self.script.borrow_mut().pop_front();

        match next {
            Some(Scripted::Ready(answer)) => answer,
            Some(Scripted::Pending(receiver)) => receiver
                .await
                .unwrap_or_else(|_| Err(AppError::Network("answer dropped".to_string()))),
            None => Err(AppError::Network("no scripted answer".to_string())),
        }
    }
}

/// Client wired to in-memory collaborators.
pub struct Fixture {
    pub client: ApiClient,
    pub tokens: Rc<MemoryTokenStore>,
    pub navigator: Rc<RecordingNavigator>,
    pub transport: Rc<ScriptedTransport>,
}

impl Fixture {
    pub fn at(path: &str) -> Self {
        let tokens = Rc::new(MemoryTokenStore::default());
        let navigator = Rc::new(RecordingNavigator::at(path));
        let transport = Rc::new(ScriptedTransport::default());
        let client = ApiClient::new(
            "https://api.example.test/",
            transport.clone(),
            tokens.clone(),
            navigator.clone(),
        );
        Self {
            client,
            tokens,
            navigator,
            transport,
        }
    }
}

pub fn member_json(id: &str, role: &str) -> String {
    serde_json::json!({
        "id": id,
        "name": format!("User {id}"),
        "email": format!("{id}@example.test"),
        "role": role,
        "is_verified": true,
    })
    .to_string()
}
