//! Shared helpers for integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use chess_desk::client::{ApiClient, ApiRequest, ApiResponse, Transport, TransportError};
use chess_desk::surface::DocumentSurface;
use serde_json::{Value, json};

/// Replays canned responses in order and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, err: TransportError) -> &Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    /// Paths requested so far, oldest first.
    pub fn paths(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| request.path.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other(format!("no response scripted for {path}"))))
    }
}

pub fn client(transport: &ScriptedTransport) -> (Rc<ApiClient<ScriptedTransport>>, Rc<DocumentSurface>) {
    let surface = Rc::new(DocumentSurface::new());
    let client = ApiClient::new(transport.clone(), surface.clone());
    (Rc::new(client), surface)
}

pub fn game(id: i32, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Партия #{id}"),
        "status": status,
        "player1": {"id": 1, "name": "Иван Петров"},
        "player2": {"id": 2, "name": "Мария Сидорова"},
        "snapshotCount": id,
        "createdAt": "2025-01-23T10:30:00"
    })
}

pub fn user(id: i32, role: &str, is_active: bool) -> Value {
    json!({
        "id": id,
        "name": format!("Пользователь {id}"),
        "email": format!("user{id}@example.com"),
        "role": role,
        "isActive": is_active,
        "createdAt": "2025-02-01T08:00:00+03:00"
    })
}

pub fn page_body(data_key: &str, items: Vec<Value>, current: usize, total: usize) -> String {
    let count = items.len();
    json!({
        data_key: items,
        "pagination": {
            "currentPage": current,
            "totalPages": total,
            "totalCount": count,
            "limit": 20
        }
    })
    .to_string()
}
