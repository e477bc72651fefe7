//! In-memory transport, page, and submit-event fakes for flow tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::error::FetchError;
use crate::login::SubmitEvent;
use crate::net::{FormFields, HttpResponse, RequestConfig, Transport};
use crate::page::Page;

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Result<String, String>,
}

impl MockResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self { status, body: Ok(body.to_owned()) }
    }

    pub fn unreadable(status: u16) -> Self {
        Self { status, body: Err("stream reset".to_owned()) }
    }
}

impl HttpResponse for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn text(self) -> Result<String, FetchError> {
        self.body.map_err(FetchError::Body)
    }
}

/// Replays queued outcomes and records every request it was asked to send.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<MockResponse, FetchError>>>,
    pub sent: RefCell<Vec<(String, RequestConfig)>>,
}

impl MockTransport {
    pub fn replying(reply: MockResponse) -> Self {
        let transport = Self::default();
        transport.replies.borrow_mut().push_back(Ok(reply));
        transport
    }

    pub fn failing(message: &str) -> Self {
        let transport = Self::default();
        transport.replies.borrow_mut().push_back(Err(FetchError::Network(message.to_owned())));
        transport
    }
}

impl Transport for MockTransport {
    type Response = MockResponse;

    async fn send(&self, url: &str, request: RequestConfig) -> Result<MockResponse, FetchError> {
        self.sent.borrow_mut().push((url.to_owned(), request));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("no reply queued".to_owned())))
    }
}

#[derive(Debug, Default)]
pub struct RecordingPage {
    pub location: RefCell<Option<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub body: RefCell<Option<String>>,
}

impl Page for RecordingPage {
    fn navigate(&self, path: &str) {
        *self.location.borrow_mut() = Some(path.to_owned());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn replace_body(&self, html: &str) {
        *self.body.borrow_mut() = Some(html.to_owned());
    }
}

#[derive(Debug, Default)]
pub struct FakeSubmit {
    pub fields: FormFields,
    pub default_prevented: Cell<bool>,
}

impl FakeSubmit {
    pub fn with_fields(pairs: &[(&str, &str)]) -> Self {
        Self { fields: pairs.iter().copied().collect(), default_prevented: Cell::new(false) }
    }
}

impl SubmitEvent for FakeSubmit {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn form_fields(&self) -> FormFields {
        self.fields.clone()
    }
}
