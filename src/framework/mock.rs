//! # Mock Framework
//!
//! In-memory stand-ins for a [`ResourceActor`](crate::framework::ResourceActor), for
//! testing client and protocol logic without spawning real actors.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | scripted responses | real entities |
//! | Error injection | `return_err` | needs specific state |
//! | Use case | logic *around* a client | the actor itself, full system |
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front, run the code, then [`MockClient::verify`].
//! - [`create_mock_client`] with [`expect_get`] / [`expect_action`]: hand-drive each
//!   request from the test body.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Person>::new();
//! mock.expect_get(PersonId(1)).return_ok(Some(simon));
//! let client = PersonClient::new(mock.client());
//! // ... exercise code that uses `client` ...
//! mock.verify();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "get",
            Expectation::Create { .. } => "create",
            Expectation::Update { .. } => "update",
            Expectation::Action { .. } => "action",
        }
    }
}

fn request_name<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Action { .. } => "action",
    }
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

/// A mock client with expectation tracking.
///
/// Requests are matched against expectations in FIFO order. A request that does not
/// match (wrong kind or wrong id) is answered with [`FrameworkError::ActorClosed`] and
/// recorded; [`MockClient::verify`] then panics with every recorded mismatch.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: SharedState<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_state).expectations.pop_front();
                answer(&task_state, request, expectation);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> Responder<T, Option<T>> {
        self.responder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> Responder<T, T::Id> {
        self.responder(|response| Expectation::Create { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> Responder<T, T> {
        self.responder(move |response| Expectation::Update { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> Responder<T, T::ActionResult> {
        self.responder(move |response| Expectation::Action { id, response })
    }

    fn responder<R>(
        &mut self,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Responder<T, R> {
        Responder {
            state: self.state.clone(),
            build: Box::new(build),
        }
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.failures.is_empty() {
            panic!("Unexpected requests: {}", state.failures.join("; "));
        }
        if !state.expectations.is_empty() {
            let pending: Vec<_> = state.expectations.iter().map(|e| e.name()).collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                pending.len(),
                pending
            );
        }
    }
}

/// Sets the scripted response of one expectation.
pub struct Responder<T: ActorEntity, R> {
    state: SharedState<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> Responder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        lock(&self.state).expectations.push_back(expectation);
    }
}

fn lock<T: ActorEntity>(state: &SharedState<T>) -> std::sync::MutexGuard<'_, MockState<T>> {
    // A poisoned lock only means another test assertion already panicked.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn reply<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn answer<T: ActorEntity>(
    state: &SharedState<T>,
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) {
    let got = request_name(&request);
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
            if id == want =>
        {
            reply(respond_to, response)
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            reply(respond_to, response)
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) if id == want => reply(respond_to, response),
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) if id == want => reply(respond_to, response),
        (request, expectation) => {
            let wanted = expectation.as_ref().map_or("nothing", |e| e.name());
            // Record before replying so `verify` after the awaited call sees it.
            lock(state)
                .failures
                .push(format!("got {got}, expected {wanted}"));
            reject(request);
        }
    }
}

fn reject<T: ActorEntity>(request: ResourceRequest<T>) {
    match request {
        ResourceRequest::Create { respond_to, .. } => reply(respond_to, Err(FrameworkError::ActorClosed)),
        ResourceRequest::Get { respond_to, .. } => reply(respond_to, Err(FrameworkError::ActorClosed)),
        ResourceRequest::List { respond_to } => reply(respond_to, Err(FrameworkError::ActorClosed)),
        ResourceRequest::Update { respond_to, .. } => reply(respond_to, Err(FrameworkError::ActorClosed)),
        ResourceRequest::Action { respond_to, .. } => reply(respond_to, Err(FrameworkError::ActorClosed)),
    }
}

/// Creates a client and the receiving end of its mailbox, for hand-driven tests.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
