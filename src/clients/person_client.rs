//! # Person Client
//!
//! Provides a high‑level API for interacting with the `Person` actor.
//! It wraps a `ResourceClient<Person>` and exposes domain‑specific methods.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Beverage, Disposition, Person, PersonCreate, PersonId, PersonUpdate, Sip};
use crate::person_actor::{PersonAction, PersonActionResult, PersonError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Person actor.
#[derive(Clone)]
pub struct PersonClient {
    inner: ResourceClient<Person>,
}

impl PersonClient {
    pub fn new(inner: ResourceClient<Person>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Person> for PersonClient {
    type Error = PersonError;

    fn inner(&self) -> &ResourceClient<Person> {
        &self.inner
    }

    /// Entity errors come back as the original [`PersonError`], so callers can match
    /// on `InsufficientFunds`; plumbing errors become `NotFound` / `ActorCommunicationError`.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<PersonError>() {
            Ok(person_error) => person_error,
            Err(FrameworkError::NotFound(id)) => PersonError::NotFound(id),
            Err(other) => PersonError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl PersonClient {
    #[instrument(skip(self))]
    pub async fn create_person(&self, params: PersonCreate) -> Result<PersonId, PersonError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_person(
        &self,
        id: PersonId,
        update: PersonUpdate,
    ) -> Result<Person, PersonError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn set_disposition(
        &self,
        id: PersonId,
        disposition: Disposition,
    ) -> Result<Person, PersonError> {
        let update = PersonUpdate {
            disposition: Some(disposition),
            ..PersonUpdate::default()
        };
        self.update_person(id, update).await
    }

    /// Like [`ActorClient::get`], but a missing person is an error.
    pub async fn person(&self, id: PersonId) -> Result<Person, PersonError> {
        self.get(id)
            .await?
            .ok_or_else(|| PersonError::NotFound(id.to_string()))
    }

    pub async fn balance(&self, id: PersonId) -> Result<u32, PersonError> {
        Ok(self.person(id).await?.balance)
    }

    /// Executes a transfer directly, outside any request protocol.
    ///
    /// `buyer` pays `beverage.price` and receives the beverage. Returns the buyer's
    /// remaining balance. `InsufficientFunds` is returned to the caller as is.
    #[instrument(skip(self, seller, beverage), fields(seller = %seller.name, kind = %beverage.kind))]
    pub async fn purchase(
        &self,
        buyer: PersonId,
        seller: Person,
        beverage: Beverage,
    ) -> Result<u32, PersonError> {
        debug!("Sending purchase to actor");
        match self
            .inner
            .perform_action(buyer, PersonAction::Purchase { seller, beverage })
            .await
        {
            Ok(PersonActionResult::Purchase { balance }) => Ok(balance),
            Ok(other) => Err(unexpected_result(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Takes one sip from the person's drink at `slot`.
    #[instrument(skip(self))]
    pub async fn sip(&self, id: PersonId, slot: usize) -> Result<(Sip, Beverage), PersonError> {
        debug!("Sending sip to actor");
        match self
            .inner
            .perform_action(id, PersonAction::Sip { slot })
            .await
        {
            Ok(PersonActionResult::Sip { sip, beverage }) => Ok((sip, beverage)),
            Ok(other) => Err(unexpected_result(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

fn unexpected_result(result: PersonActionResult) -> PersonError {
    PersonError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
