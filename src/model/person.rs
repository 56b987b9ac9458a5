use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::Beverage;

/// Type-safe identifier for Persons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u32);

impl From<u32> for PersonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "person_{}", self.0)
    }
}

/// Whether a person will consider a request at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Disposition {
    #[default]
    Agreeable,
    Unavailable,
}

/// Someone with money, a mood, and the drinks they own.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// Balance and drinks only change through a purchase; drinks are append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub balance: u32,
    pub disposition: Disposition,
    pub drinks: Vec<Beverage>,
}

impl Person {
    /// Creates a Person with no drinks.
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        balance: u32,
        disposition: Disposition,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            disposition,
            drinks: Vec::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.disposition == Disposition::Agreeable
    }
}

/// Starting balance when none is given.
pub const DEFAULT_BALANCE: u32 = 10;

/// Payload for creating a new person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCreate {
    pub name: String,
    pub balance: u32,
    pub disposition: Disposition,
}

impl PersonCreate {
    /// An agreeable person with the default balance.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            balance: DEFAULT_BALANCE,
            disposition: Disposition::Agreeable,
        }
    }

    pub fn with_balance(mut self, balance: u32) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }
}

/// Payload for updating an existing person.
///
/// Balance and drinks are absent on purpose: only a purchase may change them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub disposition: Option<Disposition>,
}
