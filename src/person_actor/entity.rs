//! [`ActorEntity`] implementation for [`Person`].

use super::actions::{PersonAction, PersonActionResult};
use super::error::PersonError;
use crate::framework::ActorEntity;
use crate::model::{execute_transfer, Person, PersonCreate, PersonId, PersonUpdate};
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<(), PersonError> {
    if name.trim().is_empty() {
        return Err(PersonError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Person {
    const KIND: &'static str = "Person";
    type Id = PersonId;
    type Create = PersonCreate;
    type Update = PersonUpdate;
    type Action = PersonAction;
    type ActionResult = PersonActionResult;
    type Context = ();
    type Error = PersonError;

    fn from_create_params(id: PersonId, params: PersonCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        Ok(Self::new(id, params.name, params.balance, params.disposition))
    }

    /// Renames and/or changes mood. Balance and drinks are not updatable.
    async fn on_update(&mut self, update: PersonUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(disposition) = update.disposition {
            self.disposition = disposition;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PersonAction,
        _ctx: &(),
    ) -> Result<PersonActionResult, Self::Error> {
        match action {
            PersonAction::Purchase { seller, beverage } => {
                execute_transfer(self, &seller, beverage)?;
                Ok(PersonActionResult::Purchase {
                    balance: self.balance,
                })
            }
            PersonAction::Sip { slot } => {
                let beverage = self
                    .drinks
                    .get_mut(slot)
                    .ok_or(PersonError::NoSuchDrink(slot))?;
                let sip = beverage.take_sip();
                Ok(PersonActionResult::Sip {
                    sip,
                    beverage: beverage.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BeverageSpec, Disposition};

    fn simon() -> Person {
        Person::new(PersonId(1), "Simon", 10, Disposition::Agreeable)
    }

    #[test]
    fn test_blank_name_is_rejected_on_create() {
        let result = Person::from_create_params(PersonId(1), PersonCreate::named("  "));
        assert_eq!(result.unwrap_err(), PersonError::InvalidName("  ".to_string()));
    }

    #[tokio::test]
    async fn test_update_changes_name_and_disposition() {
        let mut person = simon();
        let update = PersonUpdate {
            name: Some("Simone".to_string()),
            disposition: Some(Disposition::Unavailable),
        };
        person.on_update(update, &()).await.unwrap();
        assert_eq!(person.name, "Simone");
        assert!(!person.is_available());
    }

    #[tokio::test]
    async fn test_rejected_update_changes_nothing() {
        let mut person = simon();
        let update = PersonUpdate {
            name: Some(String::new()),
            disposition: Some(Disposition::Unavailable),
        };
        let err = person.on_update(update, &()).await.unwrap_err();
        assert_eq!(err, PersonError::InvalidName(String::new()));
        assert_eq!(person, simon());
    }

    #[tokio::test]
    async fn test_sip_on_missing_slot_fails() {
        let mut person = simon();
        let result = person.handle_action(PersonAction::Sip { slot: 0 }, &()).await;
        assert_eq!(result.unwrap_err(), PersonError::NoSuchDrink(0));

        person.drinks.push(BeverageSpec::default().brew());
        let result = person.handle_action(PersonAction::Sip { slot: 0 }, &()).await;
        assert!(result.is_ok());
    }
}
