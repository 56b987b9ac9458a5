//! The purchase itself: money out of the buyer, beverage into the buyer's hands.

use tracing::{info, warn};

use super::{Beverage, Person};
use crate::person_actor::PersonError;

/// Moves `beverage` into `buyer`'s drinks and debits its price.
///
/// The buyer's balance must be strictly greater than the price. Every check runs
/// before any mutation, so on error `buyer` is untouched.
///
/// # Errors
/// - [`PersonError::SameParty`] if `buyer` and `seller` are the same person.
/// - [`PersonError::InsufficientFunds`] if `buyer.balance <= beverage.price`.
pub fn execute_transfer(
    buyer: &mut Person,
    seller: &Person,
    beverage: Beverage,
) -> Result<(), PersonError> {
    if buyer.id == seller.id {
        return Err(PersonError::SameParty);
    }
    if buyer.balance <= beverage.price {
        warn!(
            buyer = %buyer.name,
            seller = %seller.name,
            balance = buyer.balance,
            price = beverage.price,
            "Not enough money"
        );
        return Err(PersonError::InsufficientFunds {
            balance: buyer.balance,
            price: beverage.price,
        });
    }

    buyer.balance -= beverage.price;
    info!(
        buyer = %buyer.name,
        seller = %seller.name,
        kind = %beverage.kind,
        balance = buyer.balance,
        "Drink bought"
    );
    buyer.drinks.push(beverage);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BeverageSpec, Disposition, PersonId};

    fn person(id: u32, name: &str, balance: u32) -> Person {
        Person::new(PersonId(id), name, balance, Disposition::Agreeable)
    }

    #[test]
    fn test_transfer_debits_and_hands_over() {
        let mut nate = person(1, "Nate", 10);
        let simon = person(2, "Simon", 10);

        execute_transfer(&mut nate, &simon, BeverageSpec::default().brew()).unwrap();

        assert_eq!(nate.balance, 8);
        assert_eq!(nate.drinks, vec![BeverageSpec::default().brew()]);
        assert_eq!(simon, person(2, "Simon", 10));
    }

    #[test]
    fn test_transfer_with_insufficient_funds_changes_nothing() {
        let mut nate = person(1, "Nate", 1);
        let simon = person(2, "Simon", 10);

        let err = execute_transfer(&mut nate, &simon, BeverageSpec::default().brew()).unwrap_err();

        assert_eq!(err, PersonError::InsufficientFunds { balance: 1, price: 2 });
        assert_eq!(nate, person(1, "Nate", 1));
    }

    #[test]
    fn test_balance_equal_to_price_is_not_enough() {
        let mut nate = person(1, "Nate", 2);
        let simon = person(2, "Simon", 10);

        let result = execute_transfer(&mut nate, &simon, BeverageSpec::default().brew());
        assert!(matches!(result, Err(PersonError::InsufficientFunds { .. })));
        assert!(nate.drinks.is_empty());
    }

    #[test]
    fn test_cannot_buy_from_yourself() {
        let mut nate = person(1, "Nate", 10);
        let same = nate.clone();

        let result = execute_transfer(&mut nate, &same, BeverageSpec::default().brew());
        assert_eq!(result, Err(PersonError::SameParty));
        assert_eq!(nate.balance, 10);
    }

    #[test]
    fn test_repeated_purchases_stop_at_the_strict_limit() {
        let mut nate = person(1, "Nate", 10);
        let simon = person(2, "Simon", 10);
        let mut bought = 0;
        while execute_transfer(&mut nate, &simon, BeverageSpec::default().brew()).is_ok() {
            bought += 1;
        }
        // 10 -> 8 -> 6 -> 4 -> 2, then 2 is not > 2.
        assert_eq!(bought, 4);
        assert_eq!(nate.balance, 2);
        assert_eq!(nate.drinks.len(), 4);
    }
}
