use crate::core::{Currency, DispensedNote, Receipt, Result};
use crate::utils::error::PatternError;
use crate::utils::validation::{validate_multiple_of, validate_strictly_descending};

/// One denomination in the chain. Stateless across calls: it only knows its
/// own note value; the successor link lives in the chain's handler order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenominationHandler {
    denomination: u32,
}

impl DenominationHandler {
    fn new(denomination: u32) -> Self {
        Self { denomination }
    }

    pub fn denomination(&self) -> u32 {
        self.denomination
    }

    /// Resolve as much of the amount as this denomination covers.
    ///
    /// Returns the note batch dispensed here (if any) and the currency that
    /// must be forwarded to the next handler (if any). An amount smaller
    /// than the denomination passes through unchanged.
    fn handle(&self, currency: Currency) -> (Option<DispensedNote>, Option<Currency>) {
        let amount = currency.amount();

        if amount < self.denomination {
            return (None, Some(currency));
        }

        let note = DispensedNote {
            count: amount / self.denomination,
            denomination: self.denomination,
        };
        let remainder = amount % self.denomination;
        let forward = if remainder > 0 {
            Some(Currency::new(remainder))
        } else {
            None
        };

        (Some(note), forward)
    }
}

/// Ordered, acyclic sequence of denomination handlers, largest first.
/// Assembled once and never mutated during dispatch, so a shared chain can
/// serve any number of callers.
#[derive(Debug, Clone)]
pub struct DispenseChain {
    handlers: Vec<DenominationHandler>,
    smallest: u32,
}

impl DispenseChain {
    /// Wires handlers head-to-tail. Denominations must be non-empty,
    /// positive and strictly descending.
    pub fn new(denominations: &[u32]) -> Result<Self> {
        validate_strictly_descending("denominations", denominations)?;

        let handlers: Vec<DenominationHandler> = denominations
            .iter()
            .map(|&d| DenominationHandler::new(d))
            .collect();
        let smallest = denominations[denominations.len() - 1];

        Ok(Self { handlers, smallest })
    }

    pub fn denominations(&self) -> Vec<u32> {
        self.handlers.iter().map(|h| h.denomination()).collect()
    }

    pub fn smallest_unit(&self) -> u32 {
        self.smallest
    }

    /// Precondition check for `dispense`: only non-negative multiples of the
    /// smallest denomination are accepted.
    pub fn validate_amount(&self, amount: u32) -> Result<()> {
        validate_multiple_of("amount", amount, self.smallest)
    }

    /// Entry point of the chain. Delegates to the head handler and walks the
    /// remainder down the chain until it reaches zero.
    ///
    /// A remainder left after the tail handler means the chain cannot
    /// express the amount and is reported as a distinct error rather than
    /// forwarded into a missing successor.
    pub fn dispense(&self, currency: Currency) -> Result<Receipt> {
        let mut receipt = Receipt::default();
        let mut pending = if currency.amount() > 0 {
            Some(currency)
        } else {
            None
        };

        for handler in &self.handlers {
            let current = match pending.take() {
                Some(currency) => currency,
                None => break,
            };

            let (note, forward) = handler.handle(current);
            if let Some(note) = note {
                tracing::debug!(
                    count = note.count,
                    denomination = note.denomination,
                    "handler dispensed notes"
                );
                receipt.push(note);
            }
            pending = forward;
        }

        if let Some(rest) = pending {
            return Err(PatternError::UnhandledRemainderError {
                remainder: rest.amount(),
                tail: self.smallest,
            });
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> DispenseChain {
        DispenseChain::new(&[50, 20, 10]).unwrap()
    }

    #[test]
    fn test_handler_splits_amount() {
        let handler = DenominationHandler::new(50);
        let (note, forward) = handler.handle(Currency::new(170));
        assert_eq!(
            note,
            Some(DispensedNote {
                count: 3,
                denomination: 50
            })
        );
        assert_eq!(forward, Some(Currency::new(20)));
    }

    #[test]
    fn test_handler_forwards_small_amount_unchanged() {
        let handler = DenominationHandler::new(50);
        let (note, forward) = handler.handle(Currency::new(30));
        assert_eq!(note, None);
        assert_eq!(forward, Some(Currency::new(30)));
    }

    #[test]
    fn test_handler_stops_on_exact_amount() {
        let handler = DenominationHandler::new(20);
        let (note, forward) = handler.handle(Currency::new(40));
        assert_eq!(
            note,
            Some(DispensedNote {
                count: 2,
                denomination: 20
            })
        );
        assert_eq!(forward, None);
    }

    #[test]
    fn test_dispense_zero_is_empty() {
        let receipt = chain().dispense(Currency::new(0)).unwrap();
        assert!(receipt.is_empty());
    }

    #[test]
    fn test_dispense_single_note() {
        let receipt = chain().dispense(Currency::new(50)).unwrap();
        assert_eq!(
            receipt.notes,
            vec![DispensedNote {
                count: 1,
                denomination: 50
            }]
        );
    }

    #[test]
    fn test_dispense_walks_descending() {
        let receipt = chain().dispense(Currency::new(180)).unwrap();
        assert_eq!(
            receipt.notes,
            vec![
                DispensedNote {
                    count: 3,
                    denomination: 50
                },
                DispensedNote {
                    count: 1,
                    denomination: 20
                },
                DispensedNote {
                    count: 1,
                    denomination: 10
                },
            ]
        );
        assert_eq!(receipt.total(), 180);
    }

    #[test]
    fn test_unhandled_remainder_is_an_error() {
        // No 10-handler: 30 leaves a remainder of 10 past the tail.
        let short_chain = DispenseChain::new(&[50, 20]).unwrap();
        let err = short_chain.dispense(Currency::new(30)).unwrap_err();
        match err {
            PatternError::UnhandledRemainderError { remainder, tail } => {
                assert_eq!(remainder, 10);
                assert_eq!(tail, 20);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_chain_rejects_bad_denominations() {
        assert!(DispenseChain::new(&[]).is_err());
        assert!(DispenseChain::new(&[10, 20, 50]).is_err());
        assert!(DispenseChain::new(&[50, 20, 20]).is_err());
        assert!(DispenseChain::new(&[50, 0]).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(chain().validate_amount(120).is_ok());
        assert!(chain().validate_amount(0).is_ok());
        assert!(chain().validate_amount(25).is_err());
    }
}
