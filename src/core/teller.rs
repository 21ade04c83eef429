use crate::core::chain::DispenseChain;
use crate::core::{Currency, Receipt, Result};
use crate::domain::ports::AtmConfigProvider;

/// Front desk of the dispenser: validates a withdrawal request, hands it to
/// the head of the chain and renders the receipt as console lines.
pub struct Teller {
    chain: DispenseChain,
    currency_symbol: String,
}

impl Teller {
    pub fn new(chain: DispenseChain) -> Self {
        Self {
            chain,
            currency_symbol: "$".to_string(),
        }
    }

    pub fn from_config(config: &dyn AtmConfigProvider) -> Result<Self> {
        let chain = DispenseChain::new(config.denominations())?;
        Ok(Self {
            chain,
            currency_symbol: config.currency_symbol().to_string(),
        })
    }

    pub fn chain(&self) -> &DispenseChain {
        &self.chain
    }

    /// Resolves an amount into notes. Rejects amounts that are not a
    /// multiple of the smallest denomination before the chain runs.
    pub fn withdraw(&self, amount: u32) -> Result<Receipt> {
        self.chain.validate_amount(amount)?;

        tracing::debug!(amount, "dispatching amount to the chain head");
        let receipt = self.chain.dispense(Currency::new(amount))?;

        tracing::info!(
            amount,
            batches = receipt.notes.len(),
            "withdrawal dispensed"
        );
        Ok(receipt)
    }

    /// One line per denomination actually dispensed, e.g.
    /// `Dispensing 2 50$ note`.
    pub fn describe(&self, receipt: &Receipt) -> Vec<String> {
        receipt
            .notes
            .iter()
            .map(|note| {
                format!(
                    "Dispensing {} {}{} note",
                    note.count, note.denomination, self.currency_symbol
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PatternError;

    fn teller() -> Teller {
        Teller::new(DispenseChain::new(&[50, 20, 10]).unwrap())
    }

    #[test]
    fn test_withdraw_rejects_non_multiples_before_dispatch() {
        let err = teller().withdraw(25).unwrap_err();
        match err {
            PatternError::InvalidAmountError { amount, unit } => {
                assert_eq!(amount, 25);
                assert_eq!(unit, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_withdraw_seventy() {
        let teller = teller();
        let receipt = teller.withdraw(70).unwrap();
        assert_eq!(
            teller.describe(&receipt),
            vec!["Dispensing 1 50$ note", "Dispensing 1 20$ note"]
        );
    }

    #[test]
    fn test_withdraw_zero_prints_nothing() {
        let teller = teller();
        let receipt = teller.withdraw(0).unwrap();
        assert!(teller.describe(&receipt).is_empty());
    }
}
