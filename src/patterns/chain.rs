use crate::core::chain::DispenseChain;
use crate::core::teller::Teller;
use crate::core::{Category, Demo, Result, Transcript};

/// Runs the currency dispenser from `core` through the demo contract: the
/// flagship component and the pattern demo share one implementation.
pub struct ChainDemo;

impl Demo for ChainDemo {
    fn name(&self) -> &'static str {
        "chain-of-responsibility"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Denomination handlers cooperatively dispensing an amount"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let teller = Teller::new(DispenseChain::new(&[50, 20, 10])?);

        for amount in [280, 70, 30] {
            transcript.note(format!("Requesting {}", amount));
            let receipt = teller.withdraw(amount)?;
            for line in teller.describe(&receipt) {
                transcript.note(line);
            }
        }

        // The precondition check fires before the chain ever runs.
        if let Err(e) = teller.withdraw(25) {
            transcript.note(format!("Request refused: {}", e));
        }

        Ok(())
    }
}
