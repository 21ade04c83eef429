use pattern_lab::utils::validation::Validate;
use pattern_lab::{AtmConfig, DispenseChain, DispensedNote, PatternError, Teller};
use std::io::Write;
use tempfile::NamedTempFile;

fn default_teller() -> Teller {
    Teller::from_config(&AtmConfig::default()).unwrap()
}

#[test]
fn test_every_accepted_amount_is_fully_dispensed() {
    let teller = default_teller();

    for amount in (0..=1000).step_by(10) {
        let receipt = teller.withdraw(amount).unwrap();
        assert_eq!(
            receipt.total(),
            amount,
            "receipt for {} does not add up",
            amount
        );
    }
}

#[test]
fn test_notes_come_out_largest_first() {
    let teller = default_teller();

    for amount in (10..=1000).step_by(10) {
        let receipt = teller.withdraw(amount).unwrap();
        let denominations: Vec<u32> = receipt.notes.iter().map(|n| n.denomination).collect();

        let mut sorted = denominations.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(denominations, sorted, "order broken for {}", amount);
    }
}

#[test]
fn test_zero_dispenses_nothing() {
    let receipt = default_teller().withdraw(0).unwrap();
    assert!(receipt.is_empty());
}

#[test]
fn test_exact_single_note() {
    let receipt = default_teller().withdraw(50).unwrap();
    assert_eq!(
        receipt.notes,
        vec![DispensedNote {
            count: 1,
            denomination: 50
        }]
    );
}

#[test]
fn test_seventy_splits_fifty_twenty() {
    let receipt = default_teller().withdraw(70).unwrap();
    assert_eq!(
        receipt.notes,
        vec![
            DispensedNote {
                count: 1,
                denomination: 50
            },
            DispensedNote {
                count: 1,
                denomination: 20
            }
        ]
    );
}

#[test]
fn test_thirty_splits_twenty_ten() {
    let receipt = default_teller().withdraw(30).unwrap();
    assert_eq!(
        receipt.notes,
        vec![
            DispensedNote {
                count: 1,
                denomination: 20
            },
            DispensedNote {
                count: 1,
                denomination: 10
            }
        ]
    );
}

#[test]
fn test_non_multiple_rejected_before_the_chain() {
    let err = default_teller().withdraw(25).unwrap_err();
    assert!(matches!(
        err,
        PatternError::InvalidAmountError {
            amount: 25,
            unit: 10
        }
    ));
}

#[test]
fn test_receipt_lines_use_configured_symbol() {
    let config = AtmConfig::from_toml_str(
        r#"
        [chain]
        denominations = [50, 20, 10]
        currency_symbol = "€"
        "#,
    )
    .unwrap();
    let teller = Teller::from_config(&config).unwrap();

    let receipt = teller.withdraw(120).unwrap();
    assert_eq!(
        teller.describe(&receipt),
        vec!["Dispensing 2 50€ note", "Dispensing 1 20€ note"]
    );
}

#[test]
fn test_config_round_trips_through_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[chain]\ndenominations = [100, 50, 20, 10]\ncurrency_symbol = \"$\""
    )
    .unwrap();

    let config = AtmConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());

    let teller = Teller::from_config(&config).unwrap();
    let receipt = teller.withdraw(180).unwrap();
    assert_eq!(receipt.total(), 180);
    assert_eq!(receipt.notes[0].denomination, 100);
}

#[test]
fn test_misconfigured_chain_reports_unhandled_remainder() {
    let chain = DispenseChain::new(&[50, 20]).unwrap();
    let teller = Teller::new(chain);

    // 40 resolves cleanly; 60 passes the multiple-of-20 precondition but
    // strands 10 past the tail handler.
    assert_eq!(teller.withdraw(40).unwrap().total(), 40);
    let err = teller.withdraw(60).unwrap_err();
    assert!(matches!(
        err,
        PatternError::UnhandledRemainderError {
            remainder: 10,
            tail: 20
        }
    ));
}

#[test]
fn test_shared_chain_serves_many_requests() {
    let teller = default_teller();

    // Handlers carry no cross-call state, so back-to-back requests cannot
    // influence each other.
    let first = teller.withdraw(380).unwrap();
    let second = teller.withdraw(380).unwrap();
    assert_eq!(first, second);
}
