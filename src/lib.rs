pub mod config;
pub mod core;
pub mod domain;
pub mod patterns;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::AtmConfig;
pub use core::chain::{DenominationHandler, DispenseChain};
pub use core::teller::Teller;
pub use domain::model::{Category, Currency, DispensedNote, Receipt, Transcript};
pub use domain::ports::{AtmConfigProvider, Demo};
pub use utils::error::{PatternError, Result};
