pub mod chain;
pub mod teller;

pub use crate::domain::model::{Category, Currency, DispensedNote, Receipt, Transcript};
pub use crate::domain::ports::{AtmConfigProvider, Demo};
pub use crate::utils::error::Result;
