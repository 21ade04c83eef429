use crate::domain::model::{Category, Transcript};
use crate::utils::error::Result;

/// A self-contained pattern demonstration. Runs are deterministic: the same
/// demo always produces the same transcript.
pub trait Demo {
    fn name(&self) -> &'static str;
    fn category(&self) -> Category;
    fn summary(&self) -> &'static str;
    fn run(&self, transcript: &mut Transcript) -> Result<()>;
}

impl std::fmt::Debug for dyn Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Demo").field("name", &self.name()).finish()
    }
}

pub trait AtmConfigProvider {
    fn denominations(&self) -> &[u32];
    fn currency_symbol(&self) -> &str;
}
