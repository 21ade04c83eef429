use crate::core::{Category, Demo, Result, Transcript};

/// The two alert modes a phone can be in. Behavior follows the current
/// mode, not the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertMode {
    Vibration,
    Silent,
}

impl AlertMode {
    fn alert(&self) -> &'static str {
        match self {
            AlertMode::Vibration => "vibration...",
            AlertMode::Silent => "silent...",
        }
    }
}

pub struct Phone {
    mode: AlertMode,
}

impl Phone {
    /// Phones start in vibration mode.
    pub fn new() -> Self {
        Self {
            mode: AlertMode::Vibration,
        }
    }

    pub fn mode(&self) -> AlertMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AlertMode) {
        tracing::debug!(?mode, "alert mode switched");
        self.mode = mode;
    }

    pub fn alert(&self) -> &'static str {
        self.mode.alert()
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StateDemo;

impl Demo for StateDemo {
    fn name(&self) -> &'static str {
        "state"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Mobile alert behavior switching with the phone's mode"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let mut phone = Phone::new();

        transcript.note(phone.alert());
        transcript.note(phone.alert());

        phone.set_mode(AlertMode::Silent);
        transcript.note(phone.alert());
        transcript.note(phone.alert());
        transcript.note(phone.alert());

        Ok(())
    }
}
