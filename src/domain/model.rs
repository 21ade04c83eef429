use serde::{Deserialize, Serialize};

/// An amount of currency units still to be dispensed. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    amount: u32,
}

impl Currency {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

/// A batch of notes of one denomination handed out by a single handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispensedNote {
    pub count: u32,
    pub denomination: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub notes: Vec<DispensedNote>,
}

impl Receipt {
    pub fn push(&mut self, note: DispensedNote) {
        self.notes.push(note);
    }

    /// Weighted sum of every note on the receipt.
    pub fn total(&self) -> u32 {
        self.notes
            .iter()
            .map(|n| n.count * n.denomination)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Creational => write!(f, "creational"),
            Category::Structural => write!(f, "structural"),
            Category::Behavioral => write!(f, "behavioral"),
        }
    }
}

/// Ordered observation lines collected while a demo runs. The CLI prints
/// them; tests assert on them.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!("observation: {}", line);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_total() {
        let mut receipt = Receipt::default();
        receipt.push(DispensedNote {
            count: 2,
            denomination: 50,
        });
        receipt.push(DispensedNote {
            count: 1,
            denomination: 20,
        });
        assert_eq!(receipt.total(), 120);
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = Receipt::default();
        assert!(receipt.is_empty());
        assert_eq!(receipt.total(), 0);
    }

    #[test]
    fn test_transcript_collects_in_order() {
        let mut transcript = Transcript::new();
        transcript.note("first");
        transcript.note(format!("second {}", 2));
        assert_eq!(transcript.lines(), &["first", "second 2"]);
        assert!(transcript.contains("second"));
    }
}
