use crate::core::{Category, Demo, Result, Transcript};

/// Leaf and composite share one node type; the tree is strictly owned, so a
/// tagged enum replaces the subclass hierarchy.
#[derive(Debug, Clone)]
pub enum Staff {
    Developer {
        name: String,
        id: u64,
        position: String,
    },
    Manager {
        name: String,
        reports: Vec<Staff>,
    },
}

impl Staff {
    pub fn developer(name: &str, id: u64, position: &str) -> Self {
        Staff::Developer {
            name: name.to_string(),
            id,
            position: position.to_string(),
        }
    }

    pub fn manager(name: &str, reports: Vec<Staff>) -> Self {
        Staff::Manager {
            name: name.to_string(),
            reports,
        }
    }

    /// Total number of people in this subtree, the node itself included.
    pub fn headcount(&self) -> usize {
        match self {
            Staff::Developer { .. } => 1,
            Staff::Manager { reports, .. } => {
                1 + reports.iter().map(Staff::headcount).sum::<usize>()
            }
        }
    }

    pub fn describe(&self, depth: usize, transcript: &mut Transcript) {
        let indent = "  ".repeat(depth);
        match self {
            Staff::Developer { name, id, position } => {
                transcript.note(format!("{}{} - {} - {}", indent, id, name, position));
            }
            Staff::Manager { name, reports } => {
                transcript.note(format!("{}Manager: {}", indent, name));
                for report in reports {
                    report.describe(depth + 1, transcript);
                }
            }
        }
    }
}

pub struct CompositeDemo;

impl Demo for CompositeDemo {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Org chart walked with one recursive traversal"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let eng_manager = Staff::manager(
            "Mike",
            vec![
                Staff::developer("Josh", 100, "Pro developer"),
                Staff::developer("Jane", 101, "Jnr developer"),
            ],
        );

        let general_manager = Staff::manager(
            "Mark",
            vec![Staff::developer("Tod", 103, "Intermediate"), eng_manager],
        );

        general_manager.describe(0, transcript);
        transcript.note(format!("Headcount: {}", general_manager.headcount()));

        Ok(())
    }
}
