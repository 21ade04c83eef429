use crate::core::{Category, Demo, Result, Transcript};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

static INIT_COUNT: AtomicU32 = AtomicU32::new(0);
static CAPTAIN: OnceLock<Captain> = OnceLock::new();

/// There is exactly one captain per process. Construction happens lazily on
/// first access; every later access observes the same instance.
#[derive(Debug)]
pub struct Captain {
    name: String,
}

impl Captain {
    fn new() -> Self {
        INIT_COUNT.fetch_add(1, Ordering::SeqCst);
        Self {
            name: "Captain of the ship".to_string(),
        }
    }

    pub fn instance() -> &'static Captain {
        CAPTAIN.get_or_init(Captain::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn times_constructed() -> u32 {
        INIT_COUNT.load(Ordering::SeqCst)
    }
}

pub struct SingletonDemo;

impl Demo for SingletonDemo {
    fn name(&self) -> &'static str {
        "singleton"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Process-wide lazily initialized captain instance"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let first = Captain::instance();
        transcript.note(format!("First request served by: {}", first.name()));

        let second = Captain::instance();
        transcript.note(format!("Second request served by: {}", second.name()));

        transcript.note(format!(
            "Both handles point at the same captain: {}",
            std::ptr::eq(first, second)
        ));
        transcript.note(format!(
            "Captain constructed {} time(s)",
            Captain::times_constructed()
        ));

        Ok(())
    }
}
