use crate::core::{Category, Demo, Result, Transcript};

pub trait Strategy {
    fn name(&self) -> &'static str;
    fn apply(&self, a: i64, b: i64) -> i64;
}

pub struct Addition;
pub struct Subtraction;
pub struct Multiplication;

impl Strategy for Addition {
    fn name(&self) -> &'static str {
        "addition"
    }

    fn apply(&self, a: i64, b: i64) -> i64 {
        a + b
    }
}

impl Strategy for Subtraction {
    fn name(&self) -> &'static str {
        "subtraction"
    }

    fn apply(&self, a: i64, b: i64) -> i64 {
        a - b
    }
}

impl Strategy for Multiplication {
    fn name(&self) -> &'static str {
        "multiplication"
    }

    fn apply(&self, a: i64, b: i64) -> i64 {
        a * b
    }
}

/// Holds whichever strategy the caller picked at runtime.
pub struct Calculator {
    strategy: Box<dyn Strategy>,
}

impl Calculator {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    pub fn execute(&self, a: i64, b: i64) -> i64 {
        self.strategy.apply(a, b)
    }

    pub fn describe(&self, a: i64, b: i64) -> String {
        format!(
            "{} of {} and {} = {}",
            self.strategy.name(),
            a,
            b,
            self.execute(a, b)
        )
    }
}

pub struct StrategyDemo;

impl Demo for StrategyDemo {
    fn name(&self) -> &'static str {
        "strategy"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Arithmetic strategies swapped at runtime"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let mut calculator = Calculator::new(Box::new(Addition));
        transcript.note(calculator.describe(10, 5));

        calculator.set_strategy(Box::new(Subtraction));
        transcript.note(calculator.describe(10, 5));

        calculator.set_strategy(Box::new(Multiplication));
        transcript.note(calculator.describe(10, 5));

        Ok(())
    }
}
