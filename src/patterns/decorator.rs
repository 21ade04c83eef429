use crate::core::{Category, Demo, Result, Transcript};

pub trait Component {
    fn render(&self) -> String;
}

pub struct PlainText {
    text: String,
}

impl PlainText {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Component for PlainText {
    fn render(&self) -> String {
        self.text.clone()
    }
}

/// Decorators wrap any component and add behavior around the delegate.
pub struct LowercaseDecorator {
    inner: Box<dyn Component>,
}

impl LowercaseDecorator {
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for LowercaseDecorator {
    fn render(&self) -> String {
        self.inner.render().to_lowercase()
    }
}

pub struct BracketDecorator {
    inner: Box<dyn Component>,
}

impl BracketDecorator {
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for BracketDecorator {
    fn render(&self) -> String {
        format!("[{}]", self.inner.render())
    }
}

pub struct DecoratorDemo;

impl Demo for DecoratorDemo {
    fn name(&self) -> &'static str {
        "decorator"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Text component wrapped by stacking decorators"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let plain = PlainText::new("Jason Freddie aaaBBBcccDDD");
        transcript.note(format!("plain: {}", plain.render()));

        let lowered = LowercaseDecorator::new(Box::new(PlainText::new(
            "Jason Freddie aaaBBBcccDDD",
        )));
        transcript.note(format!("lowered: {}", lowered.render()));

        let stacked = BracketDecorator::new(Box::new(LowercaseDecorator::new(Box::new(
            PlainText::new("Jason Freddie aaaBBBcccDDD"),
        ))));
        transcript.note(format!("stacked: {}", stacked.render()));

        Ok(())
    }
}
