use crate::core::{Category, Demo, Result, Transcript};
use crate::utils::error::PatternError;

/// Product shared by every family member: something that can render itself.
pub trait Part {
    fn render(&self) -> String;
}

struct CirclePart;
struct RectanglePart;
struct SquarePart;
struct RedPart;
struct GreenPart;
struct BluePart;

impl Part for CirclePart {
    fn render(&self) -> String {
        "Circle::draw()".to_string()
    }
}

impl Part for RectanglePart {
    fn render(&self) -> String {
        "Rectangle::draw()".to_string()
    }
}

impl Part for SquarePart {
    fn render(&self) -> String {
        "Square::draw()".to_string()
    }
}

impl Part for RedPart {
    fn render(&self) -> String {
        "Red::fill()".to_string()
    }
}

impl Part for GreenPart {
    fn render(&self) -> String {
        "Green::fill()".to_string()
    }
}

impl Part for BluePart {
    fn render(&self) -> String {
        "Blue::fill()".to_string()
    }
}

/// One factory per product family.
pub trait PartFactory {
    fn family(&self) -> &'static str;
    fn create(&self, kind: &str) -> Result<Box<dyn Part>>;
}

pub struct ShapePartFactory;
pub struct ColorPartFactory;

impl PartFactory for ShapePartFactory {
    fn family(&self) -> &'static str {
        "shape"
    }

    fn create(&self, kind: &str) -> Result<Box<dyn Part>> {
        match kind.to_ascii_lowercase().as_str() {
            "circle" => Ok(Box::new(CirclePart)),
            "rectangle" => Ok(Box::new(RectanglePart)),
            "square" => Ok(Box::new(SquarePart)),
            _ => Err(PatternError::UnsupportedTypeError {
                kind: kind.to_string(),
            }),
        }
    }
}

impl PartFactory for ColorPartFactory {
    fn family(&self) -> &'static str {
        "color"
    }

    fn create(&self, kind: &str) -> Result<Box<dyn Part>> {
        match kind.to_ascii_lowercase().as_str() {
            "red" => Ok(Box::new(RedPart)),
            "green" => Ok(Box::new(GreenPart)),
            "blue" => Ok(Box::new(BluePart)),
            _ => Err(PatternError::UnsupportedTypeError {
                kind: kind.to_string(),
            }),
        }
    }
}

/// Picks the concrete factory by family name.
pub fn factory_for(family: &str) -> Result<Box<dyn PartFactory>> {
    match family.to_ascii_lowercase().as_str() {
        "shape" => Ok(Box::new(ShapePartFactory)),
        "color" => Ok(Box::new(ColorPartFactory)),
        _ => Err(PatternError::UnsupportedTypeError {
            kind: family.to_string(),
        }),
    }
}

pub struct AbstractFactoryDemo;

impl Demo for AbstractFactoryDemo {
    fn name(&self) -> &'static str {
        "abstract-factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Factory-of-factories over shape and color families"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let shapes = factory_for("shape")?;
        for kind in ["circle", "square", "rectangle"] {
            transcript.note(shapes.create(kind)?.render());
        }

        let colors = factory_for("color")?;
        for kind in ["red", "blue", "green"] {
            transcript.note(colors.create(kind)?.render());
        }

        Ok(())
    }
}
