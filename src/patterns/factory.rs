use crate::core::{Category, Demo, Result, Transcript};
use crate::utils::error::PatternError;

pub trait Shape {
    fn draw(&self) -> String;
}

struct Circle;
struct Rectangle;
struct Square;

impl Shape for Circle {
    fn draw(&self) -> String {
        "Circle::draw()".to_string()
    }
}

impl Shape for Rectangle {
    fn draw(&self) -> String {
        "Rectangle::draw()".to_string()
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        "Square::draw()".to_string()
    }
}

pub struct ShapeFactory;

impl ShapeFactory {
    /// String-keyed creation, case-insensitive. Unknown kinds are an error
    /// instead of a null object.
    pub fn create(kind: &str) -> Result<Box<dyn Shape>> {
        match kind.to_ascii_lowercase().as_str() {
            "circle" => Ok(Box::new(Circle)),
            "rectangle" => Ok(Box::new(Rectangle)),
            "square" => Ok(Box::new(Square)),
            _ => Err(PatternError::UnsupportedTypeError {
                kind: kind.to_string(),
            }),
        }
    }
}

pub struct FactoryDemo;

impl Demo for FactoryDemo {
    fn name(&self) -> &'static str {
        "factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Shape factory creating drawables from type names"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        for kind in ["CIRCLE", "RECTANGLE", "SQUARE"] {
            let shape = ShapeFactory::create(kind)?;
            transcript.note(shape.draw());
        }

        // The factory refuses kinds it does not know about.
        if let Err(e) = ShapeFactory::create("triangle") {
            transcript.note(format!("Factory rejected request: {}", e));
        }

        Ok(())
    }
}
