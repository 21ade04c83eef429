use crate::core::{Category, Demo, Result, Transcript};

/// Implementor side of the bridge: how a border gets filled.
pub trait Color {
    fn fill(&self, border: u32) -> String;
}

pub struct RedColor;
pub struct GreenColor;

impl Color for RedColor {
    fn fill(&self, border: u32) -> String {
        format!("red color with border {}", border)
    }
}

impl Color for GreenColor {
    fn fill(&self, border: u32) -> String {
        format!("green color with border {}", border)
    }
}

/// Abstraction side: shapes draw through whichever color is plugged in.
pub struct Shape {
    kind: &'static str,
    color: Box<dyn Color>,
}

impl Shape {
    pub fn triangle(color: Box<dyn Color>) -> Self {
        Self {
            kind: "Triangle",
            color,
        }
    }

    pub fn rectangle(color: Box<dyn Color>) -> Self {
        Self {
            kind: "Rectangle",
            color,
        }
    }

    pub fn draw(&self, border: u32) -> String {
        format!("{} filled with {}", self.kind, self.color.fill(border))
    }

    /// Grows the border and redraws through the same implementor.
    pub fn grow(&self, border: u32, increment: u32) -> String {
        self.draw(border + increment)
    }
}

pub struct BridgeDemo;

impl Demo for BridgeDemo {
    fn name(&self) -> &'static str {
        "bridge"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Shapes decoupled from the colors they are drawn with"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let triangle = Shape::triangle(Box::new(GreenColor));
        transcript.note(triangle.draw(20));
        transcript.note(triangle.grow(20, 3));

        let rectangle = Shape::rectangle(Box::new(RedColor));
        transcript.note(rectangle.draw(50));
        transcript.note(rectangle.grow(50, 3));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_draws_through_color() {
        let shape = Shape::triangle(Box::new(RedColor));
        assert_eq!(shape.draw(10), "Triangle filled with red color with border 10");
    }

    #[test]
    fn test_grow_redraws_with_larger_border() {
        let shape = Shape::rectangle(Box::new(GreenColor));
        assert_eq!(
            shape.grow(50, 3),
            "Rectangle filled with green color with border 53"
        );
    }

    #[test]
    fn test_demo_renders_both_pairs() {
        let mut transcript = Transcript::new();
        BridgeDemo.run(&mut transcript).unwrap();
        assert_eq!(transcript.lines().len(), 4);
        assert!(transcript.contains("Triangle filled with green"));
        assert!(transcript.contains("Rectangle filled with red"));
    }
}
