use crate::core::{Category, Demo, Result, Transcript};
use crate::utils::error::PatternError;
use std::collections::HashMap;

/// Prototypes are plain cloneable values; `Clone` replaces the original's
/// Cloneable/`clone()` override dance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapePrototype {
    pub id: String,
    pub kind: String,
}

impl ShapePrototype {
    pub fn draw(&self) -> String {
        format!("{}::draw()", self.kind)
    }
}

#[derive(Debug, Default)]
pub struct ShapeCache {
    shapes: HashMap<String, ShapePrototype>,
}

impl ShapeCache {
    /// Registers the well-known prototypes up front.
    pub fn load() -> Self {
        let mut shapes = HashMap::new();
        for (id, kind) in [("1", "Circle"), ("2", "Square"), ("3", "Rectangle")] {
            shapes.insert(
                id.to_string(),
                ShapePrototype {
                    id: id.to_string(),
                    kind: kind.to_string(),
                },
            );
        }
        Self { shapes }
    }

    /// Hands out a clone of the registered prototype. Unknown ids are an
    /// error instead of a null dereference.
    pub fn get(&self, id: &str) -> Result<ShapePrototype> {
        self.shapes
            .get(id)
            .cloned()
            .ok_or_else(|| PatternError::UnsupportedTypeError {
                kind: format!("shape id {}", id),
            })
    }
}

pub struct PrototypeDemo;

impl Demo for PrototypeDemo {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Shape cache handing out clones of registered prototypes"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let cache = ShapeCache::load();

        for id in ["1", "2", "3"] {
            let clone = cache.get(id)?;
            transcript.note(clone.draw());
        }

        if let Err(e) = cache.get("4") {
            transcript.note(format!("Cache rejected request: {}", e));
        }

        Ok(())
    }
}
