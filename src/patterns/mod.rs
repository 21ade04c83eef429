pub mod abstract_factory;
pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod chain;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod factory;
pub mod flyweight;
pub mod interpreter;
pub mod prototype;
pub mod proxy;
pub mod singleton;
pub mod state;
pub mod strategy;
pub mod template;
pub mod visitor;

use crate::core::{Demo, Result};
use crate::utils::error::PatternError;

/// Every registered demo, creational first, then structural, then
/// behavioral.
pub fn registry() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(factory::FactoryDemo),
        Box::new(abstract_factory::AbstractFactoryDemo),
        Box::new(singleton::SingletonDemo),
        Box::new(builder::BuilderDemo),
        Box::new(prototype::PrototypeDemo),
        Box::new(adapter::AdapterDemo),
        Box::new(bridge::BridgeDemo),
        Box::new(composite::CompositeDemo),
        Box::new(decorator::DecoratorDemo),
        Box::new(facade::FacadeDemo),
        Box::new(flyweight::FlyweightDemo),
        Box::new(proxy::ProxyDemo),
        Box::new(chain::ChainDemo),
        Box::new(command::CommandDemo),
        Box::new(interpreter::InterpreterDemo),
        Box::new(state::StateDemo),
        Box::new(strategy::StrategyDemo),
        Box::new(template::TemplateDemo),
        Box::new(visitor::VisitorDemo),
    ]
}

/// Looks a demo up by its registered name.
pub fn find(name: &str) -> Result<Box<dyn Demo>> {
    let mut demos = registry();
    match demos.iter().position(|d| d.name() == name) {
        Some(index) => Ok(demos.swap_remove(index)),
        None => Err(PatternError::UnknownDemoError {
            name: name.to_string(),
            available: demos
                .iter()
                .map(|d| d.name())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transcript;
    use std::collections::HashSet;

    #[test]
    fn test_registry_names_are_unique() {
        let names: Vec<&str> = registry().iter().map(|d| d.name()).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        assert_eq!(names.len(), 19);
    }

    #[test]
    fn test_every_demo_produces_observations() {
        for demo in registry() {
            let mut transcript = Transcript::new();
            demo.run(&mut transcript)
                .unwrap_or_else(|e| panic!("{} failed: {e}", demo.name()));
            assert!(
                !transcript.lines().is_empty(),
                "{} produced no output",
                demo.name()
            );
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("strategy").unwrap().name(), "strategy");

        let err = find("monostate").unwrap_err();
        match err {
            PatternError::UnknownDemoError { name, available } => {
                assert_eq!(name, "monostate");
                assert!(available.contains("strategy"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
