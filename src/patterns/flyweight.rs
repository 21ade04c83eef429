use crate::core::{Category, Demo, Result, Transcript};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Terrorist,
    CounterTerrorist,
}

impl PlayerKind {
    fn label(&self) -> &'static str {
        match self {
            PlayerKind::Terrorist => "T",
            PlayerKind::CounterTerrorist => "CT",
        }
    }
}

/// Intrinsic state only. The weapon is extrinsic and supplied per mission.
#[derive(Debug)]
pub struct Player {
    kind: PlayerKind,
    task: &'static str,
}

impl Player {
    pub fn mission(&self, weapon: &str) -> String {
        format!("{} with weapon {} | {}", self.kind.label(), weapon, self.task)
    }
}

/// At most one shared instance per player kind.
#[derive(Default)]
pub struct PlayerFactory {
    players: HashMap<PlayerKind, Rc<Player>>,
    created: usize,
}

impl PlayerFactory {
    pub fn player(&mut self, kind: PlayerKind) -> Rc<Player> {
        if let Some(existing) = self.players.get(&kind) {
            return Rc::clone(existing);
        }

        self.created += 1;
        tracing::debug!(kind = kind.label(), "player instance created");
        let task = match kind {
            PlayerKind::Terrorist => "Task is to plant the charge",
            PlayerKind::CounterTerrorist => "Task is to defuse the charge",
        };
        let player = Rc::new(Player { kind, task });
        self.players.insert(kind, Rc::clone(&player));
        player
    }

    pub fn distinct_players(&self) -> usize {
        self.created
    }
}

pub struct FlyweightDemo;

impl Demo for FlyweightDemo {
    fn name(&self) -> &'static str {
        "flyweight"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Shared player instances with per-mission weapons"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let mut factory = PlayerFactory::default();

        // Fixed roster instead of the usual random draw, so runs and tests
        // observe the same transcript.
        let roster = [
            (PlayerKind::Terrorist, "AK"),
            (PlayerKind::CounterTerrorist, "Desert Eagle"),
            (PlayerKind::Terrorist, "Maverick"),
            (PlayerKind::Terrorist, "Gut Knife"),
            (PlayerKind::CounterTerrorist, "Stone"),
            (PlayerKind::CounterTerrorist, "Flashbang"),
        ];

        for (kind, weapon) in roster {
            let player = factory.player(kind);
            transcript.note(player.mission(weapon));
        }

        transcript.note(format!(
            "Distinct player instances created: {}",
            factory.distinct_players()
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_shares_instances() {
        let mut factory = PlayerFactory::default();
        let a = factory.player(PlayerKind::Terrorist);
        let b = factory.player(PlayerKind::Terrorist);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(factory.distinct_players(), 1);
    }

    #[test]
    fn test_extrinsic_weapon_varies_per_mission() {
        let mut factory = PlayerFactory::default();
        let player = factory.player(PlayerKind::CounterTerrorist);
        assert_eq!(
            player.mission("AK"),
            "CT with weapon AK | Task is to defuse the charge"
        );
        assert_eq!(
            player.mission("Stone"),
            "CT with weapon Stone | Task is to defuse the charge"
        );
    }

    #[test]
    fn test_demo_reports_two_distinct_players() {
        let mut transcript = Transcript::new();
        FlyweightDemo.run(&mut transcript).unwrap();
        assert!(transcript.contains("Distinct player instances created: 2"));
    }
}
