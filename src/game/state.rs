use glam::IVec2;
use smallvec::SmallVec;
use strum_macros::IntoStaticStr;

use crate::audio::Sound;
use crate::entity::DamageIcon;
use crate::level::Level;

/// Overall game status. Every state except `Running` ends the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Status {
    #[strum(serialize = "running")]
    Running,
    /// Stairs taken on the last level.
    #[strum(serialize = "finished")]
    Finished,
    #[strum(serialize = "game over")]
    GameOver,
    /// The player quit.
    #[strum(serialize = "exited")]
    Exited,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }
}

/// Things the player can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Item {
    Key,
}

/// The player's bag. Duplicate items are kept, one entry each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    pub fn count(&self, item: Item) -> usize {
        self.items.iter().filter(|i| **i == item).count()
    }

    /// Removes one `item`, returning whether there was one to remove.
    pub fn take(&mut self, item: Item) -> bool {
        match self.items.iter().position(|i| *i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Player and game state.
///
/// Health can drop to zero or below between throttled ticks; the status only
/// changes to [`Status::GameOver`] at the next health check.
#[derive(Debug, Clone)]
pub struct GameState {
    pub position: IVec2,
    pub status: Status,
    pub coins: u32,
    pub health: i32,
    pub inventory: Inventory,
    pub armor: i32,
    pub sword: u32,
    pub level_index: usize,
    pub level: Level,
    pub damage_icons: Vec<DamageIcon>,
    pub(crate) sounds: SmallVec<[Sound; 4]>,
}

impl GameState {
    pub fn new(level: Level, position: IVec2, health: i32) -> Self {
        Self {
            position,
            status: Status::Running,
            coins: 0,
            health,
            inventory: Inventory::default(),
            armor: 0,
            sword: 0,
            level_index: 0,
            level,
            damage_icons: Vec::new(),
            sounds: SmallVec::new(),
        }
    }

    /// Counts every icon down by one frame and drops the expired ones.
    pub fn age_damage_icons(&mut self) {
        for icon in &mut self.damage_icons {
            icon.counter = icon.counter.saturating_sub(1);
        }
        self.damage_icons.retain(DamageIcon::is_visible);
    }

    /// Health of the level's first boss, truncated, if there is one.
    pub fn boss_health(&self) -> Option<i32> {
        self.level.bosses.first().map(|boss| boss.health as i32)
    }

    pub(crate) fn queue_sound(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelDefinition;

    fn state() -> GameState {
        let level = LevelDefinition::new(&["###", "#.#", "###"]).build().unwrap();
        GameState::new(level, IVec2::new(1, 1), 1)
    }

    #[test]
    fn test_inventory_take_removes_one() {
        let mut inventory = Inventory::default();
        inventory.add(Item::Key);
        inventory.add(Item::Key);
        assert_eq!(inventory.count(Item::Key), 2);
        assert!(inventory.take(Item::Key));
        assert_eq!(inventory.count(Item::Key), 1);
        assert!(inventory.take(Item::Key));
        assert!(!inventory.take(Item::Key));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_damage_icons_expire() {
        let mut state = state();
        state.damage_icons.push(DamageIcon::new(IVec2::ONE, 2, "Ouch!"));
        state.age_damage_icons();
        assert_eq!(state.damage_icons[0].counter, 1);
        state.age_damage_icons();
        assert!(state.damage_icons.is_empty());
    }

    #[test]
    fn test_status_names() {
        let name: &'static str = Status::GameOver.into();
        assert_eq!(name, "game over");
        assert!(!Status::Running.is_terminal());
        assert!(Status::Finished.is_terminal());
    }

    #[test]
    fn test_boss_health_truncates() {
        let level = LevelDefinition::new(&["###", "#.#", "###"])
            .boss(1, 1, crate::entity::Direction::Up, 3)
            .build()
            .unwrap();
        let mut state = GameState::new(level, IVec2::new(1, 1), 1);
        state.level.bosses[0].health = 2.75;
        assert_eq!(state.boss_health(), Some(2));
    }
}
