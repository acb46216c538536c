//! Tile alphabet and the per-tile behavior table.

use bitflags::bitflags;
use strum_macros::{EnumIter, IntoStaticStr};

bitflags! {
    /// The movers that may enter (or bounce off) a tile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Traversal: u8 {
        const PLAYER = 1 << 0;
        const SKELETON = 1 << 1;
        const SNAKE = 1 << 2;
        const BOSS = 1 << 3;
        const PROJECTILE = 1 << 4;

        const ENEMIES = Self::SKELETON.bits() | Self::SNAKE.bits() | Self::BOSS.bits();
        const ALL = Self::PLAYER.bits() | Self::ENEMIES.bits() | Self::PROJECTILE.bits();
    }
}

/// A single grid cell's terrain or feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    Wall,
    Floor,
    StairsDown,
    Coin,
    Trap,
    Key,
    ClosedDoor,
    OpenDoor,
    Potion,
    Armor,
    Chest,
    Sword,
    Piggy,
}

impl Tile {
    /// Parses a level symbol. Returns `None` for characters outside the alphabet.
    pub fn from_char(c: char) -> Option<Tile> {
        Some(match c {
            '#' => Tile::Wall,
            '.' => Tile::Floor,
            'x' => Tile::StairsDown,
            '€' => Tile::Coin,
            't' => Tile::Trap,
            'k' => Tile::Key,
            'D' => Tile::ClosedDoor,
            'd' => Tile::OpenDoor,
            'p' => Tile::Potion,
            'a' => Tile::Armor,
            'c' => Tile::Chest,
            's' => Tile::Sword,
            'y' => Tile::Piggy,
            _ => return None,
        })
    }

    /// The symbol used for this tile in level definitions.
    pub fn as_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::StairsDown => 'x',
            Tile::Coin => '€',
            Tile::Trap => 't',
            Tile::Key => 'k',
            Tile::ClosedDoor => 'D',
            Tile::OpenDoor => 'd',
            Tile::Potion => 'p',
            Tile::Armor => 'a',
            Tile::Chest => 'c',
            Tile::Sword => 's',
            Tile::Piggy => 'y',
        }
    }

    /// Movers allowed to step onto this tile.
    pub fn passable_by(self) -> Traversal {
        match self {
            Tile::Floor | Tile::Coin | Tile::Trap => Traversal::ALL,
            Tile::Key => Traversal::ENEMIES | Traversal::PROJECTILE,
            Tile::OpenDoor => Traversal::PLAYER | Traversal::PROJECTILE,
            Tile::ClosedDoor | Tile::Piggy => Traversal::PROJECTILE,
            Tile::Armor => Traversal::PLAYER | Traversal::PROJECTILE,
            Tile::Potion => Traversal::SKELETON | Traversal::BOSS,
            Tile::Wall | Tile::StairsDown | Tile::Chest | Tile::Sword => Traversal::empty(),
        }
    }

    /// Movers whose direction is reversed when they run into this tile.
    pub fn reflects(self) -> Traversal {
        match self {
            Tile::Wall => Traversal::ALL,
            Tile::StairsDown => Traversal::PROJECTILE,
            _ => Traversal::empty(),
        }
    }

    pub fn is_passable_for(self, mover: Traversal) -> bool {
        self.passable_by().contains(mover)
    }

    pub fn reflects_for(self, mover: Traversal) -> bool {
        self.reflects().contains(mover)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_char_round_trip() {
        for tile in Tile::iter() {
            assert_eq!(Tile::from_char(tile.as_char()), Some(tile));
        }
        assert_eq!(Tile::from_char('Z'), None);
        assert_eq!(Tile::from_char('u'), None);
    }

    #[test]
    fn test_player_walkable_set() {
        let walkable: Vec<Tile> = Tile::iter().filter(|t| t.is_passable_for(Traversal::PLAYER)).collect();
        assert_eq!(
            walkable,
            vec![Tile::Floor, Tile::Coin, Tile::Trap, Tile::OpenDoor, Tile::Armor]
        );
    }

    #[test]
    fn test_snake_avoids_potions() {
        assert!(Tile::Potion.is_passable_for(Traversal::SKELETON));
        assert!(Tile::Potion.is_passable_for(Traversal::BOSS));
        assert!(!Tile::Potion.is_passable_for(Traversal::SNAKE));
    }

    #[test]
    fn test_projectile_passable_set() {
        let passable: Vec<Tile> = Tile::iter().filter(|t| t.is_passable_for(Traversal::PROJECTILE)).collect();
        assert_eq!(
            passable,
            vec![
                Tile::Floor,
                Tile::Coin,
                Tile::Trap,
                Tile::Key,
                Tile::ClosedDoor,
                Tile::OpenDoor,
                Tile::Armor,
                Tile::Piggy,
            ]
        );
    }

    #[test]
    fn test_stairs_reflect_only_projectiles() {
        assert!(Tile::StairsDown.reflects_for(Traversal::PROJECTILE));
        assert!(!Tile::StairsDown.reflects_for(Traversal::SKELETON));
        assert!(Tile::Wall.reflects_for(Traversal::SNAKE));
        assert!(!Tile::ClosedDoor.reflects_for(Traversal::BOSS));
    }

    #[test]
    fn test_static_names() {
        let name: &'static str = Tile::StairsDown.into();
        assert_eq!(name, "stairs_down");
    }
}
