use std::collections::HashMap;

use crate::entity::Direction;

/// What the player asked for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),
    /// Swing the sword at all four neighboring cells.
    Attack,
    Quit,
}

/// A key press, independent of the frontend that read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character, lowercased.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Escape,
}

impl Key {
    pub fn char(c: char) -> Key {
        Key::Char(c.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Key, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        key_bindings.insert(Key::Up, GameCommand::Move(Direction::Up));
        key_bindings.insert(Key::Char('w'), GameCommand::Move(Direction::Up));
        key_bindings.insert(Key::Down, GameCommand::Move(Direction::Down));
        key_bindings.insert(Key::Char('s'), GameCommand::Move(Direction::Down));
        key_bindings.insert(Key::Left, GameCommand::Move(Direction::Left));
        key_bindings.insert(Key::Char('a'), GameCommand::Move(Direction::Left));
        key_bindings.insert(Key::Right, GameCommand::Move(Direction::Right));
        key_bindings.insert(Key::Char('d'), GameCommand::Move(Direction::Right));

        // Game actions
        key_bindings.insert(Key::Char(' '), GameCommand::Attack);
        key_bindings.insert(Key::Escape, GameCommand::Quit);
        key_bindings.insert(Key::Char('q'), GameCommand::Quit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Key) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }

    pub fn bind(&mut self, key: Key, command: GameCommand) {
        self.key_bindings.insert(key, command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = Bindings::default();
        assert_eq!(bindings.command_for(Key::char('W')), Some(GameCommand::Move(Direction::Up)));
        assert_eq!(bindings.command_for(Key::Left), Some(GameCommand::Move(Direction::Left)));
        assert_eq!(bindings.command_for(Key::Char(' ')), Some(GameCommand::Attack));
        assert_eq!(bindings.command_for(Key::Escape), Some(GameCommand::Quit));
        assert_eq!(bindings.command_for(Key::Char('z')), None);
    }

    #[test]
    fn test_rebind() {
        let mut bindings = Bindings::default();
        bindings.bind(Key::Char('k'), GameCommand::Attack);
        assert_eq!(bindings.command_for(Key::Char('k')), Some(GameCommand::Attack));
    }
}
