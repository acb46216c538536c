//! The four hand-authored levels.

use crate::entity::Direction::{Down, Left, Right, Up};
use crate::level::LevelDefinition;

#[rustfmt::skip]
pub const LEVEL_ONE: [&str; 10] = [
    "#############",
    "#........t..#",
    "#...t....a..#",
    "#..#.#..#s#t#",
    "#k.D.#..#.#t#",
    "#..#..t.#.#t#",
    "#.##p.#€€.#t#",
    "#.#t..###D#t#",
    "#.....k....x#",
    "#############",
];

#[rustfmt::skip]
pub const LEVEL_TWO: [&str; 10] = [
    "#############",
    "#.D...tttt.x#",
    "#.#.#.##.p.##",
    "#.#.#.###..##",
    "#.#.#...##.##",
    "#.#.###....##",
    "#.#..########",
    "#€##....#####",
    "#y#####.....#",
    "#############",
];

#[rustfmt::skip]
pub const LEVEL_THREE: [&str; 10] = [
    "#############",
    "#.tttttttt..#",
    "#.########.##",
    "#.#........##",
    "#.#......####",
    "#.#..c.a.#t##",
    "#.#......#t##",
    "#.#D######t##",
    "#..........x#",
    "#############",
];

#[rustfmt::skip]
pub const LEVEL_FOUR: [&str; 10] = [
    "#############",
    "#y.........x#",
    "#tt..#.#..tt#",
    "#t.###.###.t#",
    "#t.#.....#.t#",
    "#t.#.....#.t#",
    "#t.###.###.t#",
    "#t...#D#...t#",
    "#p..........#",
    "#############",
];

/// Level definitions with their initial entity placements, in play order.
pub fn classic_levels() -> Vec<LevelDefinition> {
    vec![
        LevelDefinition::new(&LEVEL_ONE)
            .teleporter(4, 3, 6, 8)
            .fireball(1, 2, Right, 1)
            .fireball(1, 8, Left, 1)
            .skeleton(4, 8, Left, 1)
            .skeleton(7, 8, Up, 1),
        LevelDefinition::new(&LEVEL_TWO)
            .fireball(1, 1, Down, 1)
            .snake(4, 6, Left, 2)
            .snake(10, 3, Up, 2),
        LevelDefinition::new(&LEVEL_THREE)
            .teleporter(3, 3, 1, 8)
            .fireball(1, 8, Down, 1)
            .skeleton(1, 8, Up, 1)
            .skeleton(7, 8, Left, 1)
            .snake(3, 6, Right, 1)
            .snake(8, 6, Left, 1),
        LevelDefinition::new(&LEVEL_FOUR)
            .snake(1, 8, Left, 2)
            .snake(10, 3, Up, 2)
            .snake(2, 1, Down, 2)
            .boss(5, 6, Left, 3),
    ]
}

#[cfg(test)]
mod tests {
    use crate::level::LevelSet;
    use crate::map::Tile;
    use glam::IVec2;

    #[test]
    fn test_classic_levels_parse() {
        let set = LevelSet::classic().unwrap();
        assert_eq!(set.len(), 4);
        for index in 0..set.len() {
            let level = set.instantiate(index).unwrap();
            assert_eq!(level.grid.width(), 13);
            assert_eq!(level.grid.height(), 10);
        }
    }

    #[test]
    fn test_every_level_has_stairs() {
        let set = LevelSet::classic().unwrap();
        for index in 0..set.len() {
            let level = set.instantiate(index).unwrap();
            assert_eq!(level.grid.cells().filter(|(_, t)| *t == Tile::StairsDown).count(), 1);
        }
    }

    #[test]
    fn test_level_one_landmarks() {
        let level = LevelSet::classic().unwrap().instantiate(0).unwrap();
        assert_eq!(level.grid.get(IVec2::new(3, 4)), Some(Tile::ClosedDoor));
        assert_eq!(level.grid.get(IVec2::new(1, 4)), Some(Tile::Key));
        assert_eq!(level.grid.get(IVec2::new(11, 8)), Some(Tile::StairsDown));
        assert_eq!(level.teleporters.len(), 1);
        assert_eq!(level.projectiles.len(), 2);
        assert_eq!(level.skeletons.len(), 2);
    }

    #[test]
    fn test_level_four_has_boss() {
        let level = LevelSet::classic().unwrap().instantiate(3).unwrap();
        assert_eq!(level.bosses.len(), 1);
        assert_eq!(level.snakes.len(), 3);
    }
}
