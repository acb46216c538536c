//! Crossterm frontend: draws the board as text and reads single key presses.

use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use glam::IVec2;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::app::{direction_source, end_text, hud_lines, pace_frame};
use crate::audio::{AudioSink, SilentAudio};
use crate::config::Config;
use crate::constants::{GAME_TITLE, WELCOME_TEXT};
use crate::entity::movement::RandomDirections;
use crate::formatter;
use crate::game::Game;
use crate::input::{Bindings, Key};
use crate::level::LevelSet;
use crate::map::Tile;

/// How long a frame waits for a key before ticking without one.
const INPUT_TIMEOUT: Duration = Duration::from_millis(5);

/// Column where the HUD starts, leaving room for the board.
const HUD_COLUMN: u16 = 16;

const C_WALL: Color = Color::DarkGrey;
const C_FLOOR: Color = Color::Grey;
const C_ITEM: Color = Color::Yellow;
const C_HAZARD: Color = Color::Red;
const C_DOOR: Color = Color::DarkYellow;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_BOSS: Color = Color::Magenta;

pub struct App {
    game: Game,
    bindings: Bindings,
    audio: SilentAudio,
    directions: RandomDirections<SmallRng>,
    out: Stdout,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let levels = LevelSet::classic().context("Failed to load levels")?;
        let game = Game::new(levels, config.game.clone())?;

        let mut audio = SilentAudio::default();
        audio.set_mute(config.muted);

        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = stdout();
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        Ok(Self {
            game,
            bindings: Bindings::default(),
            audio,
            directions: direction_source(config.seed),
            out,
        })
    }

    /// Plays one game: title screen, the main loop, then the closing screen.
    pub fn run(&mut self) -> Result<()> {
        self.show_screen(&[GAME_TITLE, WELCOME_TEXT, "", "Press any key to start"])?;
        if self.wait_for_key()? == Key::Escape {
            return Ok(());
        }

        info!("Starting game loop ({:.3}ms)", crate::constants::LOOP_TIME.as_secs_f32() * 1000.0);
        while !self.game.status().is_terminal() {
            let start = Instant::now();

            let command = self.poll_key()?.and_then(|key| self.bindings.command_for(key));
            if let Some(command) = command {
                debug!(?command, "Command");
            }

            self.game.tick(command, &mut self.directions)?;
            formatter::set_tick(self.game.tick_count());
            for sound in self.game.drain_sounds() {
                self.audio.play(sound);
            }

            self.draw()?;
            pace_frame(start);
        }

        let status = self.game.status();
        info!(status = ?status, coins = self.game.state().coins, "Game over");
        if status != crate::game::state::Status::Exited {
            self.show_screen(&[end_text(status), "", "Press any key to exit"])?;
            self.wait_for_key()?;
        }
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        if !event::poll(INPUT_TIMEOUT)? {
            return Ok(None);
        }
        Ok(match event::read()? {
            Event::Key(key) => translate(key),
            _ => None,
        })
    }

    fn wait_for_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(key) = translate(key) {
                    return Ok(key);
                }
            }
        }
    }

    fn show_screen(&mut self, lines: &[&str]) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            self.out.queue(cursor::MoveTo(2, 2 + row as u16))?;
            self.out.queue(Print(line))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let state = self.game.state();
        let out = &mut self.out;
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        for (pos, tile) in state.level.grid.cells() {
            let (glyph, color) = tile_glyph(tile);
            put(out, pos, glyph, color)?;
        }
        for teleporter in &state.level.teleporters {
            put(out, teleporter.entry, 'o', Color::Blue)?;
        }
        for projectile in &state.level.projectiles {
            put(out, projectile.position, '*', C_HAZARD)?;
        }
        for enemy in &state.level.skeletons {
            put(out, enemy.position, 'S', C_ENEMY)?;
        }
        for enemy in &state.level.snakes {
            put(out, enemy.position, 'N', C_ENEMY)?;
        }
        for enemy in &state.level.bosses {
            put(out, enemy.position, 'B', C_BOSS)?;
        }
        put(out, state.position, '@', C_PLAYER)?;

        out.queue(style::SetForegroundColor(C_HAZARD))?;
        for icon in &state.damage_icons {
            out.queue(cursor::MoveTo(to_column(icon.position.x) + 1, icon.position.y.max(0) as u16))?;
            out.queue(Print(&icon.text))?;
        }

        out.queue(style::SetForegroundColor(Color::White))?;
        for (row, line) in hud_lines(state).iter().enumerate() {
            out.queue(cursor::MoveTo(HUD_COLUMN, row as u16))?;
            out.queue(Print(line))?;
        }

        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn translate(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Char(c) => Some(Key::char(c)),
        KeyCode::Enter => Some(Key::Char('\n')),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

fn tile_glyph(tile: Tile) -> (char, Color) {
    let color = match tile {
        Tile::Wall => C_WALL,
        Tile::Floor | Tile::StairsDown => C_FLOOR,
        Tile::Trap => C_HAZARD,
        Tile::ClosedDoor | Tile::OpenDoor => C_DOOR,
        _ => C_ITEM,
    };
    let glyph = match tile {
        Tile::Wall => '█',
        Tile::Floor => ' ',
        other => other.as_char(),
    };
    (glyph, color)
}

fn to_column(x: i32) -> u16 {
    x.max(0) as u16
}

fn put<W: Write>(out: &mut W, pos: IVec2, glyph: char, color: Color) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(to_column(pos.x), pos.y.max(0) as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}
