//! SDL2 frontend: a window with a tile board, HUD panel and mixer sound.

use std::time::Instant;

use anyhow::{anyhow, Result};
use glam::IVec2;
use rand::rngs::SmallRng;
use sdl2::event::{Event, WindowEvent};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{AudioSubsystem, EventPump, Sdl};
use tracing::{debug, event, info};

use crate::app::{direction_source, end_text, hud_lines, pace_frame};
use crate::audio::AudioSink;
use crate::config::Config;
use crate::constants::{BOARD_TILES, CANVAS_SIZE, GAME_TITLE, LOOP_TIME, TILE_SIZE, WELCOME_TEXT};
use crate::entity::movement::RandomDirections;
use crate::formatter;
use crate::game::state::Status;
use crate::game::Game;
use crate::input::{Bindings, Key};
use crate::level::LevelSet;
use crate::map::Tile;

use self::audio::MixerAudio;

mod audio;

const BACKGROUND: Color = Color::RGB(12, 12, 16);
const TEXT: Color = Color::RGB(230, 230, 230);
const DAMAGE_TEXT: Color = Color::RGB(255, 64, 64);

pub struct App {
    _sdl: Sdl,
    _audio_subsystem: Option<AudioSubsystem>,
    game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    audio: MixerAudio,
    bindings: Bindings,
    directions: RandomDirections<SmallRng>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let levels = LevelSet::classic()?;
        let game = Game::new(levels, config.game.clone())?;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        // Held for the App's lifetime so the mixer keeps a live device; failure only disables sound.
        let audio_subsystem = sdl_context
            .audio()
            .map_err(|e| tracing::warn!("Audio subsystem unavailable: {}", e))
            .ok();

        let window = video_subsystem
            .window(GAME_TITLE, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().build()?;
        canvas.set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)?;

        let mut audio = MixerAudio::new(&config.assets);
        audio.set_mute(config.muted);
        if audio.is_disabled() {
            info!("Running without sound");
        }

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        Ok(Self {
            _sdl: sdl_context,
            _audio_subsystem: audio_subsystem,
            game,
            canvas,
            event_pump,
            audio,
            bindings: Bindings::default(),
            directions: direction_source(config.seed),
        })
    }

    /// Plays one game: title screen, the main loop, then the closing screen.
    pub fn run(&mut self) -> Result<()> {
        self.show_screen(&[GAME_TITLE, WELCOME_TEXT, "", "Press any key to start"])?;
        if self.wait_for_key() == Key::Escape {
            return Ok(());
        }
        self.audio.start_music();

        event!(
            tracing::Level::INFO,
            "Starting game loop ({:.3}ms)",
            LOOP_TIME.as_secs_f32() * 1000.0
        );
        while !self.game.status().is_terminal() {
            let start = Instant::now();

            let command = self.poll_key().and_then(|key| self.bindings.command_for(key));
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
        if status != Status::Exited {
            self.show_screen(&[end_text(status), "", "Press any key to exit"])?;
            self.wait_for_key();
        }
        Ok(())
    }

    /// Drains pending events and returns the first bound key press, if any.
    ///
    /// Closing the window counts as Escape.
    fn poll_key(&mut self) -> Option<Key> {
        let mut pressed = None;
        for event in self.event_pump.poll_iter() {
            let key = match event {
                Event::Window { win_event, .. } => {
                    match win_event {
                        WindowEvent::Hidden => debug!("Window hidden"),
                        WindowEvent::Shown => debug!("Window shown"),
                        _ => {}
                    }
                    None
                }
                Event::Quit { .. } => Some(Key::Escape),
                Event::KeyDown { keycode: Some(keycode), .. } => translate(keycode),
                _ => None,
            };
            if pressed.is_none() {
                pressed = key;
            }
        }
        pressed
    }

    fn wait_for_key(&mut self) -> Key {
        loop {
            match self.event_pump.wait_event() {
                Event::Quit { .. } => return Key::Escape,
                Event::KeyDown { keycode: Some(keycode), .. } => {
                    return translate(keycode).unwrap_or(Key::Char('\n'));
                }
                _ => {}
            }
        }
    }

    fn show_screen(&mut self, lines: &[&str]) -> Result<()> {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();
        let top = CANVAS_SIZE.y as i32 / 2 - lines.len() as i32 * 6;
        for (row, line) in lines.iter().enumerate() {
            let x = (CANVAS_SIZE.x as i32 - line.chars().count() as i32 * 8) / 2;
            self.canvas
                .string(x as i16, (top + row as i32 * 12) as i16, line, TEXT)
                .map_err(|e| anyhow!(e))?;
        }
        self.canvas.present();
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let state = self.game.state();
        let canvas = &mut self.canvas;
        canvas.set_draw_color(BACKGROUND);
        canvas.clear();

        for (pos, tile) in state.level.grid.cells() {
            canvas.set_draw_color(tile_color(tile));
            canvas.fill_rect(cell_rect(pos)).map_err(|e| anyhow!(e))?;
            if let Some(symbol) = tile_symbol(tile) {
                let center = cell_center(pos);
                canvas
                    .character(center.x as i16 - 4, center.y as i16 - 4, symbol, TEXT)
                    .map_err(|e| anyhow!(e))?;
            }
        }

        for teleporter in &state.level.teleporters {
            marker(canvas, teleporter.entry, Color::RGB(64, 128, 255))?;
        }
        for projectile in &state.level.projectiles {
            marker(canvas, projectile.position, Color::RGB(255, 120, 0))?;
        }
        for enemy in &state.level.skeletons {
            marker(canvas, enemy.position, Color::RGB(220, 220, 200))?;
        }
        for enemy in &state.level.snakes {
            marker(canvas, enemy.position, Color::RGB(40, 200, 40))?;
        }
        for enemy in &state.level.bosses {
            marker(canvas, enemy.position, Color::RGB(200, 40, 200))?;
        }
        marker(canvas, state.position, Color::RGB(0, 220, 255))?;

        for icon in &state.damage_icons {
            let center = cell_center(icon.position);
            canvas
                .string(center.x as i16, (center.y - TILE_SIZE as i32 / 2) as i16, &icon.text, DAMAGE_TEXT)
                .map_err(|e| anyhow!(e))?;
        }

        let hud_x = (BOARD_TILES.x * TILE_SIZE) as i16 + 12;
        for (row, line) in hud_lines(state).iter().enumerate() {
            // The gfx font is ASCII only; icons are drawn as bars.
            let ascii: String = line.chars().map(|c| if c.is_ascii() { c } else { '|' }).collect();
            canvas
                .string(hud_x, 12 + row as i16 * 16, &ascii, TEXT)
                .map_err(|e| anyhow!(e))?;
        }

        canvas.present();
        Ok(())
    }
}

fn translate(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Up => Some(Key::Up),
        Keycode::Down => Some(Key::Down),
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Escape => Some(Key::Escape),
        Keycode::Space => Some(Key::Char(' ')),
        Keycode::Return => Some(Key::Char('\n')),
        other => {
            let name = other.name();
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::char(c)),
                _ => None,
            }
        }
    }
}

fn cell_rect(pos: IVec2) -> Rect {
    Rect::new(pos.x * TILE_SIZE as i32, pos.y * TILE_SIZE as i32, TILE_SIZE, TILE_SIZE)
}

fn cell_center(pos: IVec2) -> IVec2 {
    pos * TILE_SIZE as i32 + IVec2::splat(TILE_SIZE as i32 / 2)
}

fn marker(canvas: &mut Canvas<Window>, pos: IVec2, color: Color) -> Result<()> {
    let center = cell_center(pos);
    canvas
        .filled_circle(center.x as i16, center.y as i16, (TILE_SIZE / 3) as i16, color)
        .map_err(|e| anyhow!(e))
}

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Wall => Color::RGB(70, 70, 80),
        Tile::Trap => Color::RGB(90, 20, 20),
        Tile::ClosedDoor => Color::RGB(120, 80, 30),
        Tile::OpenDoor => Color::RGB(60, 45, 20),
        Tile::StairsDown => Color::RGB(20, 60, 90),
        _ => Color::RGB(30, 30, 36),
    }
}

/// Letter drawn on top of item tiles.
fn tile_symbol(tile: Tile) -> Option<char> {
    match tile {
        Tile::Wall | Tile::Floor | Tile::ClosedDoor | Tile::OpenDoor | Tile::Trap => None,
        Tile::Coin => Some('$'),
        other => Some(other.as_char()),
    }
}
