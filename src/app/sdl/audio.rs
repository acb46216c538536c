//! SDL2_mixer playback of the game's sound cues.
use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use sdl2::mixer::{self, Chunk, InitFlag, Music, AUDIO_S16LSB};
use strum::IntoEnumIterator;

use crate::audio::{asset_path, AudioSink, Sound, MUSIC_FILE};

const AUDIO_FREQUENCY: i32 = 44_100;
const AUDIO_CHANNELS: i32 = 4;
const CHUNK_SIZE: i32 = 1024;
const DEFAULT_VOLUME: u8 = 64;

/// Mixer-backed audio.
///
/// If the device cannot be opened or no sample loads, the audio is disabled
/// and every call silently does nothing.
pub struct MixerAudio {
    _mixer_context: Option<mixer::Sdl2MixerContext>,
    sounds: HashMap<Sound, Chunk>,
    music: Option<Music<'static>>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

impl MixerAudio {
    /// Opens the mixer and loads every cue from `assets`.
    pub fn new(assets: &Path) -> Self {
        match Self::try_new(assets) {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self {
                    _mixer_context: None,
                    sounds: HashMap::new(),
                    music: None,
                    state: AudioState::Disabled,
                }
            }
        }
    }

    fn try_new(assets: &Path) -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, AUDIO_CHANNELS, CHUNK_SIZE)
            .map_err(|e| anyhow!("Failed to open audio: {}", e))?;
        mixer::allocate_channels(AUDIO_CHANNELS);
        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }

        let mixer_context = mixer::init(InitFlag::MP3 | InitFlag::FLAC)
            .map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

        let sounds: HashMap<Sound, Chunk> = Sound::iter()
            .filter_map(|sound| match Self::load_sound(assets, sound) {
                Ok(chunk) => Some((sound, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to load sound {}: {}", sound.name(), e);
                    None
                }
            })
            .collect();

        if sounds.is_empty() {
            return Err(anyhow!("No sounds loaded successfully"));
        }

        let music = match asset_path(assets, MUSIC_FILE) {
            Ok(path) => Music::from_file(path)
                .map_err(|e| tracing::warn!("Failed to load music: {}", e))
                .ok(),
            Err(e) => {
                tracing::warn!("Background music unavailable: {}", e);
                None
            }
        };

        Ok(Self {
            _mixer_context: Some(mixer_context),
            sounds,
            music,
            state: AudioState::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    fn load_sound(assets: &Path, sound: Sound) -> Result<Chunk> {
        let path = asset_path(assets, sound.file_name())?;
        Chunk::from_file(&path).map_err(|e| anyhow!("Failed to load {}: {}", path.display(), e))
    }

    /// Loops the background track, if one was loaded.
    pub fn start_music(&mut self) {
        if self.state == AudioState::Disabled {
            return;
        }
        if let Some(music) = &self.music {
            if let Err(e) = music.play(-1) {
                tracing::warn!("Could not play music: {}", e);
            }
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.state, AudioState::Disabled)
    }
}

impl AudioSink for MixerAudio {
    fn play(&mut self, sound: Sound) {
        if !matches!(self.state, AudioState::Enabled { .. }) {
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            match mixer::Channel::all().play(chunk, 0) {
                Ok(channel) => tracing::trace!(sound = sound.name(), ?channel, "Playing sound"),
                Err(e) => tracing::warn!("Could not play sound {}: {}", sound.name(), e),
            }
        }
    }

    fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, AudioState::Enabled { volume }) => {
                self.state = AudioState::Muted { previous_volume: volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
                Music::set_volume(0);
            }
            (false, AudioState::Muted { previous_volume }) => {
                self.state = AudioState::Enabled { volume: previous_volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
                Music::set_volume(previous_volume as i32);
            }
            _ => {}
        }
    }

    fn is_muted(&self) -> bool {
        matches!(self.state, AudioState::Muted { .. })
    }
}
