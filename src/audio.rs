//! Sound cues raised by the simulation, and the sink that plays them.
//!
//! The simulation never waits on audio. It queues [`Sound`] cues while a tick
//! runs; the frontend drains them afterwards and hands them to an [`AudioSink`].

use std::path::{Path, PathBuf};

use strum_macros::{EnumIter, IntoStaticStr};
use tracing::trace;

use crate::error::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Sound {
    Coin,
    SwordSwing,
    SkeletonDeath,
    SnakeDeath,
    BossDeath,
}

impl Sound {
    /// Cue name, e.g. `"sword-swing"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// File name of the sample inside the sound asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Coin => "coin.mp3",
            Sound::SwordSwing => "sword.wav",
            Sound::SkeletonDeath => "skeleton.mp3",
            Sound::SnakeDeath => "snake.mp3",
            Sound::BossDeath => "knife.flac",
        }
    }
}

/// File name of the looping background track.
pub const MUSIC_FILE: &str = "ave_maria.mp3";

/// Resolves `file` inside the asset directory, failing if it does not exist.
pub fn asset_path(dir: &Path, file: &str) -> Result<PathBuf, AssetError> {
    let path = dir.join(file);
    if path.try_exists()? {
        Ok(path)
    } else {
        Err(AssetError::NotFound(path.display().to_string()))
    }
}

/// Fire-and-forget playback of sound cues.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);

    fn set_mute(&mut self, mute: bool);

    fn is_muted(&self) -> bool;
}

/// A sink that only records cues in the trace log.
///
/// Used by the terminal frontend and whenever a real device is unavailable.
#[derive(Debug, Default)]
pub struct SilentAudio {
    muted: bool,
}

impl AudioSink for SilentAudio {
    fn play(&mut self, sound: Sound) {
        if !self.muted {
            trace!(sound = sound.name(), "Sound cue (no audio device)");
        }
    }

    fn set_mute(&mut self, mute: bool) {
        self.muted = mute;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
