//! Sound cues and the audio adapter
//!
//! Four one-shot cues, each backed by a sound file. A file that fails to load
//! leaves its cue silent; the game carries on.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Ball hits bat
    Hit,
    /// Ball lost off the bottom
    Miss,
    /// Ball hits top edge
    WallTop,
    /// Ball hits left or right edge
    WallSide,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [
        SoundCue::Hit,
        SoundCue::Miss,
        SoundCue::WallTop,
        SoundCue::WallSide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Hit => "hit",
            SoundCue::Miss => "miss",
            SoundCue::WallTop => "wall-top",
            SoundCue::WallSide => "wall-side",
        }
    }

    /// Sound file inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Hit => "beep.ogg",
            SoundCue::Miss => "miss.ogg",
            SoundCue::WallTop => "boop.ogg",
            SoundCue::WallSide => "bop.ogg",
        }
    }

    fn index(&self) -> usize {
        match self {
            SoundCue::Hit => 0,
            SoundCue::Miss => 1,
            SoundCue::WallTop => 2,
            SoundCue::WallSide => 3,
        }
    }
}

impl GameEvent {
    /// Cue to play for this event, if any
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::BatHit => Some(SoundCue::Hit),
            GameEvent::Missed => Some(SoundCue::Miss),
            GameEvent::WallTop => Some(SoundCue::WallTop),
            GameEvent::WallSide => Some(SoundCue::WallSide),
            GameEvent::GameOver { .. } => None,
        }
    }
}

/// Handle to a sound the backend has accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

/// Host audio system
pub trait AudioBackend: Send {
    /// Decode/register a sound; the returned id is passed to `play`
    fn load(&mut self, name: &str, data: &[u8]) -> Result<SoundId>;
    /// Start a one-shot playback at `volume` (0.0 - 1.0)
    fn play(&mut self, id: SoundId, volume: f32) -> Result<()>;
}

/// Backend that plays nothing and logs each cue
#[derive(Debug, Default)]
pub struct LogAudio {
    names: Vec<String>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioBackend for LogAudio {
    fn load(&mut self, name: &str, data: &[u8]) -> Result<SoundId> {
        let id = SoundId(self.names.len() as u32);
        log::debug!("Registered {name} ({} bytes) as {id:?}", data.len());
        self.names.push(name.to_string());
        Ok(id)
    }

    fn play(&mut self, id: SoundId, volume: f32) -> Result<()> {
        let name = self
            .names
            .get(id.0 as usize)
            .ok_or_else(|| Error::Audio(format!("unknown sound {id:?}")))?;
        log::trace!("play {name} at volume {volume:.2}");
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    sounds: [Option<SoundId>; 4],
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Manager with nothing loaded yet; every cue is silent until
    /// [`AudioManager::load_assets`] succeeds for it
    pub fn new(backend: Box<dyn AudioBackend>, settings: &Settings) -> Self {
        Self {
            backend,
            sounds: [None; 4],
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Load every cue's file from `dir`. Failures are logged and leave that
    /// cue silent. Returns how many cues loaded.
    pub fn load_assets(&mut self, dir: &Path) -> usize {
        for cue in SoundCue::ALL {
            match self.load_cue(dir, cue) {
                Ok(id) => self.sounds[cue.index()] = Some(id),
                Err(err) => {
                    log::error!("failed to load sound files: {err}");
                    self.sounds[cue.index()] = None;
                }
            }
        }
        let loaded = self.sounds.iter().flatten().count();
        log::info!("Loaded {loaded}/{} sound cues", SoundCue::ALL.len());
        loaded
    }

    fn load_cue(&mut self, dir: &Path, cue: SoundCue) -> Result<SoundId> {
        let path = dir.join(cue.file_name());
        let data = fs::read(&path).map_err(|source| Error::AssetLoad {
            name: path.display().to_string(),
            source,
        })?;
        self.backend.load(cue.name(), &data)
    }

    pub fn is_loaded(&self, cue: SoundCue) -> bool {
        self.sounds[cue.index()].is_some()
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a cue. Unloaded cues, zero volume and backend errors are silent.
    pub fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(id) = self.sounds[cue.index()] else {
            return;
        };
        if let Err(err) = self.backend.play(id, vol) {
            log::debug!("{} cue not played: {err}", cue.name());
        }
    }

    /// Play the cue of every event that has one, in order
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(GameEvent::sound_cue) {
            self.play(cue);
        }
    }
}
