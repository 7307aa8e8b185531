//! Crate error type
//!
//! None of these reach the player: asset and audio failures silence a cue,
//! config failures fall back to defaults, loop failures end the thread.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// A sound asset could not be read
    AssetLoad { name: String, source: io::Error },
    /// The audio backend rejected a sound
    Audio(String),
    /// Settings file is not valid JSON for `Settings`
    Config(serde_json::Error),
    /// Settings file could not be read or written
    Io(io::Error),
    /// The loop thread panicked, so joining it failed
    LoopPanicked,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad { name, source } => {
                write!(f, "failed to load sound asset {name}: {source}")
            }
            Self::Audio(msg) => write!(f, "audio backend error: {msg}"),
            Self::Config(err) => write!(f, "invalid settings: {err}"),
            Self::Io(err) => write!(f, "settings I/O error: {err}"),
            Self::LoopPanicked => write!(f, "game loop thread panicked"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } => Some(source),
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Audio(_) | Self::LoopPanicked => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_asset_load_display_and_source() {
        let err = Error::AssetLoad {
            name: "beep.ogg".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "failed to load sound asset beep.ogg: missing"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_from_serde() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(Error::LoopPanicked.source().is_none());
    }
}
