//! Simulation configuration resource.
//!
//! Settings loaded from an INI file. Defaults are safe to run with, so a
//! missing file only produces a warning in the runner.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 320
//! height = 224
//! cull_margin = 128
//!
//! [simulation]
//! seed = 1
//! frames = 600
//!
//! [audio]
//! enabled = true
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;

use crate::error::LoadError;
use crate::resources::viewport::{DEFAULT_CULL_MARGIN, DEFAULT_HEIGHT, DEFAULT_WIDTH, Viewport};

const DEFAULT_SEED: u64 = 1;
const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_AUDIO: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub cull_margin: i32,
    /// Seed for [`SimRng`](crate::resources::rng::SimRng).
    pub seed: u64,
    /// Frames the headless runner simulates.
    pub frames: u64,
    pub audio_enabled: bool,
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_WIDTH,
            viewport_height: DEFAULT_HEIGHT,
            cull_margin: DEFAULT_CULL_MARGIN,
            seed: DEFAULT_SEED,
            frames: DEFAULT_FRAMES,
            audio_enabled: DEFAULT_AUDIO,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Loads values from `config_path`. Missing keys keep their current value.
    pub fn load_from_file(&mut self) -> Result<(), LoadError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|message| LoadError::Config {
            path: self.config_path.clone(),
            message,
        })?;
        self.apply(&config);

        info!(
            "Loaded config: viewport {}x{} margin={}, seed={}, frames={}, audio={}",
            self.viewport_width,
            self.viewport_height,
            self.cull_margin,
            self.seed,
            self.frames,
            self.audio_enabled
        );
        Ok(())
    }

    /// Loads values from INI text, for embedded configs and tests.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), LoadError> {
        let mut config = Ini::new();
        config.read(text.to_owned()).map_err(|message| LoadError::Config {
            path: self.config_path.clone(),
            message,
        })?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [viewport] section
        if let Some(width) = config.getint("viewport", "width").ok().flatten() {
            self.viewport_width = width as i32;
        }
        if let Some(height) = config.getint("viewport", "height").ok().flatten() {
            self.viewport_height = height as i32;
        }
        if let Some(margin) = config.getint("viewport", "cull_margin").ok().flatten() {
            self.cull_margin = margin as i32;
        }

        // [simulation] section
        if let Some(seed) = config.getuint("simulation", "seed").ok().flatten() {
            self.seed = seed;
        }
        if let Some(frames) = config.getuint("simulation", "frames").ok().flatten() {
            self.frames = frames;
        }

        // [audio] section
        if let Some(enabled) = config.getbool("audio", "enabled").ok().flatten() {
            self.audio_enabled = enabled;
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height).with_cull_margin(self.cull_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let mut config = SimConfig::new();
        config
            .load_from_str("[viewport]\nwidth = 400\n\n[simulation]\nseed = 99\n")
            .unwrap();
        assert_eq!(config.viewport_width, 400);
        assert_eq!(config.viewport_height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, 99);
        assert_eq!(config.frames, DEFAULT_FRAMES);
        assert!(config.audio_enabled);
    }

    #[test]
    fn audio_can_be_disabled() {
        let mut config = SimConfig::new();
        config.load_from_str("[audio]\nenabled = false\n").unwrap();
        assert!(!config.audio_enabled);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let mut config = SimConfig::with_path("/nonexistent/objsim.ini");
        assert!(matches!(config.load_from_file(), Err(LoadError::Config { .. })));
    }

    #[test]
    fn viewport_uses_configured_size() {
        let mut config = SimConfig::new();
        config.viewport_width = 256;
        config.cull_margin = 64;
        let viewport = config.viewport();
        assert_eq!(viewport.width, 256);
        assert_eq!(viewport.cull_margin, 64);
    }
}
