//! Game configuration resource.
//!
//! Manages gameplay tuning loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [display]
//! tile_size = 32
//! viewport_width_tiles = 20
//! viewport_height_tiles = 10
//! ticks_per_second = 30
//!
//! [scroll]
//! background_speed = 1
//!
//! [player]
//! speed = 3
//! repel_radius_tiles = 5
//! frame_duration = 30
//!
//! [enemy]
//! pursue_speed = 3
//! flee_speed = -1
//! flee_seconds = 5
//! flee_decay = 2
//!
//! [map]
//! path = maps/level-01.txt
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;
use thiserror::Error;

/// Default values, matching the shipped `config.ini`.
const DEFAULT_TILE_SIZE: i32 = 32;
const DEFAULT_VIEWPORT_WIDTH_TILES: i32 = 20;
const DEFAULT_VIEWPORT_HEIGHT_TILES: i32 = 10;
const DEFAULT_TICKS_PER_SECOND: i32 = 30;
const DEFAULT_BACKGROUND_SPEED: i32 = 1;
const DEFAULT_PLAYER_SPEED: i32 = 3;
const DEFAULT_REPEL_RADIUS_TILES: i32 = 5;
const DEFAULT_FRAME_DURATION: i32 = 30;
const DEFAULT_PURSUE_SPEED: i32 = 3;
const DEFAULT_FLEE_SPEED: i32 = -1;
const DEFAULT_FLEE_SECONDS: i32 = 5;
const DEFAULT_FLEE_DECAY: i32 = 2;
const DEFAULT_MAP_PATH: &str = "maps/level-01.txt";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("failed to save config: {0}")]
    Save(#[from] std::io::Error),

    #[error("invalid value for [{section}] {key}: {reason}")]
    Invalid {
        section: &'static str,
        key: &'static str,
        reason: String,
    },
}

/// Enemy speeds and flee countdown, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTuning {
    pub pursue_speed: i32,
    pub flee_speed: i32,
    /// Countdown armed by a repel.
    pub flee_ticks: i32,
    /// Countdown decrement per tick.
    pub flee_decay: i32,
}

/// Game configuration resource.
///
/// All distances are in pixels unless the field name says tiles.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Edge length of a map tile in pixels.
    pub tile_size: i32,
    pub viewport_width_tiles: i32,
    pub viewport_height_tiles: i32,
    /// Fixed simulation rate.
    pub ticks_per_second: i32,
    /// Background scroll factor applied to the camera delta.
    pub background_speed: i32,
    pub player_speed: i32,
    /// Half-extent of the square repel area, in tiles.
    pub repel_radius_tiles: i32,
    /// Scroll distance per walk-cycle frame.
    pub frame_duration: i32,
    pub pursue_speed: i32,
    pub flee_speed: i32,
    pub flee_seconds: i32,
    pub flee_decay: i32,
    /// Map description to load.
    pub map_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            viewport_width_tiles: DEFAULT_VIEWPORT_WIDTH_TILES,
            viewport_height_tiles: DEFAULT_VIEWPORT_HEIGHT_TILES,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            background_speed: DEFAULT_BACKGROUND_SPEED,
            player_speed: DEFAULT_PLAYER_SPEED,
            repel_radius_tiles: DEFAULT_REPEL_RADIUS_TILES,
            frame_duration: DEFAULT_FRAME_DURATION,
            pursue_speed: DEFAULT_PURSUE_SPEED,
            flee_speed: DEFAULT_FLEE_SPEED,
            flee_seconds: DEFAULT_FLEE_SECONDS,
            flee_decay: DEFAULT_FLEE_DECAY,
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current values. The result is validated.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| ConfigError::Load(format!("{}: {}", self.config_path.display(), e)))?;
        self.apply_ini(&ini)?;
        info!(
            "Loaded config from {}: tile={} viewport={}x{} tiles, {} ticks/s, map={}",
            self.config_path.display(),
            self.tile_size,
            self.viewport_width_tiles,
            self.viewport_height_tiles,
            self.ticks_per_second,
            self.map_path.display()
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string()).map_err(ConfigError::Load)?;
        self.apply_ini(&ini)
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<(), ConfigError> {
        let int = |section: &'static str, key: &'static str| -> Result<Option<i32>, ConfigError> {
            let value = ini.getint(section, key).map_err(|reason| ConfigError::Invalid {
                section,
                key,
                reason,
            })?;
            value
                .map(|v| {
                    i32::try_from(v).map_err(|_| ConfigError::Invalid {
                        section,
                        key,
                        reason: format!("{} is out of range", v),
                    })
                })
                .transpose()
        };

        // [display] section
        if let Some(v) = int("display", "tile_size")? {
            self.tile_size = v;
        }
        if let Some(v) = int("display", "viewport_width_tiles")? {
            self.viewport_width_tiles = v;
        }
        if let Some(v) = int("display", "viewport_height_tiles")? {
            self.viewport_height_tiles = v;
        }
        if let Some(v) = int("display", "ticks_per_second")? {
            self.ticks_per_second = v;
        }

        // [scroll] section
        if let Some(v) = int("scroll", "background_speed")? {
            self.background_speed = v;
        }

        // [player] section
        if let Some(v) = int("player", "speed")? {
            self.player_speed = v;
        }
        if let Some(v) = int("player", "repel_radius_tiles")? {
            self.repel_radius_tiles = v;
        }
        if let Some(v) = int("player", "frame_duration")? {
            self.frame_duration = v;
        }

        // [enemy] section
        if let Some(v) = int("enemy", "pursue_speed")? {
            self.pursue_speed = v;
        }
        if let Some(v) = int("enemy", "flee_speed")? {
            self.flee_speed = v;
        }
        if let Some(v) = int("enemy", "flee_seconds")? {
            self.flee_seconds = v;
        }
        if let Some(v) = int("enemy", "flee_decay")? {
            self.flee_decay = v;
        }

        // [map] section
        if let Some(path) = ini.get("map", "path") {
            self.map_path = PathBuf::from(path);
        }

        self.validate()
    }

    /// Check the preconditions the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("display", "tile_size", self.tile_size),
            ("display", "viewport_width_tiles", self.viewport_width_tiles),
            ("display", "viewport_height_tiles", self.viewport_height_tiles),
            ("display", "ticks_per_second", self.ticks_per_second),
            ("player", "frame_duration", self.frame_duration),
        ];
        for (section, key, value) in positive {
            if value <= 0 {
                return Err(ConfigError::Invalid {
                    section,
                    key,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }
        if self.flee_seconds < 0 {
            return Err(ConfigError::Invalid {
                section: "enemy",
                key: "flee_seconds",
                reason: format!("must not be negative, got {}", self.flee_seconds),
            });
        }
        if self.flee_decay <= 0 {
            return Err(ConfigError::Invalid {
                section: "enemy",
                key: "flee_decay",
                reason: format!("must be positive, got {}", self.flee_decay),
            });
        }

        // Pixel sizes and the flee countdown are derived by multiplication.
        let products = [
            ("display", "viewport_width_tiles", self.viewport_width_tiles, self.tile_size),
            ("display", "viewport_height_tiles", self.viewport_height_tiles, self.tile_size),
            ("player", "repel_radius_tiles", self.repel_radius_tiles, self.tile_size),
            ("enemy", "flee_seconds", self.flee_seconds, self.ticks_per_second),
        ];
        for (section, key, value, factor) in products {
            if value.checked_mul(factor).is_none() {
                return Err(ConfigError::Invalid {
                    section,
                    key,
                    reason: format!("{} x {} overflows", value, factor),
                });
            }
        }
        Ok(())
    }

    /// Save configuration to the INI file at `config_path`.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();

        ini.set("display", "tile_size", Some(self.tile_size.to_string()));
        ini.set(
            "display",
            "viewport_width_tiles",
            Some(self.viewport_width_tiles.to_string()),
        );
        ini.set(
            "display",
            "viewport_height_tiles",
            Some(self.viewport_height_tiles.to_string()),
        );
        ini.set(
            "display",
            "ticks_per_second",
            Some(self.ticks_per_second.to_string()),
        );
        ini.set(
            "scroll",
            "background_speed",
            Some(self.background_speed.to_string()),
        );
        ini.set("player", "speed", Some(self.player_speed.to_string()));
        ini.set(
            "player",
            "repel_radius_tiles",
            Some(self.repel_radius_tiles.to_string()),
        );
        ini.set(
            "player",
            "frame_duration",
            Some(self.frame_duration.to_string()),
        );
        ini.set("enemy", "pursue_speed", Some(self.pursue_speed.to_string()));
        ini.set("enemy", "flee_speed", Some(self.flee_speed.to_string()));
        ini.set("enemy", "flee_seconds", Some(self.flee_seconds.to_string()));
        ini.set("enemy", "flee_decay", Some(self.flee_decay.to_string()));
        ini.set(
            "map",
            "path",
            Some(self.map_path.to_string_lossy().into_owned()),
        );

        ini.write(&self.config_path)?;
        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }

    /// Viewport size in pixels.
    pub fn viewport_size(&self) -> (i32, i32) {
        (
            self.viewport_width_tiles * self.tile_size,
            self.viewport_height_tiles * self.tile_size,
        )
    }

    /// Half-extent of the square repel area in pixels.
    pub fn repel_radius(&self) -> i32 {
        self.repel_radius_tiles * self.tile_size
    }

    pub fn enemy_tuning(&self) -> EnemyTuning {
        EnemyTuning {
            pursue_speed: self.pursue_speed,
            flee_speed: self.flee_speed,
            flee_ticks: self.ticks_per_second * self.flee_seconds,
            flee_decay: self.flee_decay,
        }
    }
}
