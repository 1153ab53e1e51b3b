//! Runtime configuration for the terminal binary.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            log_dir: env::temp_dir().join("tui-memory"),
        }
    }
}

impl AppConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MEMORY_MATCH_DELAY_FRAMES` - Frames a revealed pair stays up (default: 30)
    /// - `MEMORY_FRAME_MS` - Frame interval in milliseconds (default: 16)
    /// - `MEMORY_SEED` - Shuffle seed (default: derived from the clock)
    /// - `MEMORY_TILE_WIDTH` / `MEMORY_TILE_HEIGHT` - Tile size in cells (default: 10x5)
    /// - `MEMORY_LOG_DIR` - Log directory (default: `$TMPDIR/tui-memory`)
    ///
    /// Unparsable values are ignored. Out-of-range values are left for
    /// [`GameConfig::validate`] to reject.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.game.seed = read_env::<u32>("MEMORY_SEED").unwrap_or_else(clock_seed);

        if let Some(frames) = read_env::<u32>("MEMORY_MATCH_DELAY_FRAMES") {
            config.game.match_delay_frames = frames;
        }
        if let Some(ms) = read_env::<u32>("MEMORY_FRAME_MS") {
            config.game.frame_ms = ms;
        }
        if let Some(width) = read_env::<u16>("MEMORY_TILE_WIDTH") {
            config.game.tile_width = width;
        }
        if let Some(height) = read_env::<u16>("MEMORY_TILE_HEIGHT") {
            config.game.tile_height = height;
        }
        if let Some(dir) = env::var_os("MEMORY_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
