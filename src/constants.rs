//! Centralized constants for Cyber Countdown
//!
//! This module contains all configurable values used throughout the
//! application. Each constant includes documentation on its purpose,
//! unit, and recommended value range.

// ============================================================================
// COUNTDOWN TIMING
// ============================================================================

/// Interval between countdown ticks.
/// Unit: milliseconds
/// Range: Fixed at one second for a wall-clock countdown
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Seconds per hour, used for parsing and formatting.
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Seconds per minute, used for parsing and formatting.
pub const SECONDS_PER_MINUTE: u64 = 60;

// ============================================================================
// DISPLAY TEXT
// ============================================================================

/// Default value of every time input field.
pub const DEFAULT_FIELD_VALUE: &str = "00";

/// Display text shown when the countdown reaches zero.
pub const EXPIRED_MESSAGE: &str = "Time's Up!";

/// Display text shown when Start is pressed with unusable fields.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input";

// ============================================================================
// WINDOW
// ============================================================================

pub const WINDOW_TITLE: &str = "Cyberpunk Countdown Timer";

/// Initial window size.
/// Unit: logical pixels (width, height)
pub const WINDOW_SIZE: [f32; 2] = [400.0, 300.0];

/// Font size of the hours/minutes/seconds inputs.
/// Unit: points
pub const INPUT_FONT_SIZE: f32 = 24.0;

/// Font size of the countdown label.
/// Unit: points
pub const DISPLAY_FONT_SIZE: f32 = 48.0;

/// Font size of buttons and the sound checkbox.
/// Unit: points
pub const CONTROL_FONT_SIZE: f32 = 12.0;

/// Neon green used for text, borders and button fill.
/// Unit: sRGB
pub const NEON_GREEN: [u8; 3] = [0x39, 0xff, 0x14];

/// Dark background used for the window and text fields.
/// Unit: sRGB
pub const BACKGROUND: [u8; 3] = [0x1e, 0x1e, 0x1e];

// ============================================================================
// RESOURCES
// ============================================================================

/// Directory (relative to the resource root) holding all bundled assets.
pub const ASSETS_DIR: &str = "assets";

/// Window icon, relative to the resource root.
pub const ICON_PATH: &str = "assets/images/Icon.png";

/// Tick sound, relative to the resource root.
pub const TICK_SOUND_PATH: &str = "assets/sounds/tick.wav";

/// Tock sound, relative to the resource root.
pub const TOCK_SOUND_PATH: &str = "assets/sounds/tock.wav";

/// Alarm sound, relative to the resource root.
pub const ALARM_SOUND_PATH: &str = "assets/sounds/alarm.wav";

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Application directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "cyber-countdown";

/// Config file name inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the resource root.
pub const ENV_ASSETS_DIR: &str = "CYBER_COUNTDOWN_ASSETS";

/// Environment variable overriding sound on/off.
pub const ENV_SOUND: &str = "CYBER_COUNTDOWN_SOUND";
