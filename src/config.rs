//! Application-level configuration constants.

// Calculation
pub const SOY_MULTIPLIER: u64 = 180;
pub const WATER_MULTIPLIER: f64 = 0.02;
pub const MOLD_MULTIPLIER_1: f64 = 0.8;
pub const MOLD_MULTIPLIER_2: f64 = 300.0;
pub const FLOUR_MULTIPLIER: f64 = 2.0 / 3.0;

// Default values for input fields
pub const DEFAULT_ROLL: u64 = 22;

// Button control, shared by every field
pub const BUTTON_HOLD_DELAY_MS: u32 = 500; // before rapid change starts
pub const BUTTON_FAST_DELAY_MS: u32 = 1500; // before very fast change starts, from press-start

// Button control, roll
pub const ROLL_SLOW_INTERVAL_MS: u32 = 100;
pub const ROLL_FAST_INTERVAL_MS: u32 = 20;
pub const ROLL_SLOW_INCREMENT: u64 = 1;
pub const ROLL_FAST_INCREMENT: u64 = 1;

// Button control, soy
pub const SOY_SLOW_INTERVAL_MS: u32 = 1;
pub const SOY_FAST_INTERVAL_MS: u32 = 1;
pub const SOY_SLOW_INCREMENT: u64 = 1;
pub const SOY_FAST_INCREMENT: u64 = 10;

// Min/Max limits for input fields
pub const MIN_VALUE: u64 = 1;
pub const MAX_VALUE: u64 = 1_000_000;

// UI Behavior
pub const TYPING_DEBOUNCE_MS: u32 = 320;
pub const POPUP_FADE_DELAY_MS: u32 = 1200;
pub const POPUP_HIDE_DELAY_MS: u32 = 1700;
pub const VIEWPORT_RECHECK_MS: u32 = 100;
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
pub const EMPTY_RESULT: &str = "-";

// Choice page entries: (label, href)
pub const CHOICES: [(&str, &str); 2] = [
    ("TS-3 Recipe Calculator", "ts-3.html"),
    ("Back to Start", "index.html"),
];
