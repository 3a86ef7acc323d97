//! Recipe calculator: converts a roll count into soy, water, mold, flour and
//! weight, with press-and-hold stepping on the numeric inputs.
//!
//! The library is host-agnostic apart from [`dom`]: timing goes through
//! [`timer::TimerHost`] and all state lives in an explicit [`state::Store`],
//! so the behaviour can be exercised off the browser with
//! [`timer::ManualTimers`].

pub mod calculator;
pub mod config;
pub mod conversion;
pub mod dom;
pub mod field;
pub mod hold;
pub mod notification;
pub mod state;
pub mod sync;
pub mod timer;
pub mod utils;

pub use calculator::Calculator;
pub use conversion::{convert, ConversionError, ConversionResult};
pub use field::{ButtonSettings, ControlButton, Direction, FieldId};
pub use hold::{HoldPhase, PressHoldController};
pub use state::{AppState, PopupPhase, PopupView, Store};
pub use timer::{BrowserTimers, ManualTimers, TimerHost};
