//! Field identities, per-field button settings and the clamped step rule.

use crate::config::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two editable numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Roll,
    Soy,
}

impl FieldId {
    pub const ALL: [FieldId; 2] = [FieldId::Roll, FieldId::Soy];

    /// DOM id of the input element rendering this field.
    pub fn element_id(self) -> &'static str {
        match self {
            FieldId::Roll => "roll-value",
            FieldId::Soy => "soy-value",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Roll => "Roll",
            FieldId::Soy => "Soy",
        }
    }

    /// Press-hold timing for control buttons targeting this field.
    pub fn button_settings(self) -> ButtonSettings {
        match self {
            FieldId::Roll => ButtonSettings {
                slow_interval_ms: ROLL_SLOW_INTERVAL_MS,
                fast_interval_ms: ROLL_FAST_INTERVAL_MS,
                slow_increment: ROLL_SLOW_INCREMENT,
                fast_increment: ROLL_FAST_INCREMENT,
            },
            FieldId::Soy => ButtonSettings {
                slow_interval_ms: SOY_SLOW_INTERVAL_MS,
                fast_interval_ms: SOY_FAST_INTERVAL_MS,
                slow_increment: SOY_SLOW_INCREMENT,
                fast_increment: SOY_FAST_INCREMENT,
            },
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Repeat timing and step sizes for one field's control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSettings {
    pub slow_interval_ms: u32,
    pub fast_interval_ms: u32,
    pub slow_increment: u64,
    pub fast_increment: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Value assumed when the field is blank or unparsable: the extreme the
    /// button moves away from.
    pub fn fallback(self) -> u64 {
        match self {
            Direction::Increase => MIN_VALUE,
            Direction::Decrease => MAX_VALUE,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Increase => "+",
            Direction::Decrease => "−",
        }
    }
}

/// A single control button: which field it drives and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlButton {
    pub field: FieldId,
    pub direction: Direction,
}

impl ControlButton {
    pub const ALL: [ControlButton; 4] = [
        ControlButton::new(FieldId::Roll, Direction::Decrease),
        ControlButton::new(FieldId::Roll, Direction::Increase),
        ControlButton::new(FieldId::Soy, Direction::Decrease),
        ControlButton::new(FieldId::Soy, Direction::Increase),
    ];

    pub const fn new(field: FieldId, direction: Direction) -> Self {
        Self { field, direction }
    }
}

/// Apply one signed step to `current` and clamp to `[MIN_VALUE, MAX_VALUE]`.
///
/// `None` means the field was blank or unparsable and is replaced by
/// [`Direction::fallback`] before stepping. The result is never blank.
pub fn step_value(current: Option<u64>, direction: Direction, increment: u64) -> u64 {
    let value = current.unwrap_or_else(|| direction.fallback());
    let stepped = match direction {
        Direction::Increase => value.saturating_add(increment),
        Direction::Decrease => value.saturating_sub(increment),
    };
    stepped.clamp(MIN_VALUE, MAX_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_field_recovers_toward_the_opposite_extreme() {
        assert_eq!(step_value(None, Direction::Increase, 1), MIN_VALUE + 1);
        assert_eq!(step_value(None, Direction::Decrease, 1), MAX_VALUE - 1);
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        assert_eq!(step_value(Some(MAX_VALUE), Direction::Increase, 1), MAX_VALUE);
        assert_eq!(step_value(Some(MAX_VALUE - 3), Direction::Increase, 10), MAX_VALUE);
        assert_eq!(step_value(Some(MIN_VALUE), Direction::Decrease, 1), MIN_VALUE);
        assert_eq!(step_value(Some(0), Direction::Decrease, 1), MIN_VALUE);
        assert_eq!(step_value(Some(5_000_000), Direction::Decrease, 1), MAX_VALUE);
    }

    #[test]
    fn settings_differ_per_field() {
        let roll = FieldId::Roll.button_settings();
        let soy = FieldId::Soy.button_settings();
        assert_eq!(roll.slow_interval_ms, 100);
        assert_eq!(roll.fast_interval_ms, 20);
        assert_eq!(soy.fast_increment, 10);
        assert_ne!(roll, soy);
    }

    proptest! {
        #[test]
        fn step_stays_in_range(
            current in proptest::option::of(any::<u64>()),
            increment in 0u64..1_000_000_000,
            increase in any::<bool>(),
        ) {
            let direction = if increase { Direction::Increase } else { Direction::Decrease };
            let next = step_value(current, direction, increment);
            prop_assert!((MIN_VALUE..=MAX_VALUE).contains(&next));
        }

        #[test]
        fn increase_never_decreases_in_range_values(v in MIN_VALUE..=MAX_VALUE, inc in 1u64..100) {
            let next = step_value(Some(v), Direction::Increase, inc);
            prop_assert_eq!(next, (v + inc).min(MAX_VALUE));
        }

        #[test]
        fn decrease_never_increases_in_range_values(v in MIN_VALUE..=MAX_VALUE, inc in 1u64..100) {
            let next = step_value(Some(v), Direction::Decrease, inc);
            prop_assert_eq!(next, v.saturating_sub(inc).max(MIN_VALUE));
        }
    }
}
