//! Debounced roll → soy synchronization for typed edits.

use crate::config::{MAX_VALUE, MIN_VALUE, SOY_MULTIPLIER, TYPING_DEBOUNCE_MS};
use crate::field::FieldId;
use crate::state::Store;
use crate::timer::TimerHost;
use crate::utils::validate_field_value;
use log::debug;
use std::rc::Rc;

/// Trailing-edge debouncer: only the last call within the quiet window runs.
pub struct Debouncer<T: TimerHost> {
    timers: T,
    delay_ms: u32,
    pending: Option<T::Handle>,
}

impl<T: TimerHost> Debouncer<T> {
    pub fn new(timers: T, delay_ms: u32) -> Self {
        Self {
            timers,
            delay_ms,
            pending: None,
        }
    }

    /// Cancel any pending call and schedule `callback` after the delay.
    pub fn call(&mut self, callback: impl FnOnce() + 'static) {
        // Cancel any existing timer by replacing it
        self.pending = None;
        self.pending = Some(self.timers.timeout(self.delay_ms, Box::new(callback)));
    }
}

/// Copies `roll × SOY_MULTIPLIER` into soy once typing in roll goes quiet.
///
/// The write only happens if roll still has input focus when the delay ends
/// and its text is a valid in-range value; otherwise the fired debounce does
/// nothing.
pub struct SoySynchronizer<T: TimerHost> {
    store: Rc<Store>,
    debouncer: Debouncer<T>,
}

impl<T: TimerHost> SoySynchronizer<T> {
    pub fn new(store: Rc<Store>, timers: T) -> Self {
        Self {
            store,
            debouncer: Debouncer::new(timers, TYPING_DEBOUNCE_MS),
        }
    }

    /// Record an edit of the roll field, restarting the quiet period.
    pub fn roll_edited(&mut self) {
        let store = self.store.clone();
        self.debouncer.call(move || sync_soy_from_roll(&store));
    }
}

fn sync_soy_from_roll(store: &Store) {
    let (focused, roll_text) = store.read(|s| (s.is_active(FieldId::Roll), s.roll.clone()));
    if !focused {
        debug!("Roll lost focus before debounce elapsed, soy left unchanged");
        return;
    }
    match validate_field_value(&roll_text, MIN_VALUE, MAX_VALUE, FieldId::Roll.label()) {
        Ok(roll) => {
            store.update(|s| s.soy = (roll * SOY_MULTIPLIER).to_string());
        }
        Err(reason) => debug!("Skipping soy sync: {}", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::timer::ManualTimers;

    fn setup() -> (ManualTimers, Rc<Store>, SoySynchronizer<ManualTimers>) {
        let timers = ManualTimers::new();
        let store = Store::new(AppState::default());
        let sync = SoySynchronizer::new(store.clone(), timers.clone());
        (timers, store, sync)
    }

    fn type_roll(store: &Store, sync: &mut SoySynchronizer<ManualTimers>, text: &str) {
        store.update(|s| {
            s.active_field = Some(FieldId::Roll);
            s.roll = text.to_string();
        });
        sync.roll_edited();
    }

    #[test]
    fn writes_soy_after_quiet_period() {
        let (timers, store, mut sync) = setup();
        type_roll(&store, &mut sync, "5");

        timers.advance(319);
        assert_eq!(store.read(|s| s.soy.clone()), "3960");
        timers.advance(1);
        assert_eq!(store.read(|s| s.soy.clone()), "900");
    }

    #[test]
    fn only_the_last_edit_counts() {
        let (timers, store, mut sync) = setup();
        type_roll(&store, &mut sync, "1");
        timers.advance(200);
        type_roll(&store, &mut sync, "12");
        timers.advance(200);
        assert_eq!(store.read(|s| s.soy.clone()), "3960");
        timers.advance(120);
        assert_eq!(store.read(|s| s.soy.clone()), "2160");
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn focus_loss_suppresses_the_write() {
        let (timers, store, mut sync) = setup();
        type_roll(&store, &mut sync, "7");
        timers.advance(100);
        store.update(|s| s.active_field = None);
        timers.advance(500);
        assert_eq!(store.read(|s| s.soy.clone()), "3960");
    }

    #[test]
    fn invalid_roll_is_ignored() {
        let (timers, store, mut sync) = setup();
        for text in ["", "0", "1000001"] {
            type_roll(&store, &mut sync, text);
            timers.advance(320);
            assert_eq!(store.read(|s| s.soy.clone()), "3960");
        }
    }
}
