//! The calculator page's behaviour, independent of any UI toolkit.
//!
//! [`Calculator`] receives the page's input events (edits, focus changes,
//! button presses, the calculate action) and applies them to the shared
//! [`Store`]. Rendering code only reads the store and forwards events here.

use crate::conversion::{convert_texts, ConversionError, ConversionResult};
use crate::field::{ControlButton, FieldId};
use crate::hold::{HoldPhase, PressHoldController};
use crate::notification::Notifier;
use crate::state::{AppState, Store};
use crate::sync::SoySynchronizer;
use crate::timer::TimerHost;
use crate::utils::sanitize_digits;
use log::{debug, info};
use std::collections::HashMap;
use std::rc::Rc;

pub struct Calculator<T: TimerHost> {
    store: Rc<Store>,
    synchronizer: SoySynchronizer<T>,
    notifier: Notifier<T>,
    controls: HashMap<ControlButton, PressHoldController<T>>,
}

impl<T: TimerHost> Calculator<T> {
    pub fn new(timers: T) -> Self {
        Self::with_state(AppState::default(), timers)
    }

    pub fn with_state(state: AppState, timers: T) -> Self {
        let store = Store::new(state);
        let controls = ControlButton::ALL
            .into_iter()
            .map(|button| {
                (
                    button,
                    PressHoldController::new(button, store.clone(), timers.clone()),
                )
            })
            .collect();

        info!("Calculator initialised with roll={}", store.read(|s| s.roll.clone()));
        Self {
            synchronizer: SoySynchronizer::new(store.clone(), timers.clone()),
            notifier: Notifier::new(store.clone(), timers),
            controls,
            store,
        }
    }

    pub fn store(&self) -> Rc<Store> {
        self.store.clone()
    }

    /// A text edit in `field`. The text is reduced to digits before it is
    /// stored; the cleaned text is returned so the caller can write it back
    /// into the input element.
    pub fn input(&mut self, field: FieldId, raw: &str) -> String {
        let clean = sanitize_digits(raw);
        if clean != raw {
            debug!("Stripped non-digits from {} input: {:?} -> {:?}", field, raw, clean);
        }
        self.store.update(|s| s.set_text(field, clean.clone()));
        if field == FieldId::Roll {
            self.synchronizer.roll_edited();
        }
        clean
    }

    pub fn focus(&mut self, field: FieldId) {
        self.store.update(|s| s.active_field = Some(field));
    }

    pub fn blur(&mut self, field: FieldId) {
        self.store.update(|s| {
            if s.active_field == Some(field) {
                s.active_field = None;
            }
        });
    }

    pub fn press(&mut self, button: ControlButton) {
        if let Some(control) = self.controls.get_mut(&button) {
            control.press();
        }
    }

    pub fn release(&mut self, button: ControlButton) {
        if let Some(control) = self.controls.get_mut(&button) {
            control.release();
        }
    }

    pub fn hold_phase(&self, button: ControlButton) -> Option<HoldPhase> {
        self.controls.get(&button).and_then(PressHoldController::phase)
    }

    /// Run the conversion on the current field texts.
    ///
    /// On success the results are stored for display. On failure a popup is
    /// shown and the previous results stay as they were.
    pub fn calculate(&mut self) -> Result<ConversionResult, ConversionError> {
        let (roll, soy) = self.store.read(|s| (s.roll.clone(), s.soy.clone()));
        match convert_texts(&roll, &soy) {
            Ok(result) => {
                self.store.update(|s| s.results = Some(result.clone()));
                Ok(result)
            }
            Err(err) => {
                self.notifier.show(err.user_message());
                Err(err)
            }
        }
    }
}
