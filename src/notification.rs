//! Transient popup messages: shown, then fading, then hidden.

use crate::config::{POPUP_FADE_DELAY_MS, POPUP_HIDE_DELAY_MS};
use crate::state::{PopupPhase, PopupView, Store};
use crate::timer::TimerHost;
use std::rc::Rc;

/// Drives the popup in [`Store`] through its show / fade / hide sequence.
pub struct Notifier<T: TimerHost> {
    store: Rc<Store>,
    timers: T,
    fade: Option<T::Handle>,
    hide: Option<T::Handle>,
}

impl<T: TimerHost> Notifier<T> {
    pub fn new(store: Rc<Store>, timers: T) -> Self {
        Self {
            store,
            timers,
            fade: None,
            hide: None,
        }
    }

    /// Display `message` now, start fading after 1200 ms and hide at 1700 ms.
    ///
    /// Calling again while a message is up restarts the whole sequence.
    pub fn show(&mut self, message: &str) {
        self.fade = None;
        self.hide = None;

        self.store.update(|s| {
            s.popup = PopupView {
                message: message.to_string(),
                phase: PopupPhase::Shown,
            }
        });

        let store = self.store.clone();
        self.fade = Some(self.timers.timeout(
            POPUP_FADE_DELAY_MS,
            Box::new(move || store.update(|s| s.popup.phase = PopupPhase::Fading)),
        ));

        let store = self.store.clone();
        self.hide = Some(self.timers.timeout(
            POPUP_HIDE_DELAY_MS,
            Box::new(move || store.update(|s| s.popup.phase = PopupPhase::Hidden)),
        ));
    }
}
