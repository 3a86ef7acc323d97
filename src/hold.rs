//! Press-and-hold acceleration for the increment/decrement buttons.
//!
//! Each control button owns one [`PressHoldController`]. Its state machine is
//!
//! ```text
//! Idle ──press──▶ Pressed(Slow) ──fast delay──▶ Pressed(Fast)
//!   ▲                  │                             │
//!   └──────── release / leave / cancel ──────────────┘
//! ```
//!
//! On press one step of 1 is applied at once. After `BUTTON_HOLD_DELAY_MS`
//! a slow repeat starts; `BUTTON_FAST_DELAY_MS` after the press the slow
//! repeat is replaced by the fast one. The interval lengths and step sizes
//! come from the target field's [`ButtonSettings`].

use crate::config::{BUTTON_FAST_DELAY_MS, BUTTON_HOLD_DELAY_MS, SOY_MULTIPLIER};
use crate::field::{step_value, ButtonSettings, ControlButton, FieldId};
use crate::state::Store;
use crate::timer::TimerHost;
use crate::utils::parse_field_value;
use log::debug;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldPhase {
    Slow,
    Fast,
}

/// Timers belonging to one press of a button.
pub struct HoldSession<H> {
    phase: HoldPhase,
    hold_delay: Option<H>,
    fast_delay: Option<H>,
    repeat: Option<H>,
}

impl<H> HoldSession<H> {
    fn new() -> Self {
        Self {
            phase: HoldPhase::Slow,
            hold_delay: None,
            fast_delay: None,
            repeat: None,
        }
    }

    pub fn phase(&self) -> HoldPhase {
        self.phase
    }

    /// Drop every timer handle, cancelling all pending and repeating work.
    pub fn cancel_all(&mut self) {
        self.repeat = None;
        self.hold_delay = None;
        self.fast_delay = None;
    }
}

type SessionSlot<H> = Rc<RefCell<Option<HoldSession<H>>>>;

/// Apply one button step to the target field and return the new value.
///
/// Roll changes made this way update soy immediately, without the typing
/// debounce.
pub fn apply_button_step(store: &Store, button: ControlButton, increment: u64) -> u64 {
    store.update(|s| {
        let current = parse_field_value(s.text(button.field));
        let next = step_value(current, button.direction, increment);
        s.set_text(button.field, next.to_string());
        if button.field == FieldId::Roll {
            s.soy = (next * SOY_MULTIPLIER).to_string();
        }
        next
    })
}

pub struct PressHoldController<T: TimerHost> {
    button: ControlButton,
    settings: ButtonSettings,
    store: Rc<Store>,
    timers: T,
    session: SessionSlot<T::Handle>,
}

impl<T: TimerHost> PressHoldController<T> {
    pub fn new(button: ControlButton, store: Rc<Store>, timers: T) -> Self {
        Self {
            button,
            settings: button.field.button_settings(),
            store,
            timers,
            session: Rc::new(RefCell::new(None)),
        }
    }

    /// Current phase, or `None` when idle.
    pub fn phase(&self) -> Option<HoldPhase> {
        self.session.borrow().as_ref().map(HoldSession::phase)
    }

    /// Pointer down / touch start.
    pub fn press(&mut self) {
        // At most one session per button.
        self.release();

        apply_button_step(&self.store, self.button, 1);

        let mut session = HoldSession::new();
        session.hold_delay = Some(self.timers.timeout(
            BUTTON_HOLD_DELAY_MS,
            Box::new(self.start_slow_repeat()),
        ));
        session.fast_delay = Some(self.timers.timeout(
            BUTTON_FAST_DELAY_MS,
            Box::new(self.start_fast_repeat()),
        ));
        *self.session.borrow_mut() = Some(session);
        debug!("{:?} pressed", self.button);
    }

    /// Pointer up, pointer leave, touch end or touch cancel.
    pub fn release(&mut self) {
        let session = self.session.borrow_mut().take();
        if let Some(mut session) = session {
            session.cancel_all();
            debug!("{:?} released in {:?} phase", self.button, session.phase);
        }
    }

    fn repeat_step(&self, increment: u64) -> impl FnMut() + 'static {
        let store = self.store.clone();
        let button = self.button;
        move || {
            apply_button_step(&store, button, increment);
        }
    }

    fn start_slow_repeat(&self) -> impl FnOnce() + 'static {
        let slot = Rc::downgrade(&self.session);
        let timers = self.timers.clone();
        let interval = self.settings.slow_interval_ms;
        let step = self.repeat_step(self.settings.slow_increment);
        move || {
            with_session(&slot, |session| {
                // The fast delay already took over.
                if session.phase == HoldPhase::Fast {
                    return;
                }
                session.repeat = Some(timers.interval(interval, Box::new(step)));
            })
        }
    }

    fn start_fast_repeat(&self) -> impl FnOnce() + 'static {
        let slot = Rc::downgrade(&self.session);
        let timers = self.timers.clone();
        let interval = self.settings.fast_interval_ms;
        let step = self.repeat_step(self.settings.fast_increment);
        let button = self.button;
        move || {
            with_session(&slot, |session| {
                session.phase = HoldPhase::Fast;
                // Replacing the handle cancels the slow repeat.
                session.repeat = Some(timers.interval(interval, Box::new(step)));
                debug!("{:?} switched to fast repeat", button);
            })
        }
    }
}

fn with_session<H>(slot: &Weak<RefCell<Option<HoldSession<H>>>>, f: impl FnOnce(&mut HoldSession<H>)) {
    let Some(cell) = slot.upgrade() else {
        return;
    };
    let mut guard = cell.borrow_mut();
    if let Some(session) = guard.as_mut() {
        f(session);
    }
}
