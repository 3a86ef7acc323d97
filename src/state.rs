//! Explicit application state shared by the calculator components.
//!
//! The guard, the synchronizer and the press-hold controllers all read and
//! write the two field texts. Everything runs on the single UI thread, so a
//! `RefCell` behind an `Rc` is the only serialization needed.

use crate::config::{DEFAULT_ROLL, EMPTY_RESULT, SOY_MULTIPLIER};
use crate::conversion::ConversionResult;
use crate::field::FieldId;
use std::cell::RefCell;
use std::rc::Rc;

/// Visibility stage of the popup notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Hidden,
    Shown,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupView {
    pub message: String,
    pub phase: PopupPhase,
}

impl PopupView {
    pub fn is_visible(&self) -> bool {
        self.phase != PopupPhase::Hidden
    }

    /// CSS classes for the popup element.
    pub fn classes(&self) -> &'static str {
        match self.phase {
            PopupPhase::Hidden => "popup-notification",
            PopupPhase::Shown => "popup-notification show",
            PopupPhase::Fading => "popup-notification show fadeout",
        }
    }
}

/// Snapshot of everything the calculator page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub roll: String,
    pub soy: String,
    /// Field that currently has input focus, if any.
    pub active_field: Option<FieldId>,
    pub results: Option<ConversionResult>,
    pub popup: PopupView,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            roll: DEFAULT_ROLL.to_string(),
            soy: (DEFAULT_ROLL * SOY_MULTIPLIER).to_string(),
            active_field: None,
            results: None,
            popup: PopupView::default(),
        }
    }
}

impl AppState {
    pub fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::Roll => &self.roll,
            FieldId::Soy => &self.soy,
        }
    }

    pub fn set_text(&mut self, field: FieldId, text: String) {
        match field {
            FieldId::Roll => self.roll = text,
            FieldId::Soy => self.soy = text,
        }
    }

    pub fn is_active(&self, field: FieldId) -> bool {
        self.active_field == Some(field)
    }

    /// Display strings for water, mold, flour and weight.
    pub fn result_texts(&self) -> [String; 4] {
        match &self.results {
            Some(r) => [
                r.water.to_string(),
                r.mold_text(),
                r.flour.to_string(),
                r.weight.to_string(),
            ],
            None => std::array::from_fn(|_| EMPTY_RESULT.to_string()),
        }
    }
}

type Observer = Rc<dyn Fn()>;

/// Owner of the [`AppState`] with a single change observer.
///
/// The observer runs after each [`Store::update`], once the state borrow has
/// been released, so it may freely read the store again.
#[derive(Default)]
pub struct Store {
    state: RefCell<AppState>,
    observer: RefCell<Option<Observer>>,
}

impl Store {
    pub fn new(state: AppState) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            observer: RefCell::new(None),
        })
    }

    pub fn set_observer(&self, observer: impl Fn() + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let out = f(&mut self.state.borrow_mut());
        let observer = self.observer.borrow().clone();
        if let Some(notify) = observer {
            notify();
        }
        out
    }
}
