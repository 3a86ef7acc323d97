use recipe_calculator::{AppState, BrowserTimers, Calculator, ControlButton, Direction, FieldId};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the calculator's current state and builds the callbacks that feed
/// events back into it.
#[derive(Clone)]
pub struct CalculatorHandle {
    calculator: Rc<RefCell<Calculator<BrowserTimers>>>,
    /// Snapshot taken for this render.
    pub state: AppState,
}

impl CalculatorHandle {
    /// `oninput` for a numeric field. Writes the digit-only text straight
    /// back into the element so stray characters never show.
    pub fn on_input(&self, field: FieldId) -> Callback<InputEvent> {
        let calculator = self.calculator.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            let clean = calculator.borrow_mut().input(field, &raw);
            if clean != raw {
                input.set_value(&clean);
            }
        })
    }

    pub fn on_focus(&self, field: FieldId) -> Callback<FocusEvent> {
        let calculator = self.calculator.clone();
        Callback::from(move |_: FocusEvent| calculator.borrow_mut().focus(field))
    }

    pub fn on_blur(&self, field: FieldId) -> Callback<FocusEvent> {
        let calculator = self.calculator.clone();
        Callback::from(move |_: FocusEvent| calculator.borrow_mut().blur(field))
    }

    pub fn on_press(&self, field: FieldId) -> Callback<Direction> {
        let calculator = self.calculator.clone();
        Callback::from(move |direction: Direction| {
            calculator
                .borrow_mut()
                .press(ControlButton::new(field, direction))
        })
    }

    pub fn on_release(&self, field: FieldId) -> Callback<Direction> {
        let calculator = self.calculator.clone();
        Callback::from(move |direction: Direction| {
            calculator
                .borrow_mut()
                .release(ControlButton::new(field, direction))
        })
    }

    pub fn calculate(&self) {
        // Failures are already shown as a popup.
        let _ = self.calculator.borrow_mut().calculate();
    }
}

/// Custom hook owning one [`Calculator`] per component instance and
/// re-rendering whenever its store changes.
#[hook]
pub fn use_calculator() -> CalculatorHandle {
    let trigger = use_force_update();
    let calculator = use_mut_ref(move || {
        let calculator = Calculator::new(BrowserTimers);
        calculator
            .store()
            .set_observer(move || trigger.force_update());
        calculator
    });
    // Kept apart so rendering never borrows the calculator itself.
    let store = {
        let calculator = calculator.clone();
        use_memo((), move |_| calculator.borrow().store())
    };

    CalculatorHandle {
        calculator,
        state: store.snapshot(),
    }
}
