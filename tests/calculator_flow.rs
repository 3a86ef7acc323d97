use recipe_calculator::config::{MAX_VALUE, SOY_MULTIPLIER};
use recipe_calculator::{
    AppState, Calculator, ControlButton, ConversionError, Direction, FieldId, HoldPhase,
    ManualTimers, PopupPhase,
};

fn calculator() -> (ManualTimers, Calculator<ManualTimers>) {
    let timers = ManualTimers::new();
    (timers.clone(), Calculator::new(timers))
}

fn text(calc: &Calculator<ManualTimers>, field: FieldId) -> String {
    calc.store().read(|s| s.text(field).to_string())
}

#[test]
fn typing_roll_updates_soy_after_the_debounce() {
    let (timers, mut calc) = calculator();
    calc.focus(FieldId::Roll);
    calc.input(FieldId::Roll, "3");
    calc.input(FieldId::Roll, "30");
    timers.advance(300);
    assert_eq!(text(&calc, FieldId::Soy), "3960");
    timers.advance(20);
    assert_eq!(text(&calc, FieldId::Soy), (30 * SOY_MULTIPLIER).to_string());
}

#[test]
fn leaving_roll_before_the_debounce_keeps_soy() {
    let (timers, mut calc) = calculator();
    calc.focus(FieldId::Roll);
    calc.input(FieldId::Roll, "30");
    calc.blur(FieldId::Roll);
    calc.focus(FieldId::Soy);
    timers.advance(1_000);
    assert_eq!(text(&calc, FieldId::Roll), "30");
    assert_eq!(text(&calc, FieldId::Soy), "3960");
}

#[test]
fn typed_garbage_is_stripped_and_blank_is_allowed() {
    let (timers, mut calc) = calculator();
    calc.focus(FieldId::Roll);
    assert_eq!(calc.input(FieldId::Roll, "4a5"), "45");
    assert_eq!(calc.input(FieldId::Roll, ""), "");
    timers.advance(320);
    assert_eq!(text(&calc, FieldId::Roll), "");
    assert_eq!(text(&calc, FieldId::Soy), "3960");
}

#[test]
fn button_changes_to_roll_sync_soy_without_delay() {
    let (_timers, mut calc) = calculator();
    let roll_down = ControlButton::new(FieldId::Roll, Direction::Decrease);
    calc.press(roll_down);
    calc.release(roll_down);
    assert_eq!(text(&calc, FieldId::Roll), "21");
    assert_eq!(text(&calc, FieldId::Soy), (21 * SOY_MULTIPLIER).to_string());
}

#[test]
fn pending_debounce_does_not_undo_a_button_change() {
    let (timers, mut calc) = calculator();
    let roll_up = ControlButton::new(FieldId::Roll, Direction::Increase);
    calc.focus(FieldId::Roll);
    calc.input(FieldId::Roll, "10");
    // Pressing the button takes focus away from the input.
    calc.blur(FieldId::Roll);
    calc.press(roll_up);
    calc.release(roll_up);
    timers.advance(320);
    assert_eq!(text(&calc, FieldId::Roll), "11");
    assert_eq!(text(&calc, FieldId::Soy), (11 * SOY_MULTIPLIER).to_string());
}

#[test]
fn hold_accelerates_and_release_stops_everything() {
    let (timers, mut calc) = calculator();
    let roll_up = ControlButton::new(FieldId::Roll, Direction::Increase);

    calc.press(roll_up);
    assert_eq!(text(&calc, FieldId::Roll), "23");
    timers.advance(700);
    assert_eq!(text(&calc, FieldId::Roll), "25");
    assert_eq!(calc.hold_phase(roll_up), Some(HoldPhase::Slow));

    timers.advance(800);
    assert_eq!(calc.hold_phase(roll_up), Some(HoldPhase::Fast));
    let at_switch: u64 = text(&calc, FieldId::Roll).parse().unwrap();
    timers.advance(200);
    let after: u64 = text(&calc, FieldId::Roll).parse().unwrap();
    assert_eq!(after - at_switch, 10);

    calc.release(roll_up);
    assert_eq!(timers.pending(), 0);
    timers.advance(5_000);
    assert_eq!(text(&calc, FieldId::Roll), after.to_string());
}

#[test]
fn holding_past_the_maximum_clamps() {
    let timers = ManualTimers::new();
    let mut calc = Calculator::with_state(
        AppState {
            roll: (MAX_VALUE - 2).to_string(),
            ..AppState::default()
        },
        timers.clone(),
    );
    let roll_up = ControlButton::new(FieldId::Roll, Direction::Increase);
    calc.press(roll_up);
    timers.advance(2_000);
    calc.release(roll_up);
    assert_eq!(text(&calc, FieldId::Roll), MAX_VALUE.to_string());
    assert_eq!(
        text(&calc, FieldId::Soy),
        (MAX_VALUE * SOY_MULTIPLIER).to_string()
    );
}

#[test]
fn calculate_writes_results() {
    let (_timers, mut calc) = calculator();
    assert_eq!(
        calc.store().read(|s| s.result_texts()),
        ["-", "-", "-", "-"].map(String::from)
    );

    calc.calculate().unwrap();
    assert_eq!(
        calc.store().read(|s| s.result_texts()),
        ["79", "17.60", "2640", "304"].map(String::from)
    );
}

#[test]
fn invalid_input_shows_a_transient_popup() {
    let (timers, mut calc) = calculator();
    calc.input(FieldId::Roll, "");
    assert_eq!(calc.calculate(), Err(ConversionError::MissingRoll));

    let state = calc.store().snapshot();
    assert_eq!(state.results, None);
    assert_eq!(state.popup.message, "Invalid input");
    assert_eq!(state.popup.phase, PopupPhase::Shown);

    timers.advance(1_200);
    assert_eq!(calc.store().read(|s| s.popup.phase), PopupPhase::Fading);
    timers.advance(500);
    assert_eq!(calc.store().read(|s| s.popup.phase), PopupPhase::Hidden);
}

#[test]
fn observer_sees_timer_driven_changes() {
    use std::cell::Cell;
    use std::rc::Rc;

    let (timers, mut calc) = calculator();
    let renders = Rc::new(Cell::new(0));
    let r = renders.clone();
    calc.store().set_observer(move || r.set(r.get() + 1));

    calc.focus(FieldId::Roll);
    calc.input(FieldId::Roll, "5");
    let before = renders.get();
    timers.advance(320);
    assert_eq!(renders.get(), before + 1);
}
