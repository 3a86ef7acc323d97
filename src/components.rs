//! Pure Yew view components for the calculator page.
//!
//! These render from props only; all behaviour comes in through callbacks.

use recipe_calculator::{Direction, FieldId, PopupView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ControlButtonProps {
    field: FieldId,
    direction: Direction,
    onpress: Callback<Direction>,
    onrelease: Callback<Direction>,
}

/// Press-and-hold capable +/− button. Touch start suppresses the emulated
/// mouse events that would otherwise press it a second time.
#[function_component(ControlButtonView)]
fn control_button(props: &ControlButtonProps) -> Html {
    let direction = props.direction;
    let press = props.onpress.reform(move |_: ()| direction);
    let release = props.onrelease.reform(move |_: ()| direction);

    let onmousedown = press.reform(|_: MouseEvent| ());
    let onmouseup = release.reform(|_: MouseEvent| ());
    let onmouseleave = release.reform(|_: MouseEvent| ());
    let ontouchstart = Callback::from(move |e: TouchEvent| {
        e.prevent_default();
        press.emit(());
    });
    let ontouchend = release.reform(|_: TouchEvent| ());
    let ontouchcancel = release.reform(|_: TouchEvent| ());

    let direction_class = match direction {
        Direction::Increase => "increase",
        Direction::Decrease => "decrease",
    };

    html! {
        <button type="button"
            class={classes!("control-btn", direction_class)}
            data-target={props.field.element_id()}
            {onmousedown}
            {onmouseup}
            {onmouseleave}
            {ontouchstart}
            {ontouchend}
            {ontouchcancel}
        >
            { direction.symbol() }
        </button>
    }
}

/// Numeric text field flanked by its decrease / increase buttons.
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub field: FieldId,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    pub onfocus: Callback<FocusEvent>,
    pub onblur: Callback<FocusEvent>,
    pub onpress: Callback<Direction>,
    pub onrelease: Callback<Direction>,
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    let id = props.field.element_id();
    html! {
        <div class="form-group">
            <label for={id}>{ props.field.label() }</label>
            <div class="number-control">
                <ControlButtonView
                    field={props.field}
                    direction={Direction::Decrease}
                    onpress={props.onpress.clone()}
                    onrelease={props.onrelease.clone()}
                />
                <input type="text"
                    inputmode="numeric"
                    pattern="[0-9]*"
                    {id}
                    value={props.value.clone()}
                    oninput={props.oninput.clone()}
                    onfocus={props.onfocus.clone()}
                    onblur={props.onblur.clone()}
                />
                <ControlButtonView
                    field={props.field}
                    direction={Direction::Increase}
                    onpress={props.onpress.clone()}
                    onrelease={props.onrelease.clone()}
                />
            </div>
        </div>
    }
}

/// The four read-only result slots.
#[derive(Properties, PartialEq)]
pub struct ResultSlotsProps {
    pub water: AttrValue,
    pub mold: AttrValue,
    pub flour: AttrValue,
    pub weight: AttrValue,
}

#[function_component(ResultSlots)]
pub fn result_slots(props: &ResultSlotsProps) -> Html {
    let slot = |id: &'static str, label: &'static str, value: &AttrValue| {
        html! {
            <div class="result-row">
                <span class="result-label">{ label }</span>
                <span class="result-value" {id}>{ value.clone() }</span>
            </div>
        }
    };

    html! {
        <div class="results">
            { slot("water-result", "Water", &props.water) }
            { slot("mold-result", "Mold", &props.mold) }
            { slot("flour-result", "Flour", &props.flour) }
            { slot("weight-result", "Weight", &props.weight) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    pub view: PopupView,
}

#[function_component(Popup)]
pub fn popup(props: &PopupProps) -> Html {
    let display = if props.view.is_visible() {
        "display: block;"
    } else {
        "display: none;"
    };
    html! {
        <div id="popup-notification" class={props.view.classes()} style={display}>
            { props.view.message.clone() }
        </div>
    }
}
