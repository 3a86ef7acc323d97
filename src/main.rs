//! Recipe calculator page using Yew.
//! Wires the calculator state hook to the view components.

use recipe_calculator::dom::{init_logging, pulse, ViewportWatcher};
use recipe_calculator::FieldId;
use web_sys::HtmlElement;
use yew::prelude::*;

mod components;
mod hooks;

use components::{NumberField, Popup, ResultSlots};
use hooks::use_calculator;

/// Primary application component.
#[function_component(App)]
fn app() -> Html {
    let calc = use_calculator();
    let calculate_btn = use_node_ref();

    // Mirror the viewport height for as long as the page is mounted
    use_effect_with((), |_| {
        let watcher = ViewportWatcher::install();
        move || drop(watcher)
    });

    let on_calculate = {
        let calc = calc.clone();
        let calculate_btn = calculate_btn.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(btn) = calculate_btn.cast::<HtmlElement>() {
                pulse(&btn);
            }
            calc.calculate();
        })
    };

    let fields = FieldId::ALL.map(|field| {
        html! {
            <NumberField
                {field}
                value={calc.state.text(field).to_string()}
                oninput={calc.on_input(field)}
                onfocus={calc.on_focus(field)}
                onblur={calc.on_blur(field)}
                onpress={calc.on_press(field)}
                onrelease={calc.on_release(field)}
            />
        }
    });

    let [water, mold, flour, weight] = calc.state.result_texts();

    html! {
        <div class="calculator">
            <div class="inputs">
                { for fields }
            </div>
            <button id="calculate-btn"
                class="calculate-btn"
                ref={calculate_btn}
                onclick={on_calculate}
            >
                { "Calculate" }
            </button>
            <ResultSlots {water} {mold} {flour} {weight} />
            <Popup view={calc.state.popup.clone()} />
        </div>
    }
}

/// Entry point: initializes logging and the Yew renderer for the App component.
fn main() {
    init_logging();
    log::info!("Mounting recipe calculator");
    yew::Renderer::<App>::new().render();
}
