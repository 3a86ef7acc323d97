//! Choice page: a column of buttons, each navigating to another page.

use recipe_calculator::config::CHOICES;
use recipe_calculator::dom::{init_logging, navigate, ViewportWatcher};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ChoiceButtonProps {
    label: AttrValue,
    target: AttrValue,
}

#[function_component(ChoiceButton)]
fn choice_button(props: &ChoiceButtonProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        Callback::from(move |_: MouseEvent| navigate(&target))
    };
    html! {
        <button type="button" class="choice-btn" data-target={props.target.clone()} {onclick}>
            { props.label.clone() }
        </button>
    }
}

#[function_component(ChoicePage)]
fn choice_page() -> Html {
    use_effect_with((), |_| {
        let watcher = ViewportWatcher::install();
        move || drop(watcher)
    });

    html! {
        <div class="choices">
            { for CHOICES.iter().map(|&(label, target)| html! {
                <ChoiceButton {label} {target} />
            }) }
        </div>
    }
}

fn main() {
    init_logging();
    yew::Renderer::<ChoicePage>::new().render();
}
