use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<()>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };

    let (label, class) = if props.is_spinning {
        ("Stop", styles::BUTTON_STOP)
    } else {
        ("Draw", styles::BUTTON_DRAW)
    };

    html! {
        <button
            class={class}
            disabled={props.disabled && !props.is_spinning}
            {onclick}
        >
            {label}
        </button>
    }
}
