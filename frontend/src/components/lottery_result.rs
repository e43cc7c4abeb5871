use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LotteryResultProps {
    pub is_visible: bool,
    pub on_close: Callback<()>,
    pub reset: Callback<()>,
    pub undo_last_draw: Callback<()>,
    pub draw_history: Vec<String>,
}

/// Side drawer listing every committed draw, with reset and undo actions.
#[function_component(LotteryResult)]
pub fn lottery_result(props: &LotteryResultProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the drawer must not reach the overlay
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_reset = {
        let reset = props.reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let on_undo = {
        let undo_last_draw = props.undo_last_draw.clone();
        Callback::from(move |_: MouseEvent| undo_last_draw.emit(()))
    };

    let overlay_visibility = if props.is_visible { "block" } else { "hidden" };
    let drawer_position = if props.is_visible { "translate-x-0" } else { "translate-x-full" };

    html! {
        <div class={classes!(styles::DRAWER_OVERLAY, overlay_visibility)} onclick={close.clone()}>
            <div class={classes!(styles::DRAWER, drawer_position)} onclick={keep_open}>
                <div class={styles::DRAWER_ACTIONS}>
                    <button class={styles::BUTTON_PANEL} onclick={on_reset}>{"Reset"}</button>
                    <button
                        class={styles::BUTTON_PANEL}
                        onclick={on_undo}
                        disabled={props.draw_history.is_empty()}
                    >
                        {"Undo"}
                    </button>
                    <button class={styles::BUTTON_PANEL} onclick={close}>{"Close"}</button>
                </div>
                <h2 class={styles::DRAWER_TITLE}>{"Draw results"}</h2>
                {
                    if props.draw_history.is_empty() {
                        html! { <p class={styles::DRAWER_EMPTY}>{"No prizes drawn yet"}</p> }
                    } else {
                        html! {
                            <ul class={styles::DRAWER_LIST} style="height: calc(100% - 6.25rem)">
                                { for props.draw_history.iter().enumerate().map(|(index, prize)| html! {
                                    <li key={index} class={styles::DRAWER_ITEM}>
                                        {format!("{}. {}", index + 1, prize)}
                                    </li>
                                }) }
                            </ul>
                        }
                    }
                }
            </div>
        </div>
    }
}
