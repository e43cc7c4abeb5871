use yew::prelude::*;
use shared::constants::IDLE_DISPLAY_TEXT;
use crate::components::{LotteryResult, SpinButton};
use crate::hooks::use_lottery;
use crate::styles;

#[function_component(LotteryPage)]
pub fn lottery_page() -> Html {
    let lottery = use_lottery();
    let is_result_visible = use_state(|| false);

    let toggle_result = {
        let is_result_visible = is_result_visible.clone();
        Callback::from(move |_: ()| is_result_visible.set(!*is_result_visible))
    };

    let show_result = {
        let toggle_result = toggle_result.clone();
        Callback::from(move |_: MouseEvent| toggle_result.emit(()))
    };

    // A notice (empty pool, failed commit) replaces the prize until the next spin
    let (display_text, display_class) = match (lottery.notice, &lottery.displayed) {
        (Some(notice), _) => (notice.to_string(), styles::PRIZE_DISPLAY_NOTICE),
        (None, Some(prize)) => (prize.clone(), styles::PRIZE_DISPLAY),
        (None, None) => (IDLE_DISPLAY_TEXT.to_string(), styles::PRIZE_DISPLAY),
    };

    html! {
        <div class={styles::PAGE}>
            <h1 class={styles::TITLE}>
                <span class={styles::TITLE_TEXT}>{"Annual Raffle"}</span>
            </h1>
            <div class={display_class}>{display_text}</div>
            <SpinButton
                is_spinning={lottery.is_spinning}
                disabled={lottery.loading}
                onclick={lottery.toggle_spin.clone()}
            />
            {
                if lottery.loading {
                    html! { <div class={styles::LOADING}>{"Loading prizes..."}</div> }
                } else {
                    html! {
                        <div class={styles::REMAINING}>
                            {format!("Prizes remaining: {} / {}", lottery.remaining, lottery.total)}
                            <div class={styles::REMAINING_BREAKDOWN}>
                                { for lottery.summary.iter().map(|(name, count)| html! {
                                    <span key={name.clone()} class={styles::REMAINING_CHIP}>
                                        {format!("{} × {}", name, count)}
                                    </span>
                                }) }
                            </div>
                        </div>
                    }
                }
            }
            <div class={styles::HISTORY_TOGGLE}>
                <button class={styles::BUTTON_PANEL} onclick={show_result}>{"Show results"}</button>
            </div>
            <LotteryResult
                is_visible={*is_result_visible}
                on_close={toggle_result}
                reset={lottery.reset.clone()}
                undo_last_draw={lottery.undo_last_draw.clone()}
                draw_history={lottery.history.clone()}
            />
        </div>
    }
}
