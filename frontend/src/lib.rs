pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use crate::pages::lottery::LotteryPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <LotteryPage />
        </div>
    }
}
