use std::cell::RefCell;
use std::rc::Rc;

use gloo::dialogs::alert;
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use log::{debug, error, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::constants::SPIN_INTERVAL_MS;
use shared::prize_source::parse_definitions;
use shared::{LotteryError, LotterySession, PrizeDefinition};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::prize_source_url;
use crate::hooks::local_storage::LocalStorageStore;

type SharedSession = Rc<RefCell<LotterySession<LocalStorageStore>>>;
type SpinTimer = Rc<RefCell<Option<Interval>>>;

/// Snapshot of the session for rendering, plus the actions the page can trigger.
#[derive(Clone, PartialEq)]
pub struct LotteryHandle {
    pub loading: bool,
    pub is_spinning: bool,
    pub displayed: Option<String>,
    pub notice: Option<&'static str>,
    pub remaining: usize,
    pub total: usize,
    pub summary: Vec<(String, usize)>,
    pub history: Vec<String>,
    pub toggle_spin: Callback<()>,
    pub undo_last_draw: Callback<()>,
    pub reset: Callback<()>,
}

async fn fetch_prizes() -> Result<Vec<PrizeDefinition>, LotteryError> {
    let response = Request::get(&prize_source_url())
        .send()
        .await
        .map_err(|e| LotteryError::PrizeSource(format!("Network error: {:?}", e)))?;

    if !response.ok() {
        return Err(LotteryError::PrizeSource(format!(
            "Error status: {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LotteryError::PrizeSource(format!("Error reading response: {:?}", e)))?;
    parse_definitions(&body)
}

fn stop_timer(timer: &SpinTimer) {
    timer.borrow_mut().take();
}

#[hook]
pub fn use_lottery() -> LotteryHandle {
    let session: SharedSession = use_mut_ref(|| LotterySession::new(LocalStorageStore::new()));
    let timer: SpinTimer = use_mut_ref(|| None::<Interval>);
    let notice = use_state(|| None::<&'static str>);
    let loading = use_state(|| true);
    // Bumped on reset so the prize list is fetched again
    let generation = use_state(|| 0u32);
    let update = use_force_update();

    {
        let session = session.clone();
        let timer = timer.clone();
        let loading = loading.clone();
        let update = update.clone();

        use_effect_with(*generation, move |_| {
            loading.set(true);
            spawn_local(async move {
                let result = fetch_prizes().await;
                match result {
                    Ok(definitions) => session.borrow_mut().load_prizes(definitions),
                    Err(e) => session.borrow_mut().prize_source_failed(&e),
                }
                if !session.borrow().is_spinning() {
                    stop_timer(&timer);
                }
                loading.set(false);
                update.force_update();
            });
            || ()
        });
    }

    // Drop the timer when the page goes away
    {
        let timer = timer.clone();
        use_effect_with((), move |_| move || stop_timer(&timer));
    }

    let toggle_spin = {
        let session = session.clone();
        let timer = timer.clone();
        let notice = notice.clone();
        let update = update.clone();

        Callback::from(move |_: ()| {
            let spinning = session.borrow().is_spinning();
            if spinning {
                let result = session.borrow_mut().stop_spin();
                stop_timer(&timer);
                match result {
                    Ok(Some(prize)) => debug!("Committed {:?}", prize),
                    Ok(None) => debug!("Stopped before the first tick"),
                    Err(e) if e.is_internal() => {
                        error!("Draw rejected: {}", e);
                        notice.set(Some(e.user_message()));
                    }
                    Err(e) => {
                        warn!("{}", e);
                        notice.set(Some(e.user_message()));
                    }
                }
            } else {
                let started = session.borrow_mut().start_spin();
                match started {
                    Ok(token) => {
                        notice.set(None);
                        let session = session.clone();
                        let update = update.clone();
                        let mut rng = SmallRng::from_entropy();
                        let interval = Interval::new(SPIN_INTERVAL_MS, move || {
                            let ticked = session.borrow_mut().tick(&token, &mut rng).is_some();
                            if ticked {
                                update.force_update();
                            }
                        });
                        *timer.borrow_mut() = Some(interval);
                    }
                    Err(LotteryError::AlreadySpinning) => debug!("Spin already running"),
                    Err(e) => notice.set(Some(e.user_message())),
                }
            }
            update.force_update();
        })
    };

    let undo_last_draw = {
        let session = session.clone();
        let update = update.clone();

        Callback::from(move |_: ()| {
            let result = session.borrow_mut().undo_last_draw();
            if let Err(e) = result {
                debug!("Undo refused: {}", e);
                alert(e.user_message());
            }
            update.force_update();
        })
    };

    let reset = {
        let session = session.clone();
        let timer = timer.clone();
        let notice = notice.clone();
        let generation = generation.clone();

        Callback::from(move |_: ()| {
            session.borrow_mut().reset();
            stop_timer(&timer);
            notice.set(None);
            generation.set(generation.wrapping_add(1));
        })
    };

    let state = session.borrow();
    LotteryHandle {
        loading: *loading,
        is_spinning: state.is_spinning(),
        displayed: state.displayed_prize().map(str::to_string),
        notice: *notice,
        remaining: state.remaining(),
        total: state.total_prizes(),
        summary: state.summary(),
        history: state.history().to_vec(),
        toggle_spin,
        undo_last_draw,
        reset,
    }
}
