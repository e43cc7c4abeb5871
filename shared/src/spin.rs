use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use crate::error::LotteryError;

/// Armed flag shared between the controller and the timer driving it.
/// Once disarmed it never re-arms; every spin gets a fresh token.
#[derive(Debug, Clone)]
pub struct CancelToken {
    armed: Arc<AtomicBool>,
}

impl CancelToken {
    fn armed() -> Self {
        Self {
            armed: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    fn same_as(&self, other: &CancelToken) -> bool {
        Arc::ptr_eq(&self.armed, &other.armed)
    }
}

/// The prize shown on the latest tick and where it sat in the pool at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPick {
    pub prize: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning { pick: Option<CurrentPick> },
}

#[derive(Debug, Default)]
pub struct SpinController {
    state: SpinState,
    displayed: Option<String>,
    token: Option<CancelToken>,
}

impl SpinController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning { .. })
    }

    pub fn current_pick(&self) -> Option<&CurrentPick> {
        match &self.state {
            SpinState::Spinning { pick } => pick.as_ref(),
            SpinState::Idle => None,
        }
    }

    /// Name to display: the live pick while spinning, the last drawn prize afterwards.
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    pub fn clear_display(&mut self) {
        self.displayed = None;
    }

    /// Begins a spin and hands back the token the repeating timer must check.
    pub fn start(&mut self, pool_len: usize) -> Result<CancelToken, LotteryError> {
        if self.is_spinning() {
            return Err(LotteryError::AlreadySpinning);
        }
        if pool_len == 0 {
            return Err(LotteryError::PoolExhausted);
        }

        let token = CancelToken::armed();
        self.token = Some(token.clone());
        self.state = SpinState::Spinning { pick: None };
        Ok(token)
    }

    /// Picks a uniformly random pool entry. Ticks from a disarmed or stale token,
    /// or while idle, are ignored.
    pub fn tick<R: Rng>(
        &mut self,
        token: &CancelToken,
        pool: &[String],
        rng: &mut R,
    ) -> Option<&CurrentPick> {
        let current = self.token.as_ref()?;
        if !token.is_armed() || !token.same_as(current) || pool.is_empty() {
            return None;
        }

        let SpinState::Spinning { pick } = &mut self.state else {
            return None;
        };
        let index = rng.gen_range(0..pool.len());
        let prize = pool[index].clone();
        self.displayed = Some(prize.clone());
        *pick = Some(CurrentPick { prize, index });
        pick.as_ref()
    }

    /// Ends the spin and yields the pick to commit. Idle stops return `None`.
    pub fn stop(&mut self) -> Option<CurrentPick> {
        if let Some(token) = self.token.take() {
            token.disarm();
        }
        match std::mem::take(&mut self.state) {
            SpinState::Spinning { pick } => pick,
            SpinState::Idle => None,
        }
    }

    /// Ends the spin without producing a pick.
    pub fn cancel(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<String> {
        vec!["A".to_string(), "A".to_string(), "B".to_string()]
    }

    #[test]
    fn test_start_on_empty_pool_stays_idle() {
        let mut spin = SpinController::new();
        assert!(matches!(spin.start(0), Err(LotteryError::PoolExhausted)));
        assert_eq!(spin.state(), &SpinState::Idle);
    }

    #[test]
    fn test_second_start_is_refused() {
        let mut spin = SpinController::new();
        let token = spin.start(3).unwrap();
        assert!(matches!(spin.start(3), Err(LotteryError::AlreadySpinning)));
        assert!(token.is_armed());
    }

    #[test]
    fn test_tick_picks_valid_entry() {
        let mut spin = SpinController::new();
        let mut rng = StdRng::seed_from_u64(7);
        let pool = pool();
        let token = spin.start(pool.len()).unwrap();

        for _ in 0..50 {
            let pick = spin.tick(&token, &pool, &mut rng).cloned().unwrap();
            assert!(pick.index < pool.len());
            assert_eq!(pool[pick.index], pick.prize);
            assert_eq!(spin.displayed(), Some(pick.prize.as_str()));
        }
    }

    #[test]
    fn test_stop_disarms_and_returns_pick_once() {
        let mut spin = SpinController::new();
        let mut rng = StdRng::seed_from_u64(1);
        let pool = pool();
        let token = spin.start(pool.len()).unwrap();
        let picked = spin.tick(&token, &pool, &mut rng).cloned();

        assert_eq!(spin.stop(), picked);
        assert!(!token.is_armed());
        assert_eq!(spin.stop(), None);
        assert!(spin.tick(&token, &pool, &mut rng).is_none());
    }

    #[test]
    fn test_stop_without_tick_has_no_pick() {
        let mut spin = SpinController::new();
        spin.start(3).unwrap();
        assert_eq!(spin.stop(), None);
        assert!(!spin.is_spinning());
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut spin = SpinController::new();
        let mut rng = StdRng::seed_from_u64(3);
        let pool = pool();

        let old = spin.start(pool.len()).unwrap();
        spin.stop();
        let fresh = spin.start(pool.len()).unwrap();

        assert!(spin.tick(&old, &pool, &mut rng).is_none());
        assert!(spin.tick(&fresh, &pool, &mut rng).is_some());
    }

    #[test]
    fn test_display_survives_stop_until_next_tick() {
        let mut spin = SpinController::new();
        let mut rng = StdRng::seed_from_u64(11);
        let pool = pool();

        let token = spin.start(pool.len()).unwrap();
        let first = spin.tick(&token, &pool, &mut rng).cloned().unwrap();
        spin.stop();
        assert_eq!(spin.displayed(), Some(first.prize.as_str()));

        spin.start(pool.len()).unwrap();
        assert_eq!(spin.displayed(), Some(first.prize.as_str()));
        assert_eq!(spin.current_pick(), None);
    }
}
