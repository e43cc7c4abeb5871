use log::{debug, error, info, warn};
use rand::Rng;

use crate::error::LotteryError;
use crate::prize_pool::{self, DrawHistory, PrizeDefinition, PrizePool};
use crate::prize_source::{merge_definitions, total_count};
use crate::spin::{CancelToken, CurrentPick, SpinController};
use crate::storage::{load_history, save_history, HistoryStore};

/// All state of one raffle session. Every mutation goes through these methods;
/// the draw history is written back to the store after each one.
pub struct LotterySession<S: HistoryStore> {
    definitions: Vec<PrizeDefinition>,
    pool: PrizePool,
    history: DrawHistory,
    spin: SpinController,
    store: S,
}

impl<S: HistoryStore> LotterySession<S> {
    pub fn new(store: S) -> Self {
        let history = match load_history(&store) {
            Ok(history) => {
                info!("Restored {} draws from storage", history.len());
                history
            }
            Err(e) => {
                warn!("Ignoring stored draw history: {}", e);
                DrawHistory::new()
            }
        };

        Self {
            definitions: Vec::new(),
            pool: PrizePool::new(),
            history,
            spin: SpinController::new(),
            store,
        }
    }

    /// Installs the prize list and derives the pool from it and the current history.
    pub fn load_prizes(&mut self, definitions: Vec<PrizeDefinition>) {
        if self.spin.is_spinning() {
            debug!("Prize list reloaded during a spin; cancelling it");
            self.spin.cancel();
        }
        self.definitions = merge_definitions(definitions);
        self.refresh_pool();
        info!(
            "Loaded {} prizes, {} remaining",
            total_count(&self.definitions),
            self.pool.len()
        );
    }

    pub fn prize_source_failed(&mut self, err: &LotteryError) {
        error!("Error loading lottery data: {}", err);
        self.spin.cancel();
        self.pool.clear();
    }

    pub fn start_spin(&mut self) -> Result<CancelToken, LotteryError> {
        let token = self.spin.start(self.pool.len())?;
        debug!("Spin started over {} prizes", self.pool.len());
        Ok(token)
    }

    pub fn tick<R: Rng>(&mut self, token: &CancelToken, rng: &mut R) -> Option<&CurrentPick> {
        self.spin.tick(token, &self.pool, rng)
    }

    /// Stops the spin and commits the prize it landed on, if any.
    pub fn stop_spin(&mut self) -> Result<Option<String>, LotteryError> {
        let Some(pick) = self.spin.stop() else {
            return Ok(None);
        };

        prize_pool::commit_draw(&mut self.pool, &mut self.history, &pick.prize, pick.index)?;
        info!("Drew {:?} ({} left)", pick.prize, self.pool.len());
        self.persist();
        Ok(Some(pick.prize))
    }

    pub fn undo_last_draw(&mut self) -> Result<String, LotteryError> {
        let prize = prize_pool::undo(&mut self.pool, &mut self.history)?;
        info!("Returned {:?} to the pool", prize);
        self.persist();
        // A running spin holds a pool index; rebuilding would reorder the pool under it
        if self.history.is_empty() && !self.spin.is_spinning() {
            self.refresh_pool();
        }
        Ok(prize)
    }

    /// Clears the history and rebuilds the full pool. Any running spin is dropped
    /// without committing.
    pub fn reset(&mut self) {
        self.spin.cancel();
        self.spin.clear_display();
        prize_pool::reset(&mut self.history);
        self.persist();
        self.refresh_pool();
        info!("Session reset, {} prizes in the pool", self.pool.len());
    }

    fn refresh_pool(&mut self) {
        self.pool = prize_pool::load_pool(&self.definitions, &self.history);
    }

    /// Writes the history to the store. Failures are logged and state is kept.
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            error!("Failed to persist draw history: {}", e);
        }
    }

    pub fn try_persist(&mut self) -> Result<(), LotteryError> {
        save_history(&mut self.store, &self.history)?;
        Ok(())
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn total_prizes(&self) -> usize {
        total_count(&self.definitions)
    }

    pub fn summary(&self) -> Vec<(String, usize)> {
        prize_pool::pool_summary(&self.pool)
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning()
    }

    pub fn displayed_prize(&self) -> Option<&str> {
        self.spin.displayed()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
