use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::LotteryError;

/// One entry of the prize list: a prize name and how many of it can be won in total.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
pub struct PrizeDefinition {
    #[validate(custom = "validate_prize_name")]
    pub name: String,
    pub count: u32,
}

impl PrizeDefinition {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self { name: name.into(), count }
    }
}

pub fn validate_prize_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("empty_prize_name"));
    }
    Ok(())
}

/// Remaining prize instances, one entry per unit that can still be drawn.
pub type PrizePool = Vec<String>;

/// Committed draws in the order they happened.
pub type DrawHistory = Vec<String>;

fn tally(names: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Builds the pool from the prize list minus everything already in `history`.
/// Expansion follows the order of `definitions`.
pub fn load_pool(definitions: &[PrizeDefinition], history: &[String]) -> PrizePool {
    let drawn = tally(history);
    let total: usize = definitions.iter().map(|d| d.count as usize).sum();
    let mut pool = Vec::with_capacity(total.saturating_sub(history.len()));

    for definition in definitions {
        let available = definition.count as usize;
        let taken = drawn.get(definition.name.as_str()).copied().unwrap_or(0);
        if taken > available {
            warn!(
                "History holds {} draws of {:?} but only {} exist",
                taken, definition.name, available
            );
        }
        let remaining = available.saturating_sub(taken);
        pool.extend(std::iter::repeat(definition.name.clone()).take(remaining));
    }

    pool
}

/// Moves `pool[index]` into the history. The commit is rejected as a whole when
/// the index is out of range or does not hold `prize`.
pub fn commit_draw(
    pool: &mut PrizePool,
    history: &mut DrawHistory,
    prize: &str,
    index: usize,
) -> Result<(), LotteryError> {
    let found = pool.get(index).ok_or(LotteryError::DrawOutOfRange {
        index,
        len: pool.len(),
    })?;
    if found != prize {
        return Err(LotteryError::DrawMismatch {
            index,
            expected: prize.to_string(),
            found: found.clone(),
        });
    }

    let drawn = pool.remove(index);
    history.push(drawn);
    Ok(())
}

/// Returns the most recent draw to the end of the pool.
pub fn undo(pool: &mut PrizePool, history: &mut DrawHistory) -> Result<String, LotteryError> {
    let last = history.pop().ok_or(LotteryError::NothingToUndo)?;
    pool.push(last.clone());
    Ok(last)
}

pub fn reset(history: &mut DrawHistory) {
    history.clear();
}

/// Remaining units per prize name, in first-seen order.
pub fn pool_summary(pool: &[String]) -> Vec<(String, usize)> {
    let mut summary: Vec<(String, usize)> = Vec::new();
    for name in pool {
        match summary.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => summary.push((name.clone(), 1)),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definitions() -> Vec<PrizeDefinition> {
        vec![PrizeDefinition::new("A", 2), PrizeDefinition::new("B", 1)]
    }

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    #[test]
    fn test_load_pool_expands_in_order() {
        let pool = load_pool(&definitions(), &[]);
        assert_eq!(pool, vec!["A", "A", "B"]);
    }

    #[test]
    fn test_load_pool_subtracts_history() {
        let pool = load_pool(&definitions(), &["A".to_string()]);
        assert_eq!(pool, vec!["A", "B"]);
    }

    #[test]
    fn test_load_pool_saturates_on_overdrawn_history() {
        let history = vec!["B".to_string(), "B".to_string(), "Z".to_string()];
        let pool = load_pool(&definitions(), &history);
        assert_eq!(pool, vec!["A", "A"]);
    }

    #[test]
    fn test_commit_then_undo_restores_state() {
        let mut pool = load_pool(&definitions(), &[]);
        let mut history = DrawHistory::new();

        commit_draw(&mut pool, &mut history, "B", 2).unwrap();
        assert_eq!(pool, vec!["A", "A"]);
        assert_eq!(history, vec!["B"]);

        let returned = undo(&mut pool, &mut history).unwrap();
        assert_eq!(returned, "B");
        assert_eq!(sorted(pool), vec!["A", "A", "B"]);
        assert!(history.is_empty());
    }

    #[test]
    fn test_commit_out_of_range_is_rejected() {
        let mut pool = load_pool(&definitions(), &[]);
        let mut history = DrawHistory::new();

        let err = commit_draw(&mut pool, &mut history, "A", 3).unwrap_err();
        assert!(matches!(err, LotteryError::DrawOutOfRange { index: 3, len: 3 }));
        assert_eq!(pool.len(), 3);
        assert!(history.is_empty());
    }

    #[test]
    fn test_commit_mismatch_is_rejected() {
        let mut pool = load_pool(&definitions(), &[]);
        let mut history = DrawHistory::new();

        let err = commit_draw(&mut pool, &mut history, "B", 0).unwrap_err();
        assert!(matches!(err, LotteryError::DrawMismatch { index: 0, .. }));
        assert_eq!(pool, vec!["A", "A", "B"]);
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut pool = load_pool(&definitions(), &[]);
        let mut history = DrawHistory::new();

        let err = undo(&mut pool, &mut history).unwrap_err();
        assert!(matches!(err, LotteryError::NothingToUndo));
        assert_eq!(pool, vec!["A", "A", "B"]);
    }

    #[test]
    fn test_conservation_across_draws() {
        let defs = vec![
            PrizeDefinition::new("Mug", 3),
            PrizeDefinition::new("Laptop", 1),
            PrizeDefinition::new("Sticker", 5),
        ];
        let total: usize = defs.iter().map(|d| d.count as usize).sum();
        let mut pool = load_pool(&defs, &[]);
        let mut history = DrawHistory::new();

        for step in 0..7 {
            if step % 3 == 2 {
                undo(&mut pool, &mut history).unwrap();
            } else {
                let index = step % pool.len();
                let prize = pool[index].clone();
                commit_draw(&mut pool, &mut history, &prize, index).unwrap();
            }
            assert_eq!(pool.len() + history.len(), total);
            assert_eq!(sorted(load_pool(&defs, &history)), sorted(pool.clone()));
        }
    }

    #[test]
    fn test_reset_clears_history() {
        let mut history = vec!["A".to_string(), "B".to_string()];
        reset(&mut history);
        reset(&mut history);
        assert!(history.is_empty());
        assert_eq!(load_pool(&definitions(), &history), vec!["A", "A", "B"]);
    }

    #[test]
    fn test_pool_summary() {
        let pool: PrizePool = vec!["A".into(), "B".into(), "A".into()];
        assert_eq!(pool_summary(&pool), vec![("A".to_string(), 2), ("B".to_string(), 1)]);
    }

    #[test]
    fn test_prize_name_validation() {
        assert!(PrizeDefinition::new("Mug", 1).validate().is_ok());
        assert!(PrizeDefinition::new("   ", 1).validate().is_err());
    }
}
