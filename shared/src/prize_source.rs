use log::debug;
use validator::Validate;

use crate::error::LotteryError;
use crate::prize_pool::PrizeDefinition;

/// Parses the prize list document, a JSON array of `{ "name", "count" }` records.
pub fn parse_definitions(raw: &str) -> Result<Vec<PrizeDefinition>, LotteryError> {
    let definitions: Vec<PrizeDefinition> = serde_json::from_str(raw)?;
    for definition in &definitions {
        definition.validate()?;
    }
    Ok(merge_definitions(definitions))
}

/// Folds entries sharing a name into the first one, summing their counts.
pub fn merge_definitions(definitions: Vec<PrizeDefinition>) -> Vec<PrizeDefinition> {
    let mut merged: Vec<PrizeDefinition> = Vec::with_capacity(definitions.len());
    for definition in definitions {
        match merged.iter_mut().find(|d| d.name == definition.name) {
            Some(existing) => {
                debug!("Merging duplicate prize {:?}", definition.name);
                existing.count = existing.count.saturating_add(definition.count);
            }
            None => merged.push(definition),
        }
    }
    merged
}

pub fn total_count(definitions: &[PrizeDefinition]) -> usize {
    definitions.iter().map(|d| d.count as usize).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_source_order() {
        let raw = r#"[{"name":"Laptop","count":1},{"name":"Mug","count":3}]"#;
        let definitions = parse_definitions(raw).unwrap();
        assert_eq!(
            definitions,
            vec![PrizeDefinition::new("Laptop", 1), PrizeDefinition::new("Mug", 3)]
        );
        assert_eq!(total_count(&definitions), 4);
    }

    #[test]
    fn test_parse_merges_duplicates() {
        let raw = r#"[{"name":"Mug","count":2},{"name":"Pen","count":1},{"name":"Mug","count":1}]"#;
        let definitions = parse_definitions(raw).unwrap();
        assert_eq!(
            definitions,
            vec![PrizeDefinition::new("Mug", 3), PrizeDefinition::new("Pen", 1)]
        );
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        let raw = r#"[{"name":"Mug","count":-1}]"#;
        assert!(matches!(parse_definitions(raw), Err(LotteryError::PrizeSource(_))));
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        let raw = r#"[{"name":" ","count":1}]"#;
        assert!(matches!(parse_definitions(raw), Err(LotteryError::PrizeSource(_))));
    }

    #[test]
    fn test_zero_count_is_allowed() {
        let definitions = parse_definitions(r#"[{"name":"Car","count":0}]"#).unwrap();
        assert_eq!(total_count(&definitions), 0);
    }
}
