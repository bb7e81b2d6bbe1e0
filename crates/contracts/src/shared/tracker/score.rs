use std::collections::HashMap;

/// Source of an entity's truth score.
pub trait ScoreSource {
    fn score(&self, category: &str, entity_id: &str) -> Option<u32>;
}

/// Two-level table: category -> (entity id -> score).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticScoreTable {
    scores: HashMap<String, HashMap<String, u32>>,
}

impl StaticScoreTable {
    pub fn new(scores: HashMap<String, HashMap<String, u32>>) -> Self {
        Self { scores }
    }

    /// Placeholder scores shown until a real quality service exists.
    pub fn placeholder() -> Self {
        let mut table = Self::default();
        table.insert("datasets", "history", 80);
        table.insert("datasets", "purchases", 26);
        table.insert("streams", "purchaseStream", 44);
        table
    }

    pub fn insert(&mut self, category: &str, entity_id: &str, score: u32) {
        self.scores
            .entry(category.to_string())
            .or_default()
            .insert(entity_id.to_string(), score);
    }
}

impl ScoreSource for StaticScoreTable {
    fn score(&self, category: &str, entity_id: &str) -> Option<u32> {
        self.scores
            .get(category)
            .and_then(|by_id| by_id.get(entity_id))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_lookup() {
        let table = StaticScoreTable::placeholder();
        assert_eq!(table.score("datasets", "purchases"), Some(26));
        assert_eq!(table.score("streams", "purchaseStream"), Some(44));
        assert_eq!(table.score("views", "purchaseStream"), None);
        assert_eq!(table.score("datasets", "unknown"), None);
    }
}
