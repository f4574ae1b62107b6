use serde::{Deserialize, Serialize};

// The two fixed vote options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cats,
    Dogs,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Cats, Category::Dogs];

    // Match a stored label against the known options, ignoring case
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "cats" => Some(Category::Cats),
            "dogs" => Some(Category::Dogs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cats => "cats",
            Category::Dogs => "dogs",
        }
    }
}

// One group from `SELECT vote, COUNT(voter_id) ... GROUP BY vote`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    pub vote: String,
    pub count: i64,
}

impl VoteTally {
    pub fn new(vote: impl Into<String>, count: i64) -> Self {
        Self {
            vote: vote.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub count: u64,
    pub percentage: f64,
}

/// Per-category counts and percentages, recomputed on every request.
///
/// `cats.count + dogs.count == total` always holds. When `total` is zero both
/// percentages are zero, otherwise they sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub cats: CategoryResult,
    pub dogs: CategoryResult,
    pub total: u64,
}

impl ResultsSummary {
    pub fn category(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Cats => &self.cats,
            Category::Dogs => &self.dogs,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut CategoryResult {
        match category {
            Category::Cats => &mut self.cats,
            Category::Dogs => &mut self.dogs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_matching_ignores_case() {
        assert_eq!(Category::from_label("Cats"), Some(Category::Cats));
        assert_eq!(Category::from_label("CATS"), Some(Category::Cats));
        assert_eq!(Category::from_label("cats"), Some(Category::Cats));
        assert_eq!(Category::from_label("dOgS"), Some(Category::Dogs));
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(Category::from_label("Birds"), None);
        assert_eq!(Category::from_label(""), None);
        assert_eq!(Category::from_label("cat"), None);
        // Only case is folded; padding makes it a different label
        assert_eq!(Category::from_label("Cats "), None);
        assert_eq!(Category::from_label(" dogs"), None);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = ResultsSummary {
            cats: CategoryResult { count: 3, percentage: 75.0 },
            dogs: CategoryResult { count: 1, percentage: 25.0 },
            total: 4,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "cats": { "count": 3, "percentage": 75.0 },
                "dogs": { "count": 1, "percentage": 25.0 },
                "total": 4
            })
        );

        let parsed: ResultsSummary = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, summary);
    }
}
