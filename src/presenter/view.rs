use crate::models::{Category, ResultsSummary};

pub const PLACEHOLDER_PERCENTAGE: &str = "--%";
pub const PLACEHOLDER_COUNT: &str = "(- votes)";
pub const PLACEHOLDER_TOTAL: &str = "Total Votes: --";

/// How one category's panel is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub category: Category,
    /// Share of the bar, 0 to 100.
    pub width: f64,
    pub visible: bool,
    pub percentage_text: String,
    pub count_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub cats: PanelView,
    pub dogs: PanelView,
    pub total_text: String,
    pub message: Option<String>,
}

impl ResultsView {
    pub fn from_summary(summary: &ResultsSummary) -> Self {
        let panel = |category: Category| {
            let result = summary.category(category);
            PanelView {
                category,
                // No votes at all still draws an even split
                width: if summary.total == 0 { 50.0 } else { result.percentage },
                visible: !(result.count == 0 && summary.total > 0),
                percentage_text: format_percentage(result.percentage),
                count_text: format_count(result.count),
            }
        };

        Self {
            cats: panel(Category::Cats),
            dogs: panel(Category::Dogs),
            total_text: format!("Total Votes: {}", summary.total),
            message: None,
        }
    }

    /// Placeholder layout shown while results cannot be loaded.
    pub fn unavailable(message: impl Into<String>) -> Self {
        let panel = |category: Category| PanelView {
            category,
            width: 50.0,
            visible: true,
            percentage_text: PLACEHOLDER_PERCENTAGE.to_string(),
            count_text: PLACEHOLDER_COUNT.to_string(),
        };

        Self {
            cats: panel(Category::Cats),
            dogs: panel(Category::Dogs),
            total_text: PLACEHOLDER_TOTAL.to_string(),
            message: Some(message.into()),
        }
    }

    pub fn panels(&self) -> [&PanelView; 2] {
        [&self.cats, &self.dogs]
    }
}

pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", value)
}

pub fn format_count(count: u64) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("({} vote{})", count, plural)
}
