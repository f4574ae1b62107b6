use serde_json::Value;

use crate::error::FetchError;
use crate::models::{Category, CategoryResult, ResultsSummary};

// Validate a /results body by hand so a missing field is reported by name,
// whatever status code came with it.
pub fn parse_results(body: &Value) -> Result<ResultsSummary, FetchError> {
    if !body.is_object() {
        return Err(FetchError::Malformed("expected a JSON object".to_string()));
    }

    let mut summary = ResultsSummary {
        total: body.get("total").and_then(Value::as_u64).unwrap_or(0),
        ..ResultsSummary::default()
    };
    for category in Category::ALL {
        *summary.category_mut(category) = parse_category(body, category)?;
    }

    Ok(summary)
}

fn parse_category(body: &Value, category: Category) -> Result<CategoryResult, FetchError> {
    let name = category.as_str();
    let entry = body
        .get(name)
        .filter(|entry| entry.is_object())
        .ok_or_else(|| FetchError::Malformed(format!("missing `{name}`")))?;

    let count = entry
        .get("count")
        .and_then(Value::as_u64)
        .ok_or_else(|| FetchError::Malformed(format!("`{name}.count` is not a count")))?;
    let percentage = entry
        .get("percentage")
        .and_then(Value::as_f64)
        .ok_or_else(|| FetchError::Malformed(format!("`{name}.percentage` is not a number")))?;

    Ok(CategoryResult { count, percentage })
}
