use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Request body for creating a receipt. All four fields are required; they
/// are optional here so a missing key answers 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateReceiptRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub youtube_link: Option<String>,
}

/// Partial update: only present fields change.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateReceiptRequest {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub ingredients: Option<String>,
    pub youtube_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReceiptOut {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub youtube_link: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Split a comma-separated ingredient list, trimming each segment and
/// dropping segments that are empty after the trim. Applied identically on
/// create and update.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_and_preserves_order() {
        assert_eq!(
            split_ingredients("cheese, tomato , basil"),
            vec!["cheese", "tomato", "basil"]
        );
    }

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(split_ingredients("cheese,,basil,"), vec!["cheese", "basil"]);
        assert!(split_ingredients("").is_empty());
        assert!(split_ingredients(" , ,").is_empty());
    }

    #[test]
    fn rejoin_then_resplit_is_a_fixpoint() {
        let first = split_ingredients("cheese, tomato , basil");
        let rejoined = first.join(", ");
        assert_eq!(split_ingredients(&rejoined), first);
    }
}
