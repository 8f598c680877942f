//! Record filters
//!
//! Linear scans over a slice; results keep the input order.

use crate::store::Joke;

/// Records whose `type` equals `kind` exactly (case-sensitive)
pub fn filter_by_type(jokes: &[Joke], kind: &str) -> Vec<Joke> {
    jokes.iter().filter(|j| j.kind == kind).cloned().collect()
}

/// Records whose setup or punchline contains `text`, ignoring case.
///
/// `None` or an empty string returns everything.
pub fn filter_by_text(jokes: &[Joke], text: Option<&str>) -> Vec<Joke> {
    let needle = match text {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return jokes.to_vec(),
    };

    jokes
        .iter()
        .filter(|j| {
            j.setup.to_lowercase().contains(&needle) || j.punchline.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NewJoke;

    fn jokes() -> Vec<Joke> {
        vec![
            NewJoke::new("general", "Why did the Chicken cross the road?", "To get to the other side.")
                .into_joke(1),
            NewJoke::new("programming", "How many programmers?", "None, that's a hardware problem.")
                .into_joke(2),
            NewJoke::new("General", "What do you call a fake noodle?", "An impasta, said the chicken.")
                .into_joke(3),
        ]
    }

    #[test]
    fn test_filter_by_type_is_case_sensitive() {
        let result = filter_by_type(&jokes(), "general");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_filter_by_type_no_matches() {
        assert!(filter_by_type(&jokes(), "knock-knock").is_empty());
    }

    #[test]
    fn test_filter_by_text_matches_setup_or_punchline() {
        let ids: Vec<u64> = filter_by_text(&jokes(), Some("CHICKEN"))
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_by_text_empty_returns_all() {
        assert_eq!(filter_by_text(&jokes(), None).len(), 3);
        assert_eq!(filter_by_text(&jokes(), Some("")).len(), 3);
    }
}
