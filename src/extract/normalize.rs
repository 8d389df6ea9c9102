use std::collections::HashSet;

/// Shared cleanup stage applied to every strategy's output: trim each
/// item, drop items that are empty after trimming, and collapse
/// case-insensitive duplicates keeping the first occurrence in its
/// original casing and position.
pub fn normalize(items: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<String> = Vec::new();

    for item in items {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            unique.push(trimmed.to_string());
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_occurrence_wins_case_insensitively() {
        let items = strings(&["Buy milk", "buy milk", "BUY MILK"]);
        assert_eq!(normalize(&items), vec!["Buy milk"]);
    }

    #[test]
    fn order_of_first_occurrences_is_preserved() {
        let items = strings(&["b", "a", "B", "c", "A"]);
        assert_eq!(normalize(&items), vec!["b", "a", "c"]);
    }

    #[test]
    fn items_are_trimmed_and_empties_dropped() {
        let items = strings(&["  padded  ", "", "   ", "kept"]);
        assert_eq!(normalize(&items), vec!["padded", "kept"]);
    }

    #[test]
    fn trimmed_variants_are_duplicates() {
        let items = strings(&["task one", "  task one  "]);
        assert_eq!(normalize(&items), vec!["task one"]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let items = strings(&["  A task ", "a task", "Other", ""]);
        let once = normalize(&items);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize(&[]).is_empty());
    }
}
