/// System-level instruction for the action item extraction call. The
/// collaborator must answer with a bare JSON object so the parser can
/// take the strict path; everything after this is damage control.
pub const ACTION_ITEMS_SYSTEM_PROMPT: &str = r#"You are an expert at extracting actionable items from notes.
Analyze the given text and identify all action items, tasks, or to-dos.
Return ONLY a JSON object with an "action_items" field containing an array of strings.
Each action item should be a clear, concise task.
Do not include explanations, just the JSON."#;

/// Build the user-level prompt embedding the note text.
pub fn build_extraction_prompt(text: &str) -> String {
    format!(
        "Extract all action items from the following notes:\n\n{text}\n\nReturn the result as a JSON object with \"action_items\" array."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_note_text() {
        let prompt = build_extraction_prompt("- call the dentist");
        assert!(prompt.contains("- call the dentist"));
    }

    #[test]
    fn system_prompt_demands_json_only() {
        assert!(ACTION_ITEMS_SYSTEM_PROMPT.contains("ONLY a JSON object"));
        assert!(ACTION_ITEMS_SYSTEM_PROMPT.contains("action_items"));
    }

    #[test]
    fn prompt_names_the_expected_key() {
        assert!(build_extraction_prompt("x").contains("\"action_items\""));
    }
}
