//! Recovers a JSON array embedded in free-form model output.

/// Returns the first balanced `[...]` span in `text`.
///
/// Brackets inside JSON string literals do not count toward nesting. Returns
/// `None` if there is no `[` or the first one is never closed.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::extract_json_array;

    #[test]
    fn returns_whole_text_when_it_is_an_array() {
        assert_eq!(extract_json_array("[1,2,3]"), Some("[1,2,3]"));
    }

    #[test]
    fn strips_surrounding_prose_and_code_fences() {
        let text = "Sure! Here you go:\n```json\n[{\"title\":\"a\"}]\n```\nEnjoy.";
        assert_eq!(extract_json_array(text), Some("[{\"title\":\"a\"}]"));
    }

    #[test]
    fn keeps_nested_arrays_together() {
        let text = "x [[1, [2]], 3] y ]";
        assert_eq!(extract_json_array(text), Some("[[1, [2]], 3]"));
    }

    #[test]
    fn stops_at_first_balanced_span() {
        assert_eq!(extract_json_array("[1] and [2]"), Some("[1]"));
    }

    #[test]
    fn ignores_brackets_inside_strings() {
        let text = r#"[{"title":"Price [cut]","summary":"a ] b \" [ c"}] trailing"#;
        assert_eq!(
            extract_json_array(text),
            Some(r#"[{"title":"Price [cut]","summary":"a ] b \" [ c"}]"#)
        );
    }

    #[test]
    fn unbalanced_input_yields_none() {
        assert_eq!(extract_json_array("[{\"title\": \"a\"}"), None);
        assert_eq!(extract_json_array("[[1]"), None);
        assert_eq!(extract_json_array(r#"["unterminated ]"#), None);
    }

    #[test]
    fn absent_brackets_yield_none() {
        assert_eq!(extract_json_array(""), None);
        assert_eq!(extract_json_array("no news today"), None);
        assert_eq!(extract_json_array("only a closer ]"), None);
    }

    #[test]
    fn handles_multibyte_text_around_span() {
        let text = "Voilà — [\"é\"] ✓";
        assert_eq!(extract_json_array(text), Some("[\"é\"]"));
    }
}
