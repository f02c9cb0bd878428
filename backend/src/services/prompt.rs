//! System prompt composition
//!
//! The prompt is rebuilt for every request: the language directive depends on
//! the current message and the knowledge block is fetched fresh.

use super::language::Language;

/// Hard language constraint appended after the base instructions
pub fn language_directive(language: Option<Language>) -> &'static str {
    match language {
        Some(Language::Turkish) => {
            "\n\nThe user is asking in TURKISH. You MUST respond COMPLETELY in Turkish. Do not mix languages."
        },
        Some(Language::English) => {
            "\n\nThe user is asking in ENGLISH. You MUST respond in ENGLISH. This is the default language."
        },
        None => {
            "\n\nDEFAULT LANGUAGE: ENGLISH. Respond in English unless the user clearly uses Turkish."
        },
    }
}

/// Build the system prompt.
///
/// `organization` names who the trained knowledge is about. Without a
/// `context` the result is exactly `base_instructions` plus the language
/// directive.
pub fn compose(
    base_instructions: &str,
    organization: &str,
    language: Option<Language>,
    context: Option<&str>,
) -> String {
    let mut prompt = String::from(base_instructions);
    prompt.push_str(language_directive(language));

    let Some(context) = context else {
        return prompt;
    };

    format!(
        "{prompt}\n\n\
You have been trained on the following information about {organization} and its team:\n\n\
{context}\n\n\
Use this information to provide accurate, specific, and helpful responses. \
Always cite the website or LinkedIn profile when relevant."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "You are Zoota, the OrkinosAI assistant.";

    #[test]
    fn test_without_context_is_base_plus_directive() {
        let prompt = compose(BASE, "OrkinosAI", Some(Language::English), None);
        assert_eq!(prompt, format!("{}{}", BASE, language_directive(Some(Language::English))));
    }

    #[test]
    fn test_turkish_directive() {
        let prompt = compose(BASE, "OrkinosAI", Some(Language::Turkish), None);
        assert!(prompt.starts_with(BASE));
        assert!(prompt.contains("respond COMPLETELY in Turkish"));
        assert!(!prompt.contains("ENGLISH"));
    }

    #[test]
    fn test_no_language_defaults_to_english() {
        let prompt = compose(BASE, "OrkinosAI", None, None);
        assert!(prompt.ends_with("unless the user clearly uses Turkish."));
    }

    #[test]
    fn test_context_block_contains_base_and_context() {
        let context = "Page: Home\nURL: https://www.orkinosai.com";
        let prompt = compose(BASE, "OrkinosAI", Some(Language::English), Some(context));

        assert!(prompt.starts_with(BASE));
        assert!(prompt.contains(context));
        assert!(prompt.contains("information about OrkinosAI and its team"));
        assert!(prompt.ends_with("Always cite the website or LinkedIn profile when relevant."));
    }

    #[test]
    fn test_empty_base_still_gets_directive() {
        let prompt = compose("", "OrkinosAI", Some(Language::English), None);
        assert_eq!(prompt, language_directive(Some(Language::English)));
    }
}
