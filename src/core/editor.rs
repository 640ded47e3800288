use crate::core::{Advertisement, Prompter, Result};

/// Interactive edit step. Each field is replaced only when the reply is
/// non-empty after trimming; the applied value keeps the reply as typed.
pub fn edit_ad<P: Prompter + ?Sized>(prompter: &mut P, ad: &mut Advertisement) -> Result<()> {
    let new_title = prompter.read_line(&format!("New title (current: {})", ad.title))?;
    if !new_title.trim().is_empty() {
        tracing::debug!("Replacing advertisement title");
        ad.title = new_title;
    }

    let new_message = prompter.read_line(&format!("New message (current: {})", ad.message))?;
    if !new_message.trim().is_empty() {
        tracing::debug!("Replacing advertisement message");
        ad.message = new_message;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedPrompter {
        replies: VecDeque<String>,
        prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: replies.iter().map(|r| r.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn read_line(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            Ok(self.replies.pop_front().unwrap_or_default())
        }
    }

    fn sample_ad() -> Advertisement {
        Advertisement::new("Oferta", "Aproveite")
    }

    #[test]
    fn test_blank_replies_leave_the_ad_unchanged() {
        let mut ad = sample_ad();
        let before = ad.clone();
        let mut prompter = ScriptedPrompter::new(&["", ""]);

        edit_ad(&mut prompter, &mut ad).unwrap();

        assert_eq!(ad, before);
    }

    #[test]
    fn test_whitespace_only_replies_leave_the_ad_unchanged() {
        let mut ad = sample_ad();
        let before = ad.clone();
        let mut prompter = ScriptedPrompter::new(&["   ", "\t"]);

        edit_ad(&mut prompter, &mut ad).unwrap();

        assert_eq!(ad, before);
    }

    #[test]
    fn test_non_blank_replies_replace_both_fields() {
        let mut ad = sample_ad();
        let mut prompter = ScriptedPrompter::new(&["Novo título", "Nova mensagem"]);

        edit_ad(&mut prompter, &mut ad).unwrap();

        assert_eq!(ad.title, "Novo título");
        assert_eq!(ad.message, "Nova mensagem");
    }

    #[test]
    fn test_fields_are_edited_independently() {
        let mut ad = sample_ad();
        let mut prompter = ScriptedPrompter::new(&["Novo título", ""]);

        edit_ad(&mut prompter, &mut ad).unwrap();

        assert_eq!(ad.title, "Novo título");
        assert_eq!(ad.message, "Aproveite");
    }

    #[test]
    fn test_applied_value_keeps_surrounding_whitespace() {
        let mut ad = sample_ad();
        let mut prompter = ScriptedPrompter::new(&["  padded  ", ""]);

        edit_ad(&mut prompter, &mut ad).unwrap();

        assert_eq!(ad.title, "  padded  ");
    }

    #[test]
    fn test_prompts_show_current_values() {
        let mut ad = sample_ad();
        let mut prompter = ScriptedPrompter::new(&["", ""]);

        edit_ad(&mut prompter, &mut ad).unwrap();

        assert_eq!(prompter.prompts[0], "New title (current: Oferta)");
        assert_eq!(prompter.prompts[1], "New message (current: Aproveite)");
    }
}
