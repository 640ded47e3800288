use crate::domain::ports::Prompter;
use crate::utils::error::Result;
use dialoguer::Input;

/// Real console prompter. Empty replies are allowed; the callers decide
/// what a blank reply means (keep current value, fall back to a default).
#[derive(Debug, Clone, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let reply: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(reply)
    }
}
