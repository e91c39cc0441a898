//! Fixed user-facing texts.

/// Emitted when an external call fails during a turn.
pub const PROMPT_ERROR: &str = "I'm sorry, but I've encountered an error during that request.";

/// Name used in texts when none is configured.
pub const DEFAULT_ASSISTANT_NAME: &str = "JJ";

/// Help text naming the assistant, e.g. `Robo McChatbot can reply ...`.
pub fn help_text(assistant_name: &str) -> String {
    format!(
        "{} McChatbot can reply to simple requests, \
or attempt to hold a conversation. Try asking \
\"what time is it\" to get the current time or \
\"who is Jules Verne\" to search Wikipedia. Say \
\"exit\", \"change input\", or \"change output\" \
at any prompt to leave the program or adjust settings.",
        assistant_name
    )
}

pub const INPUT_OPTIONS: &str = "Please choose from the following input options:\n\
\"Text\", \"Prompted Speech\", or \"Dynamic Speech\".";

pub const OUTPUT_OPTIONS: &str = "Please choose from the following output options:\n\
\"Text\" or \"Speech\".";

pub const SPEECH_INPUT_UNAVAILABLE: &str = "Speech input is not available.";

pub const SPEECH_OUTPUT_UNAVAILABLE: &str = "Speech output is not available.";

/// Wake phrase shown in the dynamic speech confirmation by default.
pub const DEFAULT_WAKE_PHRASE_DISPLAY: &str = "Hey JJ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_names_assistant() {
        assert!(help_text(DEFAULT_ASSISTANT_NAME).starts_with("JJ McChatbot can reply to simple requests, or attempt"));
        let robo = help_text("Robo");
        assert!(robo.starts_with("Robo McChatbot can reply"));
        assert!(!robo.contains("JJ"));
        assert!(robo.ends_with("at any prompt to leave the program or adjust settings."));
    }
}
