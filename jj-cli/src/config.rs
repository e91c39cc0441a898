//! Assistant config loaded from env (after `.env` has been applied).

use anyhow::Result;
use std::env;

pub use jj_handlers::DEFAULT_ASSISTANT_NAME;
pub const DEFAULT_LOG_FILE: &str = "logs/jj.log";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_WAKE_PHRASE: &str = "Hey JJ";

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// ASSISTANT_NAME, shown as `NAME >> "..."`
    pub assistant_name: String,
    /// LOG_FILE
    pub log_file: String,
    /// OPENAI_API_KEY; unset or blank selects the canned conversation engine
    pub openai_api_key: Option<String>,
    /// OPENAI_BASE_URL
    pub openai_base_url: String,
    /// AI_MODEL
    pub ai_model: String,
    /// LLM_SYSTEM_PROMPT
    pub llm_system_prompt: Option<String>,
    /// CONVERSATION_HISTORY_LIMIT (messages, user and assistant together)
    pub conversation_history_limit: usize,
    /// WIKIPEDIA_API_URL
    pub wikipedia_api_url: String,
    /// WIKIPEDIA_SEARCH_URL, MediaWiki action API used to resolve page titles
    pub wikipedia_search_url: String,
    /// LOOKUP_MAX_SENTENCES
    pub lookup_max_sentences: usize,
    /// WAKE_PHRASE; matched case-insensitively, shown as written
    pub wake_phrase: String,
    /// SPEECH_TO_TEXT_COMMAND; unset disables speech input
    pub speech_to_text_command: Option<String>,
    /// TEXT_TO_SPEECH_COMMAND; unset disables speech output
    pub text_to_speech_command: Option<String>,
}

fn non_blank(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn parsed_or(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl AssistantConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            assistant_name: non_blank("ASSISTANT_NAME")
                .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string()),
            log_file: non_blank("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            openai_api_key: non_blank("OPENAI_API_KEY"),
            openai_base_url: non_blank("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            ai_model: non_blank("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            llm_system_prompt: non_blank("LLM_SYSTEM_PROMPT"),
            conversation_history_limit: parsed_or(
                "CONVERSATION_HISTORY_LIMIT",
                conversation_engine::DEFAULT_HISTORY_LIMIT,
            ),
            wikipedia_api_url: non_blank("WIKIPEDIA_API_URL")
                .unwrap_or_else(|| wiki_client::DEFAULT_WIKIPEDIA_API_URL.to_string()),
            wikipedia_search_url: non_blank("WIKIPEDIA_SEARCH_URL")
                .unwrap_or_else(|| wiki_client::DEFAULT_WIKIPEDIA_SEARCH_URL.to_string()),
            lookup_max_sentences: parsed_or(
                "LOOKUP_MAX_SENTENCES",
                jj_handlers::DEFAULT_MAX_SENTENCES,
            ),
            wake_phrase: non_blank("WAKE_PHRASE")
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| DEFAULT_WAKE_PHRASE.to_string()),
            speech_to_text_command: non_blank("SPEECH_TO_TEXT_COMMAND"),
            text_to_speech_command: non_blank("TEXT_TO_SPEECH_COMMAND"),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.wikipedia_api_url).is_err() {
            anyhow::bail!("WIKIPEDIA_API_URL is not a valid URL: {}", self.wikipedia_api_url);
        }
        if reqwest::Url::parse(&self.wikipedia_search_url).is_err() {
            anyhow::bail!("WIKIPEDIA_SEARCH_URL is not a valid URL: {}", self.wikipedia_search_url);
        }
        if self.openai_api_key.is_some() && reqwest::Url::parse(&self.openai_base_url).is_err() {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", self.openai_base_url);
        }
        if self.lookup_max_sentences == 0 {
            anyhow::bail!("LOOKUP_MAX_SENTENCES must be at least 1");
        }
        for (name, command) in [
            ("SPEECH_TO_TEXT_COMMAND", &self.speech_to_text_command),
            ("TEXT_TO_SPEECH_COMMAND", &self.text_to_speech_command),
        ] {
            if let Some(command) = command {
                if !shlex::split(command).is_some_and(|parts| !parts.is_empty()) {
                    anyhow::bail!("{} is not a valid command line: {}", name, command);
                }
            }
        }
        Ok(())
    }

    pub fn uses_llm(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "ASSISTANT_NAME",
        "LOG_FILE",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "AI_MODEL",
        "LLM_SYSTEM_PROMPT",
        "CONVERSATION_HISTORY_LIMIT",
        "WIKIPEDIA_API_URL",
        "WIKIPEDIA_SEARCH_URL",
        "LOOKUP_MAX_SENTENCES",
        "WAKE_PHRASE",
        "SPEECH_TO_TEXT_COMMAND",
        "TEXT_TO_SPEECH_COMMAND",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();

        let config = AssistantConfig::load().unwrap();

        assert_eq!(config.assistant_name, "JJ");
        assert_eq!(config.log_file, "logs/jj.log");
        assert!(config.openai_api_key.is_none());
        assert!(!config.uses_llm());
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.ai_model, "gpt-3.5-turbo");
        assert!(config.llm_system_prompt.is_none());
        assert_eq!(config.conversation_history_limit, 10);
        assert_eq!(config.wikipedia_api_url, "https://en.wikipedia.org/api/rest_v1");
        assert_eq!(config.wikipedia_search_url, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.lookup_max_sentences, 3);
        assert_eq!(config.wake_phrase, "Hey JJ");
        assert!(config.speech_to_text_command.is_none());
        assert!(config.text_to_speech_command.is_none());
        config.validate().unwrap();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("ASSISTANT_NAME", "Robo");
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("AI_MODEL", "gpt-4o-mini");
        env::set_var("CONVERSATION_HISTORY_LIMIT", "4");
        env::set_var("WIKIPEDIA_SEARCH_URL", "http://localhost:8080/w/api.php");
        env::set_var("LOOKUP_MAX_SENTENCES", "not-a-number");
        env::set_var("WAKE_PHRASE", "  Hey Robo ");
        env::set_var("SPEECH_TO_TEXT_COMMAND", "listen --model 'base en'");
        env::set_var("TEXT_TO_SPEECH_COMMAND", "   ");

        let config = AssistantConfig::load().unwrap();
        clear_env();

        assert_eq!(config.assistant_name, "Robo");
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert!(config.uses_llm());
        assert_eq!(config.ai_model, "gpt-4o-mini");
        assert_eq!(config.conversation_history_limit, 4);
        assert_eq!(config.wikipedia_search_url, "http://localhost:8080/w/api.php");
        assert_eq!(config.lookup_max_sentences, 3);
        assert_eq!(config.wake_phrase, "Hey Robo");
        assert_eq!(config.speech_to_text_command.as_deref(), Some("listen --model 'base en'"));
        assert!(config.text_to_speech_command.is_none());
        config.validate().unwrap();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_values() {
        clear_env();
        let base = AssistantConfig::load().unwrap();

        let mut bad_url = base.clone();
        bad_url.wikipedia_api_url = "not a url".to_string();
        assert!(bad_url.validate().is_err());

        let mut bad_search = base.clone();
        bad_search.wikipedia_search_url = "search here".to_string();
        assert!(bad_search.validate().is_err());

        let mut zero = base.clone();
        zero.lookup_max_sentences = 0;
        assert!(zero.validate().is_err());

        let mut bad_command = base.clone();
        bad_command.text_to_speech_command = Some("say 'unterminated".to_string());
        assert!(bad_command.validate().is_err());

        let mut bad_openai = base;
        bad_openai.openai_api_key = Some("sk-test".to_string());
        bad_openai.openai_base_url = "::".to_string();
        assert!(bad_openai.validate().is_err());
    }
}
