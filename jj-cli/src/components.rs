//! Component factory: builds the session, handler services and router from config.

use anyhow::{Context, Result};
use command_classifier::CommandClassifier;
use command_router::Router;
use conversation_engine::{CannedConversation, LlmConversation};
use jj_channels::{
    CommandRecognizer, CommandSynthesizer, Console, ConsoleInput, ConsoleOutput,
    DynamicSpeechInput, PromptedSpeechInput, SpeechOutput, SpeechRecognizer,
};
use jj_core::{ConversationEngine, InputChannels, OutputChannels, Session, SystemClock};
use jj_handlers::{build_handler_table, help_text, HandlerServices};
use llm_client::OpenAILlmClient;
use std::sync::Arc;
use tracing::{info, instrument};
use wiki_client::WikipediaClient;

use crate::config::AssistantConfig;

/// Header printed once before the first prompt.
pub fn banner(name: &str) -> String {
    let rule = "#".repeat(44);
    format!(
        "{rule}\n# {name} McChatbot\n#\n# Welcome to {name} McChatbot, a simple chatbot\n\
         # which can accept either verbal or textual\n# commands and perform various services,\n\
         # such as defining terms or looking up info.\n{rule}\n"
    )
}

pub fn farewell(name: &str) -> String {
    format!("Thank you for using {} McChatbot!", name)
}

/// LLM-backed when an API key is configured, canned replies otherwise.
pub fn build_conversation_engine(config: &AssistantConfig) -> Arc<dyn ConversationEngine> {
    match &config.openai_api_key {
        Some(api_key) => {
            info!(model = %config.ai_model, base_url = %config.openai_base_url, "Using LLM conversation");
            let client = OpenAILlmClient::with_base_url(api_key.clone(), config.openai_base_url.clone())
                .with_model(config.ai_model.clone())
                .with_system_prompt_opt(config.llm_system_prompt.clone());
            Arc::new(
                LlmConversation::new(Arc::new(client))
                    .with_history_limit(config.conversation_history_limit),
            )
        }
        None => {
            info!("OPENAI_API_KEY not set, using canned conversation");
            Arc::new(CannedConversation::default())
        }
    }
}

pub fn build_handler_services(config: &AssistantConfig) -> Result<HandlerServices> {
    let lookup = WikipediaClient::new(&config.wikipedia_api_url)
        .context("Create Wikipedia client from WIKIPEDIA_API_URL")?
        .with_search_url(&config.wikipedia_search_url)
        .context("Set Wikipedia search from WIKIPEDIA_SEARCH_URL")?;
    let mut services = HandlerServices::new(
        Arc::new(lookup),
        build_conversation_engine(config),
        Arc::new(SystemClock),
    );
    services.help_text = help_text(&config.assistant_name);
    services.lookup_max_sentences = config.lookup_max_sentences;
    services.wake_phrase = config.wake_phrase.clone();
    Ok(services)
}

/// Text channels on `console`; speech channels only for configured commands.
#[instrument(skip(config, console))]
pub fn build_session(config: &AssistantConfig, console: &Console) -> Result<Session> {
    let mut inputs = InputChannels::text_only(Box::new(ConsoleInput::new(console.clone())));
    let mut outputs = OutputChannels::text_only(Box::new(ConsoleOutput::new(
        console.clone(),
        config.assistant_name.clone(),
    )));

    if let Some(command) = &config.speech_to_text_command {
        let recognizer: Arc<dyn SpeechRecognizer> = Arc::new(
            CommandRecognizer::from_command_line(command).context("Parse SPEECH_TO_TEXT_COMMAND")?,
        );
        inputs = inputs
            .with_prompted_speech(Box::new(
                PromptedSpeechInput::new(console.clone(), recognizer.clone())
                    .with_wake_phrase(config.wake_phrase.clone()),
            ))
            .with_dynamic_speech(Box::new(
                DynamicSpeechInput::new(console.clone(), recognizer)
                    .with_wake_phrase(config.wake_phrase.clone()),
            ));
    }
    if let Some(command) = &config.text_to_speech_command {
        let synthesizer = CommandSynthesizer::from_command_line(command)
            .context("Parse TEXT_TO_SPEECH_COMMAND")?;
        outputs = outputs.with_speech(Box::new(SpeechOutput::new(Arc::new(synthesizer))));
    }

    info!(
        speech_input = config.speech_to_text_command.is_some(),
        speech_output = config.text_to_speech_command.is_some(),
        "step: session channels ready"
    );
    Ok(Session::new(inputs, outputs))
}

pub fn build_router(config: &AssistantConfig, console: &Console) -> Result<Router> {
    let session = build_session(config, console)?;
    let table = build_handler_table(build_handler_services(config)?);
    Ok(Router::new(CommandClassifier::default(), table, session)
        .with_farewell(farewell(&config.assistant_name)))
}
