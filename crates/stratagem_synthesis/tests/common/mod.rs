//! Shared fixtures for synthesis tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use stratagem_core::{Brief, Trend};
use stratagem_error::{ConfigError, LlmError, LlmErrorKind, StratagemResult};
use stratagem_interface::{LlmPort, PromptContext};
use tokio_util::sync::CancellationToken;

/// Canned behaviour for one prompt id.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    ProviderFailure,
    MissingPrompt,
    CancelAndHang(CancellationToken),
}

/// LLM port answering from a script and recording every call.
#[derive(Debug)]
pub struct ScriptedLlm {
    default: Reply,
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
    contexts: Mutex<Vec<PromptContext>>,
}

impl ScriptedLlm {
    pub fn answering(text: &str) -> Self {
        Self::with_default(Reply::Text(text.to_string()))
    }

    pub fn with_default(default: Reply) -> Self {
        Self {
            default,
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            contexts: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, prompt_id: &str, reply: Reply) -> Self {
        self.replies.insert(prompt_id.to_string(), reply);
        self
    }

    pub fn text(self, prompt_id: &str, text: &str) -> Self {
        self.reply(prompt_id, Reply::Text(text.to_string()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn contexts(&self) -> Vec<PromptContext> {
        self.contexts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmPort for ScriptedLlm {
    async fn llm(&self, prompt_id: &str, context: &PromptContext) -> StratagemResult<String> {
        self.calls.lock().unwrap().push(prompt_id.to_string());
        self.contexts.lock().unwrap().push(context.clone());
        let reply = self
            .replies
            .get(prompt_id)
            .cloned()
            .unwrap_or_else(|| self.default.clone());
        match reply {
            Reply::Text(text) => Ok(text.trim().to_string()),
            Reply::ProviderFailure => Err(LlmError::new(LlmErrorKind::Http(
                "connection reset".to_string(),
            ))
            .into()),
            Reply::MissingPrompt => {
                Err(ConfigError::new(format!("Unknown prompt id: {}", prompt_id)).into())
            }
            Reply::CancelAndHang(token) => {
                token.cancel();
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

pub fn brief() -> Brief {
    Brief::new(
        "Projet Test",
        vec!["Obj1".to_string(), "Obj2".to_string()],
        "Reformulation",
        "Résumé",
    )
    .unwrap()
}

pub fn trend(theme: &str, date: &str) -> Trend {
    Trend::new(
        "tiktok",
        format!("Signal {}", theme),
        "snippet",
        theme,
        "summary",
        date,
        vec![format!("https://example.com/{}", theme)],
    )
    .unwrap()
}

pub fn trends() -> Vec<Trend> {
    vec![trend("T1", "2025-01-10"), trend("T2", "2025-01-12")]
}
