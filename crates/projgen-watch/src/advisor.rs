//! Break recommendations once the watch-time threshold is reached.

use serde::Serialize;
use tracing::info;

use crate::chat::{ChatClient, ChatMessage, ChatRequest, Usage};
use crate::error::{WatchError, WatchResult};
use crate::ledger::{WatchLedger, BREAK_THRESHOLD_HOURS};

pub const MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.8;
pub const MAX_TOKENS: u32 = 500;

/// Titles mentioned in the prompt, most recent first.
pub const PROMPT_TITLES: usize = 10;

const SYSTEM_PROMPT: &str = "You are a friendly movie app assistant. When users reach 40 hours of watch time, \
recommend local outdoor activities, film museums, or parks near their location to encourage taking a break \
from watching movies. Use a casual, friendly tone. Format your response as a bulleted list with specific \
place names when possible.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub text: String,
    pub usage: Option<Usage>,
}

pub struct BreakAdvisor<'a> {
    client: &'a ChatClient,
}

/// System and user messages for a break request.
pub fn build_messages(ledger: &WatchLedger, location: Location) -> Vec<ChatMessage> {
    let titles = ledger.recent_titles(PROMPT_TITLES).join(", ");
    let user = format!(
        "I've watched {:.1} hours of movies recently (including: {}). I'm at coordinates {}, {}. \
Can you suggest 3-5 outdoor activities, parks, or film museums near me to take a break from \
watching movies? Keep it casual and friendly!",
        ledger.total_hours(),
        titles,
        location.latitude,
        location.longitude
    );
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}

pub fn build_request(ledger: &WatchLedger, location: Location) -> ChatRequest {
    ChatRequest {
        model: MODEL.to_string(),
        messages: build_messages(ledger, location),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

impl<'a> BreakAdvisor<'a> {
    pub fn new(client: &'a ChatClient) -> Self {
        Self { client }
    }

    /// Ask for break ideas near `location`. Refuses before the threshold.
    pub async fn recommend(&self, ledger: &WatchLedger, location: Location) -> WatchResult<Recommendation> {
        ensure_break_due(ledger)?;

        let completion = self.client.complete(&build_request(ledger, location)).await?;
        info!(hours = ledger.total_hours(), "Received break recommendation");
        Ok(Recommendation {
            text: completion.content,
            usage: completion.usage,
        })
    }
}

pub fn ensure_break_due(ledger: &WatchLedger) -> WatchResult<()> {
    if ledger.break_due() {
        Ok(())
    } else {
        Err(WatchError::BreakNotDue {
            hours: ledger.total_hours(),
            threshold: BREAK_THRESHOLD_HOURS,
        })
    }
}
