use crate::data::AppData;
use crate::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

pub const FALLBACK_INSIGHT: &str = "Your progress is building momentum. Every day counts!";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Kicks off a background insight refresh from a snapshot of the current
/// data. Fire-and-forget: mutations never wait on it, and a newer refresh
/// simply overwrites the slot when it lands. Skipped while either collection
/// is empty, matching the display rule (the card only shows with data).
pub fn spawn_refresh(state: &AppState, snapshot: AppData) {
    if snapshot.goals.is_empty() || snapshot.logs.is_empty() {
        return;
    }
    let state = state.clone();
    tokio::spawn(async move {
        let text = request_insight(&state.http, &snapshot)
            .await
            .unwrap_or_else(|| FALLBACK_INSIGHT.to_string());
        *state.insight.lock().await = Some(text);
    });
}

/// One call to the Gemini generateContent endpoint. Any failure — missing
/// key, transport error, non-2xx, unexpected response shape — yields `None`
/// so the caller falls back to the static string.
async fn request_insight(client: &reqwest::Client, data: &AppData) -> Option<String> {
    let Ok(key) = env::var("GEMINI_API_KEY") else {
        debug!("GEMINI_API_KEY not set; using fallback insight");
        return None;
    };
    let model = env::var("INSIGHT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let url =
        format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent");
    let body = json!({
        "contents": [{ "parts": [{ "text": build_prompt(data) }] }]
    });

    let response = match client
        .post(&url)
        .header("x-goog-api-key", key)
        .timeout(REQUEST_TIMEOUT)
        .json(&body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            warn!("insight request failed: {err}");
            return None;
        }
    };

    if !response.status().is_success() {
        warn!("insight request returned {}", response.status());
        return None;
    }

    match response.json::<Value>().await {
        Ok(value) => {
            let text = extract_text(&value);
            if text.is_none() {
                warn!("insight response had no text candidate");
            }
            text
        }
        Err(err) => {
            warn!("insight response was not valid JSON: {err}");
            None
        }
    }
}

/// Short coaching prompt over the goal titles and the 7 most recent logs.
fn build_prompt(data: &AppData) -> String {
    let titles: Vec<&str> = data.goals.iter().map(|g| g.title.as_str()).collect();
    let by_id: HashMap<&str, &str> = data
        .goals
        .iter()
        .map(|g| (g.id.as_str(), g.title.as_str()))
        .collect();

    let recent: Vec<String> = data
        .logs
        .iter()
        .rev()
        .take(7)
        .map(|(date, ids)| {
            let done: Vec<&str> = ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .collect();
            format!("{date}: Completed {}", done.join(", "))
        })
        .collect();

    format!(
        "Act as a world-class life coach and data analyst.\n\
         The user has the following goals: {}.\n\n\
         Here is their recent progress:\n{}\n\n\
         Based on this data, provide a very short (max 2 sentences), highly \
         encouraging insight or a motivational push. Focus on patterns or \
         potential improvements. Be brief for mobile reading.",
        titles.join(", "),
        recent.join("\n"),
    )
}

fn extract_text(value: &Value) -> Option<String> {
    let text = value
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?
        .trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
