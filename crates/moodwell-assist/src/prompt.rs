use moodwell_core::{ConversationContext, TimeOfDay};

const MAX_INPUT_CHARS: usize = 2000;

pub fn build_system_prompt(context: &ConversationContext) -> String {
    let time = match context.time_of_day {
        TimeOfDay::Morning => "morning",
        TimeOfDay::Afternoon => "afternoon",
        TimeOfDay::Evening => "evening",
    };
    let mut prompt = format!(
        "You are a warm, supportive mental health companion. Keep replies short \
         (1-3 sentences), kind and practical. Never give medical diagnoses. \
         It is currently {}.",
        time
    );
    if let Some(mood) = context.current_mood.as_deref().filter(|m| !m.trim().is_empty()) {
        prompt.push_str(&format!(" The user last reported feeling {}.", mood.trim()));
    }
    prompt
}

/// Cap the user message at a char boundary
pub fn truncate_input(input: &str) -> &str {
    match input.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// First text block of a messages-API response body
pub fn extract_reply(body: &serde_json::Value) -> Option<String> {
    body["content"]
        .as_array()?
        .iter()
        .filter(|block| block["type"].as_str().unwrap_or("text") == "text")
        .find_map(|block| block["text"].as_str())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}
