//! Prompt construction

use indoc::indoc;
use replyguy_llm::PromptSpec;

use crate::request::{Length, ReplyRequest, Strategy};

/// Token budget for short replies
pub const SHORT_MAX_TOKENS: u32 = 100;

/// Token budget for long replies
pub const LONG_MAX_TOKENS: u32 = 200;

const ROLE_PREAMBLE: &str = "You are Reply Guy, an AI expert at writing social media replies \
                             that make the author look knowledgeable and worth following.";

const SMART_GUIDELINES: &str = indoc! {"
    Guidelines:
    - Add value with facts, data, or logical reasoning
    - Demonstrate expertise in the topic
    - Be respectful and professional
    - Avoid generic statements, be specific and actionable
"};

const ENGAGEMENT_GUIDELINES: &str = indoc! {"
    Guidelines:
    - Open with a hook that invites reactions and replies
    - Use humor, emojis, and casual language when it fits
    - Make it entertaining and shareable
    - Never be offensive or harmful
"};

/// Token budget for a length class
pub const fn max_tokens(length: Length) -> u32 {
    match length {
        Length::Short => SHORT_MAX_TOKENS,
        Length::Long => LONG_MAX_TOKENS,
    }
}

const fn length_clause(length: Length) -> &'static str {
    match length {
        Length::Short => "Length: keep the reply concise, under ~100 words.",
        Length::Long => "Length: make the reply detailed, ~150-200 words.",
    }
}

const fn strategy_clause(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Smart => SMART_GUIDELINES,
        Strategy::Engagement => ENGAGEMENT_GUIDELINES,
    }
}

/// Build the prompt for a validated request
pub fn build_prompt(request: &ReplyRequest) -> PromptSpec {
    let system_instruction = [
        ROLE_PREAMBLE,
        length_clause(request.length),
        strategy_clause(request.strategy).trim_end(),
    ]
    .join("\n\n");

    let mut user_instruction = format!(
        "Generate a {} reply to this post: \"{}\"",
        request.strategy, request.post_text
    );

    if !request.context.is_empty() {
        user_instruction.push_str("\n\nAdditional context: ");
        user_instruction.push_str(&request.context);
    }

    PromptSpec {
        system_instruction,
        user_instruction,
        max_tokens: max_tokens(request.length),
    }
}
