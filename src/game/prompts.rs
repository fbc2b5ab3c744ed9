use crate::input::Role;

/// How a prompt is answered: freely, or by reading its text verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Question,
    ReadAloud,
}

impl PromptKind {
    pub fn name(self) -> &'static str {
        match self {
            PromptKind::Question => "question",
            PromptKind::ReadAloud => "read aloud",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecordingPrompt {
    pub role: Role,
    pub kind: PromptKind,
    pub text: &'static str,
}

/// The five prompts asked in every session, in recording order. The first
/// two and the last are answered freely; the middle two are read aloud to
/// pin down the speaker's reading voice.
pub const RECORDING_PROMPTS: [RecordingPrompt; 5] = [
    RecordingPrompt {
        role: Role::Intro,
        kind: PromptKind::Question,
        text: "Can you tell me your name, home town, favorite color, and count from 1 to 10.",
    },
    RecordingPrompt {
        role: Role::Hobby,
        kind: PromptKind::Question,
        text: "What do you like to do in your free time?",
    },
    RecordingPrompt {
        role: Role::Story,
        kind: PromptKind::ReadAloud,
        text: "On a typical Saturday, I wake up, drink water, and take a walk. The weather is \
               mild and the streets are quiet. Birds hop on the fence while a neighbor waters \
               plants. I breathe in, stretch my shoulders. Back home, I make tea, open the \
               windows, and begin the day.",
    },
    RecordingPrompt {
        role: Role::Technical,
        kind: PromptKind::ReadAloud,
        text: "The judge in this game is deterministic; acoustic features are extracted per \
               recording, weighted against per-speaker baselines, and banded into a verdict. \
               Every score carries a confidence value and the reasons behind it, so each call \
               can be reviewed after the match.",
    },
    RecordingPrompt {
        role: Role::Target,
        kind: PromptKind::Question,
        text: "What did you do last night? (Truth or Lie but Both)",
    },
];

pub fn prompt_for(role: Role) -> &'static RecordingPrompt {
    // RECORDING_PROMPTS covers every role exactly once, in Role order.
    &RECORDING_PROMPTS[role as usize]
}
