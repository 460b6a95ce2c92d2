//! Script builder: expands the fixture content for a (mode, policy) pair into
//! an ordered timeline of steps for the player to apply.

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::content;

/// Conversation context selecting which prompt set and greeting to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatMode {
    Contact,
    Renew,
    Overview,
    Premiums,
    Integrations,
}

impl ChatMode {
    pub const ALL: [ChatMode; 5] = [
        ChatMode::Contact,
        ChatMode::Renew,
        ChatMode::Overview,
        ChatMode::Premiums,
        ChatMode::Integrations,
    ];

    /// Next mode in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ChatMode::Contact => ChatMode::Renew,
            ChatMode::Renew => ChatMode::Overview,
            ChatMode::Overview => ChatMode::Premiums,
            ChatMode::Premiums => ChatMode::Integrations,
            ChatMode::Integrations => ChatMode::Contact,
        }
    }
}

/// Which mock policy a conversation pertains to. `Gl` is the default when the
/// caller doesn't care or passes an unknown selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PolicyId {
    #[default]
    Gl,
    Cp,
    Wc,
    Ca,
}

impl PolicyId {
    pub const ALL: [PolicyId; 4] = [PolicyId::Gl, PolicyId::Cp, PolicyId::Wc, PolicyId::Ca];

    /// Next policy in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            PolicyId::Gl => PolicyId::Cp,
            PolicyId::Cp => PolicyId::Wc,
            PolicyId::Wc => PolicyId::Ca,
            PolicyId::Ca => PolicyId::Gl,
        }
    }
}

/// Whether an incoming bubble is still the typing indicator or finished text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Typing,
    Ready,
}

/// A single chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Incoming {
        text: String,
        reaction: Option<String>,
        status: DeliveryStatus,
    },
    Outgoing {
        text: String,
        reaction: Option<String>,
    },
}

impl Message {
    pub fn incoming(text: impl Into<String>) -> Self {
        Message::Incoming {
            text: text.into(),
            reaction: None,
            status: DeliveryStatus::Ready,
        }
    }

    pub fn outgoing(text: impl Into<String>) -> Self {
        Message::Outgoing {
            text: text.into(),
            reaction: None,
        }
    }

    /// Typing-indicator placeholder; later replaced in place by the answer.
    pub fn typing() -> Self {
        Message::Incoming {
            text: String::new(),
            reaction: None,
            status: DeliveryStatus::Typing,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Message::Incoming { text, .. } | Message::Outgoing { text, .. } => text,
        }
    }

    pub fn reaction(&self) -> Option<&str> {
        match self {
            Message::Incoming { reaction, .. } | Message::Outgoing { reaction, .. } => {
                reaction.as_deref()
            }
        }
    }

    pub fn is_incoming(&self) -> bool {
        matches!(self, Message::Incoming { .. })
    }

    pub fn is_typing(&self) -> bool {
        matches!(
            self,
            Message::Incoming {
                status: DeliveryStatus::Typing,
                ..
            }
        )
    }
}

/// Timeline delays, all in milliseconds so the config file can override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Pause before each outgoing question.
    pub after_user_ms: u64,
    /// Gap between a question and the typing indicator appearing.
    pub typing_lead_ms: u64,
    /// How long the typing indicator shows before the answer lands.
    pub response_ms: u64,
    /// Gap between an answer and its reaction.
    pub reaction_ms: u64,
    /// Hold on the finished conversation before the loop resets.
    pub end_pause_ms: u64,
    /// Fade-out duration during the reset.
    pub reset_fade_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            after_user_ms: 2200,
            typing_lead_ms: 500,
            response_ms: 2000,
            reaction_ms: 800,
            end_pause_ms: 3000,
            reset_fade_ms: 600,
        }
    }
}

impl Timing {
    pub fn after_user(&self) -> Duration {
        Duration::from_millis(self.after_user_ms)
    }

    pub fn typing_lead(&self) -> Duration {
        Duration::from_millis(self.typing_lead_ms)
    }

    pub fn response(&self) -> Duration {
        Duration::from_millis(self.response_ms)
    }

    pub fn reaction(&self) -> Duration {
        Duration::from_millis(self.reaction_ms)
    }

    pub fn end_pause(&self) -> Duration {
        Duration::from_millis(self.end_pause_ms)
    }

    pub fn reset_fade(&self) -> Duration {
        Duration::from_millis(self.reset_fade_ms)
    }
}

/// One timeline event at an offset from cycle start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub delay: Duration,
    pub action: StepAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Append a message to the end of the list.
    Add(Message),
    /// Replace the incoming message at `index` in place, marking it ready.
    UpdateIncoming { index: usize, text: String },
    /// Attach a reaction to the incoming message at `index`.
    React { index: usize, emoji: String },
}

/// A built timeline. Steps are ordered by non-decreasing delay; step 0 is the
/// seed greeting at delay zero, which the player resets to on every loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    mode: ChatMode,
    policy: PolicyId,
    steps: Vec<ScriptStep>,
    total_duration: Duration,
    reset_fade: Duration,
}

impl Script {
    pub(crate) fn from_parts(
        mode: ChatMode,
        policy: PolicyId,
        steps: Vec<ScriptStep>,
        total_duration: Duration,
        reset_fade: Duration,
    ) -> Self {
        Self {
            mode,
            policy,
            steps,
            total_duration,
            reset_fade,
        }
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn policy(&self) -> PolicyId {
        self.policy
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Last step's delay plus the end-of-cycle pause. Recomputed per build;
    /// scripts for different modes/policies have different durations.
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    pub fn reset_fade(&self) -> Duration {
        self.reset_fade
    }

    /// The greeting the view resets to on loop.
    pub fn seed_message(&self) -> Message {
        match self.steps.first().map(|step| &step.action) {
            Some(StepAction::Add(message)) => message.clone(),
            // Unreachable for built scripts; keeps this total.
            _ => Message::incoming(""),
        }
    }
}

/// Build the timeline for a conversation. Never fails: a missing policy
/// selector falls back to the default ("gl").
pub fn build_script(mode: ChatMode, policy: Option<PolicyId>, timing: &Timing) -> Script {
    let policy = policy.unwrap_or_default();
    let prompts = content::prompts_for(mode, policy);

    let mut steps = Vec::with_capacity(1 + prompts.len() * 4);
    let mut at = Duration::ZERO;
    let mut slot = 0usize;

    // Seed: Claire's greeting, shown immediately and restored on every loop.
    steps.push(ScriptStep {
        delay: at,
        action: StepAction::Add(Message::incoming(content::greeting_for(mode))),
    });
    slot += 1;

    for (i, prompt) in prompts.iter().enumerate() {
        at += timing.after_user();
        steps.push(ScriptStep {
            delay: at,
            action: StepAction::Add(Message::outgoing(prompt.question)),
        });
        slot += 1;

        at += timing.typing_lead();
        let answer_slot = slot;
        steps.push(ScriptStep {
            delay: at,
            action: StepAction::Add(Message::typing()),
        });
        slot += 1;

        at += timing.response();
        steps.push(ScriptStep {
            delay: at,
            action: StepAction::UpdateIncoming {
                index: answer_slot,
                text: prompt.answer.to_string(),
            },
        });

        at += timing.reaction();
        let emoji = content::REACTION_EMOJI[i % content::REACTION_EMOJI.len()];
        steps.push(ScriptStep {
            delay: at,
            action: StepAction::React {
                index: answer_slot,
                emoji: emoji.to_string(),
            },
        });
    }

    Script {
        mode,
        policy,
        steps,
        total_duration: at + timing.end_pause(),
        reset_fade: timing.reset_fade(),
    }
}
