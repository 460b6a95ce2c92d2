//! Script player: the single owner of the visible message list. It is ticked
//! at a fixed cadence and applies every step whose delay has elapsed, then
//! loops the script forever with a fade-out between cycles.
//!
//! All scheduling state lives in this one struct rather than in per-step
//! timers. Replacing the script resets the cursor, which cancels the whole
//! pending set atomically; a step from a previous script can never fire into
//! a freshly-reset list.

use std::time::Instant;

use tracing::debug;

use crate::script::{DeliveryStatus, Message, Script, StepAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Constructed but not started.
    Idle,
    /// Applying steps; `next_step` indexes into the script's step list.
    Playing { started: Instant, next_step: usize },
    /// Timeline finished; holding the fade-out before the reset.
    Fading { since: Instant },
}

pub struct ScriptPlayer {
    script: Script,
    messages: Vec<Message>,
    cycle: u64,
    phase: Phase,
}

impl ScriptPlayer {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            messages: Vec::new(),
            cycle: 0,
            phase: Phase::Idle,
        }
    }

    /// Begin a fresh cycle at the seed message. Safe to call at any time;
    /// any pending steps are discarded.
    pub fn start(&mut self, now: Instant) {
        self.messages.clear();
        self.messages.push(self.script.seed_message());
        // Step 0 is the seed and was just applied.
        self.phase = Phase::Playing {
            started: now,
            next_step: 1,
        };
    }

    /// Swap in a new script (mode/policy change) and restart. This is the
    /// cancellation path: the old script's remaining steps are dropped as a
    /// set before any of them can mutate the new list.
    pub fn set_script(&mut self, script: Script, now: Instant) {
        debug!(
            target: "player",
            mode = %script.mode(),
            policy = %script.policy(),
            "script replaced"
        );
        self.script = script;
        self.start(now);
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Ordered snapshot of the visible conversation.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Incremented on every loop; render layers key animations off this.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// True while the end-of-cycle fade-out is in progress.
    pub fn is_fading(&self) -> bool {
        matches!(self.phase, Phase::Fading { .. })
    }

    /// Advance the timeline to `now`, applying every due step in emission
    /// order. Returns true if the visible state changed. Timer coalescing is
    /// fine: only relative order matters, and a late tick applies everything
    /// that became due in the meantime.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        loop {
            match self.phase {
                Phase::Idle => break,
                Phase::Playing { started, next_step } => {
                    if let Some(step) = self.script.steps().get(next_step) {
                        if now < started + step.delay {
                            break;
                        }
                        let action = step.action.clone();
                        self.apply(&action);
                        self.phase = Phase::Playing {
                            started,
                            next_step: next_step + 1,
                        };
                        changed = true;
                    } else if now >= started + self.script.total_duration() {
                        self.phase = Phase::Fading { since: now };
                        changed = true;
                    } else {
                        break;
                    }
                }
                Phase::Fading { since } => {
                    if now < since + self.script.reset_fade() {
                        break;
                    }
                    self.messages.clear();
                    self.messages.push(self.script.seed_message());
                    self.cycle += 1;
                    debug!(target: "player", cycle = self.cycle, "loop reset");
                    self.phase = Phase::Playing {
                        started: now,
                        next_step: 1,
                    };
                    changed = true;
                }
            }
        }

        changed
    }

    fn apply(&mut self, action: &StepAction) {
        match action {
            StepAction::Add(message) => self.messages.push(message.clone()),
            StepAction::UpdateIncoming { index, text } => {
                match self.messages.get_mut(*index) {
                    Some(Message::Incoming {
                        text: slot, status, ..
                    }) => {
                        *slot = text.clone();
                        *status = DeliveryStatus::Ready;
                    }
                    // Stale index after a reset; ignore rather than crash the view.
                    _ => debug!(target: "player", index, "stale update ignored"),
                }
            }
            StepAction::React { index, emoji } => match self.messages.get_mut(*index) {
                Some(Message::Incoming {
                    reaction,
                    status: DeliveryStatus::Ready,
                    ..
                }) => *reaction = Some(emoji.clone()),
                _ => debug!(target: "player", index, "stale reaction ignored"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::script::{ChatMode, PolicyId, ScriptStep};

    fn seed_step() -> ScriptStep {
        ScriptStep {
            delay: Duration::ZERO,
            action: StepAction::Add(Message::incoming("hello")),
        }
    }

    fn script_with(steps: Vec<ScriptStep>) -> Script {
        Script::from_parts(
            ChatMode::Contact,
            PolicyId::Gl,
            steps,
            Duration::from_secs(10),
            Duration::from_millis(100),
        )
    }

    #[test]
    fn stale_react_index_is_ignored() {
        let script = script_with(vec![
            seed_step(),
            ScriptStep {
                delay: Duration::from_millis(10),
                action: StepAction::React {
                    index: 5,
                    emoji: "\u{1F44D}".to_string(),
                },
            },
        ]);
        let mut player = ScriptPlayer::new(script);
        let start = Instant::now();
        player.start(start);

        player.tick(start + Duration::from_millis(20));

        assert_eq!(player.messages().len(), 1);
        assert_eq!(player.messages()[0].reaction(), None);
    }

    #[test]
    fn react_never_attaches_to_outgoing_or_typing() {
        let script = script_with(vec![
            seed_step(),
            ScriptStep {
                delay: Duration::from_millis(10),
                action: StepAction::Add(Message::outgoing("question")),
            },
            ScriptStep {
                delay: Duration::from_millis(20),
                action: StepAction::Add(Message::typing()),
            },
            ScriptStep {
                delay: Duration::from_millis(30),
                action: StepAction::React {
                    index: 1,
                    emoji: "\u{1F44D}".to_string(),
                },
            },
            ScriptStep {
                delay: Duration::from_millis(40),
                action: StepAction::React {
                    index: 2,
                    emoji: "\u{1F44D}".to_string(),
                },
            },
        ]);
        let mut player = ScriptPlayer::new(script);
        let start = Instant::now();
        player.start(start);

        player.tick(start + Duration::from_millis(50));

        assert!(player.messages().iter().all(|m| m.reaction().is_none()));
    }

    #[test]
    fn stale_update_index_is_ignored() {
        let script = script_with(vec![
            seed_step(),
            ScriptStep {
                delay: Duration::from_millis(10),
                action: StepAction::UpdateIncoming {
                    index: 9,
                    text: "late answer".to_string(),
                },
            },
        ]);
        let mut player = ScriptPlayer::new(script);
        let start = Instant::now();
        player.start(start);

        player.tick(start + Duration::from_millis(20));

        assert_eq!(player.messages().len(), 1);
        assert_eq!(player.messages()[0].text(), "hello");
    }

    #[test]
    fn idle_player_ignores_ticks() {
        let mut player = ScriptPlayer::new(script_with(vec![seed_step()]));
        assert!(!player.tick(Instant::now()));
        assert!(player.messages().is_empty());
    }
}
