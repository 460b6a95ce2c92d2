// Builder contract: seed-first ordering, the four-step cadence per prompt,
// fallback behavior, and determinism.

use std::time::Duration;

use claire_demo::content;
use claire_demo::script::{build_script, ChatMode, Message, PolicyId, StepAction, Timing};

#[test]
fn every_mode_builds_a_seed_first_script() {
    let timing = Timing::default();

    for mode in ChatMode::ALL {
        let script = build_script(mode, None, &timing);

        assert!(!script.steps().is_empty(), "empty script for {}", mode);

        let first = &script.steps()[0];
        assert_eq!(first.delay, Duration::ZERO);
        match &first.action {
            StepAction::Add(Message::Incoming { text, .. }) => {
                assert_eq!(text, content::greeting_for(mode));
            }
            other => panic!("first step for {} is not the greeting: {:?}", mode, other),
        }

        assert_eq!(script.seed_message().text(), content::greeting_for(mode));
    }
}

#[test]
fn delays_never_decrease() {
    let timing = Timing::default();

    for mode in ChatMode::ALL {
        for policy in PolicyId::ALL {
            let script = build_script(mode, Some(policy), &timing);
            let delays: Vec<Duration> = script.steps().iter().map(|s| s.delay).collect();
            assert!(
                delays.windows(2).all(|w| w[0] <= w[1]),
                "delays decrease for {}/{}",
                mode,
                policy
            );
        }
    }
}

#[test]
fn each_prompt_expands_to_the_four_step_cadence() {
    let timing = Timing::default();
    let prompts = content::prompts_for(ChatMode::Contact, PolicyId::Gl);
    let script = build_script(ChatMode::Contact, Some(PolicyId::Gl), &timing);

    assert_eq!(script.steps().len(), 1 + prompts.len() * 4);

    for (i, prompt) in prompts.iter().enumerate() {
        let base = 1 + i * 4;
        // The answer slot: seed + (question, typing) per previous pair + this question.
        let answer_slot = 2 + i * 2;

        match &script.steps()[base].action {
            StepAction::Add(Message::Outgoing { text, .. }) => assert_eq!(text, prompt.question),
            other => panic!("pair {}: expected outgoing question, got {:?}", i, other),
        }

        match &script.steps()[base + 1].action {
            StepAction::Add(message) => assert!(message.is_typing()),
            other => panic!("pair {}: expected typing placeholder, got {:?}", i, other),
        }

        match &script.steps()[base + 2].action {
            StepAction::UpdateIncoming { index, text } => {
                assert_eq!(*index, answer_slot);
                assert_eq!(text, prompt.answer);
            }
            other => panic!("pair {}: expected update, got {:?}", i, other),
        }

        match &script.steps()[base + 3].action {
            StepAction::React { index, .. } => assert_eq!(*index, answer_slot),
            other => panic!("pair {}: expected reaction, got {:?}", i, other),
        }
    }
}

#[test]
fn missing_policy_falls_back_to_gl() {
    let timing = Timing::default();

    for mode in ChatMode::ALL {
        assert_eq!(
            build_script(mode, None, &timing),
            build_script(mode, Some(PolicyId::Gl), &timing)
        );
    }
}

#[test]
fn building_twice_is_deterministic() {
    let timing = Timing::default();

    for mode in ChatMode::ALL {
        for policy in PolicyId::ALL {
            assert_eq!(
                build_script(mode, Some(policy), &timing),
                build_script(mode, Some(policy), &timing)
            );
        }
    }
}

#[test]
fn total_duration_is_last_delay_plus_end_pause() {
    let timing = Timing::default();

    for mode in ChatMode::ALL {
        let script = build_script(mode, None, &timing);
        let last_delay = script.steps().last().map(|s| s.delay).unwrap_or_default();
        assert_eq!(script.total_duration(), last_delay + timing.end_pause());
    }
}

#[test]
fn overview_scripts_differ_per_policy() {
    let timing = Timing::default();
    let gl = build_script(ChatMode::Overview, Some(PolicyId::Gl), &timing);
    let ca = build_script(ChatMode::Overview, Some(PolicyId::Ca), &timing);
    assert_ne!(gl, ca);
}

#[test]
fn timing_overrides_stretch_the_timeline() {
    let mut slow = Timing::default();
    slow.end_pause_ms = 10_000;

    let default = build_script(ChatMode::Contact, None, &Timing::default());
    let stretched = build_script(ChatMode::Contact, None, &slow);
    assert!(stretched.total_duration() > default.total_duration());
}
