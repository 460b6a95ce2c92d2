use std::time::Instant;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use crate::player::ScriptPlayer;
use crate::script::{build_script, ChatMode, PolicyId, Timing};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoView {
    Chat,
    Coverage,
}

pub struct App {
    pub should_quit: bool,
    pub current_view: DemoView,
    pub mode: ChatMode,
    pub policy: PolicyId,
    pub timing: Timing,
    pub player: ScriptPlayer,
    /// Injected once at startup; drives the evergreen dates in the coverage view.
    pub today: NaiveDate,
    /// Incremented on every tick event; drives the typing-dots animation.
    pub anim_tick: u64,
}

impl App {
    pub fn new(
        mode: ChatMode,
        policy: Option<PolicyId>,
        timing: Timing,
        today: NaiveDate,
        now: Instant,
    ) -> Self {
        let policy = policy.unwrap_or_default();
        let mut player = ScriptPlayer::new(build_script(mode, Some(policy), &timing));
        player.start(now);

        Self {
            should_quit: false,
            current_view: DemoView::Chat,
            mode,
            policy,
            timing,
            player,
            today,
            anim_tick: 0,
        }
    }

    pub fn toggle_view(&mut self) {
        self.current_view = match self.current_view {
            DemoView::Chat => DemoView::Coverage,
            DemoView::Coverage => DemoView::Chat,
        };
    }

    /// Switch to the next conversation mode and restart the script.
    pub fn next_mode(&mut self, now: Instant) {
        self.mode = self.mode.next();
        self.rebuild_script(now);
    }

    /// Switch to the next policy selector and restart the script.
    pub fn next_policy(&mut self, now: Instant) {
        self.policy = self.policy.next();
        self.rebuild_script(now);
    }

    fn rebuild_script(&mut self, now: Instant) {
        self.player
            .set_script(build_script(self.mode, Some(self.policy), &self.timing), now);
    }

    /// Advance the player; returns true when the view needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.anim_tick += 1;
        self.player.tick(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_view(),
            KeyCode::Char('m') => self.next_mode(now),
            KeyCode::Char('p') => self.next_policy(now),
            _ => {}
        }
    }
}
