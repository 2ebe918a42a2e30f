//! Browser bindings
//!
//! The page's canvas code owns drawing. It forwards key/touch events, calls
//! `tick` once per animation frame and draws the returned JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::persistence::ScoreBook;
use crate::platform::{self, LocalStorageStore};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameSession, TickInput, Viewport, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Neon Pulse starting...");
}

fn new_session(settings: &Settings, width: f32, height: f32) -> GameSession {
    let seed = platform::now_ms() as u64;
    let mut tuning = Tuning::default();
    settings.apply_to(&mut tuning);
    log::info!("New session with seed: {}", seed);
    GameSession::with_tuning(seed, Viewport::new(width, height), tuning)
}

/// Game instance holding one session plus persistence
#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
    scores: ScoreBook<LocalStorageStore>,
    settings: Settings,
    idle_mode: bool,
    /// Activation received since the last frame
    pending_activate: bool,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let store = LocalStorageStore::new();
        let settings = Settings::load(&store);
        let session = new_session(&settings, width, height);
        WebGame {
            session,
            scores: ScoreBook::new(store),
            settings,
            idle_mode: false,
            pending_activate: false,
        }
    }

    /// Start a fresh session (after game over)
    pub fn restart(&mut self, width: f32, height: f32) {
        self.session = new_session(&self.settings, width, height);
        self.pending_activate = false;
    }

    /// Keyboard handler; `code` is `KeyboardEvent.code`. Returns true if the
    /// key was queued for the next frame.
    pub fn key_down(&mut self, code: &str) -> bool {
        platform::is_activation_key(code) && self.touch()
    }

    /// Touch/click handler
    pub fn touch(&mut self) -> bool {
        if self.session.phase == GamePhase::GameOver {
            return false;
        }
        self.pending_activate = true;
        true
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.idle_mode = idle;
    }

    /// Advance one frame and return the snapshot as JSON
    pub fn tick(&mut self, width: f32, height: f32) -> Result<String, JsValue> {
        let now_ms = platform::now_ms();
        let input = TickInput {
            now_ms,
            viewport: Viewport::new(width, height),
            activate: std::mem::take(&mut self.pending_activate),
            idle_mode: self.idle_mode,
        };
        tick(&mut self.session, &input);

        for event in self.session.drain_events() {
            if let GameEvent::GameOver { final_score } = event {
                if let Err(err) =
                    self.scores
                        .record_game_over(self.settings.display_name(), final_score, now_ms)
                {
                    log::error!("Failed to save score: {}", err);
                }
            }
        }

        self.session
            .snapshot()
            .to_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// True once the post-crash pause is over and the page may navigate away
    pub fn ready_for_handoff(&self) -> bool {
        self.session.ready_for_handoff(platform::now_ms())
    }

    pub fn score(&self) -> f64 {
        self.session.score as f64
    }

    pub fn level(&self) -> u32 {
        self.session.level()
    }

    pub fn last_score(&self) -> f64 {
        self.scores.last_score() as f64
    }

    pub fn leaderboard_json(&self) -> Result<String, JsValue> {
        self.scores
            .leaderboard()
            .to_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.settings.player_name = name.to_string();
        if let Err(err) = self.settings.save(self.scores.store_mut()) {
            log::error!("Failed to save settings: {}", err);
        }
    }
}
