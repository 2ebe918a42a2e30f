//! Neon Pulse entry point
//!
//! Native builds run a headless session at a simulated 60 Hz and persist the
//! result. The browser build is driven through `neon_pulse::web`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use neon_pulse::highscores::format_age;
    use neon_pulse::persistence::{FileStore, ScoreBook};
    use neon_pulse::platform;
    use neon_pulse::sim::{GameEvent, GamePhase, GameSession, TickInput, Viewport, tick};
    use neon_pulse::{Settings, Tuning};

    /// Simulated frame length
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Runtime options (environment variables)
    struct RunConfig {
        seed: u64,
        max_ticks: u64,
        data_dir: PathBuf,
        tuning_path: Option<PathBuf>,
        autopilot: bool,
    }

    impl RunConfig {
        fn from_env() -> Self {
            let seed = env::var("NEON_PULSE_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| platform::now_ms() as u64);
            let max_ticks = env::var("NEON_PULSE_TICKS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60 * 60);
            let data_dir = env::var("NEON_PULSE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".neon-pulse"));
            let tuning_path = env::var("NEON_PULSE_TUNING").ok().map(PathBuf::from);
            let autopilot = env::var("NEON_PULSE_AUTOPILOT")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);
            Self {
                seed,
                max_ticks,
                data_dir,
                tuning_path,
                autopilot,
            }
        }

        fn load_tuning(&self) -> Tuning {
            let Some(path) = &self.tuning_path else {
                return Tuning::default();
            };
            match fs::read_to_string(path).map(|json| Tuning::from_json(&json)) {
                Ok(Ok(tuning)) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Ok(Err(err)) => {
                    log::warn!("Invalid tuning in {}: {}", path.display(), err);
                    Tuning::default()
                }
                Err(err) => {
                    log::warn!("Cannot read {}: {}", path.display(), err);
                    Tuning::default()
                }
            }
        }
    }

    pub fn run() {
        let config = RunConfig::from_env();

        let store = match FileStore::open(&config.data_dir) {
            Ok(store) => store,
            Err(err) => {
                log::error!("Cannot open data dir {}: {}", config.data_dir.display(), err);
                std::process::exit(1);
            }
        };
        let settings = Settings::load(&store);
        let mut scores = ScoreBook::new(store);

        let mut tuning = config.load_tuning();
        settings.apply_to(&mut tuning);

        let viewport = Viewport::new(800.0, 600.0);
        let mut session = GameSession::with_tuning(config.seed, viewport, tuning);
        log::info!(
            "Neon Pulse (headless) seed={} ticks={} autopilot={}",
            config.seed,
            config.max_ticks,
            config.autopilot
        );

        let mut final_score = None;
        for frame in 0..config.max_ticks {
            let now_ms = frame as f64 * FRAME_MS;
            let input = TickInput {
                now_ms,
                viewport,
                // Without the autopilot the run still needs one press to start
                activate: !config.autopilot && frame == 0,
                idle_mode: config.autopilot,
            };
            tick(&mut session, &input);

            for event in session.drain_events() {
                if let GameEvent::GameOver { final_score: score } = event {
                    final_score = Some(score);
                }
            }

            if frame > 0 && frame % 600 == 0 && session.phase == GamePhase::Playing {
                log::info!(
                    "tick {}: score {} level {} obstacles {}",
                    session.time_ticks,
                    session.score,
                    session.level(),
                    session.obstacles.len()
                );
            }
            if session.ready_for_handoff(now_ms) {
                break;
            }
        }

        match final_score {
            Some(score) => {
                match scores.record_game_over(settings.display_name(), score, platform::now_ms()) {
                    Ok(Some(rank)) => println!("Game over: {} points (rank #{})", score, rank),
                    Ok(None) => println!("Game over: {} points", score),
                    Err(err) => log::error!("Failed to save score: {}", err),
                }
            }
            None => println!(
                "Stopped after {} ticks: {} points, level {}",
                session.time_ticks,
                session.score,
                session.level()
            ),
        }

        let board = scores.leaderboard();
        if !board.is_empty() {
            let now = platform::now_ms();
            println!("\nLeaderboard");
            for (i, entry) in board.entries.iter().enumerate() {
                println!(
                    "{:>2}. {:<12} {:>6}  {}",
                    i + 1,
                    entry.name,
                    entry.score,
                    format_age(now, entry.timestamp)
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is neon_pulse::web::wasm_main, this is just to satisfy the compiler
}
