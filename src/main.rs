//! Application entry point — AI English conversation coach.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create the tokio runtime (multi-thread, 2 workers — oracle and TTS
//!    calls overlap within a turn).
//! 4. Build the oracle client and speech synthesizer from config.
//! 5. Read the startup API key from `GEMINI_API_KEY` (optional — the REPL
//!    accepts `/key` at any time).
//! 6. Run the [`CoachApp`] REPL on the main thread until `/quit`.

use std::sync::Arc;

use english_coach::{
    app::CoachApp,
    config::AppConfig,
    oracle::{GeminiClient, OracleClient},
    tts::{AudioArtifact, GoogleTranslateTts, SpeechSynthesizer},
    turn::TurnProcessor,
};

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("English coach starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    // 4. Oracle + TTS backends
    let oracle: Arc<dyn OracleClient> = Arc::new(GeminiClient::from_config(&config.oracle));

    let tts: Arc<dyn SpeechSynthesizer> = if config.tts.enabled {
        Arc::new(GoogleTranslateTts::from_config(&config.tts))
    } else {
        log::info!("TTS disabled in settings — turns will be text-only");
        Arc::new(DisabledTts)
    };

    let processor = TurnProcessor::new(oracle, tts);

    // 5. Startup credential (rotatable mid-session via /key)
    let api_key = std::env::var("GEMINI_API_KEY").ok();
    if api_key.is_none() {
        log::info!("GEMINI_API_KEY not set — the REPL will ask for /key");
    }

    // 6. REPL
    let mut app = CoachApp::new(processor, config, api_key);
    app.run(&rt)
}

// ---------------------------------------------------------------------------
// DisabledTts — synthesizer stub when TTS is switched off in settings
// ---------------------------------------------------------------------------

struct DisabledTts;

#[async_trait::async_trait]
impl SpeechSynthesizer for DisabledTts {
    async fn synthesize(&self, _text: &str) -> Option<AudioArtifact> {
        None
    }
}
