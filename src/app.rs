//! Terminal chat REPL — the thin presentation layer.
//!
//! # Architecture
//!
//! [`CoachApp`] owns the [`TurnProcessor`], the [`SessionLedger`] and the
//! [`AudioPlayer`]. Input is read line-by-line on the calling thread; each
//! submission is processed to completion on the tokio runtime before the
//! next prompt is shown, so exactly one turn is ever in flight.
//!
//! The REPL understands three commands; anything else is an utterance:
//!
//! | Input          | Effect                                       |
//! |----------------|----------------------------------------------|
//! | `/key <value>` | Set the API key for subsequent turns         |
//! | `/export`      | Write the mistake log to a dated CSV file    |
//! | `/quit`        | Exit                                         |
//!
//! Empty lines are ignored without invoking the processor, and the loop
//! stays locked with a hint while no API key is present — the same "enter
//! your key first" gate the original tool shows.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::config::{AppConfig, AppPaths};
use crate::session::{export_filename, write_csv_file, SessionLedger};
use crate::tts::AudioPlayer;
use crate::turn::{TurnOutcome, TurnProcessor};

// ---------------------------------------------------------------------------
// Command parsing
// ---------------------------------------------------------------------------

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line — do nothing.
    Empty,
    /// Exit the REPL.
    Quit,
    /// Export the mistake log.
    Export,
    /// Replace the API key used from the next turn on.
    SetKey(String),
    /// A sentence to run through the turn pipeline.
    Utterance(String),
}

impl Command {
    /// Parse a raw input line.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }
        if trimmed == "/quit" || trimmed == "/exit" {
            return Command::Quit;
        }
        if trimmed == "/export" {
            return Command::Export;
        }
        if trimmed == "/key" {
            return Command::SetKey(String::new());
        }
        if let Some(key) = trimmed.strip_prefix("/key ") {
            return Command::SetKey(key.trim().to_string());
        }
        Command::Utterance(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// CoachApp
// ---------------------------------------------------------------------------

/// The interactive coaching session.
pub struct CoachApp {
    processor: TurnProcessor,
    ledger: SessionLedger,
    player: AudioPlayer,
    config: AppConfig,
    api_key: Option<String>,
}

impl CoachApp {
    /// Create an app over a ready turn processor.
    ///
    /// `api_key` is the startup credential (usually `GEMINI_API_KEY`);
    /// `None` locks the loop until the user supplies one with `/key`.
    pub fn new(processor: TurnProcessor, config: AppConfig, api_key: Option<String>) -> Self {
        Self {
            processor,
            ledger: SessionLedger::new(),
            player: AudioPlayer::new(),
            config,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Read-only view of the session ledger (used by tests).
    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    /// Run the REPL until `/quit` or end of input.
    ///
    /// Each turn is driven to completion via `rt.block_on`, which enforces
    /// the one-turn-in-flight discipline by construction.
    pub fn run(&mut self, rt: &tokio::runtime::Runtime) -> Result<()> {
        println!("🎓 AI 英文隨身教練 — 用中英夾雜練習口說");
        println!("試著說：我想要 book 一個 table...  (/export 匯出筆記, /quit 離開)");

        let stdin = std::io::stdin();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }

            match Command::parse(&line) {
                Command::Empty => continue,
                Command::Quit => break,
                Command::SetKey(key) => {
                    if key.is_empty() {
                        println!("用法: /key <你的 Gemini API Key>");
                    } else {
                        self.api_key = Some(key);
                        println!("✅ API Key 已更新，下一句立即生效。");
                    }
                }
                Command::Export => self.export(),
                Command::Utterance(text) => {
                    let Some(api_key) = self.api_key.clone() else {
                        println!("🔑 請先用 /key 輸入你的 Gemini API Key 才能開始喔！");
                        continue;
                    };
                    self.submit(rt, &text, &api_key);
                }
            }
        }

        log::info!(
            "session ended: {} turns, {} mistakes recorded",
            self.ledger.history().len(),
            self.ledger.mistakes().len()
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Turn handling
    // -----------------------------------------------------------------------

    /// Process one utterance, render it, play audio, append to the ledger.
    fn submit(&mut self, rt: &tokio::runtime::Runtime, text: &str, api_key: &str) {
        println!("⏳ AI 正在思考...");
        let result = rt.block_on(self.processor.process(text, api_key));

        match &result.outcome {
            TurnOutcome::Success {
                audio_reply,
                audio_correction,
                rendered,
                ..
            } => {
                println!("{rendered}");

                if let Some(artifact) = audio_reply {
                    println!("🔊 聽 AI 回應 (Reply)...");
                    self.player.play(artifact);
                }
                if let Some(artifact) = audio_correction {
                    println!("🔊 聽正確說法 (Correction)...");
                    self.player.play(artifact);
                }
            }
            TurnOutcome::Failed { cause } => {
                println!("❌ 發生錯誤: {cause} (請檢查 API Key 或模型名稱)");
            }
        }

        self.ledger.append(result);
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    /// Write the mistake log to a dated CSV in the configured export dir.
    fn export(&self) {
        if self.ledger.mistakes().is_empty() {
            println!("還沒有可以匯出的筆記 — 先練習幾句吧！");
            return;
        }

        let dir = self
            .config
            .export
            .output_dir
            .clone()
            .unwrap_or_else(|| AppPaths::new().export_dir);
        let path = dir.join(export_filename(chrono::Local::now().date_naive()));

        match write_csv_file(self.ledger.mistakes(), &path) {
            Ok(()) => println!(
                "📥 已匯出 {} 筆練習筆記 → {}",
                self.ledger.mistakes().len(),
                path.display()
            ),
            Err(e) => println!("❌ 匯出失敗: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
