//! Collaborators the controller talks to: text out, lines in, sound, speech,
//! and frame pacing.
//!
//! The binary uses the stdio implementations; tests use `ScriptedInput`,
//! `RecordingSink` and `NoPacer`.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

use wopr_core::events::SoundEvent;

/// Destination for rendered text.
pub trait OutputSink {
    fn emit(&mut self, text: &str);

    /// Wipe the display before redrawing an animation frame.
    fn clear(&mut self) {}
}

/// Source of player input lines. `None` means end of input.
pub trait InputSource {
    fn read_line(&mut self) -> Option<String>;
}

/// Fire-and-forget sound playback.
pub trait SoundTrigger {
    fn play(&self, event: SoundEvent);
}

/// Fire-and-forget speech synthesis.
pub trait SpeechTrigger {
    fn speak(&self, text: &str);
}

/// Suspend point between animation frames.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

// ---- stdio ----

/// Writes to stdout. Clears the screen between frames on a terminal.
#[derive(Debug)]
pub struct StdoutSink {
    clear_screen: bool,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            clear_screen: io::stdout().is_terminal(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("stdout write failed: {e}");
        }
    }

    fn clear(&mut self) {
        if self.clear_screen {
            self.emit("\x1b[2J\x1b[H");
        }
    }
}

/// Reads lines from stdin.
#[derive(Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("stdin read failed: {e}");
                None
            }
        }
    }
}

/// Sleeps the current thread.
#[derive(Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Never waits.
#[derive(Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _delay: Duration) {}
}

/// Sound backend that only logs the event name.
#[derive(Debug, Default)]
pub struct LogSound;

impl SoundTrigger for LogSound {
    fn play(&self, event: SoundEvent) {
        tracing::debug!(event = %event, "sound");
    }
}

// ---- scripted ----

/// Replays a fixed list of lines, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Keeps everything emitted.
#[derive(Debug, Default)]
pub struct RecordingSink {
    text: String,
    clears: usize,
}

impl RecordingSink {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of frame redraws requested.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
