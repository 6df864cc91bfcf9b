// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test only helpers.

use std::{io::Write,
          sync::{Arc, Mutex}};

/// In memory sink for a [`tracing_subscriber`] fmt layer. Every clone appends to the
/// same buffer.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

/// Run `block` w/ a thread local subscriber that writes plain text (no ANSI) into a
/// buffer. Returns what `block` returned, and everything that was logged.
pub fn capture_tracing_output<R>(block: impl FnOnce() -> R) -> (R, String) {
    let captured = CapturedOutput::default();

    let tracing_writer = {
        let captured = captured.clone();
        move || captured.clone()
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(tracing_writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, block);
    (result, captured.contents())
}
