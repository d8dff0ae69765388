//! Diagnostics for a single gamedata run.
//!
//! The pipeline never logs through global state; callers hand it a
//! [`Reporter`] scoped to the run.

use std::cell::RefCell;

/// Receives status, warning and error messages from one run.
pub trait Reporter {
	fn info(&self, message: &str);
	fn warn(&self, message: &str);
	fn error(&self, message: &str);
}

/// Prints status to stdout and problems to stderr, for the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
	/// Suppress `info` messages.
	pub quiet: bool,
}

impl Reporter for ConsoleReporter {
	fn info(&self, message: &str) {
		if !self.quiet {
			println!("{}", message);
		}
	}

	fn warn(&self, message: &str) {
		eprintln!("Warning: {}", message);
	}

	fn error(&self, message: &str) {
		eprintln!("error: {}", message);
	}
}

/// Forwards to the `log` facade so a host build tool can route messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
	fn info(&self, message: &str) {
		log::info!(target: "gamedata", "{}", message);
	}

	fn warn(&self, message: &str) {
		log::warn!(target: "gamedata", "{}", message);
	}

	fn error(&self, message: &str) {
		log::error!(target: "gamedata", "{}", message);
	}
}

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Info,
	Warn,
	Error,
}

/// Keeps every message in memory. Useful for tests and embedding.
#[derive(Debug, Default)]
pub struct RecordingReporter {
	messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
	pub fn new() -> Self {
		Self::default()
	}

	/// All messages so far, in order.
	pub fn messages(&self) -> Vec<(Level, String)> {
		self.messages.borrow().clone()
	}

	/// Messages of one level, in order.
	pub fn at(&self, level: Level) -> Vec<String> {
		self.messages
			.borrow()
			.iter()
			.filter(|(l, _)| *l == level)
			.map(|(_, m)| m.clone())
			.collect()
	}

	fn record(&self, level: Level, message: &str) {
		self.messages.borrow_mut().push((level, message.to_string()));
	}
}

impl Reporter for RecordingReporter {
	fn info(&self, message: &str) {
		self.record(Level::Info, message);
	}

	fn warn(&self, message: &str) {
		self.record(Level::Warn, message);
	}

	fn error(&self, message: &str) {
		self.record(Level::Error, message);
	}
}

/// Render an error with its `source()` chain, one cause per `: ` segment.
pub fn format_error_chain(err: &dyn std::error::Error) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
