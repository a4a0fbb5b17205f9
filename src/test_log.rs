//! Per-thread capture of `log` warnings for unit tests.

use std::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
	static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct Capture;

impl Log for Capture {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.level() <= Level::Warn
	}

	fn log(&self, record: &Record<'_>) {
		if self.enabled(record.metadata()) {
			WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
		}
	}

	fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

/// Run `f` and return the warnings it logged on the current thread.
pub fn warnings_during<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
	// Only the first call installs; the logger is process-wide.
	let _ = log::set_logger(&CAPTURE);
	log::set_max_level(LevelFilter::Warn);
	WARNINGS.with(|w| w.borrow_mut().clear());
	let result = f();
	let warnings = WARNINGS.with(|w| w.borrow_mut().drain(..).collect());
	(result, warnings)
}
