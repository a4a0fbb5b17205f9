//! Trailing-edge debouncing of bursty notifications.
//!
//! Every [`Debouncer::trigger`] cancels the pending timer and starts a new
//! one, so the action runs once, `delay` after the last trigger of a burst.
//! Timers come from a [`TimerHost`]; the browser host wraps `setTimeout`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use log::warn;

/// Quiet period before a resize notification is forwarded to the chart.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Source of one-shot cancellable timers.
pub trait TimerHost {
	/// Identifies a started timer for cancellation.
	type Handle;

	/// Run `callback` once after `delay`. `None` if no timer could be started.
	fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;

	/// Stop a timer that has not fired yet.
	fn cancel(&self, handle: Self::Handle);
}

/// `window.setTimeout` timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
	type Handle = TimeoutHandle;

	fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
		match set_timeout_with_handle(callback, delay) {
			Ok(handle) => Some(handle),
			Err(e) => {
				warn!("product-space: failed to start timer: {:?}", e);
				None
			}
		}
	}

	fn cancel(&self, handle: TimeoutHandle) {
		handle.clear();
	}
}

/// Coalesces bursts of [`trigger`](Self::trigger) calls into one action.
///
/// Dropping the debouncer cancels a pending run.
pub struct Debouncer<H: TimerHost> {
	host: H,
	delay: Duration,
	action: Rc<dyn Fn()>,
	pending: Rc<RefCell<Option<H::Handle>>>,
}

impl<H> Debouncer<H>
where
	H: TimerHost,
	H::Handle: 'static,
{
	/// Run `action` once `delay` has passed since the last trigger.
	pub fn new(host: H, delay: Duration, action: impl Fn() + 'static) -> Self {
		Self {
			host,
			delay,
			action: Rc::new(action),
			pending: Rc::new(RefCell::new(None)),
		}
	}

	/// Restart the quiet period.
	pub fn trigger(&self) {
		self.cancel();
		let (action, pending) = (self.action.clone(), self.pending.clone());
		let handle = self.host.start(
			self.delay,
			Box::new(move || {
				pending.borrow_mut().take();
				action();
			}),
		);
		*self.pending.borrow_mut() = handle;
	}

	/// Drop the pending run, if any.
	pub fn cancel(&self) {
		// Take first so the borrow ends before the host sees the handle.
		let pending = self.pending.borrow_mut().take();
		if let Some(handle) = pending {
			self.host.cancel(handle);
		}
	}

	/// Whether a run is scheduled.
	pub fn is_pending(&self) -> bool {
		self.pending.borrow().is_some()
	}
}

impl<H: TimerHost> Drop for Debouncer<H> {
	fn drop(&mut self) {
		let pending = self.pending.borrow_mut().take();
		if let Some(handle) = pending {
			self.host.cancel(handle);
		}
	}
}
