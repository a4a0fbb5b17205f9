//! Window size as a signal owned by the widget that reads it.

use std::rc::Rc;

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use super::scale::Viewport;
use crate::components::echart::{BrowserTimers, Debouncer, RESIZE_DEBOUNCE, TimerHost};

/// Size used when the window cannot be measured.
pub const FALLBACK_SIZE: ViewportSize = ViewportSize {
	width: 800.0,
	height: 600.0,
};

/// Inner size of the browser window, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
	/// `window.innerWidth`.
	pub width: f64,
	/// `window.innerHeight`.
	pub height: f64,
}

impl ViewportSize {
	/// Viewport for the rescaler with the given padding.
	pub fn with_padding(self, padding: f64) -> Viewport {
		Viewport::new(self.width, self.height).with_padding(padding)
	}
}

/// Current `innerWidth`/`innerHeight` of the window.
pub fn window_size() -> Option<ViewportSize> {
	let window = web_sys::window()?;
	Some(ViewportSize {
		width: window.inner_width().ok()?.as_f64()?,
		height: window.inner_height().ok()?.as_f64()?,
	})
}

/// Debounced size updates: every trigger restarts the quiet period, after
/// which the size is measured once and passed to `apply`.
pub fn resize_settler<H>(
	host: H,
	measure: impl Fn() -> Option<ViewportSize> + 'static,
	apply: impl Fn(ViewportSize) + 'static,
) -> Debouncer<H>
where
	H: TimerHost,
	H::Handle: 'static,
{
	Debouncer::new(host, RESIZE_DEBOUNCE, move || {
		if let Some(size) = measure() {
			apply(size);
		}
	})
}

/// Track the window size for the lifetime of the calling component.
///
/// Resize events are coalesced with [`RESIZE_DEBOUNCE`], so a continuous
/// drag updates the signal once it settles. The `resize` listener and any
/// pending update are removed when the owning component is cleaned up.
pub fn use_viewport() -> ReadSignal<ViewportSize> {
	let (size, set_size) = signal(window_size().unwrap_or(FALLBACK_SIZE));

	let settle = Rc::new(resize_settler(BrowserTimers, window_size, move |current| {
		set_size.set(current)
	}));

	let on_resize = SendWrapper::new(settle.clone());
	let listener = window_event_listener(ev::resize, move |_| on_resize.trigger());

	let settle = SendWrapper::new(settle);
	on_cleanup(move || {
		listener.remove();
		settle.take().cancel();
	});

	size
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::echart::debounce::manual::ManualTimers;
	use std::cell::{Cell, RefCell};
	use std::time::Duration;

	#[test]
	fn test_size_to_viewport() {
		let vp = ViewportSize {
			width: 1024.0,
			height: 768.0,
		}
		.with_padding(12.0);
		assert_eq!(vp, Viewport::new(1024.0, 768.0).with_padding(12.0));
	}

	#[test]
	fn test_resize_burst_updates_size_once() {
		let timers = ManualTimers::default();
		let width = Rc::new(Cell::new(1000.0));
		let applied = Rc::new(RefCell::new(Vec::new()));

		let (w, sink) = (width.clone(), applied.clone());
		let settler = resize_settler(
			timers.clone(),
			move || {
				Some(ViewportSize {
					width: w.get(),
					height: 700.0,
				})
			},
			move |size| sink.borrow_mut().push(size),
		);

		for _ in 0..10 {
			width.set(width.get() - 25.0);
			settler.trigger();
			timers.advance(Duration::from_millis(16));
		}
		assert!(applied.borrow().is_empty());

		timers.advance(RESIZE_DEBOUNCE);
		assert_eq!(
			*applied.borrow(),
			vec![ViewportSize {
				width: 750.0,
				height: 700.0,
			}]
		);
	}

	#[test]
	fn test_cancelled_settler_never_applies() {
		let timers = ManualTimers::default();
		let applied = Rc::new(Cell::new(0));
		let sink = applied.clone();
		let settler = resize_settler(timers.clone(), || Some(FALLBACK_SIZE), move |_| sink.set(sink.get() + 1));

		settler.trigger();
		settler.cancel();
		timers.advance(Duration::from_secs(1));
		assert_eq!(applied.get(), 0);
	}
}
