//! Leptos component hosting an ECharts instance.
//!
//! The component creates a `<div>` surface, initializes the chart on it once
//! mounted, and keeps three things in sync: the option (re-applied whenever
//! the signal changes), the surface size (a `ResizeObserver` feeding a
//! debounced `resize`), and caller event handlers. Everything is released in
//! `on_cleanup`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ResizeObserver};

use super::bindings::Chart;
use super::debounce::{BrowserTimers, Debouncer, RESIZE_DEBOUNCE};
use super::settings::{ChartSettings, SetOptionSettings, SurfaceStyle};
use crate::components::product_space::ChartOption;

/// A chart event subscription, e.g. `"click"` or `"mouseover"`.
#[derive(Clone)]
pub struct ChartEvent {
	/// ECharts event name.
	pub name: String,
	/// Called with the event params object.
	pub handler: Rc<dyn Fn(JsValue)>,
}

impl ChartEvent {
	/// Subscribe `handler` to the event called `name`.
	pub fn new(name: impl Into<String>, handler: impl Fn(JsValue) + 'static) -> Self {
		Self {
			name: name.into(),
			handler: Rc::new(handler),
		}
	}
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, ResizeObserver)>;
type EventCallback = Closure<dyn FnMut(JsValue)>;

/// Live resources owned by a mounted chart.
struct Mounted {
	chart: Rc<RefCell<Option<Chart>>>,
	resize: Rc<Debouncer<BrowserTimers>>,
	observer: Option<(ResizeObserver, ObserverCallback)>,
	listeners: Vec<(String, EventCallback)>,
}

impl Mounted {
	fn teardown(mut self) {
		self.resize.cancel();
		if let Some((observer, _callback)) = self.observer.take() {
			observer.disconnect();
		}
		if let Some(chart) = self.chart.borrow_mut().take() {
			for (name, callback) in &self.listeners {
				chart.off(name, callback.as_ref().unchecked_ref());
			}
			chart.dispose();
		}
		self.listeners.clear();
		debug!("product-space: chart disposed");
	}
}

fn observe_size(
	surface: &HtmlElement,
	resize: Rc<Debouncer<BrowserTimers>>,
) -> Result<(ResizeObserver, ObserverCallback), JsValue> {
	let callback: ObserverCallback = Closure::new(move |_entries: js_sys::Array, _observer: ResizeObserver| {
		resize.trigger()
	});
	let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
	observer.observe(surface);
	Ok((observer, callback))
}

/// Renders `option` with ECharts into a sized `<div>`.
///
/// The option is re-applied with `option_settings` every time the signal
/// changes. Surface size changes reach the chart at most once per quiet
/// period of [`RESIZE_DEBOUNCE`].
#[component]
pub fn EChart(
	/// Option to render; re-applied on every change.
	#[prop(into)]
	option: Signal<ChartOption>,
	/// Settings for `echarts.init`.
	#[prop(optional)]
	chart_settings: ChartSettings,
	/// Settings for each `setOption` call.
	#[prop(optional)]
	option_settings: SetOptionSettings,
	/// Surface size.
	#[prop(optional)]
	style: SurfaceStyle,
	/// Chart event subscriptions.
	#[prop(optional)]
	events: Vec<ChartEvent>,
) -> impl IntoView {
	let surface_ref = NodeRef::<leptos::html::Div>::new();
	let chart: Rc<RefCell<Option<Chart>>> = Rc::new(RefCell::new(None));
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));
	let option_settings = Rc::new(option_settings);

	let (chart_init, mounted_init, settings_init) =
		(chart.clone(), mounted.clone(), option_settings.clone());
	Effect::new(move |_| {
		let Some(surface) = surface_ref.get() else {
			return;
		};
		if mounted_init.borrow().is_some() {
			return;
		}
		let surface: HtmlElement = surface.into();

		let instance = match Chart::init(&surface, &chart_settings) {
			Ok(instance) => instance,
			Err(e) => {
				warn!("product-space: failed to initialize chart: {:?}", e);
				return;
			}
		};

		let listeners: Vec<(String, EventCallback)> = events
			.iter()
			.map(|event| {
				let handler = event.handler.clone();
				let callback: EventCallback = Closure::new(move |params: JsValue| handler(params));
				instance.on(&event.name, callback.as_ref().unchecked_ref());
				(event.name.clone(), callback)
			})
			.collect();

		option.with_untracked(|value| instance.set_option(value, &settings_init));
		*chart_init.borrow_mut() = Some(instance);

		let chart_resize = chart_init.clone();
		let resize = Rc::new(Debouncer::new(BrowserTimers, RESIZE_DEBOUNCE, move || {
			if let Some(ref c) = *chart_resize.borrow() {
				c.resize();
			}
		}));

		let observer = match observe_size(&surface, resize.clone()) {
			Ok(pair) => Some(pair),
			Err(e) => {
				warn!("product-space: resize observer unavailable: {:?}", e);
				None
			}
		};

		*mounted_init.borrow_mut() = Some(Mounted {
			chart: chart_init.clone(),
			resize,
			observer,
			listeners,
		});
		debug!("product-space: chart mounted");
	});

	let chart_update = chart.clone();
	Effect::new(move |_| {
		option.with(|value| {
			if let Some(ref c) = *chart_update.borrow() {
				c.set_option(value, &option_settings);
			}
		});
	});

	let mounted_cleanup = SendWrapper::new(mounted);
	on_cleanup(move || {
		let mounted = mounted_cleanup.take();
		let taken = mounted.borrow_mut().take();
		if let Some(m) = taken {
			m.teardown();
		}
	});

	view! { <div node_ref=surface_ref class="echart" style=style.css() /> }
}
