//! wasm-bindgen bindings to the global `echarts` object.
//!
//! Only the handful of instance methods the widget needs are bound. The
//! library itself is loaded by a `<script>` tag in the host page.

use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::settings::{ChartSettings, SetOptionSettings};

#[wasm_bindgen]
extern "C" {
	/// An ECharts instance bound to one DOM element.
	pub type ECharts;

	#[wasm_bindgen(js_namespace = echarts, js_name = init, catch)]
	fn echarts_init(dom: &HtmlElement, theme: &JsValue, opts: &JsValue) -> Result<ECharts, JsValue>;

	#[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
	fn echarts_instance_by_dom(dom: &HtmlElement) -> Option<ECharts>;

	#[wasm_bindgen(method, js_name = setOption)]
	fn set_option(this: &ECharts, option: &JsValue, opts: &JsValue);

	#[wasm_bindgen(method)]
	fn resize(this: &ECharts);

	#[wasm_bindgen(method)]
	fn dispose(this: &ECharts);

	#[wasm_bindgen(method, js_name = isDisposed)]
	fn is_disposed(this: &ECharts) -> bool;

	#[wasm_bindgen(method)]
	fn on(this: &ECharts, event: &str, handler: &js_sys::Function);

	#[wasm_bindgen(method)]
	fn off(this: &ECharts, event: &str, handler: &js_sys::Function);
}

/// Convert a serde value to a plain JS object (maps become objects).
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
	value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Owned handle to a chart instance.
pub struct Chart {
	inner: ECharts,
}

impl Chart {
	/// Create a chart on `dom`, reusing the instance already attached to it.
	pub fn init(dom: &HtmlElement, settings: &ChartSettings) -> Result<Self, JsValue> {
		if let Some(inner) = echarts_instance_by_dom(dom) {
			if !inner.is_disposed() {
				return Ok(Self { inner });
			}
		}
		let opts = to_js(settings).map_err(JsValue::from)?;
		let inner = echarts_init(dom, &JsValue::NULL, &opts)?;
		Ok(Self { inner })
	}

	/// Apply `option`. Serialization failures are logged and skipped.
	pub fn set_option<T: Serialize + ?Sized>(&self, option: &T, settings: &SetOptionSettings) {
		match (to_js(option), to_js(settings)) {
			(Ok(option), Ok(opts)) => self.inner.set_option(&option, &opts),
			(Err(e), _) | (_, Err(e)) => {
				warn!("product-space: failed to convert chart option: {}", e);
			}
		}
	}

	/// Re-measure the surface, unless disposed.
	pub fn resize(&self) {
		if !self.inner.is_disposed() {
			self.inner.resize();
		}
	}

	/// Subscribe `handler` to a chart event.
	pub fn on(&self, event: &str, handler: &js_sys::Function) {
		self.inner.on(event, handler);
	}

	/// Remove a handler added with [`on`](Self::on).
	pub fn off(&self, event: &str, handler: &js_sys::Function) {
		self.inner.off(event, handler);
	}

	/// Release the instance and its DOM.
	pub fn dispose(self) {
		if !self.inner.is_disposed() {
			self.inner.dispose();
		}
	}
}
