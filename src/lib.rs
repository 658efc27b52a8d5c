//! WebAssembly 6/45 lotto number picker.
//!
//! Generates picks of five games (six main numbers plus a bonus), keeps a
//! bounded newest-first history in `localStorage`, and formats picks for the
//! clipboard. The page owns the DOM; it calls into the exported `LottoApp`
//! and draws the returned frame.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod history;
pub mod rng;
pub mod sampler;
pub mod storage;
pub mod theme;
pub mod types;
pub mod view;

pub use error::{LottoError, Result};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use tracing::warn;
    use wasm_bindgen::prelude::*;

    use crate::app::{App, Clipboard, Frame};
    use crate::clock::SystemClock;
    use crate::config::PickerConfig;
    use crate::generator;
    use crate::rng::WasmRng;
    use crate::storage::BrowserStore;

    /// Clipboard backed by a JS callback `(text) => boolean | Promise`.
    /// A non-boolean return (an async write in flight) counts as success.
    struct JsClipboard {
        write_fn: js_sys::Function,
        last_text: Option<String>,
    }

    impl Clipboard for JsClipboard {
        fn write(&mut self, text: &str) -> bool {
            self.last_text = Some(text.to_string());
            match self.write_fn.call1(&JsValue::NULL, &JsValue::from_str(text)) {
                Ok(result) => result.as_bool().unwrap_or(true),
                Err(_) => false,
            }
        }
    }

    fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(value).map_err(|err| {
            warn!(error = %err, "failed to convert result for JS");
            JsValue::from(err)
        })
    }

    fn to_js_error(err: crate::LottoError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    /// The picker page's state, driven by button events from JS.
    #[wasm_bindgen]
    pub struct LottoApp {
        app: App<BrowserStore, SystemClock, WasmRng>,
        clipboard: JsClipboard,
    }

    impl LottoApp {
        fn finish(&mut self, mut frame: Frame) -> Result<JsValue, JsValue> {
            frame.copy_text = self.clipboard.last_text.take();
            to_js(&frame.with_error(self.app.state()))
        }
    }

    #[wasm_bindgen]
    impl LottoApp {
        /// `config` may be `undefined` or a partial
        /// `{ historyKey, themeKey, historyLimit, sortMain, autoCopy }`.
        #[wasm_bindgen(constructor)]
        pub fn new(config: JsValue, clipboard: js_sys::Function) -> Result<LottoApp, JsValue> {
            let config: PickerConfig = if config.is_undefined() || config.is_null() {
                PickerConfig::default()
            } else {
                serde_wasm_bindgen::from_value(config)?
            };
            let store = BrowserStore::from_window().map_err(to_js_error)?;
            let app = App::new(store, SystemClock, WasmRng::new(), &config).map_err(to_js_error)?;
            Ok(LottoApp {
                app,
                clipboard: JsClipboard { write_fn: clipboard, last_text: None },
            })
        }

        pub fn start(&mut self, prefers_light: bool) -> Result<JsValue, JsValue> {
            let mut frame = Frame::default();
            self.app.start(prefers_light, &mut frame);
            self.finish(frame)
        }

        pub fn generate(&mut self) -> Result<JsValue, JsValue> {
            let mut frame = Frame::default();
            self.app
                .generate(&mut frame, &mut self.clipboard)
                .map_err(to_js_error)?;
            self.finish(frame)
        }

        #[wasm_bindgen(js_name = "copyCurrent")]
        pub fn copy_current(&mut self) -> Result<JsValue, JsValue> {
            let mut frame = Frame::default();
            self.app.copy_current(&mut frame, &mut self.clipboard);
            self.finish(frame)
        }

        pub fn restore(&mut self, index: usize) -> Result<JsValue, JsValue> {
            let mut frame = Frame::default();
            self.app.restore(index, &mut frame);
            self.finish(frame)
        }

        #[wasm_bindgen(js_name = "copyHistory")]
        pub fn copy_history(&mut self, index: usize) -> Result<JsValue, JsValue> {
            let mut frame = Frame::default();
            self.app.copy_history(index, &mut frame, &mut self.clipboard);
            self.finish(frame)
        }

        #[wasm_bindgen(js_name = "clearHistory")]
        pub fn clear_history(&mut self) -> Result<JsValue, JsValue> {
            let mut frame = Frame::default();
            self.app.clear_history(&mut frame);
            self.finish(frame)
        }

        #[wasm_bindgen(js_name = "toggleTheme")]
        pub fn toggle_theme(&mut self) -> Result<JsValue, JsValue> {
            let mut frame = Frame::default();
            self.app.toggle_theme(&mut frame);
            self.finish(frame)
        }

        #[wasm_bindgen(js_name = "setSortMain")]
        pub fn set_sort_main(&mut self, sort_main: bool) {
            self.app.set_sort_main(sort_main);
        }

        #[wasm_bindgen(js_name = "setAutoCopy")]
        pub fn set_auto_copy(&mut self, auto_copy: bool) {
            self.app.set_auto_copy(auto_copy);
        }
    }

    /// Generate one pick without touching storage.
    /// Returns `[{ main: number[], bonus: number }, ...]`.
    #[wasm_bindgen(js_name = "generatePick")]
    pub fn wasm_generate_pick(sort_main: bool) -> Result<JsValue, JsValue> {
        let mut rng = WasmRng::new();
        let pick = generator::generate_pick(sort_main, &mut rng).map_err(to_js_error)?;
        to_js(&pick)
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM lotto picker ready".to_string()
    }
}
