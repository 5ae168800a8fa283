use crate::error::{Result, TerminalError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(context: &'static str) -> impl Fn(JsValue) -> TerminalError {
    move |e| TerminalError::Fetch(format!("{}: {:?}", context, e))
}

fn status_error(url: &str, status: u16) -> TerminalError {
    TerminalError::Fetch(format!("{} returned HTTP {}", url, status))
}

/// Download the configuration document as text.
async fn fetch_config_text(url: &str) -> Result<String> {
    let window =
        web_sys::window().ok_or_else(|| TerminalError::Fetch("no window object".into()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error("bad request"))?;

    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error("fetch failed"))?
        .dyn_into::<Response>()
        .map_err(js_error("not a Response"))?;
    if !resp.ok() {
        return Err(status_error(url, resp.status()));
    }

    let body = JsFuture::from(resp.text().map_err(js_error("no body"))?)
        .await
        .map_err(js_error("reading body failed"))?;
    body.as_string()
        .ok_or_else(|| TerminalError::Fetch("body is not text".into()))
}

/// Fetch `commands.json` for `Terminal::install_config_json`.
#[wasm_bindgen]
pub async fn fetch_config(url: String) -> std::result::Result<String, JsValue> {
    fetch_config_text(&url).await.map_err(|e| {
        log::error!("config load from {} failed: {}", url, e);
        JsValue::from_str(&e.to_string())
    })
}
