//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded from a CDN script tag (see `Dioxus.toml`). The helpers
//! in `assets/js/plotly-bridge.js` are evaluated at global scope once Plotly
//! is available and exposed via `window.*`. Figures are handed over as JSON
//! strings produced by `gmd-view`.
//!
//! The dataset fetch also lives here since it is the other browser API the
//! app touches.

use gmd_core::DatasetError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// Embed the Plotly helpers at compile time
static PLOTLY_BRIDGE_JS: &str = include_str!("../assets/js/plotly-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GMD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart helpers with a wait-for-Plotly polling loop.
///
/// The helpers are stored on `window` and evaluated through an indirect
/// `eval` so their function declarations land at global scope, then
/// promoted to `window.*` explicitly. Safe to call more than once.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__gmdChartsReady) {{ window.__gmdChartScripts = {}; }}",
        serde_json::to_string(PLOTLY_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gmdChartsReady || window.__gmdChartsPolling) { return; }
            window.__gmdChartsPolling = true;
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__gmdChartScripts);
                    delete window.__gmdChartScripts;
                    if (typeof renderFigure !== 'undefined') window.renderFigure = renderFigure;
                    if (typeof purgeFigure !== 'undefined') window.purgeFigure = purgeFigure;
                    window.__gmdChartsReady = true;
                    console.log('GMD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll attempts before `render_figure` gives up (100 ms apart).
const RENDER_MAX_TRIES: u32 = 100;

/// Render a Plotly figure into the element with id `container_id`.
///
/// Polls until the helpers are ready and the container exists, since the
/// container of a freshly selected tab may mount after this call. A newer
/// render for the same container cancels the older poller, and polling stops
/// after [`RENDER_MAX_TRIES`] attempts.
pub fn render_figure(container_id: &str, figure_json: &str) {
    call_js(&render_script(container_id, figure_json));
}

fn render_script(container_id: &str, figure_json: &str) -> String {
    let id_literal = serde_json::to_string(container_id).unwrap_or_default();
    let figure_literal = serde_json::to_string(figure_json).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var pollers = window.__gmdRenderPollers = window.__gmdRenderPollers || {{}};
            if (pollers[{id}]) {{ clearInterval(pollers[{id}]); }}
            var tries = 0;
            var poll = setInterval(function() {{
                tries += 1;
                if (window.__gmdChartsReady &&
                    typeof window.renderFigure !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    delete pollers[{id}];
                    try {{
                        window.renderFigure({id}, {figure});
                    }} catch(e) {{ console.error('[GMD] renderFigure error:', e); }}
                }} else if (tries >= {max_tries}) {{
                    clearInterval(poll);
                    delete pollers[{id}];
                    console.warn('[GMD] gave up rendering into', {id});
                }}
            }}, 100);
            pollers[{id}] = poll;
        }})();
        "#,
        id = id_literal,
        figure = figure_literal,
        max_tries = RENDER_MAX_TRIES,
    )
}

/// Destroy/clean up a figure in the given container.
pub fn purge_figure(container_id: &str) {
    let id_literal = serde_json::to_string(container_id).unwrap_or_default();
    call_js(&format!(
        "if (window.purgeFigure) {{ window.purgeFigure({id}); }} else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}",
        id = id_literal
    ));
}

/// GET `url` with the browser fetch API and return the body as text.
///
/// Non-2xx responses are errors.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| request_error("no window object"))?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::Cors);
    let request = web_sys::Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(DatasetError::HttpStatus {
            status: response.status(),
            url: url.to_string(),
        }
        .into());
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = body
        .as_string()
        .ok_or_else(|| request_error("response body is not text"))?;
    log::info!("[GMD] fetch: {} bytes from {}", text.len(), url);
    Ok(text)
}

fn request_error(msg: &str) -> anyhow::Error {
    DatasetError::HttpRequest(msg.to_string()).into()
}

fn js_error(value: JsValue) -> anyhow::Error {
    let msg = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    DatasetError::HttpRequest(msg).into()
}
