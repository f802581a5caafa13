//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded from its CDN on first use. Figures are serialized in
//! Rust (`awf_figures::figure`) and passed to `Plotly.react` as JSON strings,
//! so no chart logic lives on the JS side.

use awf_figures::figure::Figure;

/// Plotly.js bundle injected into the page by [`init_charts`].
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AWF JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal (JSON string syntax is valid JS).
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Inject the Plotly script tag once and flag `window.__awfChartsReady`
/// when `Plotly` becomes available. Safe to call repeatedly.
pub fn init_charts() {
    let init_js = format!(
        r#"
        (function() {{
            if (window.__awfChartsReady || window.__awfPlotlyRequested) {{ return; }}
            window.__awfPlotlyRequested = true;
            if (typeof Plotly === 'undefined') {{
                var script = document.createElement('script');
                script.src = {src};
                script.async = true;
                document.head.appendChild(script);
            }}
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    window.__awfChartsReady = true;
                    console.log('AWF charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        src = js_string(PLOTLY_CDN)
    );
    let _ = js_sys::eval(&init_js);
}

/// Build the JS that waits for Plotly and the container, then draws.
fn render_script(container_id: &str, data_json: &str, layout_json: &str) -> String {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let layout = js_string(layout_json);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__awfChartsReady && document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        Plotly.react({id}, JSON.parse({data}), JSON.parse({layout}), {{responsive: true, displaylogo: false}});
                    }} catch(e) {{ console.error('[AWF] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#
    )
}

/// Draw (or redraw in place) a figure into the element with `container_id`.
///
/// Polls until Plotly has loaded and the container DOM element exists.
pub fn render_figure(container_id: &str, figure: &Figure) {
    let data_json = match figure.data_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize figure data for {}: {}", container_id, e);
            return;
        }
    };
    let layout_json = match figure.layout_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize figure layout for {}: {}", container_id, e);
            return;
        }
    };
    call_js(&render_script(container_id, &data_json, &layout_json));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({id}); if (el) {{ if (typeof Plotly !== 'undefined') {{ Plotly.purge(el); }} el.innerHTML = ''; }}",
        id = js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string("it's \"x\""), r#""it's \"x\"""#);
    }

    #[test]
    fn render_script_quotes_payloads() {
        let script = render_script("fire-area-pie", r#"[{"type":"pie"}]"#, r#"{"margin":{}}"#);
        assert!(script.contains(r#"document.getElementById("fire-area-pie")"#));
        assert!(script.contains(r#"JSON.parse("[{\"type\":\"pie\"}]")"#));
        assert!(script.contains(r#"JSON.parse("{\"margin\":{}}")"#));
    }
}
