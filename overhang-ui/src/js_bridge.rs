//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js and its date adapter are pulled from a CDN at startup; the glue
//! in `assets/js/charts.js` is evaluated as globals once `Chart` exists and
//! exposed via `window.*`.

use serde_json::Value;

static CHARTS_JS: &str = include_str!("../assets/js/charts.js");

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const DATE_ADAPTER_CDN: &str =
    "https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns@3.0.0/dist/chartjs-adapter-date-fns.bundle.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Overhang JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Load Chart.js and the glue script. Call once at app startup.
///
/// The adapter script must load after Chart.js, so it is appended from the
/// first script's onload. The glue is evaluated at global scope once both
/// are in place, then each function is promoted to `window`.
pub fn init_charts() {
    let store_js = format!("window.__overhangChartScripts = {};", js_string(CHARTS_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__overhangChartsReady || window.__overhangChartsLoading) return;
            window.__overhangChartsLoading = true;
            function add(src, onload) {{
                var s = document.createElement('script');
                s.src = src;
                s.onload = onload;
                document.head.appendChild(s);
            }}
            if (typeof Chart === 'undefined') {{
                add({chart}, function() {{ add({adapter}, function() {{ window.__overhangAdapterReady = true; }}); }});
            }} else {{
                window.__overhangAdapterReady = true;
            }}
            var waitForChart = setInterval(function() {{
                if (typeof Chart !== 'undefined' && window.__overhangAdapterReady) {{
                    clearInterval(waitForChart);
                    (0, eval)(window.__overhangChartScripts);
                    delete window.__overhangChartScripts;
                    if (typeof renderOverhangChart !== 'undefined') window.renderOverhangChart = renderOverhangChart;
                    if (typeof destroyOverhangChart !== 'undefined') window.destroyOverhangChart = destroyOverhangChart;
                    window.__overhangChartsReady = true;
                    console.log('Overhang charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        chart = js_string(CHART_JS_CDN),
        adapter = js_string(DATE_ADAPTER_CDN),
    );
    let _ = js_sys::eval(&init_js);
}

/// Pending render polls, keyed by canvas id.
const PENDING: &str = "window.__overhangPendingRenders";

fn cancel_pending_js(id: &str) -> String {
    format!(
        "{PENDING} = {PENDING} || {{}}; \
         if ({PENDING}[{id}]) {{ clearInterval({PENDING}[{id}]); delete {PENDING}[{id}]; }}"
    )
}

fn render_script(canvas_id: &str, config: &Value) -> String {
    let id = js_string(canvas_id);
    let config_json = js_string(&config.to_string());
    let cancel = cancel_pending_js(&id);
    format!(
        r#"
        (function() {{
            {cancel}
            var poll = setInterval(function() {{
                if (window.__overhangChartsReady &&
                    typeof window.renderOverhangChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    delete {PENDING}[{id}];
                    try {{
                        window.renderOverhangChart({id}, {config_json});
                    }} catch(e) {{ console.error('[Overhang] renderOverhangChart error:', e); }}
                }}
            }}, 100);
            {PENDING}[{id}] = poll;
        }})();
        "#,
    )
}

fn destroy_script(canvas_id: &str) -> String {
    let id = js_string(canvas_id);
    format!(
        "{} if (window.destroyOverhangChart) window.destroyOverhangChart({id});",
        cancel_pending_js(&id)
    )
}

/// Render a Chart.js config into the `<canvas>` with the given id.
///
/// Polls until the scripts are initialised and the canvas exists. A newer
/// render or a destroy for the same canvas cancels a poll still waiting, and
/// any chart already drawn in that canvas is destroyed first.
pub fn render_chart(canvas_id: &str, config: &Value) {
    call_js(&render_script(canvas_id, config));
}

/// Destroy the chart instance bound to the given canvas, if any, and drop
/// any render still waiting for it.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&destroy_script(canvas_id));
}

/// Browser confirm dialog. Anything other than an explicit OK is a no.
pub fn confirm(message: &str) -> bool {
    js_sys::eval(&format!("window.confirm({})", js_string(message)))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}
