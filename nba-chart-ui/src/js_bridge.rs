//! Bridge from the dashboard to the D3 bar chart.
//!
//! The chart scripts under `assets/js/` are embedded in the binary, handed to
//! the page once D3 has loaded, and called through `js_sys::eval` with JSON
//! payloads built from `ChartRow`s.

use nba_view::{ChartRow, ViewMode};
use serde::Serialize;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Colors for the current and optimal bars.
pub const CURRENT_COLOR: &str = "#93c5fd";
pub const OPTIMAL_COLOR: &str = "#3b82f6";

/// Run a JS snippet; exceptions are logged to the browser console.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('NBA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install `renderBarChart` and the tooltip helpers on `window` once D3 is available.
///
/// Safe to call more than once; `window.__nbaChartsReady` marks completion.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__nbaChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__nbaChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__nbaChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__nbaChartScripts);
                    delete window.__nbaChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__nbaChartsReady = true;
                    console.log('NBA charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Chart options passed to `renderBarChart`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    pub title: String,
    pub y_axis_label: String,
    pub current_label: String,
    pub optimal_label: String,
    pub current_color: &'static str,
    pub optimal_color: &'static str,
}

impl BarChartConfig {
    pub fn for_view_mode(title: &str, mode: ViewMode) -> Self {
        Self {
            title: title.to_string(),
            y_axis_label: format!("{} per game", mode.label()),
            current_label: format!("Current {}", mode.label()),
            optimal_label: format!("Optimal {}", mode.label()),
            current_color: CURRENT_COLOR,
            optimal_color: OPTIMAL_COLOR,
        }
    }
}

/// Serialize chart rows and config into the JSON strings `renderBarChart` expects.
pub fn bar_chart_payload(rows: &[ChartRow], config: &BarChartConfig) -> (String, String) {
    let data_json = serde_json::to_string(rows).unwrap_or_else(|_| "[]".to_string());
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
    (data_json, config_json)
}

/// Draw the current vs optimal bars into `container_id`.
///
/// The call is deferred until the scripts are installed and the container
/// exists in the DOM.
pub fn render_bar_chart(container_id: &str, rows: &[ChartRow], config: &BarChartConfig) {
    let (data_json, config_json) = bar_chart_payload(rows, config);
    // JSON-encode the payloads once more so they arrive as JS string literals.
    let data_arg = serde_json::to_string(&data_json).unwrap_or_default();
    let config_arg = serde_json::to_string(&config_json).unwrap_or_default();

    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__nbaChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart('{container_id}', {data_arg}, {config_arg});
                    }} catch(e) {{ console.error('[NBA] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear whatever chart is drawn in `container_id`.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Read an optional string global such as `window.NBA_STATS_URL`.
pub fn window_setting(name: &str) -> Option<String> {
    js_sys::eval(&format!("typeof window.{0} === 'string' ? window.{0} : null", name))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.trim().is_empty())
}
