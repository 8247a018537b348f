use solar_dash::config::DashboardConfig;

/// Optional inline JSON block, e.g.
/// `<script type="application/json" id="solar-dash-config">{...}</script>`.
const CONFIG_ELEMENT_ID: &str = "solar-dash-config";

pub(super) fn load() -> DashboardConfig {
    match read_inline_config() {
        Ok(Some(raw)) => match DashboardConfig::from_json_str(&raw) {
            Ok(cfg) => {
                tracing::info!(
                    regression = %cfg.regression_endpoint,
                    classification = %cfg.classification_endpoint,
                    "using page endpoint config"
                );
                cfg
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed page config");
                DashboardConfig::default()
            }
        },
        Ok(None) => DashboardConfig::default(),
        Err(e) => {
            tracing::warn!(error = %e, "page config unavailable");
            DashboardConfig::default()
        }
    }
}

fn read_inline_config() -> Result<Option<String>, String> {
    let w = web_sys::window().ok_or("no window")?;
    let doc = w.document().ok_or("no document")?;
    Ok(doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|raw| !raw.trim().is_empty()))
}
