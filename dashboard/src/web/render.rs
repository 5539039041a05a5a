//! Server-side rendering of the dashboard page
//!
//! One HTML document with five sections. The two sliders post their value to
//! the JSON API on every change and swap in the returned display strings.

use shared::{AcresRegenerated, ChildrenReached};

use crate::catalogue::MAP_IMAGE;
use crate::types::{AssetStatus, PageModel};

pub const PAGE_TITLE: &str = "Regeneration Generation";

/// Warning shown in place of an asset that is not on disk
pub fn missing_asset_warning(file_name: &str) -> String {
    format!(r#"<div class="warning" role="alert">⚠️ {file_name} is not available right now.</div>"#)
}

fn render_download(status: &AssetStatus) -> String {
    if status.present {
        format!(
            r#"<a class="button" href="{url}" download="{name}">📄 {label}</a>"#,
            url = status.url,
            name = status.asset.download_name,
            label = status.asset.label,
        )
    } else {
        missing_asset_warning(status.asset.file_name)
    }
}

fn render_map(map_available: bool) -> String {
    if map_available {
        format!(r#"<img class="map" src="/static/{MAP_IMAGE}" alt="County map of regenerative policy zones">"#)
    } else {
        missing_asset_warning(MAP_IMAGE)
    }
}

fn vision_section() -> &'static str {
    r#"<section id="vision">
    <h2>🌍 The Regenerative Nation Vision</h2>
    <p><strong>A 30-Year Plan (2025–2055)</strong> to:</p>
    <ul>
        <li>Turn underused rural land into regenerative assets</li>
        <li>Create enterprise zones for food, energy, and fiber</li>
        <li>Embed soil-based education in every school</li>
        <li>Restore biodiversity and community health</li>
        <li>Launch eco-hubs powered by circular economies</li>
    </ul>
    <p><strong>Strategic Objectives</strong>:</p>
    <ul>
        <li>🟢 Local food &amp; soil restoration</li>
        <li>⚡ Tech-powered clean infrastructure</li>
        <li>👩‍🌾 Purpose-driven livelihoods</li>
        <li>🧒 Intergenerational learning &amp; land literacy</li>
    </ul>
</section>"#
}

fn simulator_section(model: &PageModel) -> String {
    format!(
        r#"<section id="simulator">
    <h2>📊 Simulate Your Impact</h2>
    <label for="acres">Acres Regenerated: <output id="acres-value">{acres}</output></label>
    <input type="range" id="acres" name="acres" min="{min}" max="{max}" step="{step}" value="{acres}">
    <div class="metrics">
        <div class="metric"><span class="label">Annual CO₂ Sequestered</span><span class="value" id="carbon">{carbon}</span></div>
        <div class="metric"><span class="label">Community Income Potential</span><span class="value" id="income">{income}</span></div>
        <div class="metric"><span class="label">Education Investment (Est)</span><span class="value" id="toolkit-cost">{toolkit}</span></div>
    </div>
    <p><em>Each acre supports food, carbon drawdown, and education. Now imagine a town, a county, or a country.</em></p>
</section>"#,
        acres = model.acres,
        min = AcresRegenerated::MIN,
        max = AcresRegenerated::MAX,
        step = AcresRegenerated::STEP,
        carbon = model.land.carbon,
        income = model.land.income,
        toolkit = model.land.toolkit_cost,
    )
}

fn education_section(model: &PageModel) -> String {
    format!(
        r#"<section id="education">
    <h2>📚 What Can You Grow? Education Campaign</h2>
    <ul>
        <li>Reach 50 million children</li>
        <li>Distribute 1 million regenerative toolkits</li>
        <li>Train 5,000 regional coordinators</li>
        <li>Launch school gardens and soil storytelling events</li>
    </ul>
    <label for="children">Children Reached: <output id="children-value">{children}</output></label>
    <input type="range" id="children" name="children" min="{min}" max="{max}" step="{step}" value="{children}">
    <div class="metric"><span class="label">Estimated Toolkit Rollout Budget</span><span class="value" id="budget">{budget}</span></div>
    <div class="info">Toolkits include storybooks, garden starter kits, soil science wheels, and parent guides.</div>
</section>"#,
        children = model.children,
        min = ChildrenReached::MIN,
        max = ChildrenReached::MAX,
        step = ChildrenReached::STEP,
        budget = model.budget,
    )
}

fn map_section(model: &PageModel) -> String {
    format!(
        r#"<section id="policy-map">
    <h2>🗺️ Regenerative Policy Map (Coming Soon)</h2>
    <p>Map-based exploration of land availability, town readiness, and regenerative funding zones.</p>
    {map}
</section>"#,
        map = render_map(model.map_available),
    )
}

fn downloads_section(model: &PageModel) -> String {
    let buttons = model
        .downloads
        .iter()
        .map(render_download)
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<section id="downloads">
    <h2>📥 Downloads</h2>
    <p>Download toolkits, charters, and presentation decks to share or present.</p>
    {buttons}
</section>"#
    )
}

const SCRIPT: &str = r#"<script>
async function refresh(endpoint, param, slider, apply) {
    const response = await fetch(`${endpoint}?${param}=${slider.value}`);
    if (!response.ok) { return; }
    const data = await response.json();
    // responses can arrive out of order while dragging
    if (String(data[param]) !== slider.value) { return; }
    apply(data);
}
const acres = document.getElementById('acres');
acres.addEventListener('input', () => {
    document.getElementById('acres-value').textContent = acres.value;
    refresh('/api/impact', 'acres', acres, (data) => {
        document.getElementById('carbon').textContent = data.display.carbon;
        document.getElementById('income').textContent = data.display.income;
        document.getElementById('toolkit-cost').textContent = data.display.toolkit_cost;
    });
});
const children = document.getElementById('children');
children.addEventListener('input', () => {
    document.getElementById('children-value').textContent = children.value;
    refresh('/api/education', 'children', children, (data) => {
        document.getElementById('budget').textContent = data.display;
    });
});
</script>"#;

const STYLE: &str = r#"<style>
    body { font-family: sans-serif; margin: 0 auto; max-width: 960px; padding: 24px; color: #1f2d1f; }
    nav a { margin-right: 16px; }
    section { padding: 16px 0; border-bottom: 1px solid #dde5dd; }
    .metrics { display: flex; gap: 24px; }
    .metric { display: flex; flex-direction: column; }
    .metric .value { font-size: 1.8em; }
    input[type=range] { width: 100%; }
    .info { background: #e8f1fb; padding: 12px; border-radius: 6px; }
    .warning { background: #fff4d6; padding: 12px; border-radius: 6px; margin: 8px 0; }
    .button { display: inline-block; margin: 6px 0; padding: 8px 14px; border: 1px solid #2e7d32; border-radius: 6px; text-decoration: none; }
    .map { max-width: 100%; }
</style>"#;

/// Render the full dashboard document
pub fn render_dashboard(model: &PageModel) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{PAGE_TITLE}</title>
    {STYLE}
</head>
<body>
<header>
    <h1>🌱 {PAGE_TITLE}</h1>
    <h3>What Can You Do in 30 Years?</h3>
    <p>This interactive app is your guide to transforming small towns into regenerative eco-centers.
    Use it to explore the movement, simulate impact, and help grow the future.</p>
    <nav>
        <a href="#vision">🌍 Vision</a>
        <a href="#simulator">📊 Impact Simulator</a>
        <a href="#education">📚 Education Campaign</a>
        <a href="#policy-map">🗺️ Policy Map (Coming Soon)</a>
        <a href="#downloads">📥 Downloads</a>
    </nav>
</header>
{vision}
{simulator}
{education}
{map}
{downloads}
{SCRIPT}
</body>
</html>"##,
        vision = vision_section(),
        simulator = simulator_section(model),
        education = education_section(model),
        map = map_section(model),
        downloads = downloads_section(model),
    )
}
