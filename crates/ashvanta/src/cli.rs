//! CLI commands for menu and header inspection
//!
//! Each command returns its rendered output so it can be tested without a
//! terminal.

use anyhow::{bail, Context, Result};
use ashvanta_core::menu::resolve_with_source;
use ashvanta_core::{
    resolve_tree, search_destination, HeaderConfig, HeaderPayload, IngestReport, Menu, MenuEntry,
    MenuPayload, ResolvedLink, ScrollState, ScrollThresholds, ScrollVisibilityTracker, StoreHosts,
};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use serde_json::json;
use std::path::Path;

// ============================================================================
// Resolve
// ============================================================================

/// Flags for `ashvanta resolve`
#[derive(Debug, Default)]
pub struct ResolveOptions {
    pub hosts: Vec<String>,
    pub primary_domain: Option<String>,
    pub public_domain: Option<String>,
    pub tree: bool,
    pub json: bool,
    pub no_color: bool,
}

/// Read a menu payload, accepting either a bare menu or a header query
pub fn load_payload(path: &Path) -> Result<HeaderPayload> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    if value.get("menu").is_some() {
        Ok(HeaderPayload::from_json(&text)?)
    } else {
        Ok(HeaderPayload {
            menu: Menu::from_value(value),
            primary_domain_url: None,
        })
    }
}

/// Store hosts from config, payload and flags
pub fn build_hosts(config: &HeaderConfig, payload: &HeaderPayload, options: &ResolveOptions) -> StoreHosts {
    let mut hosts = config.store_hosts();
    for host in &options.hosts {
        hosts = hosts.with_host(host);
    }
    if let Some(domain) = &options.public_domain {
        hosts = hosts.with_public_domain(domain);
    }
    match options
        .primary_domain
        .as_deref()
        .or(payload.primary_domain_url.as_deref())
    {
        Some(url) => hosts.with_primary_domain(url),
        None => hosts,
    }
}

pub fn run_resolve(config: &HeaderConfig, path: &Path, options: &ResolveOptions) -> Result<String> {
    let payload = load_payload(path)?;
    let hosts = build_hosts(config, &payload, options);
    let fallback = Menu::fallback();
    let MenuPayload { menu, report } = &payload.menu;

    let resolution = resolve_with_source(menu.as_ref(), &fallback, &hosts);
    tracing::info!(source = ?resolution.source, links = resolution.links.len(), "Menu resolved");

    if options.json {
        let dropped: Vec<_> = report
            .dropped
            .iter()
            .map(|d| json!({ "position": d.position, "id": d.id, "reason": d.reason.as_str() }))
            .collect();
        let body = if options.tree {
            json!({
                "source": resolution.source,
                "entries": resolve_tree(menu.as_ref(), &fallback, &hosts),
                "dropped": dropped,
            })
        } else {
            json!({
                "source": resolution.source,
                "links": resolution.links,
                "dropped": dropped,
            })
        };
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    let mut out = String::new();
    out.push_str(&format!("Source: {}\n", resolution.source));

    if options.tree {
        let entries = resolve_tree(menu.as_ref(), &fallback, &hosts);
        out.push_str(&format_tree(&entries));
    } else {
        out.push_str(&format_links_table(&resolution.links, options.no_color));
        out.push('\n');
    }

    out.push_str(&format_report(report));
    Ok(out)
}

fn header_row(labels: &[&str], no_color: bool) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| {
            let cell = Cell::new(label);
            if no_color {
                cell
            } else {
                cell.fg(Color::Cyan)
            }
        })
        .collect()
}

/// Resolved links as a table
pub fn format_links_table(links: &[ResolvedLink], no_color: bool) -> String {
    if links.is_empty() {
        return "No renderable links.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header_row(&["#", "Key", "Label", "Path", "External"], no_color));

    for (position, link) in links.iter().enumerate() {
        table.add_row(Row::from(vec![
            position.to_string(),
            link.key.clone(),
            link.label.clone(),
            link.path.clone(),
            if link.is_external() { "yes" } else { "" }.to_string(),
        ]));
    }

    table.to_string()
}

/// Nested entries as an indented outline
pub fn format_tree(entries: &[MenuEntry]) -> String {
    fn walk(entries: &[MenuEntry], depth: usize, out: &mut String) {
        for entry in entries {
            out.push_str(&format!(
                "{}- {} -> {}\n",
                "  ".repeat(depth),
                entry.link.label,
                entry.link.path
            ));
            walk(&entry.children, depth + 1, out);
        }
    }

    let mut out = String::new();
    walk(entries, 0, &mut out);
    out
}

/// Dropped-entry summary
pub fn format_report(report: &IngestReport) -> String {
    if report.is_clean() {
        return format!("Accepted {} entries, none dropped.", report.accepted);
    }

    let mut lines = vec![format!(
        "Accepted {} entries, dropped {}:",
        report.accepted,
        report.dropped.len()
    )];
    for dropped in &report.dropped {
        lines.push(format!(
            "  [{}] {} ({})",
            dropped.position,
            dropped.id.as_deref().unwrap_or("-"),
            dropped.reason.as_str()
        ));
    }
    lines.join("\n")
}

// ============================================================================
// Scroll
// ============================================================================

/// Replay offsets and collect the state after each one
pub fn replay_scroll(thresholds: ScrollThresholds, offsets: &[f64]) -> Vec<ScrollState> {
    let mut tracker = ScrollVisibilityTracker::new(thresholds);
    offsets.iter().map(|&y| tracker.on_scroll(y)).collect()
}

pub fn run_scroll(
    config: &HeaderConfig,
    offsets: &[f64],
    top: Option<f64>,
    hide: Option<f64>,
    json: bool,
    no_color: bool,
) -> Result<String> {
    let base = config.thresholds()?;
    let thresholds = ScrollThresholds::new(top.unwrap_or(base.top), hide.unwrap_or(base.hide))?;
    let states = replay_scroll(thresholds, offsets);

    if json {
        let rows: Vec<_> = states
            .iter()
            .map(|s| json!({ "y": s.last_y, "atTop": s.at_top, "hidden": s.hidden }))
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header_row(&["y", "atTop", "hidden", "class"], no_color));
    for state in &states {
        table.add_row(Row::from(vec![
            state.last_y.to_string(),
            state.at_top.to_string(),
            state.hidden.to_string(),
            state.header_class(),
        ]));
    }

    Ok(format!(
        "Thresholds: top={} hide={}\n{}",
        thresholds.top, thresholds.hide, table
    ))
}

// ============================================================================
// Search / Config
// ============================================================================

pub fn run_search(config: &HeaderConfig, term: &str) -> Result<String> {
    match search_destination(term, &config.search_path, &config.search_param) {
        Some(path) => Ok(path),
        None => bail!("Search term is empty; a submit would not navigate"),
    }
}

pub fn run_config(config: &HeaderConfig, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(config)?);
    }

    let hosts: Vec<_> = config.store_hosts().iter().map(str::to_string).collect();
    Ok([
        format!("top_threshold:  {}", config.top_threshold),
        format!("hide_threshold: {}", config.hide_threshold),
        format!("store_hosts:    {}", hosts.join(", ")),
        format!("search_path:    {}", config.search_path),
        format!("search_param:   {}", config.search_param),
    ]
    .join("\n"))
}
