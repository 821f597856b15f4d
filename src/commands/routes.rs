//! `shuttle routes`: show the route registry

use anyhow::Result;
use colored::Colorize;

use crate::config::ShuttleConfig;
use crate::registry::RouteRegistry;

pub fn execute(config: &ShuttleConfig) -> Result<()> {
    let registry = config.load_registry()?;
    print!("{}", render(&registry));
    Ok(())
}

/// Render the registry as an indented tree with totals
pub fn render(registry: &RouteRegistry) -> String {
    let mut out = String::new();
    for spec in registry.routes() {
        out.push_str(&format!("{} {}\n", "→".cyan(), spec.route.bold()));
        if spec.apis.is_empty() {
            out.push_str(&format!("   {}\n", "(no API calls)".dimmed()));
        }
        for api in &spec.apis {
            out.push_str(&format!("   {api}\n"));
        }
    }
    out.push_str(&format!(
        "\n{} routes, {} APIs\n",
        registry.len(),
        registry.total_apis()
    ));
    out
}
