//! Dashboard statistics.

use std::str::FromStr;

use crate::domain::{AppError, DashboardStats, PromptCategory};
use crate::ports::PromptApi;

/// `GET /prompts/dashboard-stats/` and print the summary.
pub fn show(client: &impl PromptApi) -> Result<DashboardStats, AppError> {
    let stats = client.dashboard_stats()?;

    println!("Prompts:    {}", stats.total_prompts);
    println!("Executions: {}", stats.total_executions);
    if !stats.favorite_category.is_empty() {
        // The backend reports the wire name; show the label when it parses.
        let label = PromptCategory::from_str(&stats.favorite_category)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|_| stats.favorite_category.clone());
        println!("Favorite category: {label}");
    }

    if !stats.recent_activity.is_empty() {
        println!();
        println!("Recent activity:");
        for prompt in &stats.recent_activity {
            println!(
                "  #{:<5} {:<10} {}",
                prompt.id,
                prompt.created_at.format("%Y-%m-%d"),
                prompt.title
            );
        }
    }
    Ok(stats)
}
