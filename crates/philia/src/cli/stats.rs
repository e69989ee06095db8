//! `philia stats` command implementation.

use std::path::Path;

use colored::Colorize;
use philia::SocialGraph;

/// Run the stats command.
pub fn run(file: &Path) -> Result<(), philia::Error> {
    let network = SocialGraph::load(file)?;
    let stats = network.stats();

    println!("{}", "Network Statistics".cyan().bold());
    println!();

    println!("  {}: {}", "File".white().bold(), file.display());
    println!(
        "  {}: {}",
        "Accounts".white().bold(),
        stats.accounts.to_string().green()
    );
    println!(
        "  {}: {}",
        "Friendships".white().bold(),
        stats.friendships.to_string().green()
    );
    println!(
        "  {}: {}",
        "Isolated accounts".white().bold(),
        stats.isolated.to_string().yellow()
    );

    if let Some((id, degree)) = stats.most_connected {
        let noun = if degree == 1 { "friend" } else { "friends" };
        println!(
            "  {}: account {} ({degree} {noun})",
            "Most connected".white().bold(),
            id.to_string().cyan()
        );
    }

    Ok(())
}
