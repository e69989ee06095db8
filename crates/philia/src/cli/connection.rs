//! `philia connection` command implementation.

use std::path::Path;

use colored::Colorize;
use philia::{AccountId, SocialGraph};

use super::display::format_route;

/// Run the connection command.
pub fn run(file: &Path, from: usize, to: usize) -> Result<(), philia::Error> {
    let network = SocialGraph::load(file)?;

    let from = AccountId::from(from);
    let to = AccountId::from(to);

    let Some(connection) = network.shortest_path(from, to)? else {
        println!(
            "No connection found between {} and {}.",
            from.to_string().cyan(),
            to.to_string().cyan()
        );
        return Ok(());
    };

    println!(
        "There is a connection from {} to {}!",
        from.to_string().cyan().bold(),
        to.to_string().cyan().bold()
    );
    println!();

    for pair in connection.accounts().windows(2) {
        if let [a, b] = pair {
            println!("  {a} is friends with {b}");
        }
    }

    println!();
    println!("    {}", format_route(connection.accounts()).dimmed());
    println!(
        "{}: {} degrees of separation",
        "Summary".dimmed(),
        connection.hops().to_string().green()
    );

    Ok(())
}
