//! `philia friends` command implementation.

use std::path::Path;

use colored::Colorize;
use philia::{AccountId, SocialGraph};

use super::display::format_ids;

/// Run the friends command.
pub fn run(file: &Path, id: usize) -> Result<(), philia::Error> {
    let network = SocialGraph::load(file)?;

    let id = AccountId::from(id);
    let friends = network.friends_of(id)?;

    if friends.is_empty() {
        println!(
            "Account {} has no friends in the network.",
            id.to_string().cyan().bold()
        );
        return Ok(());
    }

    let noun = if friends.len() == 1 {
        "friend"
    } else {
        "friends"
    };
    println!(
        "Account {} has {} {}!",
        id.to_string().cyan().bold(),
        friends.len().to_string().green(),
        noun
    );
    println!();
    println!("  List of friends: {}", format_ids(friends));

    Ok(())
}
