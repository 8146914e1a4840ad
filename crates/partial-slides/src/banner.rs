use crate::deck::Deck;
use crate::header::HeaderMeta;
use colored::Colorize;
use std::path::Path;

pub fn print_compiling(meta: &HeaderMeta) {
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    println!("Compiling {}... {}", meta.title, version.dimmed());
    println!("  {}", format!("{}, {}", meta.author, meta.date).dimmed());
}

pub fn print_compiled(path: &Path, deck: &Deck) {
    println!("{} Compiled to {}", "Done!".green().bold(), path.display());
    println!(
        "  {}",
        format!(
            "{} screens from {} topics",
            deck.screen_count(),
            deck.topics.len()
        )
        .dimmed()
    );
    for topic in deck.topics {
        println!(
            "  {} {}",
            topic.name.cyan(),
            format!("({})", topic.screens.len()).dimmed()
        );
    }
}
