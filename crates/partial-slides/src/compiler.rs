use crate::deck::{Deck, Screen};
use crate::header::HEADER;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

/// Slide break understood by lookatme.
pub const SEPARATOR: &str = "\n---\n";

pub const OUTPUT_PATH: &str = "./demo-compiled.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Write the compiled deck to [`OUTPUT_PATH`].
    Write,
    /// Print each screen to stdout and leave the filesystem alone.
    DryRun,
}

/// Expand a screen into its reveal steps.
///
/// Every step after the first repeats all earlier fragments, so the slideshow
/// appears to build the screen up one fragment at a time.
pub fn accumulate(screen: Screen) -> String {
    let mut acc = String::from(SEPARATOR);
    for (i, fragment) in screen.iter().enumerate() {
        if i > 0 {
            acc.push_str(SEPARATOR);
            acc.extend(screen[..i].iter().copied());
        }
        acc.push_str(fragment);
        acc.push('\n');
    }
    acc
}

/// Accumulated screens in deck order.
pub fn accumulate_all(deck: &Deck) -> Vec<String> {
    deck.screens().map(accumulate).collect()
}

/// The full document: front matter followed by every accumulated screen.
pub fn compile(deck: &Deck) -> String {
    let mut out = String::from(HEADER);
    out.push_str(&accumulate_all(deck).join("\n"));
    out
}

/// Compile `deck` and deliver it according to `mode`.
///
/// Returns the path written to, or `None` for a dry run.
pub fn emit(deck: &Deck, mode: OutputMode) -> Result<Option<&'static Path>> {
    let path = Path::new(OUTPUT_PATH);
    emit_to(deck, mode, path, &mut io::stdout().lock())?;
    Ok(match mode {
        OutputMode::Write => Some(path),
        OutputMode::DryRun => None,
    })
}

fn emit_to(deck: &Deck, mode: OutputMode, path: &Path, out: &mut impl Write) -> Result<()> {
    match mode {
        OutputMode::Write => std::fs::write(path, compile(deck))
            .with_context(|| format!("Failed to write {}", path.display())),
        OutputMode::DryRun => {
            for screen in accumulate_all(deck) {
                writeln!(out, "{screen}")?;
            }
            writeln!(out, "DRY RUN")?;
            Ok(())
        }
    }
}
