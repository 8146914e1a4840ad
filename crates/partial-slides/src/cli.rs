use crate::banner;
use crate::compiler::{self, OutputMode};
use crate::content;
use crate::header::{HEADER, HeaderMeta};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "partial-slides",
    version,
    about = "Compile the build-up slide deck into a single lookatme markdown file"
)]
pub struct Cli {
    /// Print every compiled screen instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.dry_run {
            OutputMode::DryRun
        } else {
            OutputMode::Write
        }
    }

    pub fn run(self) -> Result<()> {
        let meta = HeaderMeta::parse(HEADER)?;
        banner::print_compiling(&meta);

        let deck = content::deck();
        if let Some(path) = compiler::emit(&deck, self.output_mode())? {
            banner::print_compiled(path, &deck);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_writes() {
        let cli = Cli::parse_from(["partial-slides"]);
        assert_eq!(cli.output_mode(), OutputMode::Write);
        assert!(!cli.no_color);
    }

    #[test]
    fn dry_run_flag_selects_dry_run() {
        let cli = Cli::parse_from(["partial-slides", "--dry-run"]);
        assert_eq!(cli.output_mode(), OutputMode::DryRun);
    }

    #[test]
    fn dry_run_flag_in_any_position() {
        let cli = Cli::parse_from(["partial-slides", "--no-color", "--dry-run"]);
        assert_eq!(cli.output_mode(), OutputMode::DryRun);
        assert!(cli.no_color);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["partial-slides", "--output", "x.md"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
