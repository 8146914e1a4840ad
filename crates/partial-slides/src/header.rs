use anyhow::{Context, Result};
use serde::Deserialize;

/// Front matter written once at the top of the compiled deck.
///
/// There is no closing `---` here: the separator that opens the first screen
/// terminates the block.
pub const HEADER: &str = "---
title: RSEvents
author: RSEvents Squad
date: 2021-08-04
styles:
    style: monokai
    table:
        column_spacing: 15
    margin:
        top: 1
        bottom: 1
    padding:
        top: 2
        bottom: 2
extensions: 
    - file_loader
    - terminal
    - image_ueberzug";

/// The parts of the front matter shown in status output.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderMeta {
    pub title: String,
    pub author: String,
    pub date: String,
}

impl HeaderMeta {
    pub fn parse(header: &str) -> Result<Self> {
        let yaml = header
            .strip_prefix("---\n")
            .context("Front matter must start with ---")?;
        serde_yaml::from_str(yaml).context("Failed to parse front matter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtin_header() {
        let meta = HeaderMeta::parse(HEADER).unwrap();
        assert_eq!(meta.title, "RSEvents");
        assert_eq!(meta.author, "RSEvents Squad");
        assert_eq!(meta.date, "2021-08-04");
    }

    #[test]
    fn test_header_has_no_trailing_newline() {
        assert!(HEADER.starts_with("---\n"));
        assert!(HEADER.ends_with("image_ueberzug"));
    }

    #[test]
    fn test_missing_opening_delimiter() {
        assert!(HeaderMeta::parse("title: x\nauthor: y\ndate: z").is_err());
    }

    #[test]
    fn test_missing_title() {
        assert!(HeaderMeta::parse("---\nauthor: A\ndate: D").is_err());
    }
}
