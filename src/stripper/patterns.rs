//! The ordered pattern tables the pipeline runs.
//!
//! Order is significant everywhere:
//! - comments go before tags so a commented-out tag cannot pair with a live one
//! - self-closing tags go before tag pairs so `<br/>` is never read as an opener
//! - link extraction goes before bracket deletion so link text survives
//! - bold goes before italic so `'''` is not split into `''` + `'`

use super::pattern::Pattern;
use super::range::{parse_ranges, Range};
use super::{ConfigError, StripperConfig};

const HTML_COMMENT: &str = r"(?s)<!--((?!-->).)*-->";
const SELF_CLOSING_TAG: &str = r"(?s)<\w+[^>]*/>";
const TAG_PAIR: &str = r"(?s)<(?P<tag>\w+)[^>]*>((?!</?\w+[^>]*>).)*</\k<tag>[^>]*>";

const FREE_LINK: &str = r"\[\[:?(\w+:)?(\w+:)?(?P<text>((?!\]\])[^=|])+)(#[^|]+)?\]\]";
const PIPED_LINK: &str = r"\[\[[^|]+\|(?P<text>((?!\]\])[^=|])+)\|?\]\]";
const EXTERNAL_LINK: &str = r"\[[^|\s]+ (?P<text>[^=\[\]|]+)\]";
const BOLD: &str = r"'''(?P<text>((?!''').)+)'''";
const ITALIC: &str = r"''(?P<text>((?!'').)+)''";

const HORIZONTAL_RULE: &str = r"(?m)^--+$";
const PARENTHETICAL: &str = r"\([^()]*\)";
const BRACKETED: &str = r"\[[^\[\]]*\]";
const BRACED: &str = r"\{[^{}]*\}";
const COLON_BRACED: &str = r":\{[^{}]*\}";
const REDIRECT: &str = r"(?m)^# ?REDIRECT.*$";
const DEFINITION: &str = r"(?m)^;.*$";
const HEADER: &str = r"(?P<tag>=+)((?!\k<tag>).)*\k<tag>";

const LIST_ITEM: &str = r"(?m)^(:+|#+|\*+)(?P<text>.*)$";

/// Every pattern the pipeline runs, grouped by stage.
///
/// Built once per configuration and never modified afterwards.
#[derive(Debug, Clone)]
pub struct PatternSet {
    /// Comments and tags, removed to a fixed point before anything else
    pub structural: Vec<Pattern>,
    /// Wrappers replaced by their inner text
    pub extraction: Vec<Pattern>,
    /// Markup removed outright, after extraction in every pass
    pub deletion: Vec<Pattern>,
    /// Character class filters: out-of-valid first, then invalid
    pub unicode: Vec<Pattern>,
}

impl PatternSet {
    pub fn build(config: &StripperConfig) -> Result<Self, ConfigError> {
        let valid = parse_ranges(&config.valid_unicodes)?;
        let invalid = parse_ranges(&config.invalid_unicodes)?;

        let structural = vec![
            Pattern::deletion("html_comment", HTML_COMMENT)?,
            Pattern::deletion("self_closing_tag", SELF_CLOSING_TAG)?,
            Pattern::deletion("tag_pair", TAG_PAIR)?,
        ];

        let mut extraction = vec![
            Pattern::extraction("free_link", FREE_LINK)?,
            Pattern::extraction("piped_link", PIPED_LINK)?,
            Pattern::extraction("external_link", EXTERNAL_LINK)?,
            Pattern::extraction("bold", BOLD)?,
            Pattern::extraction("italic", ITALIC)?,
        ];

        let mut deletion = vec![
            Pattern::deletion("horizontal_rule", HORIZONTAL_RULE)?,
            Pattern::deletion("parenthetical", PARENTHETICAL)?,
            Pattern::deletion("bracketed", BRACKETED)?,
            Pattern::deletion("braced", BRACED)?,
            Pattern::deletion("colon_braced", COLON_BRACED)?,
            Pattern::deletion("redirect", REDIRECT)?,
            Pattern::deletion("definition", DEFINITION)?,
            Pattern::deletion("header", HEADER)?,
        ];

        if config.preserve_lists {
            extraction.push(Pattern::extraction("list_item", LIST_ITEM)?);
        } else {
            deletion.push(Pattern::deletion("list_item", LIST_ITEM)?);
        }

        let mut unicode = Vec::new();
        if !valid.is_empty() {
            unicode.push(outside_ranges(&valid)?);
        }
        if !invalid.is_empty() {
            if let Some(pattern) = inside_ranges(&invalid)? {
                unicode.push(pattern);
            }
        }

        Ok(Self {
            structural,
            extraction,
            deletion,
            unicode,
        })
    }
}

/// Matches any character outside every range.
fn outside_ranges(ranges: &[Range]) -> Result<Pattern, ConfigError> {
    let items = class_items(ranges);
    if items.is_empty() {
        // Only surrogates were allowed, so nothing survives.
        return Pattern::deletion("outside_valid_unicodes", r"(?s).");
    }
    Pattern::deletion("outside_valid_unicodes", &format!("[^{}]", items))
}

/// Matches any character inside one of the ranges.
fn inside_ranges(ranges: &[Range]) -> Result<Option<Pattern>, ConfigError> {
    let items = class_items(ranges);
    if items.is_empty() {
        return Ok(None);
    }
    Pattern::deletion("inside_invalid_unicodes", &format!("[{}]", items)).map(Some)
}

fn class_items(ranges: &[Range]) -> String {
    ranges.iter().map(Range::class_items).collect()
}
