//! Item hyperlink recognition.
//!
//! The client embeds items in text as
//! `|cffffffff|Hitem:<id>:<enchant>:...|h[<name>]|h|r`. The id and the
//! display name are the only parts the analysis needs.

use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::ExtractError;

/// A recognised item link and where it sits in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLink {
    pub item_id: u32,
    pub name: String,
    pub span: Range<usize>,
}

fn item_link_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\|Hitem:(\d+):[^|]*\|h\[([^\]]+)\]\|h\|r").expect("item link pattern")
    })
}

fn from_captures(caps: &Captures<'_>) -> Result<ItemLink, ExtractError> {
    let span = caps.get(0).map_or(0..0, |whole| whole.range());
    let id = &caps[1];
    let item_id = id
        .parse()
        .map_err(|_| ExtractError::malformed(format!("item id {id} out of range")))?;
    Ok(ItemLink {
        item_id,
        name: caps[2].to_string(),
        span,
    })
}

/// First item link in `text`, if any.
///
/// `Ok(None)` means no link; `Err` means a link whose id does not fit.
pub fn find_item_link(text: &str) -> Result<Option<ItemLink>, ExtractError> {
    item_link_regex()
        .captures(text)
        .map(|caps| from_captures(&caps))
        .transpose()
}

/// Every item link in `text`, in order of appearance.
pub fn item_links(text: &str) -> impl Iterator<Item = Result<ItemLink, ExtractError>> + '_ {
    item_link_regex()
        .captures_iter(text)
        .map(|caps| from_captures(&caps))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "|cff1eff00|Hitem:12345:0:0:0:0:0:0:0|h[Widget]|h|r";

    #[test]
    fn parses_id_and_name() {
        let link = find_item_link(LINK).unwrap().unwrap();
        assert_eq!(link.item_id, 12345);
        assert_eq!(link.name, "Widget");
        assert_eq!(&LINK[link.span], "|Hitem:12345:0:0:0:0:0:0:0|h[Widget]|h|r");
    }

    #[test]
    fn names_may_contain_spaces_and_punctuation() {
        let text = "|Hitem:4338:0:0:0|h[Mageweave Cloth's Edge, Lesser]|h|r";
        let link = find_item_link(text).unwrap().unwrap();
        assert_eq!(link.name, "Mageweave Cloth's Edge, Lesser");
    }

    #[test]
    fn text_without_link_yields_none() {
        assert_eq!(find_item_link("{10,1,2,nil,500}").unwrap(), None);
        assert_eq!(find_item_link("|Hitem:12345|h[Broken]").unwrap(), None);
    }

    #[test]
    fn oversized_id_is_malformed() {
        let text = "|Hitem:99999999999:0|h[Huge]|h|r";
        assert!(matches!(
            find_item_link(text),
            Err(ExtractError::RecordMalformed { .. })
        ));
    }

    #[test]
    fn iterates_all_links_in_order() {
        let text = format!("{LINK},1,2|Hitem:2589:0|h[Linen Cloth]|h|r");
        let names: Vec<_> = item_links(&text).map(|l| l.unwrap().name).collect();
        assert_eq!(names, ["Widget", "Linen Cloth"]);
    }
}
