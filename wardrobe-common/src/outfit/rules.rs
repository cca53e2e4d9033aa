//! Fashion rules applied to assembled outfits

use thiserror::Error;

use crate::models::ClothingItem;

const STYLE_CASUAL: &str = "casual";
const STYLE_FORMAL: &str = "formal";

/// Why an outfit was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutfitRejection {
    #[error("outfit has {0} item(s), at least 2 required")]
    TooFewItems(usize),

    #[error("{0} patterned items clash")]
    PatternClash(usize),

    #[error("{0} formal items mixed with a casual item")]
    StyleClash(usize),

    #[error("first two items share primary color {0}")]
    ColorClash(String),
}

/// Check an outfit against the fashion rules, in order:
///
/// 1. at least two items
/// 2. at most one patterned item
/// 3. no more than one formal item alongside a casual one
/// 4. the first two items do not share a primary color
///
/// Rule 4 only looks at positions 0 and 1, which are top and bottom
/// whenever both were selected.
pub fn check_outfit(items: &[ClothingItem]) -> Result<(), OutfitRejection> {
    if items.len() < 2 {
        return Err(OutfitRejection::TooFewItems(items.len()));
    }

    let patterned = items.iter().filter(|i| i.is_patterned()).count();
    if patterned > 1 {
        return Err(OutfitRejection::PatternClash(patterned));
    }

    let first_style = items[0].style.as_str();
    let uniform = items.iter().all(|i| i.style == first_style);
    let has_casual = items.iter().any(|i| i.style == STYLE_CASUAL);
    if !uniform && has_casual {
        let formal = items.iter().filter(|i| i.style == STYLE_FORMAL).count();
        if formal > 1 {
            return Err(OutfitRejection::StyleClash(formal));
        }
    }

    if let (Some(first), Some(second)) = (&items[0].color_primary, &items[1].color_primary) {
        if first == second {
            return Err(OutfitRejection::ColorClash(first.clone()));
        }
    }

    Ok(())
}

pub fn is_valid_outfit(items: &[ClothingItem]) -> bool {
    check_outfit(items).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PATTERN_PATTERNED;

    fn piece(style: &str, color: Option<&str>, pattern: &str) -> ClothingItem {
        ClothingItem {
            style: style.to_string(),
            color_primary: color.map(str::to_string),
            pattern: pattern.to_string(),
            ..Default::default()
        }
    }

    fn solid(style: &str, color: &str) -> ClothingItem {
        piece(style, Some(color), "solid")
    }

    #[test]
    fn test_single_item_rejected() {
        assert_eq!(
            check_outfit(&[solid("casual", "blue")]),
            Err(OutfitRejection::TooFewItems(1))
        );
        assert_eq!(check_outfit(&[]), Err(OutfitRejection::TooFewItems(0)));
    }

    #[test]
    fn test_one_patterned_item_allowed() {
        let items = vec![
            piece("casual", Some("blue"), PATTERN_PATTERNED),
            solid("casual", "black"),
        ];
        assert!(is_valid_outfit(&items));
    }

    #[test]
    fn test_two_patterned_items_clash() {
        let items = vec![
            piece("casual", Some("blue"), PATTERN_PATTERNED),
            piece("casual", Some("black"), PATTERN_PATTERNED),
        ];
        assert_eq!(check_outfit(&items), Err(OutfitRejection::PatternClash(2)));
    }

    #[test]
    fn test_two_formal_with_casual_clash() {
        let items = vec![
            solid("formal", "white"),
            solid("formal", "grey"),
            solid("casual", "brown"),
        ];
        assert_eq!(check_outfit(&items), Err(OutfitRejection::StyleClash(2)));
    }

    #[test]
    fn test_one_formal_with_casual_allowed() {
        let items = vec![solid("formal", "white"), solid("casual", "grey")];
        assert!(is_valid_outfit(&items));
    }

    #[test]
    fn test_formal_mix_without_casual_allowed() {
        // The style rule only fires when a casual piece is present
        let items = vec![
            solid("formal", "white"),
            solid("formal", "grey"),
            solid("sporty", "black"),
        ];
        assert!(is_valid_outfit(&items));
    }

    #[test]
    fn test_matching_top_and_bottom_color_rejected() {
        let items = vec![solid("casual", "red"), solid("casual", "red")];
        assert_eq!(
            check_outfit(&items),
            Err(OutfitRejection::ColorClash("red".to_string()))
        );
    }

    #[test]
    fn test_color_rule_only_compares_first_two() {
        let items = vec![
            solid("casual", "red"),
            solid("casual", "blue"),
            solid("casual", "red"),
        ];
        assert!(is_valid_outfit(&items));
    }

    #[test]
    fn test_missing_colors_do_not_clash() {
        let items = vec![piece("casual", None, "solid"), piece("casual", None, "solid")];
        assert!(is_valid_outfit(&items));
    }
}
