use crate::model::{Listing, Product};
use std::fmt;

const SEPARATORS: [char; 3] = [' ', '-', '_'];

/// Confidence that a listing describes a product. Variants are declared in
/// ascending order of confidence so the derived `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relevancy {
    /// Different manufacturer, model missing, or an accessory for the model.
    None,
    /// Model present but only the short model follows a "for".
    AccessoryMention,
    /// Model parts present, at least one of them a bare number.
    NumericParts,
    /// Model present, followed later by an unrelated "for" clause.
    MentionBeforeFor,
    /// Every model part present as a word, none numeric.
    ModelParts,
    /// Model present as a whole word and no "for" in the title.
    Exact,
}

impl Relevancy {
    pub const ALL: [Relevancy; 6] = [
        Relevancy::None,
        Relevancy::AccessoryMention,
        Relevancy::NumericParts,
        Relevancy::MentionBeforeFor,
        Relevancy::ModelParts,
        Relevancy::Exact,
    ];

    pub fn value(self) -> f64 {
        match self {
            Relevancy::None => 0.0,
            Relevancy::AccessoryMention => 0.1,
            Relevancy::NumericParts => 0.2,
            Relevancy::MentionBeforeFor => 0.5,
            Relevancy::ModelParts => 0.9,
            Relevancy::Exact => 1.0,
        }
    }
}

impl fmt::Display for Relevancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relevancy::None => "none",
            Relevancy::AccessoryMention => "accessory-mention",
            Relevancy::NumericParts => "numeric-parts",
            Relevancy::MentionBeforeFor => "mention-before-for",
            Relevancy::ModelParts => "model-parts",
            Relevancy::Exact => "exact",
        };
        write!(f, "{} ({})", name, self.value())
    }
}

/// Scores a listing against a product. Fields are expected lowercase already.
pub fn score(listing: &Listing, product: &Product) -> Relevancy {
    if !listing.manufacturer.starts_with(&product.manufacturer) {
        return Relevancy::None;
    }

    let title = listing.title.as_str();
    let model = product.model.as_str();

    match (contains_word(title, model), title.find(" for ")) {
        (false, _) => match model_parts_in(title, model) {
            PartsMatch::Missing => Relevancy::None,
            PartsMatch::WithNumber => Relevancy::NumericParts,
            PartsMatch::All => Relevancy::ModelParts,
        },
        (true, None) => Relevancy::Exact,
        (true, Some(for_at)) if occurs_after(title, model, for_at) => Relevancy::None,
        (true, Some(for_at)) if occurs_after(title, product.short_model(), for_at) => {
            Relevancy::AccessoryMention
        }
        (true, Some(_)) => Relevancy::MentionBeforeFor,
    }
}

/// `word` appears in `text` with a single space on each side.
fn contains_word(text: &str, word: &str) -> bool {
    text.contains(&format!(" {} ", word))
}

/// The last occurrence of `needle` starts after `pos`.
fn occurs_after(text: &str, needle: &str, pos: usize) -> bool {
    text.rfind(needle).is_some_and(|at| pos < at)
}

#[derive(Debug, PartialEq, Eq)]
enum PartsMatch {
    Missing,
    All,
    WithNumber,
}

fn model_parts_in(title: &str, model: &str) -> PartsMatch {
    let parts = model_parts(model);
    if parts.is_empty() || !parts.iter().all(|part| contains_word(title, part)) {
        return PartsMatch::Missing;
    }
    if parts.iter().any(|part| part.parse::<i32>().is_ok()) {
        PartsMatch::WithNumber
    } else {
        PartsMatch::All
    }
}

/// Splits a model into the parts checked against a title. Single-token models
/// yield nothing. After each leading part is taken, every literal occurrence of
/// it and every remaining hyphen/underscore is stripped from the rest, so
/// models with several hyphens collapse their tail into one part.
fn model_parts(model: &str) -> Vec<String> {
    let separators = model
        .chars()
        .skip(1)
        .filter(|c| SEPARATORS.contains(c))
        .count();
    if separators == 0 {
        return Vec::new();
    }

    let mut rest = model.to_string();
    let mut parts = Vec::with_capacity(separators + 1);
    for _ in 0..=separators {
        match rest.find(SEPARATORS) {
            Some(at) => {
                let part = rest[..at].trim().to_string();
                rest = rest.replace(part.as_str(), "").trim().replace(['_', '-'], "");
                parts.push(part);
            }
            None => parts.push(rest.trim().to_string()),
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(manufacturer: &str, title: &str) -> Listing {
        Listing {
            title: title.into(),
            manufacturer: manufacturer.into(),
            ..Default::default()
        }
    }

    fn product(manufacturer: &str, model: &str) -> Product {
        Product {
            manufacturer: manufacturer.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    #[test]
    fn whole_word_model_is_exact() {
        let p = product("sony", "dsc-w310");
        let l = listing("sony", "sony dsc-w310 12.1mp digital camera");
        assert_eq!(score(&l, &p), Relevancy::Exact);
    }

    #[test]
    fn manufacturer_mismatch_is_none_whatever_the_title() {
        let p = product("sony", "dsc-w310");
        assert_eq!(score(&listing("canon", "sony dsc-w310 camera"), &p), Relevancy::None);
        assert_eq!(score(&listing("son", "sony dsc-w310 camera"), &p), Relevancy::None);
        assert_eq!(score(&listing("", "sony dsc-w310 camera"), &p), Relevancy::None);
    }

    #[test]
    fn listing_manufacturer_may_extend_product_manufacturer() {
        let p = product("fujifilm", "z900");
        let l = listing("fujifilm canada", "fujifilm z900 black");
        assert_eq!(score(&l, &p), Relevancy::Exact);
    }

    #[test]
    fn separated_parts_are_model_parts() {
        let p = product("sony", "dsc-w310");
        let l = listing("sony", "sony dsc w310 camera");
        assert_eq!(score(&l, &p), Relevancy::ModelParts);
    }

    #[test]
    fn numeric_part_downgrades() {
        let p = product("panasonic", "fz-5");
        let l = listing("panasonic", "panasonic fz 5 black");
        assert_eq!(score(&l, &p), Relevancy::NumericParts);
    }

    #[test]
    fn missing_part_is_none() {
        let p = product("sony", "dsc-w310");
        let l = listing("sony", "sony dsc camera");
        assert_eq!(score(&l, &p), Relevancy::None);
    }

    #[test]
    fn single_token_model_cannot_be_rescued() {
        let p = product("panasonic", "tz5");
        let l = listing("panasonic", "panasonic tz-5 camera");
        assert_eq!(score(&l, &p), Relevancy::None);
    }

    #[test]
    fn model_at_title_edge_is_not_a_whole_word() {
        let p = product("sony", "dsc-w310");
        let l = listing("sony", "dsc-w310 sony camera");
        assert_eq!(score(&l, &p), Relevancy::None);
    }

    #[test]
    fn accessory_for_model_is_none() {
        let p = product("sony", "dsc-w310");
        let l = listing("sony", "battery for sony dsc-w310 camera");
        assert_eq!(score(&l, &p), Relevancy::None);
    }

    #[test]
    fn for_before_short_model_only() {
        let p = product("sony", "dsc-w310");
        let l = listing("sony", "sony dsc-w310 charger for w310 battery");
        assert_eq!(score(&l, &p), Relevancy::AccessoryMention);
    }

    #[test]
    fn model_before_for_is_ambiguous() {
        let p = product("sony", "dsc-w310");
        let l = listing("sony", "sony dsc-w310 camera kit for travel");
        assert_eq!(score(&l, &p), Relevancy::MentionBeforeFor);
    }

    #[test]
    fn scores_stay_in_the_fixed_tiers() {
        let allowed = [0.0, 0.1, 0.2, 0.5, 0.9, 1.0];
        let products = [
            product("sony", "dsc-w310"),
            product("canon", "eos 5d mark ii"),
            product("", ""),
        ];
        let titles = [
            "sony dsc-w310 camera",
            "case for sony dsc-w310 camera",
            "canon eos 5d mark ii body",
            "canon eos 5d mark ii kit for beginners",
            "",
        ];
        for p in &products {
            for m in ["sony", "canon", ""] {
                for t in titles {
                    let v = score(&listing(m, t), p).value();
                    assert!(allowed.contains(&v), "unexpected score {v}");
                }
            }
        }
        for tier in Relevancy::ALL {
            assert!(allowed.contains(&tier.value()));
        }
    }

    #[test]
    fn ordering_follows_value() {
        for pair in Relevancy::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn model_parts_split_in_order() {
        assert_eq!(model_parts("eos 5d mark ii"), vec!["eos", "5d", "mark", "ii"]);
        assert_eq!(model_parts("dsc-w310"), vec!["dsc", "w310"]);
        assert!(model_parts("tz5").is_empty());
        assert!(model_parts("-x").is_empty());
    }

    #[test]
    fn model_parts_collapse_after_first_strip() {
        assert_eq!(model_parts("dmc-fz-40"), vec!["dmc", "fz40", "fz40"]);
        let p = product("panasonic", "dmc-fz-40");
        let l = listing("panasonic", "panasonic dmc fz40 camera");
        assert_eq!(score(&l, &p), Relevancy::ModelParts);
    }
}
