// Product and listing line decoding
use crate::model::{Listing, ParserError, Product};
use crate::normalizer::{normalize_listing, normalize_product};
use crate::parser::lenient::scan_pairs;
use serde_json::{Map, Value};

pub trait RecordParser {
    type Record;

    /// Decodes one serialized record. Fields missing from the line are left empty.
    fn parse(&self, line: &str) -> Result<Self::Record, ParserError>;
}

pub struct ProductParser;

impl ProductParser {
    pub fn new() -> Self {
        Self
    }
}

pub struct ListingParser;

impl ListingParser {
    pub fn new() -> Self {
        Self
    }
}

impl RecordParser for ProductParser {
    type Record = Product;

    fn parse(&self, line: &str) -> Result<Product, ParserError> {
        let fields = decode_fields(line, &PRODUCT_FIELDS)?;
        let mut product = Product {
            name: take(&fields, "product_name"),
            manufacturer: take(&fields, "manufacturer"),
            model: take(&fields, "model"),
            family: take(&fields, "family"),
            announced_date: take(&fields, "announced-date"),
        };
        normalize_product(&mut product);
        Ok(product)
    }
}

impl RecordParser for ListingParser {
    type Record = Listing;

    fn parse(&self, line: &str) -> Result<Listing, ParserError> {
        let fields = decode_fields(line, &LISTING_FIELDS)?;
        let mut listing = Listing {
            title: take(&fields, "title"),
            manufacturer: take(&fields, "manufacturer"),
            currency: take(&fields, "currency"),
            price: take(&fields, "price"),
        };
        normalize_listing(&mut listing);
        Ok(listing)
    }
}

const PRODUCT_FIELDS: [&str; 5] = [
    "product_name",
    "manufacturer",
    "model",
    "family",
    "announced-date",
];
const LISTING_FIELDS: [&str; 4] = ["title", "manufacturer", "currency", "price"];

/// Decodes a line as a JSON object, falling back to the lenient scanner for
/// damaged lines. Fails only when none of `known` can be recovered.
fn decode_fields(line: &str, known: &[&str]) -> Result<Map<String, Value>, ParserError> {
    let fields = match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(ParserError::MalformedRecord {
                reason: format!("expected an object, found {}", kind_of(&other)),
            });
        }
        Err(_) => scan_pairs(line)
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect(),
    };

    if !known.iter().any(|k| fields.contains_key(*k)) {
        return Err(ParserError::MalformedRecord {
            reason: "no recognised fields".into(),
        });
    }
    Ok(fields)
}

fn take(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_product() {
        let line = r#"{"product_name":"Sony_Cyber-shot_DSC-W310","manufacturer":"Sony","model":"DSC-W310","family":"Cyber-shot","announced-date":"2010-01-06T19:00:00.000-05:00"}"#;
        let p = ProductParser::new().parse(line).unwrap();
        assert_eq!(p.name, "sony_cyber-shot_dsc-w310");
        assert_eq!(p.manufacturer, "sony");
        assert_eq!(p.model, "dsc-w310");
        assert_eq!(p.family, "cyber-shot");
        assert_eq!(p.announced_date, "2010-01-06t19:00:00.000-05:00");
    }

    #[test]
    fn product_without_family_leaves_it_empty() {
        let line = r#"{"product_name":"Canon_PowerShot_A3000","manufacturer":"Canon","model":"A3000 IS","announced-date":"2010-02-07T19:00:00.000-05:00"}"#;
        let p = ProductParser::new().parse(line).unwrap();
        assert_eq!(p.model, "a3000 is");
        assert!(p.family.is_empty());
    }

    #[test]
    fn parses_listing_with_numeric_price() {
        let line = r#"{"title":"Sony DSC-W310","manufacturer":"Sony","currency":"CAD","price":99.5}"#;
        let l = ListingParser::new().parse(line).unwrap();
        assert_eq!(l.title, "sony dsc-w310");
        assert_eq!(l.currency, "cad");
        assert_eq!(l.price, "99.5");
    }

    #[test]
    fn truncated_listing_is_partially_populated() {
        let line = r#"{"title":"LED Flash for Canon","manufacturer":"Neewer","currency":"US"#;
        let l = ListingParser::new().parse(line).unwrap();
        assert_eq!(l.title, "led flash for canon");
        assert_eq!(l.manufacturer, "neewer");
        assert!(l.currency.is_empty());
        assert!(l.price.is_empty());
    }

    #[test]
    fn rejects_unrecognisable_lines() {
        let parser = ListingParser::new();
        assert!(parser.parse("garbage").is_err());
        assert!(parser.parse("[1, 2, 3]").is_err());
        assert!(parser.parse(r#"{"foo":"bar"}"#).is_err());
    }
}
