//! Front-matter parsing and serialization

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::FieldMap;

/// Split a document into its raw YAML block and the remaining body.
///
/// The block must open with a `---` line and close with another `---` line.
/// Anything else is treated as a document without front-matter.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.trim_start_matches('\u{feff}');

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };
    let Some(rest) = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    // No closing ---, treat as no front-matter
    (None, content)
}

/// Parse front-matter into `T`, returning it with the remaining body.
/// Documents without front-matter yield `T::default()`.
pub fn parse<T>(content: &str) -> Result<(T, &str), serde_yaml::Error>
where
    T: DeserializeOwned + Default,
{
    match split(content) {
        (Some(yaml), body) if !yaml.trim().is_empty() => Ok((serde_yaml::from_str(yaml)?, body)),
        (Some(_), body) => Ok((T::default(), body)),
        (None, body) => Ok((T::default(), body)),
    }
}

/// Parse front-matter as an untyped field map.
pub fn parse_fields(content: &str) -> Result<(FieldMap, &str), String> {
    let (mapping, body) = parse::<serde_yaml::Mapping>(content).map_err(|e| e.to_string())?;
    let fields = match serde_json::to_value(&mapping).map_err(|e| e.to_string())? {
        serde_json::Value::Object(map) => map,
        _ => FieldMap::new(),
    };
    Ok((fields, body))
}

/// Serialize `data` as a front-matter block followed by a blank line and the body.
pub fn stringify<T: Serialize + ?Sized>(data: &T, body: &str) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(data)?;
    if body.is_empty() {
        Ok(format!("---\n{}---\n", yaml))
    } else {
        Ok(format!("---\n{}---\n\n{}\n", yaml, body))
    }
}

/// Parse a date string in various formats
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    // Try RFC 3339 / ISO 8601 first, it carries its own offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d",
        "%Y/%m/%d",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
        // Try parsing date only
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

/// Format a date the way it is written back to disk
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
    #[serde(default)]
    struct Meta {
        title: Option<String>,
        date: Option<String>,
    }

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15 10:30:00
---

This is the content.
"#;

        let (fm, remaining) = parse::<Meta>(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.date, Some("2024-01-15 10:30:00".to_string()));
        assert_eq!(remaining.trim(), "This is the content.");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a verse\nand another line\n";
        let (fm, remaining) = parse::<Meta>(content).unwrap();
        assert_eq!(fm, Meta::default());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let content = "---\ntitle: Open\n\nNo closing fence";
        let (fm, remaining) = parse::<Meta>(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_empty_frontmatter() {
        let (fm, remaining) = parse::<Meta>("---\n---\nBody").unwrap();
        assert_eq!(fm, Meta::default());
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_dashes_inside_body_are_kept() {
        let content = "---\ntitle: Breaks\n---\nfirst stanza\n---\nsecond stanza\n";
        let (fm, remaining) = parse::<Meta>(content).unwrap();
        assert_eq!(fm.title, Some("Breaks".to_string()));
        assert_eq!(remaining, "first stanza\n---\nsecond stanza\n");
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nBody\n";
        assert!(parse::<Meta>(content).is_err());
    }

    #[test]
    fn test_crlf_frontmatter() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, remaining) = parse::<Meta>(content).unwrap();
        assert_eq!(fm.title, Some("Windows".to_string()));
        assert_eq!(remaining.trim(), "Body");
    }

    #[test]
    fn test_parse_fields() {
        let content = "---\nheroTitle: Rivers\nshowAdminLink: true\n---\n";
        let (fields, body) = parse_fields(content).unwrap();
        assert_eq!(fields["heroTitle"], "Rivers");
        assert_eq!(fields["showAdminLink"], true);
        assert!(body.is_empty());
    }

    #[test]
    fn test_stringify_layout() {
        let meta = Meta {
            title: Some("Stanza".to_string()),
            date: None,
        };
        let out = stringify(&meta, "line one\nline two").unwrap();
        assert!(out.starts_with("---\ntitle: Stanza\n"));
        assert!(out.ends_with("---\n\nline one\nline two\n"));

        let (parsed, body) = parse::<Meta>(&out).unwrap();
        assert_eq!(parsed, meta);
        assert_eq!(body.trim(), "line one\nline two");
    }

    #[test]
    fn test_stringify_without_body() {
        let meta = Meta {
            title: Some("Only metadata".to_string()),
            date: None,
        };
        let out = stringify(&meta, "").unwrap();
        assert!(out.ends_with("---\n"));
        let (_, body) = parse::<Meta>(&out).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_parse_date() {
        let dt = parse_date("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");

        let dt = parse_date("2024/03/02").unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-03-02");

        let dt = parse_date("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "08:30");

        assert!(parse_date("sometime in spring").is_none());
    }

    #[test]
    fn test_format_date_round_trips() {
        let dt = parse_date("2023-10-05T08:15:30.250Z").unwrap();
        assert_eq!(format_date(&dt), "2023-10-05T08:15:30.250Z");
        assert_eq!(parse_date(&format_date(&dt)), Some(dt));
    }
}
