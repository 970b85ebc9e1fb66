//! Media format options as sent by the file upload validation request.
//!
//! The request carries a comma-separated list of media format names and a
//! parallel comma-separated list of "mandatory" flags.

use serde::{Deserialize, Serialize};

use crate::types::MediaError;

/// A requested media format and whether the asset must satisfy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFormatOption {
    pub name: String,
    #[serde(default)]
    pub mandatory: bool,
}

impl MediaFormatOption {
    pub fn new(name: impl Into<String>, mandatory: bool) -> Self {
        Self {
            name: name.into(),
            mandatory,
        }
    }
}

/// Parse format names and mandatory flags into options.
///
/// A single mandatory flag applies to every format; otherwise flags pair
/// up with formats by position and missing flags mean "not mandatory".
///
/// # Errors
///
/// Returns `MediaError::NoMediaFormats` when `formats` names no format.
pub fn parse_media_format_options(
    formats: &str,
    mandatory: Option<&str>,
) -> Result<Vec<MediaFormatOption>, MediaError> {
    let names: Vec<&str> = split_tokens(formats).collect();
    if names.is_empty() {
        return Err(MediaError::NoMediaFormats);
    }
    let flags: Vec<bool> = mandatory
        .map(|value| split_tokens(value).map(parse_flag).collect())
        .unwrap_or_default();

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let mandatory = match flags.as_slice() {
                [single] => *single,
                flags => flags.get(i).copied().unwrap_or(false),
            };
            MediaFormatOption::new(name, mandatory)
        })
        .collect())
}

/// Names of optional formats no resolved rendition satisfies.
///
/// Only reported when more than one format was requested; with a single
/// format the asset is either valid or not.
pub fn unresolved_media_formats<'a, S: AsRef<str>>(
    options: &'a [MediaFormatOption],
    resolved: &[S],
) -> Vec<&'a str> {
    if options.len() <= 1 {
        return Vec::new();
    }
    options
        .iter()
        .filter(|option| !option.mandatory)
        .filter(|option| !resolved.iter().any(|name| name.as_ref() == option.name))
        .map(|option| option.name.as_str())
        .collect()
}

fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|token| !token.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "on" | "yes" | "y" | "t"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_flags() {
        let options = parse_media_format_options("wide,square", None).unwrap();
        assert_eq!(
            options,
            vec![
                MediaFormatOption::new("wide", false),
                MediaFormatOption::new("square", false),
            ]
        );
    }

    #[test]
    fn test_parse_single_flag_applies_to_all() {
        let options = parse_media_format_options("wide,square,tall", Some("true")).unwrap();
        assert!(options.iter().all(|option| option.mandatory));
    }

    #[test]
    fn test_parse_positional_flags() {
        let options = parse_media_format_options("wide,square,tall", Some("false,TRUE")).unwrap();
        let flags: Vec<bool> = options.iter().map(|option| option.mandatory).collect();
        assert_eq!(flags, [false, true, false]);
    }

    #[test]
    fn test_parse_flag_values() {
        assert!(parse_flag("on"));
        assert!(parse_flag("Yes"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_parse_empty_formats() {
        assert_eq!(
            parse_media_format_options("", Some("true")),
            Err(MediaError::NoMediaFormats)
        );
        assert_eq!(
            parse_media_format_options(" , ", None),
            Err(MediaError::NoMediaFormats)
        );
    }

    #[test]
    fn test_unresolved_optional_formats() {
        let options = vec![
            MediaFormatOption::new("wide", true),
            MediaFormatOption::new("square", false),
            MediaFormatOption::new("tall", false),
        ];
        assert_eq!(unresolved_media_formats(&options, &["wide", "tall"]), ["square"]);
    }

    #[test]
    fn test_unresolved_ignores_mandatory() {
        let options = vec![
            MediaFormatOption::new("wide", true),
            MediaFormatOption::new("square", true),
        ];
        assert!(unresolved_media_formats::<&str>(&options, &[]).is_empty());
    }

    #[test]
    fn test_unresolved_single_format() {
        let options = vec![MediaFormatOption::new("wide", false)];
        assert!(unresolved_media_formats::<&str>(&options, &[]).is_empty());
    }
}
