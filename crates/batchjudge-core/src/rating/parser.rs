//! Rating line grammar.
//!
//! A judge notes file mixes free-text comments with rating lines. Rating lines
//! start with `[` and come in these shapes, tried in order:
//!
//! 1. `[7.5/10] Title {Artist} (Stepartist)`
//! 2. `[6/10] Title {Artist}`
//! 3. `[PASS] Title {Artist} (Stepartist)`, `PASS` anywhere in the brackets
//! 4. `[++]`, `[--]`, `[!]`, `[*]`, `[#]`, `[<]`, `[$]` leading the brackets,
//!    followed by the same song grammar
//!
//! Anything else in brackets is an unparsed rating line.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{RatingRecord, SongInfo, SpecialRating};
use crate::error::{Error, Result};

static NUMERIC_RATING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d+(?:\.\d)?)/10\](.*)$").expect("NUMERIC_RATING regex is valid")
});

const MAX_SCORE: f64 = 10.0;

/// Result of looking at one notes line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine<'a> {
    Rating(RatingRecord),
    /// Not a rating line; callers copy it through unchanged.
    Content(&'a str),
}

pub fn is_rating_line(line: &str) -> bool {
    line.starts_with('[')
}

/// Parse one line of judge notes.
///
/// Lines that do not start with `[` are returned as [`ParsedLine::Content`]
/// without touching the grammar. Lines that start with `[` but match no rating
/// shape are reported as [`Error::UnparsedRating`].
pub fn parse_line(line: &str) -> Result<ParsedLine<'_>> {
    if !is_rating_line(line) {
        return Ok(ParsedLine::Content(line));
    }
    parse_rating(line).map(ParsedLine::Rating)
}

/// Parse a line already known to be a rating line.
pub fn parse_rating(line: &str) -> Result<RatingRecord> {
    let line = line.trim_end();

    if let Some(record) = parse_numeric(line)? {
        return Ok(record);
    }

    let (content, remainder) =
        split_bracket(line).ok_or_else(|| Error::UnparsedRating(line.to_string()))?;
    let symbol = SpecialRating::from_bracket_content(content)
        .ok_or_else(|| Error::UnparsedRating(line.to_string()))?;

    debug!("Found special rating '{}'", symbol);
    let song = SongInfo::parse(remainder).unwrap_or_else(|| SongInfo::new(remainder, "", ""));
    Ok(RatingRecord::special(song, symbol))
}

fn parse_numeric(line: &str) -> Result<Option<RatingRecord>> {
    let Some(caps) = NUMERIC_RATING.captures(line) else {
        return Ok(None);
    };
    let Some(song) = SongInfo::parse(&caps[2]) else {
        return Ok(None);
    };

    let score = &caps[1];
    let in_range = score
        .parse::<f64>()
        .map(|value| value <= MAX_SCORE)
        .unwrap_or(false);
    if !in_range {
        return Err(Error::ScoreOutOfRange {
            score: score.to_string(),
            line: line.to_string(),
        });
    }

    if song.has_step_artist() {
        debug!("Found rating with stepartist");
    } else {
        debug!("Found rating without stepartist");
    }
    Ok(Some(RatingRecord::numeric(song, score)))
}

/// Split `[content] remainder` at the first closing bracket.
pub(crate) fn split_bracket(line: &str) -> Option<(&str, &str)> {
    let inner = line.strip_prefix('[')?;
    inner.split_once(']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::ScoreKind;

    fn rating(line: &str) -> RatingRecord {
        match parse_line(line).unwrap() {
            ParsedLine::Rating(record) => record,
            ParsedLine::Content(_) => panic!("expected a rating for {line}"),
        }
    }

    #[test]
    fn test_numeric_with_stepartist() {
        let record = rating("[7.5/10] Song {Artist} (Stepper)");
        assert_eq!(record.title(), "Song");
        assert_eq!(record.artist(), "Artist");
        assert_eq!(record.step_artist(), "Stepper");
        assert_eq!(record.score(), "7.5");
        assert_eq!(record.kind(), ScoreKind::Numeric);
    }

    #[test]
    fn test_numeric_without_stepartist() {
        let record = rating("[6/10] valedict {void}");
        assert_eq!(record.title(), "valedict");
        assert_eq!(record.artist(), "void");
        assert_eq!(record.step_artist(), "");
        assert_eq!(record.score(), "6");
    }

    #[test]
    fn test_numeric_with_trailing_newline_and_spaces() {
        let record = rating("[10/10]   Dysnomia   {Reizoko Cj}   (Nick Skyline)  \r\n");
        assert_eq!(record.title(), "Dysnomia");
        assert_eq!(record.artist(), "Reizoko Cj");
        assert_eq!(record.step_artist(), "Nick Skyline");
        assert_eq!(record.score(), "10");
    }

    #[test]
    fn test_top_mark_normalizes_to_ten() {
        let record = rating("[++] Song {Artist}");
        assert_eq!(record.score(), "10");
        assert_eq!(record.kind(), ScoreKind::Special);
        assert_eq!(record.special_symbol(), Some(SpecialRating::TopMark));
    }

    #[test]
    fn test_bottom_marks_normalize_to_zero() {
        assert_eq!(rating("[--] Song {Artist}").score(), "0");
        assert_eq!(rating("[!] Song {Artist}").score(), "0");
    }

    #[test]
    fn test_pass_with_stepartist() {
        let record = rating("[PASS] Song {Artist} (Stepper)");
        assert_eq!(record.score(), "PASS");
        assert_eq!(record.kind(), ScoreKind::Special);
        assert_eq!(record.step_artist(), "Stepper");
    }

    #[test]
    fn test_pass_anywhere_in_brackets() {
        let record = rating("[soft PASS] Song {Artist}");
        assert_eq!(record.score(), "PASS");
    }

    #[test]
    fn test_literal_specials_keep_token() {
        for (line, token) in [
            ("[*] Song {Artist}", "*"),
            ("[#] Song {Artist}", "#"),
            ("[<] Song {Artist}", "<"),
            ("[$] Song {Artist}", "$"),
        ] {
            let record = rating(line);
            assert_eq!(record.score(), token);
            assert_eq!(record.title(), "Song");
        }
    }

    #[test]
    fn test_special_with_trailing_scale() {
        let record = rating("[++10/] Song {Artist} (Stepper)");
        assert_eq!(record.score(), "10");
        assert_eq!(record.step_artist(), "Stepper");
    }

    #[test]
    fn test_special_without_artist_defaults_empty() {
        let record = rating("[*] Just a title");
        assert_eq!(record.title(), "Just a title");
        assert_eq!(record.artist(), "");
        assert_eq!(record.step_artist(), "");
    }

    #[test]
    fn test_content_line_passes_through() {
        let line = "- great use of the bass line";
        assert_eq!(parse_line(line).unwrap(), ParsedLine::Content(line));
        assert_eq!(parse_line("").unwrap(), ParsedLine::Content(""));
        assert_eq!(parse_line(" [7/10] Song {A}").unwrap(), ParsedLine::Content(" [7/10] Song {A}"));
    }

    #[test]
    fn test_unparsed_rating_lines() {
        for line in [
            "[/10] Song {Artist}",
            "[7] Song {Artist}",
            "[7/10] Song without artist",
            "[ok] Song {Artist}",
            "[unterminated",
        ] {
            assert!(
                matches!(parse_line(line), Err(Error::UnparsedRating(_))),
                "{line} should be unparsed"
            );
        }
    }

    #[test]
    fn test_score_above_ten_is_rejected() {
        assert!(matches!(
            parse_line("[11/10] Song {Artist}"),
            Err(Error::ScoreOutOfRange { .. })
        ));
    }

    #[test]
    fn test_two_decimal_places_is_unparsed() {
        assert!(parse_line("[7.25/10] Song {Artist}").is_err());
    }

    #[test]
    fn test_trailing_dot_without_digit_is_unparsed() {
        assert!(matches!(
            parse_line("[7./10] Song {Artist}"),
            Err(Error::UnparsedRating(_))
        ));
        assert_eq!(rating("[7.0/10] Song {Artist}").score(), "7.0");
    }
}
