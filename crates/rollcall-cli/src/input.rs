//! Line-based input files for the `rank` and `meet` commands.
//!
//! Both formats are one entry per line. Blank lines are skipped and `#`
//! starts a comment that runs to the end of the line. Every malformed line
//! is reported, each with the byte span of the offending text, so a file
//! with several mistakes is fixed in one round.
//!
//! ```text
//! # picks: a 1-based slot number or an x,y board coordinate
//! 3
//! 412.5, 230
//!
//! # events: a date followed by one or more user ids
//! 2025-11-15 0 2
//! ```

use std::{fmt, ops::Range, str::FromStr};

use chrono::NaiveDate;

use rollcall::{geometry::Point, ranking::SlotId, user::UserId};

/// A malformed piece of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    message: String,
    label: String,
    span: Range<usize>,
    help: Option<String>,
}

impl InputError {
    fn new(message: impl Into<String>, label: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            label: label.into(),
            span,
            help: None,
        }
    }

    fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Byte range in the source text.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A single selection from a picks file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pick {
    Slot(SlotId),
    At(Point),
}

/// One line of an events file: every listed user toggles `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub users: Vec<(UserId, Range<usize>)>,
}

/// A `DATE:USER` toggle given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleArg {
    pub date: NaiveDate,
    pub user: UserId,
}

impl FromStr for ToggleArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, user) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("`{s}` is not DATE:USER"))?;
        let date = parse_date(date.trim())
            .ok_or_else(|| format!("`{date}` is not a YYYY-MM-DD date"))?;
        let user = user
            .trim()
            .parse()
            .map(UserId::new)
            .map_err(|_| format!("`{user}` is not a user id"))?;
        Ok(Self { date, user })
    }
}

/// A piece of text and where it sits in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token<'a> {
    text: &'a str,
    span: Range<usize>,
}

/// Parses a picks file.
///
/// # Errors
///
/// Returns one [`InputError`] per malformed line.
pub fn parse_picks(src: &str) -> Result<Vec<Pick>, Vec<InputError>> {
    let mut picks = Vec::new();
    let mut errors = Vec::new();

    for entry in entries(src) {
        match parse_pick(&entry) {
            Ok(pick) => picks.push(pick),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() { Ok(picks) } else { Err(errors) }
}

fn parse_pick(entry: &Token<'_>) -> Result<Pick, InputError> {
    if let Some((x, y)) = entry.text.split_once(',') {
        let coordinate = |value: &str| value.trim().parse::<f32>().ok().filter(|v| v.is_finite());
        return match (coordinate(x), coordinate(y)) {
            (Some(x), Some(y)) => Ok(Pick::At(Point::new(x, y))),
            _ => Err(InputError::new(
                format!("invalid board coordinate `{}`", entry.text),
                "expected two numbers",
                entry.span.clone(),
            )
            .with_help("write a coordinate as `x,y`, for example `412.5,230`")),
        };
    }

    match entry.text.parse::<usize>() {
        Ok(0) => Err(InputError::new(
            "slot numbers start at 1",
            "slot 0 does not exist",
            entry.span.clone(),
        )),
        Ok(number) => Ok(Pick::Slot(SlotId::new(number - 1))),
        Err(_) => Err(InputError::new(
            format!("invalid pick `{}`", entry.text),
            "expected a slot number or a coordinate",
            entry.span.clone(),
        )
        .with_help("pick a 1-based slot number like `3` or a coordinate like `412.5,230`")),
    }
}

/// Parses an events file.
///
/// # Errors
///
/// Returns one [`InputError`] per malformed date or user id.
pub fn parse_events(src: &str) -> Result<Vec<Event>, Vec<InputError>> {
    let mut events = Vec::new();
    let mut errors = Vec::new();

    for entry in entries(src) {
        let mut words = tokens(&entry).into_iter();
        let Some(date_token) = words.next() else {
            continue;
        };

        let date = parse_date(date_token.text);
        if date.is_none() {
            errors.push(
                InputError::new(
                    format!("invalid date `{}`", date_token.text),
                    "expected YYYY-MM-DD",
                    date_token.span.clone(),
                )
                .with_help("dates look like `2025-11-15`"),
            );
        }

        let mut users = Vec::new();
        for token in words {
            match token.text.parse::<u32>() {
                Ok(id) => users.push((UserId::new(id), token.span)),
                Err(_) => errors.push(InputError::new(
                    format!("invalid user id `{}`", token.text),
                    "expected a numeric user id",
                    token.span,
                )),
            }
        }

        if users.is_empty() && date.is_some() {
            errors.push(
                InputError::new(
                    "event without users",
                    "no users listed for this date",
                    entry.span.clone(),
                )
                .with_help("list user ids after the date, for example `2025-11-15 0 2`"),
            );
        }

        if let Some(date) = date {
            events.push(Event { date, users });
        }
    }

    if errors.is_empty() { Ok(events) } else { Err(errors) }
}

/// Builds an error pointing at a user id the roster does not know.
pub fn unknown_user(user: UserId, span: Range<usize>) -> InputError {
    InputError::new(
        format!("unknown user id {user}"),
        "not in the roster",
        span,
    )
    .with_help("configure users in the `users` section of the config file")
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Non-empty lines with comments and surrounding whitespace removed.
fn entries(src: &str) -> Vec<Token<'_>> {
    let mut entries = Vec::new();
    let mut offset = 0;

    for raw in src.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        let content = line.split('#').next().unwrap_or_default();
        let text = content.trim();

        if !text.is_empty() {
            let start = offset + (content.len() - content.trim_start().len());
            entries.push(Token {
                text,
                span: start..start + text.len(),
            });
        }

        offset += raw.len();
    }

    entries
}

/// Whitespace-separated words of `entry`.
fn tokens<'a>(entry: &Token<'a>) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut start = None;
    let base = entry.span.start;

    for (index, ch) in entry.text.char_indices().chain([(entry.text.len(), ' ')]) {
        match (start, ch.is_whitespace()) {
            (None, false) => start = Some(index),
            (Some(begin), true) => {
                tokens.push(Token {
                    text: &entry.text[begin..index],
                    span: base + begin..base + index,
                });
                start = None;
            }
            _ => {}
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_picks() {
        let src = "# order of play\n3\n\n  1  \n412.5, 230 # near the middle\n";
        let picks = parse_picks(src).unwrap();
        assert_eq!(
            picks,
            [
                Pick::Slot(SlotId::new(2)),
                Pick::Slot(SlotId::new(0)),
                Pick::At(Point::new(412.5, 230.0)),
            ]
        );
    }

    #[test]
    fn test_parse_picks_reports_every_bad_line() {
        let src = "1\nabc\n0\n3,x\n";
        let errors = parse_picks(src).unwrap_err();
        assert_eq!(errors.len(), 3);

        assert_eq!(&src[errors[0].span()], "abc");
        assert_eq!(&src[errors[1].span()], "0");
        assert_eq!(&src[errors[2].span()], "3,x");
        assert!(errors[0].help().is_some());
    }

    #[test]
    fn test_parse_picks_crlf() {
        let src = "2\r\n oops\r\n";
        let errors = parse_picks(src).unwrap_err();
        assert_eq!(&src[errors[0].span()], "oops");
    }

    #[test]
    fn test_parse_events() {
        let src = "2025-11-15 0 2\n# second meeting\n2025-11-20   1 2 3\n";
        let events = parse_events(src).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, date(2025, 11, 15));

        let ids: Vec<u32> = events[1].users.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(&src[events[1].users[2].1.clone()], "3");
    }

    #[test]
    fn test_parse_events_errors() {
        let src = "2025-13-01 0\n2025-11-02 x 1\n2025-11-03\n";
        let errors = parse_events(src).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(&src[errors[0].span()], "2025-13-01");
        assert_eq!(&src[errors[1].span()], "x");
        assert_eq!(&src[errors[2].span()], "2025-11-03");
        assert_eq!(errors[2].message(), "event without users");
    }

    #[test]
    fn test_toggle_arg() {
        let toggle: ToggleArg = "2025-11-20:3".parse().unwrap();
        assert_eq!(
            toggle,
            ToggleArg {
                date: date(2025, 11, 20),
                user: UserId::new(3)
            }
        );

        assert!("2025-11-20".parse::<ToggleArg>().is_err());
        assert!("2025-11-40:1".parse::<ToggleArg>().is_err());
        assert!("2025-11-20:ann".parse::<ToggleArg>().is_err());
    }

    #[test]
    fn test_tokens_track_offsets() {
        let src = "x\n  2025-01-02\t7  9";
        let entry = &entries(src)[1];
        let words: Vec<_> = tokens(entry).into_iter().map(|t| (t.text, t.span)).collect();
        assert_eq!(
            words,
            [("2025-01-02", 4..14), ("7", 15..16), ("9", 18..19)]
        );
    }
}
