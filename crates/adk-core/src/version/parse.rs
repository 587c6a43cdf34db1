//! Version grammar.
//!
//! ```text
//! version  := ["v"] [N "!"] N ("." N)* [pre] [post] [dev] ["+" local]
//! pre      := [sep] ("alpha"|"a"|"beta"|"b"|"preview"|"pre"|"c"|"rc") [sep] [N]
//! post     := "-" N | [sep] ("post"|"rev"|"r") [sep] [N]
//! dev      := [sep] "dev" [sep] [N]
//! local    := alnum+ (sep alnum+)*
//! sep      := "-" | "_" | "."
//! ```
//!
//! Matching is case-insensitive and ignores surrounding whitespace. Each
//! optional group is all-or-nothing: a separator that is not followed by a
//! recognized marker is left for the next group (and ultimately rejected).

use super::error::InvalidVersionError;
use super::types::{LocalSegment, PreRelease, PreStage, Version};

// Longest spellings first so "preview" is not read as "pre" + "view".
const PRE_LABELS: &[(&str, PreStage)] = &[
    ("preview", PreStage::ReleaseCandidate),
    ("alpha", PreStage::Alpha),
    ("beta", PreStage::Beta),
    ("pre", PreStage::ReleaseCandidate),
    ("rc", PreStage::ReleaseCandidate),
    ("a", PreStage::Alpha),
    ("b", PreStage::Beta),
    ("c", PreStage::ReleaseCandidate),
];

const POST_LABELS: &[&str] = &["post", "rev", "r"];

pub(super) fn parse(input: &str) -> Result<Version, InvalidVersionError> {
    let normalized = input.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(InvalidVersionError::new(input, "version string is empty"));
    }

    let mut cursor = Cursor::new(&normalized, input);
    cursor.eat_byte(b'v');

    let (epoch, release) = cursor.epoch_and_release()?;
    let pre = cursor.pre_release()?;
    let post = cursor.post_release()?;
    let dev = cursor.dev_release()?;
    let local = cursor.local_label()?;

    if !cursor.at_end() {
        return Err(InvalidVersionError::new(
            input,
            format!("unexpected trailing text '{}'", cursor.rest()),
        ));
    }

    Ok(Version {
        raw: input.to_string(),
        epoch,
        release,
        pre,
        post,
        dev,
        local,
    })
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    original: &'a str,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str, original: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            original,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn peek_digit(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_digit())
    }

    fn eat_byte(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_separator(&mut self) -> bool {
        if matches!(self.peek(), Some(b'-' | b'_' | b'.')) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if self.rest().starts_with(word) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    fn error(&self, reason: impl Into<String>) -> InvalidVersionError {
        InvalidVersionError::new(self.original, reason)
    }

    fn number(&mut self) -> Result<u64, InvalidVersionError> {
        let start = self.pos;
        while self.peek_digit() {
            self.pos += 1;
        }
        let digits = &self.text[start..self.pos];
        if digits.is_empty() {
            return Err(self.error("expected a number"));
        }
        digits
            .parse()
            .map_err(|_| self.error(format!("number '{digits}' is too large")))
    }

    fn optional_number(&mut self) -> Result<Option<u64>, InvalidVersionError> {
        let checkpoint = self.pos;
        self.eat_separator();
        if self.peek_digit() {
            self.number().map(Some)
        } else {
            self.pos = checkpoint;
            Ok(None)
        }
    }

    fn epoch_and_release(&mut self) -> Result<(u64, Vec<u64>), InvalidVersionError> {
        if !self.peek_digit() {
            return Err(self.error("expected a release number"));
        }
        let mut first = self.number()?;
        let mut epoch = 0;
        if self.eat_byte(b'!') {
            epoch = first;
            if !self.peek_digit() {
                return Err(self.error("expected a release number after epoch"));
            }
            first = self.number()?;
        }

        let mut release = vec![first];
        loop {
            let checkpoint = self.pos;
            if self.eat_byte(b'.') && self.peek_digit() {
                release.push(self.number()?);
            } else {
                self.pos = checkpoint;
                break;
            }
        }
        Ok((epoch, release))
    }

    fn pre_release(&mut self) -> Result<Option<PreRelease>, InvalidVersionError> {
        let checkpoint = self.pos;
        self.eat_separator();
        for &(label, stage) in PRE_LABELS {
            if self.eat_word(label) {
                let number = self.optional_number()?.unwrap_or(0);
                return Ok(Some(PreRelease { stage, number }));
            }
        }
        self.pos = checkpoint;
        Ok(None)
    }

    fn post_release(&mut self) -> Result<Option<u64>, InvalidVersionError> {
        let checkpoint = self.pos;

        // Implicit form: 1.0-1
        if self.eat_byte(b'-') {
            if self.peek_digit() {
                return self.number().map(Some);
            }
            self.pos = checkpoint;
        }

        self.eat_separator();
        for label in POST_LABELS {
            if self.eat_word(label) {
                let number = self.optional_number()?.unwrap_or(0);
                return Ok(Some(number));
            }
        }
        self.pos = checkpoint;
        Ok(None)
    }

    fn dev_release(&mut self) -> Result<Option<u64>, InvalidVersionError> {
        let checkpoint = self.pos;
        self.eat_separator();
        if self.eat_word("dev") {
            let number = self.optional_number()?.unwrap_or(0);
            return Ok(Some(number));
        }
        self.pos = checkpoint;
        Ok(None)
    }

    fn local_label(&mut self) -> Result<Option<Vec<LocalSegment>>, InvalidVersionError> {
        if !self.eat_byte(b'+') {
            return Ok(None);
        }

        let mut segments = Vec::new();
        loop {
            let start = self.pos;
            while self.peek().is_some_and(|b| b.is_ascii_alphanumeric()) {
                self.pos += 1;
            }
            let piece = &self.text[start..self.pos];
            if piece.is_empty() {
                return Err(self.error("empty segment in local version label"));
            }
            segments.push(if piece.bytes().all(|b| b.is_ascii_digit()) {
                LocalSegment::Number(
                    piece
                        .parse()
                        .map_err(|_| self.error(format!("number '{piece}' is too large")))?,
                )
            } else {
                LocalSegment::Text(piece.to_string())
            });

            if !self.eat_separator() {
                break;
            }
        }
        Ok(Some(segments))
    }
}
