use std::fmt::{self, Write};

use crate::dialect::Dialect;

/// The reserved character standing for one bound value.
pub const MARKER: char = '?';

pub(crate) struct FormatContext<'a> {
    pub(crate) writer: &'a mut String,
    pub(crate) prefix: char,
    pub(crate) placeholder: usize,
}

impl<'a> FormatContext<'a> {
    pub fn new(writer: &'a mut String, prefix: char) -> Self {
        Self {
            writer,
            prefix,
            placeholder: 0,
        }
    }

    pub(crate) fn write_placeholder(&mut self) -> fmt::Result {
        self.placeholder += 1;
        write!(self.writer, "{}{}", self.prefix, self.placeholder)
    }

    /// Copies `text` into the writer, replacing each marker with the next placeholder.
    ///
    /// Only the source is scanned, so digits written for one marker are never
    /// looked at again.
    pub(crate) fn write_numbered(&mut self, text: &str) -> fmt::Result {
        let mut span_start = 0;
        for (index, _) in text.match_indices(MARKER) {
            self.writer.push_str(&text[span_start..index]);
            self.write_placeholder()?;
            span_start = index + MARKER.len_utf8();
        }
        self.writer.push_str(&text[span_start..]);
        Ok(())
    }
}

/// Rewrites every marker of `text` into the positional style of `dialect`.
pub(crate) fn number_placeholders(text: &str, dialect: Dialect) -> String {
    let Some(prefix) = dialect.placeholder_prefix() else {
        return text.to_owned();
    };

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut context = FormatContext::new(&mut out, prefix);
    // formatting into a String never fails
    let _ = context.write_numbered(text);
    out
}
