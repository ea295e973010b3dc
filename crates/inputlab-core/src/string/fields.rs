//! Whitespace field splitting.
//!
//! A field is a maximal run of non-whitespace characters, where whitespace
//! is the Unicode `White_Space` property. Unlike `strtok`, nothing is
//! written into the input: tokens are reported as `(start, len)` byte
//! ranges and the caller carries the save position between calls.

/// Reentrant field scanner.
///
/// Scans `s` from byte offset `save`. Returns `Some((start, len, new_save))`
/// for the next field, or `None` when only whitespace remains. `save` must
/// lie on a char boundary; 0 starts from the beginning.
pub fn fields_r(s: &str, save: usize) -> Option<(usize, usize, usize)> {
    let rest = s.get(save..)?;

    // Skip leading whitespace.
    let skipped = rest
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)?;
    let start = save + skipped;

    // Find end of field.
    let len = s[start..]
        .char_indices()
        .find(|&(_, c)| c.is_whitespace())
        .map_or(s.len() - start, |(i, _)| i);

    Some((start, len, start + len))
}

/// Iterator over the fields of a string, in order.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    text: &'a str,
    save: usize,
}

impl<'a> Fields<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, save: 0 }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, len, save) = fields_r(self.text, self.save)?;
        self.save = save;
        Some(&self.text[start..start + len])
    }
}

/// Split `s` around runs of whitespace. Never yields empty fields.
pub fn fields(s: &str) -> Vec<&str> {
    Fields::new(s).collect()
}

/// Strip leading and trailing whitespace, including line terminators.
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(char::is_whitespace)
}

/// Render tokens as `[a b c]`; an empty sequence renders as `[]`.
pub fn format_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let hint: usize = tokens.iter().map(|t| t.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(hint + 2);
    out.push('[');
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out.push(']');
    out
}
