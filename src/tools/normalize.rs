use std::borrow::Cow;

/// Remove every space before a sequence is transformed.
///
/// This is lossy on purpose: decompressed output never contains spaces, even when the input did.
/// Other whitespace (tabs, line endings) is left alone; callers trim lines before they get here.
pub fn strip_spaces(sequence: &str) -> Cow<'_, str> {
    if sequence.contains(' ') {
        Cow::Owned(sequence.replace(' ', ""))
    } else {
        Cow::Borrowed(sequence)
    }
}
