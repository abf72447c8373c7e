//! Byte offset to UTF-16 offset conversion.

/// Converts byte offsets in a UTF-8 string to UTF-16 code-unit offsets.
///
/// Enumeration converts offsets in mostly increasing order, so the converter
/// remembers its last position and only walks the difference.
#[derive(Debug, Clone)]
pub(crate) struct Utf16Offsets<'t> {
    text: &'t str,
    byte: usize,
    unit: usize,
}

impl<'t> Utf16Offsets<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            unit: 0,
        }
    }

    /// `byte` must lie on a char boundary.
    pub(crate) fn to_utf16(&mut self, byte: usize) -> usize {
        if byte >= self.byte {
            self.unit += self.text[self.byte..byte].encode_utf16().count();
        } else {
            self.unit -= self.text[byte..self.byte].encode_utf16().count();
        }
        self.byte = byte;
        self.unit
    }
}
