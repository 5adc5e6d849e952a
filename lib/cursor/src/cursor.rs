use std::{fmt::Formatter, str::Chars};

mod source_range;
pub use source_range::*;

/// Char iterator over a source string that keeps track of the 1-based
/// line and column of the next character to be read.
#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    line: Line,
    col: Col,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Printing the full source is usually too verbose, so by default
        // we only print line/col
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("line", &self.line)
                .field("col", &self.col)
                .field("source", &self.source)
                .finish()
        } else {
            f.debug_struct("Cursor")
                .field("line", &self.line)
                .field("col", &self.col)
                .finish()
        }
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.chars.as_str()) == (other.source, other.chars.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub struct Line(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub struct Col(pub usize);

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars(), line: Line(1), col: Col(1) }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn col(&self) -> Col {
        self.col
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Source text between this cursor and `end`, which must point into the
    /// same source and lie at or behind this cursor.
    pub fn slice_until<'c>(&self, end: &'c Cursor<'a>) -> &'a str {
        assert!(self.source == end.source);
        &self.source[(self.source.len() - self.chars.as_str().len())
            ..(self.source.len() - end.chars.as_str().len())]
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next();
        match c {
            Some('\n') => {
                self.line.0 += 1;
                self.col.0 = 1;
            }
            Some(_) => self.col.0 += 1,
            None => (),
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use std::assert_eq;

    use super::*;

    #[test]
    fn slice_until() {
        let mut cursor: Cursor = "ab\ncd\n\n".into();

        cursor.next(); // 'a'

        let start = cursor.clone();

        cursor.next(); // 'b'
        cursor.next(); // '\n'
        cursor.next(); // 'c'

        assert_eq!(start.slice_until(&cursor), "b\nc");
    }

    #[test]
    fn line_and_col_tracking() {
        let mut cursor = Cursor::new("ab\ncd\n\n");

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!((cursor.line(), cursor.col()), (Line(1), Col(1)));

        assert_eq!(cursor.next(), Some('a'));
        assert_eq!((cursor.line(), cursor.col()), (Line(1), Col(2)));

        assert_eq!(cursor.next(), Some('b'));
        assert_eq!((cursor.line(), cursor.col()), (Line(1), Col(3)));

        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.line(), cursor.col()), (Line(2), Col(1)));

        cursor.next(); // 'c'
        cursor.next(); // 'd'

        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.line(), cursor.col()), (Line(3), Col(1)));

        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.line(), cursor.col()), (Line(4), Col(1)));

        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!((cursor.line(), cursor.col()), (Line(4), Col(1)));
    }

    #[test]
    fn empty_and_tiny_sources() {
        let mut cursor: Cursor = "".into();
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!((cursor.line(), cursor.col()), (Line(1), Col(1)));

        cursor = "a".into();
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!((cursor.line(), cursor.col()), (Line(1), Col(2)));

        cursor = "\n".into();
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.line(), cursor.col()), (Line(2), Col(1)));

        cursor = "\n\n".into();
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.line(), cursor.col()), (Line(2), Col(1)));
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.line(), cursor.col()), (Line(3), Col(1)));
    }
}
