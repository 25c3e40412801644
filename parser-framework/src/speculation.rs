/// A saved cursor, taken when a speculative attempt starts.
///
/// The cursor is local to the lookahead buffer. That is sound because the
/// buffer never truncates while a mark is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    saved_cursor: usize,
}

impl Mark {
    /// Local buffer index to rewind to.
    pub fn saved_cursor(&self) -> usize {
        self.saved_cursor
    }
}

/// Stack of outstanding marks.
///
/// The parser is *speculating* while the stack is non-empty, and the
/// lookahead buffer may only truncate while it is not.
#[derive(Debug, Default)]
pub struct Speculation {
    marks: Vec<Mark>,
}

impl Speculation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a mark for `cursor`; returns the new nesting depth.
    pub fn mark(&mut self, cursor: usize) -> usize {
        self.marks.push(Mark {
            saved_cursor: cursor,
        });
        self.marks.len()
    }

    /// Pops the innermost mark.
    pub fn release(&mut self) -> Option<Mark> {
        self.marks.pop()
    }

    /// True while any mark is outstanding.
    pub fn is_speculating(&self) -> bool {
        !self.marks.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.marks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_nest() {
        let mut speculation = Speculation::new();
        assert!(!speculation.is_speculating());

        assert_eq!(speculation.mark(3), 1);
        assert_eq!(speculation.mark(7), 2);
        assert!(speculation.is_speculating());

        assert_eq!(speculation.release().map(|m| m.saved_cursor()), Some(7));
        assert!(speculation.is_speculating());
        assert_eq!(speculation.release().map(|m| m.saved_cursor()), Some(3));
        assert!(!speculation.is_speculating());
        assert_eq!(speculation.depth(), 0);
    }

    #[test]
    fn test_release_without_mark() {
        let mut speculation = Speculation::new();
        assert_eq!(speculation.release(), None);
    }
}
