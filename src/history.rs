use std::collections::VecDeque;

/// How many expressions a [`History`] keeps by default.
pub const MAX_HISTORY: usize = 50;

/// A bounded list of evaluated expressions.
///
/// Navigation is stateless: [`History::previous`] and [`History::next`] look
/// up the expression currently being edited and step from its first
/// occurrence. An expression that is not in the history steps back to the most
/// recent entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries:  VecDeque<String>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates an empty history holding up to [`MAX_HISTORY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Creates an empty history holding up to `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity),
               capacity }
    }

    /// Appends an expression, dropping the oldest one when full.
    ///
    /// # Example
    /// ```
    /// use reckon::history::History;
    ///
    /// let mut history = History::with_capacity(2);
    /// history.push("1+1");
    /// history.push("2+2");
    /// history.push("3+3");
    /// assert_eq!(history.iter().collect::<Vec<_>>(), ["2+2", "3+3"]);
    /// ```
    pub fn push(&mut self, expression: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(expression.into());
    }

    /// Returns the entry before `current`.
    ///
    /// - `None` if the history is empty or `current` is the oldest entry.
    /// - The most recent entry if `current` is not in the history.
    ///
    /// # Example
    /// ```
    /// use reckon::history::History;
    ///
    /// let mut history = History::new();
    /// history.push("1+1");
    /// history.push("2+2");
    ///
    /// assert_eq!(history.previous(""), Some("2+2"));
    /// assert_eq!(history.previous("2+2"), Some("1+1"));
    /// assert_eq!(history.previous("1+1"), None);
    /// ```
    #[must_use]
    pub fn previous(&self, current: &str) -> Option<&str> {
        match self.position(current) {
            None => self.entries.back().map(String::as_str),
            Some(0) => None,
            Some(index) => self.entries.get(index - 1).map(String::as_str),
        }
    }

    /// Returns the entry after `current`.
    ///
    /// `None` if the history is empty, `current` is not in it, or `current` is
    /// the most recent entry.
    ///
    /// # Example
    /// ```
    /// use reckon::history::History;
    ///
    /// let mut history = History::new();
    /// history.push("1+1");
    /// history.push("2+2");
    ///
    /// assert_eq!(history.next("1+1"), Some("2+2"));
    /// assert_eq!(history.next("2+2"), None);
    /// assert_eq!(history.next("9"), None);
    /// ```
    #[must_use]
    pub fn next(&self, current: &str) -> Option<&str> {
        self.position(current)
            .and_then(|index| self.entries.get(index + 1))
            .map(String::as_str)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates from the oldest entry to the most recent one.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    fn position(&self, current: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == current)
    }
}
