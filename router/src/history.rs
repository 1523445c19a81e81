/// Paths visited through a router, oldest first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history that keeps at most `limit` entries, dropping the oldest.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, path: String) {
        self.entries.push(path);
        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
            }
        }
    }

    /// Overwrites the newest entry. An empty history stays empty.
    pub fn replace_top(&mut self, path: String) {
        if let Some(top) = self.entries.last_mut() {
            *top = path;
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::History;

    #[test]
    fn limit_drops_oldest() {
        let mut history = History::with_limit(Some(2));
        for path in ["/a", "/b", "/c"] {
            history.push(path.into());
        }
        assert_eq!(history.entries(), &["/b".to_string(), "/c".to_string()]);
    }

    #[test]
    fn replace_top_never_grows() {
        let mut history = History::new();
        history.replace_top("/a".into());
        assert!(history.is_empty());
        history.push("/a".into());
        history.replace_top("/b".into());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some("/b"));
    }
}
