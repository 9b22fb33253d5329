/// Result of offering a URL to a [`UrlList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
    Empty,
}

/// Ordered, duplicate-free list of source URLs owned by the caller.
///
/// Order is the scrape order and the display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlList {
    urls: Vec<String>,
}

impl UrlList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from loaded URLs, dropping blanks and later duplicates.
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        list.extend(urls);
        list
    }

    pub fn add(&mut self, raw: &str) -> AddOutcome {
        let url = raw.trim();
        if url.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains(url) {
            return AddOutcome::Duplicate;
        }
        self.urls.push(url.to_string());
        AddOutcome::Added
    }

    pub fn extend<I, S>(&mut self, urls: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for url in urls {
            if self.add(url.as_ref()) == AddOutcome::Added {
                added += 1;
            }
        }
        added
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.urls.len()).then(|| self.urls.remove(index))
    }

    /// Replaces the whole list, e.g. after loading a named list.
    pub fn replace_all<I, S>(&mut self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.urls.clear();
        self.extend(urls);
    }

    pub fn clear(&mut self) {
        self.urls.clear();
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|existing| existing == url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls
    }
}
