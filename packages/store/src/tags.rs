//! Tag sets and the tag editing widget state.
//!
//! A [`TagSet`] is an insertion-ordered list of labels with no duplicates
//! (exact, case-sensitive match) and no blank entries. [`TagEditor`] adds the
//! pending text field the user types into.

use serde::{Deserialize, Deserializer, Serialize};

/// Ordered, deduplicated labels attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `input` and append it unless it is blank or already present.
    /// Returns whether the set changed.
    pub fn insert(&mut self, input: &str) -> bool {
        let tag = input.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Remove the entry equal to `tag`. Returns whether one was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

// Server data is normalized on read so the invariant holds for every TagSet.
impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(raw.unwrap_or_default().into_iter().collect())
    }
}

/// Tag input widget: the current set plus the text being typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagEditor {
    tags: TagSet,
    pending: String,
}

impl TagEditor {
    pub fn new(tags: TagSet) -> Self {
        Self {
            tags,
            pending: String::new(),
        }
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Add `input` as a tag. On success the pending text is cleared; a
    /// rejected input leaves it untouched.
    pub fn add_tag(&mut self, input: &str) -> bool {
        let added = self.tags.insert(input);
        if added {
            self.pending.clear();
        }
        added
    }

    /// Add whatever is in the pending field (the Enter key).
    pub fn commit_pending(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending);
        let added = self.add_tag(&pending);
        if !added {
            self.pending = pending;
        }
        added
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Replace the set and clear the pending field.
    pub fn reset(&mut self, tags: TagSet) {
        self.tags = tags;
        self.pending.clear();
    }
}
