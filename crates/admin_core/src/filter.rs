use shared::domain::Record;

/// The active search term. Matching uses a lowercased copy computed once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.folded.is_empty()
            || record
                .text_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.folded))
    }
}

/// Indices into `records` of every record matching `term`, in store order.
pub fn apply(records: &[Record], term: &SearchTerm) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| term.matches(record))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
