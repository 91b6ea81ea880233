use crate::binary::RESERVED_TERM_CHARS;
use crate::error::RecordDefect;

/// One line of the input index: a term and its posting list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexRecord {
    pub term: String,
    /// Strictly increasing document identifiers, at least one.
    pub doc_ids: Vec<u32>,
}

impl IndexRecord {
    /// Parse `term id id ...`. Blank lines yield `Ok(None)`.
    ///
    /// Checks everything the encoders rely on except term ordering, which is
    /// the indexer's job.
    pub fn parse(line: &str) -> Result<Option<IndexRecord>, RecordDefect> {
        let mut tokens = line.split_whitespace();
        let Some(term) = tokens.next() else {
            return Ok(None);
        };

        if let Some(marker) = term.chars().find(|c| RESERVED_TERM_CHARS.contains(c)) {
            return Err(RecordDefect::ReservedMarker(marker));
        }

        let mut doc_ids: Vec<u32> = Vec::new();
        for token in tokens {
            let id: u32 = token
                .parse()
                .map_err(|_| RecordDefect::BadDocId(token.to_string()))?;
            if let Some(&prev) = doc_ids.last() {
                if id <= prev {
                    return Err(RecordDefect::NotIncreasing { prev, next: id });
                }
            }
            doc_ids.push(id);
        }

        if doc_ids.is_empty() {
            return Err(RecordDefect::MissingPostings(term.to_string()));
        }

        Ok(Some(IndexRecord {
            term: term.to_string(),
            doc_ids,
        }))
    }
}
