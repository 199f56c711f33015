use std::cmp::Ordering;

use crate::document::{Document, DocumentStatus};
use crate::DocId;

/// Filter applied to every candidate during scoring: `(id, status, rating) -> keep`.
pub type DocumentPredicate<'a> = dyn Fn(DocId, DocumentStatus, i32) -> bool + 'a;

/// `ln(total / containing)`; callers only ask for terms present in at least one document.
pub fn inverse_document_freq(document_count: usize, containing: usize) -> f64 {
    (document_count as f64 / containing as f64).ln()
}

/// Orders hits by descending relevance, then truncates to `limit`.
///
/// Hits whose relevance differs from the previous hit's by less than `epsilon`
/// form a tie group, ordered by descending rating. Sorting is stable throughout,
/// so remaining ties keep their incoming order.
pub fn rank(mut hits: Vec<Document>, epsilon: f64, limit: usize) -> Vec<Document> {
    hits.sort_by(|lhs, rhs| rhs.relevance.total_cmp(&lhs.relevance));

    let mut start = 0;
    while start < hits.len() {
        let mut end = start + 1;
        while end < hits.len() && (hits[end - 1].relevance - hits[end].relevance).abs() < epsilon {
            end += 1;
        }
        if end - start > 1 {
            hits[start..end].sort_by(by_rating_desc);
        }
        start = end;
    }

    hits.truncate(limit);
    hits
}

fn by_rating_desc(lhs: &Document, rhs: &Document) -> Ordering {
    rhs.rating.cmp(&lhs.rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(hits: &[Document]) -> Vec<DocId> {
        hits.iter().map(|d| d.id).collect()
    }

    #[test]
    fn sorts_by_relevance_descending() {
        let hits = vec![Document::new(0, 0.1, 9), Document::new(1, 0.7, 1), Document::new(2, 0.4, 5)];
        assert_eq!(ids(&rank(hits, 1e-6, 5)), vec![1, 2, 0]);
    }

    #[test]
    fn near_equal_relevance_falls_back_to_rating() {
        let hits = vec![
            Document::new(0, 0.5, 1),
            Document::new(1, 0.5 + 5e-7, 3),
            Document::new(2, 0.5 - 2e-7, 7),
            Document::new(3, 0.9, 0),
        ];
        assert_eq!(ids(&rank(hits, 1e-6, 5)), vec![3, 2, 1, 0]);
    }

    #[test]
    fn differences_above_epsilon_are_not_ties() {
        let hits = vec![Document::new(0, 0.5, 1), Document::new(1, 0.5 + 2e-6, 0)];
        assert_eq!(ids(&rank(hits, 1e-6, 5)), vec![1, 0]);
    }

    #[test]
    fn tie_groups_chain_through_neighbours() {
        // 0 and 2 are 1.4e-6 apart, but 1 sits within epsilon of both.
        let hits = vec![
            Document::new(0, 1.0 + 1.4e-6, 0),
            Document::new(1, 1.0 + 0.7e-6, 5),
            Document::new(2, 1.0, 10),
        ];
        assert_eq!(ids(&rank(hits, 1e-6, 5)), vec![2, 1, 0]);
    }

    #[test]
    fn truncates_to_limit() {
        let hits = (0..8).map(|i| Document::new(i, f64::from(i), 0)).collect();
        let top = rank(hits, 1e-6, 5);
        assert_eq!(ids(&top), vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn idf_is_natural_log() {
        assert!((inverse_document_freq(4, 1) - 4f64.ln()).abs() < 1e-12);
        assert_eq!(inverse_document_freq(3, 3), 0.0);
    }
}
