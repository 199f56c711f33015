use search_core::{paginate, DocumentStatus, RequestQueue, SearchError, SearchIndex, StopWords};

fn pets() -> SearchIndex {
    let mut index = SearchIndex::new(StopWords::from_text("and").unwrap());
    index.add_document(0, "white cat fluffy tail", DocumentStatus::Actual, &[7]).unwrap();
    index.add_document(1, "fluffy dog", DocumentStatus::Actual, &[5]).unwrap();
    index
}

#[test]
fn minus_word_excludes_document() {
    let index = pets();
    let hits = index.find_top_documents("fluffy -dog").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 0);
    // every document contains "fluffy", so its idf is ln(2 / 2)
    assert_eq!(hits[0].relevance, 0.0);
}

#[test]
fn minus_word_excludes_document_with_informative_term() {
    let mut index = pets();
    index.add_document(2, "black parrot", DocumentStatus::Actual, &[3]).unwrap();
    let hits = index.find_top_documents("fluffy -dog").unwrap();
    assert_eq!(hits.iter().map(|d| d.id).collect::<Vec<_>>(), vec![0]);
    let expected = 0.25 * (3.0f64 / 2.0).ln();
    assert!(hits[0].relevance > 0.0);
    assert!((hits[0].relevance - expected).abs() < 1e-12);
}

#[test]
fn stop_word_only_query_finds_nothing() {
    let index = pets();
    assert!(index.find_top_documents("and").unwrap().is_empty());
    assert!(index.find_top_documents("and -and").unwrap().is_empty());
}

#[test]
fn document_count_tracks_successful_adds() {
    let mut index = pets();
    assert!(index.add_document(1, "dup", DocumentStatus::Actual, &[]).is_err());
    assert!(index.add_document(-5, "neg", DocumentStatus::Actual, &[]).is_err());
    assert_eq!(index.document_count(), 2);
    index.add_document(7, "", DocumentStatus::Removed, &[]).unwrap();
    assert_eq!(index.document_count(), 3);
    assert_eq!(index.document_id(2).unwrap(), 7);
}

#[test]
fn never_more_than_five_results_in_rank_order() {
    let mut index = SearchIndex::new(StopWords::empty());
    for id in 0..9 {
        let text = format!("{} filler{}", "cat ".repeat(id as usize + 1), id);
        index.add_document(id, &text, DocumentStatus::Actual, &[id]).unwrap();
    }
    index.add_document(9, "dog", DocumentStatus::Actual, &[]).unwrap();

    let hits = index.find_top_documents("cat").unwrap();
    assert_eq!(hits.len(), 5);
    for pair in hits.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.relevance > b.relevance || ((a.relevance - b.relevance).abs() < 1e-6 && a.rating >= b.rating));
    }
    assert_eq!(hits[0].id, 8);
}

#[test]
fn equal_relevance_ranked_by_rating() {
    let mut index = SearchIndex::new(StopWords::empty());
    index.add_document(0, "cat", DocumentStatus::Actual, &[1]).unwrap();
    index.add_document(1, "cat", DocumentStatus::Actual, &[9]).unwrap();
    index.add_document(2, "cat", DocumentStatus::Actual, &[4]).unwrap();
    index.add_document(3, "dog", DocumentStatus::Actual, &[]).unwrap();
    let ids: Vec<_> = index.find_top_documents("cat").unwrap().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 0]);
}

#[test]
fn paginated_results_through_request_queue() {
    let mut index = SearchIndex::new(StopWords::from_text("and with").unwrap());
    index.add_document(1, "funny pet and nasty rat", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
    index.add_document(2, "funny pet with curly hair", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
    index.add_document(3, "big cat nasty hair", DocumentStatus::Actual, &[1, 2, 8]).unwrap();
    index.add_document(4, "big dog cat Vladislav", DocumentStatus::Actual, &[1, 3, 2]).unwrap();
    index.add_document(5, "big dog hamster Borya", DocumentStatus::Actual, &[1, 1, 1]).unwrap();

    let mut queue = RequestQueue::new(&index);
    let hits = queue.add_find_request("curly dog").unwrap();
    assert!(queue.add_find_request("parrot").unwrap().is_empty());
    assert_eq!(queue.no_result_requests(), 1);

    let pages: Vec<_> = paginate(&hits, 2).unwrap().into_iter().collect();
    assert_eq!(pages.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(pages[0].items()[0].id, 2);
}

#[test]
fn malformed_queries_are_invalid_arguments() {
    let index = pets();
    for query in ["-", "fluffy --dog", "fl\u{7}uffy"] {
        assert!(matches!(index.find_top_documents(query), Err(SearchError::InvalidArgument(_))));
    }
}
