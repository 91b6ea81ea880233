//! Whole-run properties of the compression driver.

use proptest::prelude::*;
use termpack::build::encode_batch;
use termpack::binary::{encode_entry, PostingLayout};
use termpack::testing::{decode_dictionary, decode_postings, split_posting_stream};
use termpack::{CompressorConfig, IndexRecord, MalformedPolicy};

use crate::common::{compress_text, render_index};

// ============================================================================
// STRATEGIES
// ============================================================================

/// A sorted index: distinct terms, each with a strictly increasing list.
fn index_strategy(max_terms: usize) -> impl Strategy<Value = Vec<(String, Vec<u32>)>> {
    prop::collection::btree_map(
        "[a-z]{1,12}",
        prop::collection::btree_set(0u32..5_000_000, 1..16),
        0..max_terms,
    )
    .prop_map(|map| {
        map.into_iter()
            .map(|(term, ids)| (term, ids.into_iter().collect()))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: one pointer per `block_size` terms, rounding up.
    #[test]
    fn prop_block_count(index in index_strategy(80), block_size in 2usize..12) {
        let config = CompressorConfig::default().with_block_size(block_size);
        let (report, dictionary, _) = compress_text(&render_index(&index), config);
        prop_assert_eq!(report.blocks, index.len().div_ceil(block_size));

        let text = String::from_utf8(dictionary).unwrap();
        let terms = decode_dictionary(&text).unwrap();
        let expected: Vec<&str> = index.iter().map(|(t, _)| t.as_str()).collect();
        prop_assert_eq!(terms, expected);
    }

    /// Property: posting entry `i` belongs to term `i`.
    #[test]
    fn prop_postings_follow_terms(index in index_strategy(80)) {
        let config = CompressorConfig::default().with_layout(PostingLayout::LengthPrefixed);
        let (report, _, postings) = compress_text(&render_index(&index), config);
        let entries = split_posting_stream(&postings, PostingLayout::LengthPrefixed).unwrap();
        prop_assert_eq!(entries.len(), index.len());
        for (entry, (_, ids)) in entries.iter().zip(&index) {
            prop_assert_eq!(&decode_postings(entry).unwrap(), ids);
        }
        let total: usize = index.iter().map(|(_, ids)| ids.len()).sum();
        prop_assert_eq!(report.postings, total);
    }

    /// Property: batch encoding matches encoding each entry on its own.
    #[test]
    fn prop_batch_matches_sequential(index in index_strategy(200)) {
        let records: Vec<IndexRecord> = index
            .iter()
            .map(|(term, ids)| IndexRecord { term: term.clone(), doc_ids: ids.clone() })
            .collect();
        let batch = encode_batch(&records, PostingLayout::Delimited).unwrap();
        for (record, entry) in records.iter().zip(&batch) {
            let mut expected = Vec::new();
            encode_entry(&record.doc_ids, PostingLayout::Delimited, &mut expected).unwrap();
            prop_assert_eq!(&entry.bytes, &expected);
        }
    }

    /// Property: skipping malformed lines gives the same artifacts as an
    /// input without them.
    #[test]
    fn prop_skip_equals_clean(index in index_strategy(40), bad_every in 2usize..6) {
        let clean = render_index(&index);
        let noisy: String = clean
            .lines()
            .enumerate()
            .flat_map(|(i, line)| {
                let junk = (i % bad_every == 0).then(|| "broken 9 3".to_string());
                junk.into_iter().chain(std::iter::once(line.to_string()))
            })
            .map(|line| line + "\n")
            .collect();

        let (clean_report, clean_dict, clean_post) = compress_text(&clean, CompressorConfig::default());
        let skip = CompressorConfig::default().with_policy(MalformedPolicy::Skip);
        let (noisy_report, noisy_dict, noisy_post) = compress_text(&noisy, skip);

        prop_assert_eq!(clean_dict, noisy_dict);
        prop_assert_eq!(clean_post, noisy_post);
        prop_assert_eq!(noisy_report.records_skipped, index.len().div_ceil(bad_every));
        prop_assert_eq!(noisy_report.terms, clean_report.terms);
    }
}
