// Unit tests for Penpal Algo

use penpal_algo::core::{
    build_candidate_query, matches_query, score_candidate, selector::FixedSource, Selector,
    CANDIDATE_LIMIT, TOP_POOL_SIZE,
};
use penpal_algo::models::{ExchangeType, ExchangeTypes, MailLocation, Penpal, ScoredCandidate};
use std::sync::Arc;

fn penpal(id: &str, country: &str, mail_location: MailLocation, interests: &str) -> Penpal {
    Penpal {
        id: id.to_string(),
        name: format!("Penpal {}", id),
        street_address: "1 Letter Ln".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        country: country.to_string(),
        interests: interests.to_string(),
        discord_handle: None,
        mail_location,
        exchange_types: ExchangeTypes { letters: true, ..Default::default() },
        created_at: None,
    }
}

#[test]
fn test_query_carries_requester_exclusions() {
    let requester = penpal("me", "US", MailLocation::International, "stamps");
    let history = vec!["old-1".to_string(), "old-2".to_string()];

    let query = build_candidate_query(&requester, &history, CANDIDATE_LIMIT);

    assert_eq!(query.exclude_ids.len(), 3);
    assert_eq!(query.exclude_ids[0], "me");
    assert_eq!(query.limit, CANDIDATE_LIMIT);
}

#[test]
fn test_previously_matched_candidate_is_ineligible() {
    let requester = penpal("me", "US", MailLocation::International, "stamps");
    let query = build_candidate_query(&requester, &["seen".to_string()], CANDIDATE_LIMIT);

    let fresh = penpal("fresh", "US", MailLocation::International, "stamps");
    let seen = penpal("seen", "US", MailLocation::International, "stamps");

    assert!(matches_query(&fresh, &query));
    assert!(!matches_query(&seen, &query));
}

#[test]
fn test_domestic_country_restriction() {
    let requester = penpal("me", "US", MailLocation::Domestic, "stamps");
    let query = build_candidate_query(&requester, &[], CANDIDATE_LIMIT);

    let same_country = penpal("a", "US", MailLocation::International, "stamps");
    let abroad = penpal("b", "JP", MailLocation::International, "stamps");

    assert!(matches_query(&same_country, &query));
    assert!(!matches_query(&abroad, &query));
}

#[test]
fn test_exchange_type_overlap_required_when_requester_has_active_types() {
    let requester = penpal("me", "US", MailLocation::International, "stamps");
    let query = build_candidate_query(&requester, &[], CANDIDATE_LIMIT);
    assert_eq!(query.exchange_any, vec![ExchangeType::Letters]);

    let mut no_overlap = penpal("a", "US", MailLocation::International, "stamps");
    no_overlap.exchange_types = ExchangeTypes { zine: true, ..Default::default() };

    assert!(!matches_query(&no_overlap, &query));
}

#[test]
fn test_score_combines_exchange_and_keyword_points() {
    let mut requester = penpal("me", "US", MailLocation::International, "hiking painting");
    requester.exchange_types = ExchangeTypes { letters: true, zine: true, ..Default::default() };

    let mut candidate = penpal("a", "US", MailLocation::International, "hiking and painting");
    candidate.exchange_types = ExchangeTypes { letters: true, ..Default::default() };

    // one shared exchange type (10) + two shared keywords (2 * 5)
    assert_eq!(score_candidate(&requester, &candidate), 20);
}

#[test]
fn test_score_is_zero_without_overlap() {
    let requester = penpal("me", "US", MailLocation::International, "astronomy");
    let mut candidate = penpal("a", "US", MailLocation::International, "baking");
    candidate.exchange_types = ExchangeTypes { zine: true, ..Default::default() };

    assert_eq!(score_candidate(&requester, &candidate), 0);
}

#[test]
fn test_selector_top_slot_goes_to_highest_scorer() {
    let selector = Selector::new(TOP_POOL_SIZE, Arc::new(FixedSource(0)));

    let scored = vec![
        ScoredCandidate {
            candidate: penpal("low", "US", MailLocation::International, ""),
            score: 10,
        },
        ScoredCandidate {
            candidate: penpal("high", "US", MailLocation::International, ""),
            score: 20,
        },
    ];

    let chosen = selector.select(scored).unwrap();
    assert_eq!(chosen.candidate.id, "high");
}

#[test]
fn test_selector_draw_never_leaves_top_three() {
    // Try every possible draw index; none may reach the fourth-ranked entry
    for index in 0..10 {
        let selector = Selector::new(TOP_POOL_SIZE, Arc::new(FixedSource(index)));
        let scored: Vec<ScoredCandidate> = (0..6)
            .map(|i| ScoredCandidate {
                candidate: penpal(&format!("p{}", i), "US", MailLocation::International, ""),
                score: 100 - i as u32 * 10,
            })
            .collect();

        let chosen = selector.select(scored).unwrap();
        assert!(["p0", "p1", "p2"].contains(&chosen.candidate.id.as_str()));
    }
}
