use crate::models::Penpal;

/// Points for each exchange type active in both profiles.
pub const SHARED_EXCHANGE_POINTS: u32 = 10;

/// Points for each requester interest keyword found in the candidate's
/// interests text.
pub const SHARED_KEYWORD_POINTS: u32 = 5;

/// Keywords must be longer than this many bytes to count. Short tokens
/// ("and", "the") would otherwise match almost any interests text.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Compute the affinity score between a requester and one candidate.
///
/// +10 for each exchange type active in both profiles, +5 for each
/// requester interest keyword (whitespace-split, lower-cased, longer than
/// four bytes) contained in the candidate's lower-cased interests text.
/// A keyword the requester repeats scores once per occurrence; see
/// DESIGN.md for why that is kept as-is.
///
/// Scores only rank candidates within a single match request and are never
/// compared across requests.
pub fn score_candidate(requester: &Penpal, candidate: &Penpal) -> u32 {
    let mut score = 0;

    for exchange_type in requester.exchange_types.active() {
        if candidate.exchange_types.has(exchange_type) {
            score += SHARED_EXCHANGE_POINTS;
        }
    }

    let requester_interests = requester.interests.to_lowercase();
    let candidate_interests = candidate.interests.to_lowercase();

    for keyword in requester_interests.split_whitespace() {
        if keyword.len() > MIN_KEYWORD_LEN && candidate_interests.contains(keyword) {
            score += SHARED_KEYWORD_POINTS;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExchangeTypes, MailLocation};

    fn penpal(id: &str, interests: &str, flags: ExchangeTypes) -> Penpal {
        Penpal {
            id: id.to_string(),
            name: format!("Penpal {}", id),
            street_address: "1 Letter Ln".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            country: "US".to_string(),
            interests: interests.to_string(),
            discord_handle: None,
            mail_location: MailLocation::International,
            exchange_types: flags,
            created_at: None,
        }
    }

    #[test]
    fn test_shared_exchange_types_score_ten_each() {
        let requester = penpal(
            "r",
            "",
            ExchangeTypes { letters: true, zine: true, ..Default::default() },
        );
        let one_shared = penpal("a", "", ExchangeTypes { letters: true, ..Default::default() });
        let two_shared = penpal(
            "b",
            "",
            ExchangeTypes { letters: true, zine: true, ..Default::default() },
        );

        assert_eq!(score_candidate(&requester, &one_shared), 10);
        assert_eq!(score_candidate(&requester, &two_shared), 20);
    }

    #[test]
    fn test_candidate_only_types_do_not_score() {
        let requester = penpal("r", "", ExchangeTypes { letters: true, ..Default::default() });
        let candidate = penpal(
            "a",
            "",
            ExchangeTypes { letters: true, gift_exchange: true, art_journal: true, ..Default::default() },
        );

        // Only the mutually active type counts
        assert_eq!(score_candidate(&requester, &candidate), 10);
    }

    #[test]
    fn test_keyword_overlap_scores_five_per_keyword() {
        let requester = penpal("r", "hiking painting stamps", ExchangeTypes::default());
        let candidate = penpal("a", "I love hiking and painting outdoors", ExchangeTypes::default());

        // "hiking" and "painting" match; "stamps" does not appear
        assert_eq!(score_candidate(&requester, &candidate), 10);
    }

    #[test]
    fn test_short_keywords_ignored() {
        let requester = penpal("r", "cats tea art", ExchangeTypes::default());
        let candidate = penpal("a", "cats tea art", ExchangeTypes::default());

        // All tokens are four bytes or fewer
        assert_eq!(score_candidate(&requester, &candidate), 0);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        let requester = penpal("r", "Gardening", ExchangeTypes::default());
        let candidate = penpal("a", "urban GARDENING club", ExchangeTypes::default());

        assert_eq!(score_candidate(&requester, &candidate), 5);
    }

    #[test]
    fn test_repeated_keywords_score_independently() {
        let requester = penpal("r", "hiking hiking hiking", ExchangeTypes::default());
        let candidate = penpal("a", "weekend hiking", ExchangeTypes::default());

        // Each occurrence in the requester's token list scores on its own
        assert_eq!(score_candidate(&requester, &candidate), 15);
    }

    #[test]
    fn test_scoring_monotonic_in_shared_types_and_keywords() {
        let requester = penpal(
            "r",
            "painting stamps",
            ExchangeTypes { letters: true, zine: true, ..Default::default() },
        );

        let base = penpal("a", "painting", ExchangeTypes { letters: true, ..Default::default() });
        let base_score = score_candidate(&requester, &base);

        let mut with_extra_type = base.clone();
        with_extra_type.exchange_types.zine = true;
        assert_eq!(score_candidate(&requester, &with_extra_type), base_score + 10);

        let mut with_extra_keyword = base.clone();
        with_extra_keyword.interests = "painting stamps".to_string();
        assert_eq!(score_candidate(&requester, &with_extra_keyword), base_score + 5);
    }
}
