use crate::models::{CandidateQuery, MailLocation, Penpal};

/// Upper bound on candidates fetched per match request, to bound the cost
/// of scoring downstream.
pub const CANDIDATE_LIMIT: usize = 10;

/// Build the eligibility query for a match request.
///
/// Excludes the requester itself and every previously matched id, restricts
/// to the requester's country for domestic-only mailers, and requires at
/// least one shared exchange type when the requester has any active. A
/// requester with zero active exchange types gets no exchange restriction
/// at all; that state should not survive upstream validation, but the
/// filter handles it rather than failing.
pub fn build_candidate_query(
    requester: &Penpal,
    matched_ids: &[String],
    limit: usize,
) -> CandidateQuery {
    let mut exclude_ids = Vec::with_capacity(matched_ids.len() + 1);
    exclude_ids.push(requester.id.clone());
    exclude_ids.extend(matched_ids.iter().cloned());

    let country = match requester.mail_location {
        MailLocation::Domestic => Some(requester.country.clone()),
        MailLocation::International => None,
    };

    CandidateQuery {
        exclude_ids,
        country,
        exchange_any: requester.exchange_types.active(),
        limit,
    }
}

/// In-process equivalent of the store-side candidate query.
///
/// Must agree with the SQL the directory client generates; the in-memory
/// store used in tests runs candidates through this predicate.
pub fn matches_query(profile: &Penpal, query: &CandidateQuery) -> bool {
    if query.exclude_ids.contains(&profile.id) {
        return false;
    }

    if let Some(country) = &query.country {
        if &profile.country != country {
            return false;
        }
    }

    if !query.exchange_any.is_empty()
        && !query.exchange_any.iter().any(|ty| profile.exchange_types.has(*ty))
    {
        return false;
    }

    true
}
