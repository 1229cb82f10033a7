use serde::{Deserialize, Serialize};

/// The closed set of exchange activities a penpal can sign up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExchangeType {
    FriendBooks,
    ArtJournal,
    Zine,
    Letters,
    GiftExchange,
}

impl ExchangeType {
    pub const ALL: [ExchangeType; 5] = [
        ExchangeType::FriendBooks,
        ExchangeType::ArtJournal,
        ExchangeType::Zine,
        ExchangeType::Letters,
        ExchangeType::GiftExchange,
    ];

    /// Display label shown to the matched penpal.
    pub fn label(self) -> &'static str {
        match self {
            ExchangeType::FriendBooks => "Friend Books",
            ExchangeType::ArtJournal => "Art Journal",
            ExchangeType::Zine => "Zine",
            ExchangeType::Letters => "Letters",
            ExchangeType::GiftExchange => "Gift Exchange",
        }
    }

    /// Column name in the penpals table. Fixed identifiers from a closed
    /// enum, safe to splice into SQL.
    pub fn column(self) -> &'static str {
        match self {
            ExchangeType::FriendBooks => "friend_books",
            ExchangeType::ArtJournal => "art_journal",
            ExchangeType::Zine => "zine",
            ExchangeType::Letters => "letters",
            ExchangeType::GiftExchange => "gift_exchange",
        }
    }
}

/// Per-profile exchange flags, kept in the same shape the directory form
/// submits them in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeTypes {
    #[serde(rename = "friendBooks", default)]
    pub friend_books: bool,
    #[serde(rename = "artJournal", default)]
    pub art_journal: bool,
    #[serde(default)]
    pub zine: bool,
    #[serde(default)]
    pub letters: bool,
    #[serde(rename = "giftExchange", default)]
    pub gift_exchange: bool,
}

impl ExchangeTypes {
    pub fn has(&self, exchange_type: ExchangeType) -> bool {
        match exchange_type {
            ExchangeType::FriendBooks => self.friend_books,
            ExchangeType::ArtJournal => self.art_journal,
            ExchangeType::Zine => self.zine,
            ExchangeType::Letters => self.letters,
            ExchangeType::GiftExchange => self.gift_exchange,
        }
    }

    /// Flags currently set, in the fixed vocabulary order.
    pub fn active(&self) -> Vec<ExchangeType> {
        ExchangeType::ALL
            .into_iter()
            .filter(|ty| self.has(*ty))
            .collect()
    }

    pub fn any(&self) -> bool {
        !self.active().is_empty()
    }

    /// Display labels for the active flags, used in match responses.
    pub fn labels(&self) -> Vec<String> {
        self.active().into_iter().map(|ty| ty.label().to_string()).collect()
    }
}

/// Whether a penpal is willing to mail internationally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailLocation {
    Domestic,
    International,
}

impl MailLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MailLocation::Domestic => "domestic",
            MailLocation::International => "international",
        }
    }
}

impl std::str::FromStr for MailLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domestic" => Ok(MailLocation::Domestic),
            "international" => Ok(MailLocation::International),
            other => Err(format!("invalid mail location: {}", other)),
        }
    }
}

/// A directory entry. Read-only to the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Penpal {
    pub id: String,
    pub name: String,
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub country: String,
    pub interests: String,
    #[serde(rename = "discordHandle", default)]
    pub discord_handle: Option<String>,
    #[serde(rename = "mailLocation")]
    pub mail_location: MailLocation,
    #[serde(rename = "exchangeTypes", default)]
    pub exchange_types: ExchangeTypes,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// One directed pairing record in the match history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "penpalId")]
    pub penpal_id: String,
    #[serde(rename = "matchedWith")]
    pub matched_with: String,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

/// Eligibility query executed against the profile store.
#[derive(Debug, Clone)]
pub struct CandidateQuery {
    /// The requester itself plus every previously matched id.
    pub exclude_ids: Vec<String>,
    /// Set when the requester only mails domestically.
    pub country: Option<String>,
    /// Candidates must have at least one of these flags set. Empty means
    /// no exchange-type restriction.
    pub exchange_any: Vec<ExchangeType>,
    pub limit: usize,
}

/// A candidate paired with its affinity score for one match request.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: Penpal,
    pub score: u32,
}

/// Public-facing fields of a matched candidate, as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedPenpal {
    pub id: String,
    pub name: String,
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub country: String,
    pub interests: String,
    #[serde(rename = "discordHandle")]
    pub discord_handle: String,
    #[serde(rename = "exchangeTypes")]
    pub exchange_types: Vec<String>,
}

impl From<Penpal> for MatchedPenpal {
    fn from(penpal: Penpal) -> Self {
        let exchange_types = penpal.exchange_types.labels();
        Self {
            id: penpal.id,
            name: penpal.name,
            street_address: penpal.street_address,
            city: penpal.city,
            state: penpal.state,
            zip_code: penpal.zip_code,
            country: penpal.country,
            interests: penpal.interests,
            discord_handle: penpal.discord_handle.unwrap_or_default(),
            exchange_types,
        }
    }
}
