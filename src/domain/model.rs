use crate::utils::error::{AssistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rank of a playing card, Two through Ace. Discriminants match the wire
/// encoding expected by the analysis service (ace-high, Ace = 14).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn from_symbol(s: &str) -> Option<Rank> {
        match s {
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "T" | "t" | "10" => Some(Rank::Ten),
            "J" | "j" => Some(Rank::Jack),
            "Q" | "q" => Some(Rank::Queen),
            "K" | "k" => Some(Rank::King),
            "A" | "a" => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            'h' | 'H' => Some(Suit::Hearts),
            'd' | 'D' => Some(Suit::Diamonds),
            'c' | 'C' => Some(Suit::Clubs),
            's' | 'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Single-letter suit code used by the analysis service.
    pub fn wire_letter(&self) -> &'static str {
        match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        };
        write!(f, "{}", symbol)
    }
}

/// A fully specified playing card. An empty picker slot is represented as
/// `Option<Card>::None`, so a `Card` value is always a dealt card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = AssistError;

    /// Parses the conventional two-glyph notation: "Ah", "Ts", "10c".
    fn from_str(s: &str) -> Result<Card> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next_back().and_then(Suit::from_symbol);
        let rank = Rank::from_symbol(chars.as_str());
        match (rank, suit) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(AssistError::CardParse(s.to_string())),
        }
    }
}

/// Card in the analysis service's wire format: `{"suit": "H", "rank": 14}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCard {
    pub suit: String,
    pub rank: u8,
}

impl From<Card> for WireCard {
    fn from(card: Card) -> WireCard {
        WireCard {
            suit: card.suit.wire_letter().to_string(),
            rank: card.rank as u8,
        }
    }
}

/// Numeric knobs sent alongside the cards. Out-of-range values are clamped
/// rather than rejected; see [`crate::core::options::OptionsUpdate`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub opponents: u32,
    pub small_blind: f64,
    pub accumulated_bet: f64,
}

impl Default for AnalysisOptions {
    fn default() -> AnalysisOptions {
        AnalysisOptions {
            opponents: 3,
            small_blind: 5.0,
            accumulated_bet: 0.0,
        }
    }
}

/// Request body for `POST /calculate` and `POST /decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub pocket_cards: Vec<WireCard>,
    pub community_cards: Vec<WireCard>,
    pub number_of_opponents: u32,
    pub small_blind: f64,
    pub accumulated_bet: f64,
}

impl CalculationRequest {
    /// Builds the wire request from already-filtered cards. The service
    /// requires exactly 2 pocket cards, so any excess is truncated; option
    /// values are clamped once more so the wire body is always in range.
    pub fn new(hand: &[Card], board: &[Card], options: &AnalysisOptions) -> CalculationRequest {
        CalculationRequest {
            pocket_cards: hand.iter().take(2).copied().map(WireCard::from).collect(),
            community_cards: board.iter().take(5).copied().map(WireCard::from).collect(),
            number_of_opponents: options.opponents.clamp(1, 9),
            small_blind: options.small_blind.max(1.0),
            accumulated_bet: options.accumulated_bet.max(0.0),
        }
    }
}

/// Per-hand-type probabilities as percentages, one block for the player and
/// one for the opponents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandProbabilities {
    pub pair: f64,
    pub three_of_a_kind: f64,
    pub straight: f64,
    pub flush: f64,
    pub full_house: f64,
    pub four_of_a_kind: f64,
    pub straight_flush: f64,
    pub royal_flush: f64,
}

/// Betting recommendation computed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub action: String,
    pub bet_amount: f64,
    pub description: String,
}

/// Full analysis payload returned by `POST /calculate`. The `timestamp` is
/// stamped client-side (epoch milliseconds) when the response is accepted;
/// the service does not send it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandAnalysis {
    pub player_probabilities: HandProbabilities,
    pub opponent_probabilities: HandProbabilities,
    pub decision: Decision,
    #[serde(default)]
    pub timestamp: i64,
}

/// Service self-description returned by `GET /info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(default)]
    pub endpoints: Vec<String>,
}
