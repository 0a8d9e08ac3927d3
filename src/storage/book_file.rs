//! The persisted document: `{ "players": [ <record>, ... ] }`.

use crate::error::DataLoadCause;
use crate::models::Player;
use crate::registry::SummonersBook;
use crate::storage::PlayerRecord;
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A whole summoners book in its on-disk shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BookFile {
    pub players: Vec<PlayerRecord>,
}

/// Root shape accepted on read. Records stay raw so that key problems can be
/// reported per record instead of as one opaque parse error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBookFile {
    players: Vec<Map<String, Value>>,
}

impl BookFile {
    pub fn from_book(book: &SummonersBook) -> Self {
        Self {
            players: book.player_list().iter().map(PlayerRecord::from).collect(),
        }
    }

    /// Parse a document, checking the shape of every record.
    pub fn from_json_str(json: &str) -> Result<Self, DataLoadCause> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Parse a document from raw bytes. Bytes that are not UTF-8 are malformed.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, DataLoadCause> {
        let raw: RawBookFile = serde_json::from_slice(json)?;
        let players = raw
            .players
            .iter()
            .enumerate()
            .map(|(index, object)| PlayerRecord::from_json(index, object))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { players })
    }

    /// Validate every record and build the book. Nothing partial is returned.
    pub fn into_book(self) -> Result<SummonersBook, DataLoadCause> {
        let players = self
            .players
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_player(index))
            .collect::<Result<Vec<Player>, _>>()?;
        Ok(SummonersBook::from_players(players)?)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// JSON Schema of the data file.
pub fn file_schema() -> Schema {
    schemars::schema_for!(BookFile)
}
