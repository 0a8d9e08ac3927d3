//! Plain JSON record for a single player.

use crate::domain::{Address, EmailAddress, Name, PhoneNumber, Tag, ValueFormatError};
use crate::error::{DataFormatError, RecordRef};
use crate::models::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys every record must carry, in the order they are written.
pub const RECORD_KEYS: [&str; 5] = ["name", "phone", "email", "address", "tags"];

/// A player as stored on disk: every value a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PlayerRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Sorted lexicographically
    pub tags: Vec<String>,
}

impl PlayerRecord {
    /// Read the record at `index` out of a raw JSON object.
    ///
    /// Only shape is checked here: every key present, no extra keys, values
    /// of the right JSON type. Value rules are checked by [`Self::into_player`].
    pub fn from_json(index: usize, object: &Map<String, Value>) -> Result<Self, DataFormatError> {
        let record = RecordRef {
            index,
            name: object
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
        };

        if let Some(unknown) = object.keys().find(|k| !RECORD_KEYS.contains(&k.as_str())) {
            return Err(DataFormatError::UnknownField {
                record,
                field: unknown.clone(),
            });
        }

        let string_field = |key: &'static str| -> Result<String, DataFormatError> {
            match object.get(key) {
                None => Err(DataFormatError::MissingField {
                    record: record.clone(),
                    field: key,
                }),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(_) => Err(DataFormatError::WrongType {
                    record: record.clone(),
                    field: key,
                    expected: "a string",
                }),
            }
        };

        let name = string_field("name")?;
        let phone = string_field("phone")?;
        let email = string_field("email")?;
        let address = string_field("address")?;

        let wrong_tags = || DataFormatError::WrongType {
            record: record.clone(),
            field: "tags",
            expected: "an array of strings",
        };
        let tags = match object.get("tags") {
            None => {
                return Err(DataFormatError::MissingField {
                    record: record.clone(),
                    field: "tags",
                })
            }
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(wrong_tags))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(wrong_tags()),
        };

        Ok(Self {
            name,
            phone,
            email,
            address,
            tags,
        })
    }

    /// Rebuild the player, validating every value.
    ///
    /// # Errors
    ///
    /// `DataFormatError::InvalidValue` naming the first field that fails.
    pub fn into_player(self, index: usize) -> Result<Player, DataFormatError> {
        let record = RecordRef {
            index,
            name: Some(self.name.clone()),
        };
        let invalid = |source: ValueFormatError| DataFormatError::InvalidValue {
            record: record.clone(),
            source,
        };

        let name = Name::new(self.name).map_err(invalid)?;
        let phone = PhoneNumber::new(self.phone).map_err(invalid)?;
        let email = EmailAddress::new(self.email).map_err(invalid)?;
        let address = Address::new(self.address).map_err(invalid)?;
        let tags = self
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        Ok(Player::new(name, phone, email, address, tags))
    }
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().as_str().to_string(),
            phone: player.phone().as_str().to_string(),
            email: player.email().as_str().to_string(),
            address: player.address().as_str().to_string(),
            tags: player.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}
