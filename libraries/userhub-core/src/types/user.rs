/// User domain types
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::UserId;

/// Read a text field from any JSON scalar.
///
/// Documents are hand-editable, so a zipcode or coordinate may be stored as a
/// number; `null` reads as an empty string.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected text, found {}",
            other
        ))),
    }
}

/// Geographic coordinates, kept as the free text the user typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    #[serde(deserialize_with = "text")]
    pub lat: String,
    #[serde(deserialize_with = "text")]
    pub lng: String,
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "text")]
    pub street: String,
    #[serde(deserialize_with = "text")]
    pub suite: String,
    #[serde(deserialize_with = "text")]
    pub city: String,
    #[serde(deserialize_with = "text")]
    pub zipcode: String,
    pub geo: Geo,
}

/// Employer details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub catch_phrase: String,
    #[serde(deserialize_with = "text")]
    pub bs: String,
}

/// A stored user record
///
/// Field order matches the on-disk document: `id, name, username, email,
/// address, phone, website, company`. Keys outside this shape are not
/// modelled; the store leaves them in the document untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store at append time
    pub id: UserId,

    #[serde(default, deserialize_with = "text")]
    pub name: String,

    #[serde(default, deserialize_with = "text")]
    pub username: String,

    #[serde(default, deserialize_with = "text")]
    pub email: String,

    #[serde(default)]
    pub address: Address,

    #[serde(default, deserialize_with = "text")]
    pub phone: String,

    #[serde(default, deserialize_with = "text")]
    pub website: String,

    #[serde(default)]
    pub company: Company,
}

impl User {
    /// First character of the name, used as the avatar glyph
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// Payload for creating a user (everything except the ID)
///
/// Missing fields deserialize to empty strings and any `id` sent by a client
/// is ignored; the store assigns the ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUser {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub username: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
    pub address: Address,
    #[serde(deserialize_with = "text")]
    pub phone: String,
    #[serde(deserialize_with = "text")]
    pub website: String,
    pub company: Company,
}

impl NewUser {
    /// Attach an ID, producing the stored record
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            address: self.address,
            phone: self.phone,
            website: self.website,
            company: self.company,
        }
    }
}
