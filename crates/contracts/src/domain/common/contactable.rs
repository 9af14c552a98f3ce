use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

/// Kind of record a contact can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactableKind {
    Guard,
    Client,
    Site,
}

impl ContactableKind {
    /// Wire code used in `contactable_type`
    pub fn code(&self) -> &'static str {
        match self {
            ContactableKind::Guard => "guard",
            ContactableKind::Client => "client",
            ContactableKind::Site => "site",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactableKind::Guard => "Guard",
            ContactableKind::Client => "Client",
            ContactableKind::Site => "Site",
        }
    }

    /// All kinds in the order the owner picker lists them
    pub fn all() -> Vec<ContactableKind> {
        vec![
            ContactableKind::Guard,
            ContactableKind::Client,
            ContactableKind::Site,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "guard" => Some(ContactableKind::Guard),
            "client" => Some(ContactableKind::Client),
            "site" => Some(ContactableKind::Site),
            _ => None,
        }
    }
}

impl fmt::Display for ContactableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Polymorphic owner of a contact record
///
/// On the wire this is the `contactable_type` / `contactable_id` pair; in
/// Rust it is a closed sum so an owner can never carry an unknown type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ContactableRef", into = "ContactableRef")]
pub enum Contactable {
    Guard(EntityId),
    Client(EntityId),
    Site(EntityId),
}

impl Contactable {
    pub fn new(kind: ContactableKind, id: EntityId) -> Self {
        match kind {
            ContactableKind::Guard => Contactable::Guard(id),
            ContactableKind::Client => Contactable::Client(id),
            ContactableKind::Site => Contactable::Site(id),
        }
    }

    pub fn kind(&self) -> ContactableKind {
        match self {
            Contactable::Guard(_) => ContactableKind::Guard,
            Contactable::Client(_) => ContactableKind::Client,
            Contactable::Site(_) => ContactableKind::Site,
        }
    }

    pub fn id(&self) -> EntityId {
        match *self {
            Contactable::Guard(id) | Contactable::Client(id) | Contactable::Site(id) => id,
        }
    }
}

impl fmt::Display for Contactable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind(), self.id())
    }
}

/// Flat wire representation of [`Contactable`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactableRef {
    pub contactable_type: String,
    pub contactable_id: EntityId,
}

impl TryFrom<ContactableRef> for Contactable {
    type Error = String;

    fn try_from(value: ContactableRef) -> Result<Self, Self::Error> {
        ContactableKind::from_code(&value.contactable_type)
            .map(|kind| Contactable::new(kind, value.contactable_id))
            .ok_or_else(|| format!("Unknown contactable type: {}", value.contactable_type))
    }
}

impl From<Contactable> for ContactableRef {
    fn from(value: Contactable) -> Self {
        Self {
            contactable_type: value.kind().code().to_string(),
            contactable_id: value.id(),
        }
    }
}
