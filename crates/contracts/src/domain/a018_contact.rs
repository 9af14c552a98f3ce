use serde::{Deserialize, Serialize};

use crate::domain::common::{Contactable, EntityId};

/// Contact person attached to a guard, client or site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub owner: Contactable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(flatten)]
    pub owner: Contactable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_flattened() {
        let contact: Contact = serde_json::from_str(
            r#"{"id":4,"name":"Sara","contactable_type":"guard","contactable_id":12}"#,
        )
        .unwrap();
        assert_eq!(contact.owner, Contactable::Guard(12));

        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["contactable_type"], "guard");
        assert_eq!(json["contactable_id"], 12);
    }
}
