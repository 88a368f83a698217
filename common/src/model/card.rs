use serde::{Deserialize, Serialize};

/// A digital card profile as returned by the cards API.
///
/// Every group is optional on the wire and every field inside a group may be
/// missing or `null`: records created by older clients are often only
/// partially populated, so consumers must treat absence as "empty".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DigitalCard {
    /// Stable numeric identifier assigned by the API.
    pub id: u64,
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub about_info: Option<AboutInfo>,
    /// Whether the card is active at all.
    #[serde(default)]
    pub is_active: bool,
    /// Whether the card is reachable from the public site.
    #[serde(default)]
    pub is_public: bool,
    /// ISO-8601 timestamp, formatted by the views.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl DigitalCard {
    /// Name shown in notices and confirmations: the card owner's name, or
    /// `Tarjeta #<id>` when the card has none.
    pub fn display_name(&self) -> String {
        self.personal_info
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Tarjeta #{}", self.id))
    }

    /// Stored photo reference, if any.
    pub fn photo(&self) -> Option<&str> {
        self.personal_info
            .as_ref()
            .and_then(|p| p.photo.as_deref())
            .filter(|photo| !photo.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Server-relative path or absolute URL of the stored photo.
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
}

impl ContactInfo {
    /// Looks a contact field up by its wire name.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "email" => &self.email,
            "phone" => &self.phone,
            "website" => &self.website,
            "linkedin" => &self.linkedin,
            "twitter" => &self.twitter,
            "instagram" => &self.instagram,
            "github" => &self.github,
            "youtube" => &self.youtube,
            "tiktok" => &self.tiktok,
            "whatsapp" => &self.whatsapp,
            "facebook" => &self.facebook,
            _ => return None,
        };
        value.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AboutInfo {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// Years of experience.
    #[serde(default)]
    pub experience: Option<i64>,
}

/// Generic `{ "data": ... }` wrapper used by every single-record response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_deserializes_with_defaults() {
        let card: DigitalCard = serde_json::from_str(
            r#"{"id": 7, "personal_info": {"name": "Ana"}, "contact_info": {}, "about_info": {"skills": []}}"#,
        )
        .expect("partial card should deserialize");

        assert_eq!(card.id, 7);
        assert_eq!(card.display_name(), "Ana");
        assert_eq!(card.photo(), None);
        assert_eq!(card.contact_info, Some(ContactInfo::default()));
        assert_eq!(card.about_info.and_then(|a| a.skills), Some(vec![]));
        assert!(!card.is_active);
    }

    #[test]
    fn null_fields_are_accepted() {
        let card: DigitalCard = serde_json::from_str(
            r#"{"id": 3, "personal_info": {"name": null, "photo": null}, "contact_info": null, "about_info": null, "is_active": true, "is_public": false}"#,
        )
        .expect("nulls should deserialize");

        assert_eq!(card.display_name(), "Tarjeta #3");
        assert!(card.contact_info.is_none());
        assert!(card.is_active);
    }

    #[test]
    fn contact_lookup_by_wire_name() {
        let contact = ContactInfo {
            github: Some("github.com/ana".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.get("github"), Some("github.com/ana"));
        assert_eq!(contact.get("email"), None);
        assert_eq!(contact.get("fax"), None);
    }
}
