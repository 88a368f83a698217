use serde::{Deserialize, Serialize};

/// Partial update sent by the edit form.
///
/// `personalInfo` and the two flags are always present. `contact` and `about`
/// are omitted from the JSON entirely when the form holds nothing meaningful
/// for them, so the API keeps whatever it had stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDigitalCardRequest {
    #[serde(rename = "personalInfo")]
    pub personal_info: PersonalInfoPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutPayload>,
    pub is_active: bool,
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonalInfoPayload {
    pub name: String,
    pub title: String,
    pub location: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    pub email: String,
    pub phone: String,
    pub website: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    pub github: String,
    pub youtube: String,
    pub tiktok: String,
    pub whatsapp: String,
    pub facebook: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AboutPayload {
    pub description: String,
    pub skills: Vec<String>,
    pub experience: i64,
}

/// The two independent visibility flags of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusField {
    Active,
    Public,
}

impl StatusField {
    pub fn wire_name(self) -> &'static str {
        match self {
            StatusField::Active => "is_active",
            StatusField::Public => "is_public",
        }
    }
}

/// Body of `PATCH /digital-cards/{id}/toggle-status`. Exactly one flag is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleStatusRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl ToggleStatusRequest {
    pub fn new(field: StatusField, value: bool) -> Self {
        match field {
            StatusField::Active => Self {
                is_active: Some(value),
                ..Default::default()
            },
            StatusField::Public => Self {
                is_public: Some(value),
                ..Default::default()
            },
        }
    }
}

/// Query of the paginated card listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
}

impl ListParams {
    /// Query-string pairs; a blank search term is left out.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                query.push(("search", search.to_string()));
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_groups_do_not_appear_in_json() {
        let request = UpdateDigitalCardRequest {
            personal_info: PersonalInfoPayload {
                name: "Ana".to_string(),
                ..Default::default()
            },
            contact: None,
            about: None,
            is_active: true,
            is_public: false,
        };

        let json = serde_json::to_value(&request).expect("request should serialize");
        let object = json.as_object().expect("request is an object");

        assert_eq!(json["personalInfo"]["name"], "Ana");
        assert!(!object.contains_key("contact"));
        assert!(!object.contains_key("about"));
        assert_eq!(json["is_active"], true);
        assert_eq!(json["is_public"], false);
    }

    #[test]
    fn toggle_request_carries_a_single_flag() {
        let json = serde_json::to_value(ToggleStatusRequest::new(StatusField::Public, true))
            .expect("toggle should serialize");
        assert_eq!(json, serde_json::json!({ "is_public": true }));
    }

    #[test]
    fn blank_search_is_not_sent() {
        let params = ListParams {
            page: 2,
            per_page: 10,
            search: Some("   ".to_string()),
        };
        assert_eq!(
            params.to_query(),
            vec![("page", "2".to_string()), ("per_page", "10".to_string())]
        );

        let params = ListParams {
            search: Some(" ana ".to_string()),
            ..params
        };
        assert_eq!(params.to_query().last(), Some(&("search", "ana".to_string())));
    }
}
