//! Profile draft data model
//!
//! The in-progress profile record edited across onboarding steps. The draft
//! is owned by the host (the wizard controller); step components only ever
//! see a shared reference and request changes through [`DraftPatch`] merges.

pub mod validate;

use serde::{Deserialize, Serialize};

/// The in-progress, not-yet-submitted user profile.
///
/// Every field is an always-present `String`; the empty string means
/// "unset". Only the profile-setup step edits the first five fields, the
/// social handles belong to a later step of the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub avatar: String,
    pub email: String,
    pub github: String,
    pub twitter: String,
    pub telegram: String,
    pub slack: String,
    pub discord: String,
    pub linkedin: String,
    pub website: String,
}

impl ProfileDraft {
    /// Shallow-merge a patch into the draft: `Some` overwrites the field
    /// (including `Some("")`), `None` leaves it untouched.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.username {
            self.username = v;
        }
        if let Some(v) = patch.bio {
            self.bio = v;
        }
        if let Some(v) = patch.avatar {
            self.avatar = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.github {
            self.github = v;
        }
        if let Some(v) = patch.twitter {
            self.twitter = v;
        }
        if let Some(v) = patch.telegram {
            self.telegram = v;
        }
        if let Some(v) = patch.slack {
            self.slack = v;
        }
        if let Some(v) = patch.discord {
            self.discord = v;
        }
        if let Some(v) = patch.linkedin {
            self.linkedin = v;
        }
        if let Some(v) = patch.website {
            self.website = v;
        }
    }
}

/// Merge-style partial update of a [`ProfileDraft`].
///
/// Step components construct patches and hand them to the host; the host
/// owns the merge semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub slack: Option<String>,
    pub discord: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_is_all_empty() {
        let draft = ProfileDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.username, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.avatar, "");
        assert_eq!(draft.website, "");
    }

    #[test]
    fn test_apply_overwrites_only_some_fields() {
        let mut draft = ProfileDraft {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            ..Default::default()
        };
        draft.apply(DraftPatch {
            name: Some("Ada Lovelace".to_string()),
            ..Default::default()
        });
        assert_eq!(draft.name, "Ada Lovelace");
        assert_eq!(draft.username, "ada");
    }

    #[test]
    fn test_apply_some_empty_clears_field() {
        let mut draft = ProfileDraft {
            bio: "hello".to_string(),
            ..Default::default()
        };
        draft.apply(DraftPatch {
            bio: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(draft.bio, "");
    }

    #[test]
    fn test_apply_identical_value_is_idempotent() {
        let mut draft = ProfileDraft {
            avatar: "https://example.com/a.png".to_string(),
            ..Default::default()
        };
        let before = draft.clone();
        draft.apply(DraftPatch {
            avatar: Some("https://example.com/a.png".to_string()),
            ..Default::default()
        });
        assert_eq!(draft, before);
    }

    #[test]
    fn test_draft_json_round_trip() {
        let draft = ProfileDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            github: "adal".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).expect("serialize");
        let back: ProfileDraft = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, draft);
    }

    #[test]
    fn test_draft_deserializes_missing_fields_as_empty() {
        let back: ProfileDraft = serde_json::from_str(r#"{"name":"Ada"}"#).expect("deserialize");
        assert_eq!(back.name, "Ada");
        assert_eq!(back.email, "");
    }
}
