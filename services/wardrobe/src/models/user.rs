//! User profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single local user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: String,
    pub nickname: String,
    pub avatar: String,
    pub bio: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Merge the provided fields of `patch` over this profile
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(nickname) = patch.nickname {
            self.nickname = nickname;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = Some(created_at);
        }
    }
}

/// User profile update payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub id: Option<String>,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
