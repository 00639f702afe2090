//! User profile store

use std::sync::Arc;

use common::{KeyValueStore, KeyValueStoreExt, StorageResult};
use tracing::info;

use crate::models::{UserPatch, UserProfile};

/// Storage key of the persisted profile
pub const USER_KEY: &str = "userInfo";

/// The local user profile and its login state
pub struct UserStore {
    storage: Arc<dyn KeyValueStore>,
    profile: UserProfile,
    logged_in: bool,
}

impl UserStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            profile: UserProfile::default(),
            logged_in: false,
        }
    }

    pub fn user_info(&self) -> &UserProfile {
        &self.profile
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Merge `patch` into the profile and mark the user as logged in
    pub fn set_user_info(&mut self, patch: UserPatch) -> StorageResult<()> {
        self.profile.apply(patch);
        self.logged_in = true;
        self.storage.set_json(USER_KEY, &self.profile)?;
        info!("User profile {} saved", self.profile.id);
        Ok(())
    }

    /// Replace only the avatar
    pub fn update_avatar(&mut self, avatar: impl Into<String>) -> StorageResult<()> {
        self.profile.avatar = avatar.into();
        self.storage.set_json(USER_KEY, &self.profile)
    }

    /// Restore the persisted profile; without one the defaults stay in place
    pub fn init_user_info(&mut self) -> StorageResult<()> {
        if let Some(profile) = self.storage.get_json::<UserProfile>(USER_KEY)? {
            self.profile = profile;
            self.logged_in = true;
        }
        Ok(())
    }

    /// Reset the profile and drop the persisted copy
    pub fn logout(&mut self) -> StorageResult<()> {
        self.profile = UserProfile::default();
        self.logged_in = false;
        self.storage.remove(USER_KEY)?;
        info!("User logged out");
        Ok(())
    }
}
