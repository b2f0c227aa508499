/// State key the tree engine stores the authenticated user id under.
pub const USER_ID_KEY: &str = "_id";

/// State key the one-time password is stored under.
pub const ONE_TIME_PASSWORD_KEY: &str = "oneTimePassword";

/// Identity attribute holding the user's mail addresses.
pub const MAIL_ATTRIBUTE: &str = "mail";

/// Read access to the per-authentication session state (shared and
/// transient scopes), owned by the tree engine.
pub trait NodeState: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Read access to the environment/secret (ESV) store.
pub trait SystemEnv: Send + Sync {
    fn get_property(&self, key: &str) -> Option<String>;
}

/// Identity repository lookup.
pub trait IdRepository: Send + Sync {
    /// `get_attribute` resolves a possibly multi-valued attribute for a user.
    /// An unknown user or attribute yields an empty vector.
    fn get_attribute(&self, user_id: &str, attribute: &str) -> Vec<String>;
}
