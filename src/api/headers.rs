//! HTTP header names and route paths
//!
//! Centralized so the router, middleware and tests agree on them.

/// Header name for request ID used for tracing and correlation
pub const X_REQUEST_ID: &str = "x-request-id";

/// Well-known paths
pub mod paths {
    pub const ROOT: &str = "/";

    /// Landing page of the static UI, the target of the root redirect
    pub const INDEX: &str = "/static/index.html";

    pub const STATIC: &str = "/static";

    pub const HEALTH: &str = "/health";

    pub const ACTIVITIES: &str = "/activities";

    pub const ACTIVITY: &str = "/activities/{activity_name}";

    pub const SIGNUP: &str = "/activities/{activity_name}/signup";

    pub const UNREGISTER: &str = "/activities/{activity_name}/unregister";
}
