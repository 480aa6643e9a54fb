// =============================================================================
// ENDPOINTS
// =============================================================================

pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/dashboard/logout";
pub const DASHBOARD_SUMMARY_PATH: &str = "/dashboard";

// =============================================================================
// SESSION
// =============================================================================

/// User marker stored by the public login, which returns no user object
pub const DEFAULT_USER_MARKER: &str = "admin";

// =============================================================================
// DISPLAY PLACEHOLDERS
// =============================================================================

pub const UNKNOWN_TEXT: &str = "غير معروف";
pub const NOT_AVAILABLE_TEXT: &str = "غير متوفر";
pub const UNSPECIFIED_TEXT: &str = "غير محدد";
pub const NO_DESCRIPTION_TEXT: &str = "لا يوجد وصف";
pub const GENERAL_CATEGORY: &str = "عام";

/// Prefix used to derive a description for a service that has none
pub const SERVICE_DESCRIPTION_PREFIX: &str = "خدمة";

pub const DEFAULT_CATEGORY_IMAGE: &str = "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";
pub const DEFAULT_SERVICE_IMAGE: &str = "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";
pub const DEFAULT_PROVIDER_IMAGE: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";
pub const DEFAULT_OFFER_IMAGE: &str = "https://images.unsplash.com/photo-1621905252507-b35492cc74b4?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";
