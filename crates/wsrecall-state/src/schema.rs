/// Key/value table every editor state database carries
pub const ITEM_TABLE: &str = "ItemTable";

/// Key under which the recently-opened history is stored (editor v1.64+)
pub const RECENTLY_OPENED_PATHS_KEY: &str = "history.recentlyOpenedPathsList";
