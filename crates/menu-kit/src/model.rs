//! Menu and route data model.
//!
//! `MenuNode` mirrors the backend's camelCase menu payload; `RouteNode` is
//! the derived route-definition shape the router consumes. Both are plain
//! data — the transform between them lives in [`crate::transform`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout shell component reference (sidebar/header chrome).
pub const LAYOUT_COMPONENT: &str = "layout.base";

/// View that renders an external URL in an iframe.
pub const IFRAME_VIEW: &str = "view.iframe-page";

/// Placeholder view for pages whose component is not configured yet.
pub const PLACEHOLDER_VIEW: &str = "view.404";

/// Icon used when a menu node carries none.
pub const DEFAULT_ICON: &str = "mdi:menu";

/// Menu identifier — the backend sends either a number or a string, and the
/// value is treated as opaque either way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuId {
    Num(i64),
    Str(String),
}

impl MenuId {
    /// Sentinel parent id marking a top-level node.
    pub const ROOT: MenuId = MenuId::Num(0);
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuId::Num(n) => write!(f, "{n}"),
            MenuId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for MenuId {
    fn from(n: i64) -> Self {
        MenuId::Num(n)
    }
}

impl From<&str> for MenuId {
    fn from(s: &str) -> Self {
        MenuId::Str(s.to_string())
    }
}

impl From<String> for MenuId {
    fn from(s: String) -> Self {
        MenuId::Str(s)
    }
}

/// Kind of menu node. Closed set; an unknown kind in a payload is a
/// deserialization error rather than a silently defaulted branch.
///
/// `Api` nodes carry no routing information — they exist only so the backend
/// can co-locate permission markers in the same tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuType {
    Folder,
    Page,
    External,
    Api,
}

/// One node of the backend menu tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: MenuId,

    /// Display label; also the fallback source for a synthesized path.
    pub name: String,

    /// Label localized for the active culture, when the backend has one.
    pub localized_name: Option<String>,

    pub menu_type: MenuType,

    /// Route path. Absent for synthetic folder nodes.
    pub resource: Option<String>,

    /// Logical component reference, meaningful only for `Page` nodes.
    pub component: Option<String>,

    /// Parent node id; absent or `0` for top-level nodes.
    pub parent_id: Option<MenuId>,

    pub icon: Option<String>,

    /// Sort weight. May be negative or zero.
    #[serde(default)]
    pub order: i32,

    /// Visibility flag; inverted into `RouteMeta::hide`.
    pub show: bool,

    /// Capability tag gating this entry, when present.
    pub permission_code: Option<String>,

    /// Child nodes, in backend order. Empty means leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Parent id with the missing case normalized to the root sentinel.
    pub(crate) fn effective_parent(&self) -> &MenuId {
        self.parent_id.as_ref().unwrap_or(&MenuId::ROOT)
    }
}

/// One entry of the derived route tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    /// Path-derived identifier, e.g. `/manage/user` -> `manage_user`.
    pub name: String,

    /// Addressable route path.
    pub path: String,

    /// Logical component reference, layout-wrapped unless an ancestor
    /// already supplies the layout shell.
    pub component: String,

    pub meta: RouteMeta,

    /// Child routes; only attached when at least one child survived the
    /// transform.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

/// Route metadata consumed by the menu renderer and the authorization gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub title: String,
    pub icon: String,
    pub order: i32,

    /// Inverse of the menu node's `show` flag.
    pub hide: bool,

    /// Single required permission code. `None` means unrestricted — this is
    /// never an empty list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}
