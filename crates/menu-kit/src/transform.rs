//! Backend menu tree to route tree transform.
//!
//! The backend menu tree mixes four node kinds: folders, pages, external
//! links, and `Api` permission markers. The transform produces a route
//! definition for everything except `Api` nodes, derives route names from
//! paths, and resolves logical component references depending on whether an
//! ancestor already supplies the layout shell.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::model::{
    DEFAULT_ICON, IFRAME_VIEW, LAYOUT_COMPONENT, MenuNode, MenuType, PLACEHOLDER_VIEW, RouteMeta,
    RouteNode,
};

/// Transform one menu node (and its subtree) into a route definition.
///
/// Returns `None` for `Api` nodes — they are permission markers, not routes.
/// `parent_menu_type` is the kind of the immediate parent; a `Folder` parent
/// already renders the layout shell, so descendants use bare view references.
pub fn transform_menu_to_route(
    menu: &MenuNode,
    parent_menu_type: Option<MenuType>,
) -> Option<RouteNode> {
    let has_layout_parent = parent_menu_type == Some(MenuType::Folder);

    let component = match menu.menu_type {
        MenuType::Api => return None,
        MenuType::Folder => LAYOUT_COMPONENT.to_string(),
        MenuType::External => wrap_view(IFRAME_VIEW, has_layout_parent),
        MenuType::Page => match menu.component.as_deref().filter(|c| !c.is_empty()) {
            Some(component) => {
                let view = format!("view.{}", normalize_component_path(component));
                debug!(menu = %menu.name, component = %view, "resolved page component");
                wrap_view(&view, has_layout_parent)
            }
            None => wrap_view(PLACEHOLDER_VIEW, has_layout_parent),
        },
    };

    let path = resolve_path(menu);

    let children: Vec<RouteNode> = menu
        .children
        .iter()
        .filter_map(|child| transform_menu_to_route(child, Some(menu.menu_type)))
        .collect();

    Some(RouteNode {
        name: route_name_from_path(&path),
        path,
        component,
        meta: RouteMeta {
            title: menu
                .localized_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(&menu.name)
                .to_string(),
            icon: menu
                .icon
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_ICON)
                .to_string(),
            order: menu.order,
            hide: !menu.show,
            permissions: menu
                .permission_code
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|code| vec![code.to_string()]),
        },
        children,
    })
}

/// Transform a menu forest into the route list the router registers.
///
/// Top-level nodes have no layout-supplying parent; `Api` nodes are dropped,
/// input order is preserved.
pub fn transform_menus_to_routes(menus: &[MenuNode]) -> Vec<RouteNode> {
    menus
        .iter()
        .filter_map(|menu| transform_menu_to_route(menu, None))
        .collect()
}

/// Derive a route name from a path, e.g. `/manage/user` -> `manage_user`.
///
/// Segments keep only `[A-Za-z0-9-]` and are joined with `_`. An empty path
/// or `/` maps to `root`. Deterministic but not collision-free — distinct
/// input paths are the caller's responsibility.
pub fn route_name_from_path(path: &str) -> String {
    let parts: Vec<String> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            segment
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect()
        })
        .collect();

    if parts.is_empty() {
        return "root".to_string();
    }

    parts.join("_")
}

/// Collect every permission code in the forest, first occurrence wins.
///
/// `Api` nodes are included — carrying permission markers is the reason they
/// exist in the tree at all.
pub fn permissions_from_menus(menus: &[MenuNode]) -> Vec<String> {
    fn collect(menu: &MenuNode, seen: &mut HashSet<String>, out: &mut Vec<String>) {
        if let Some(code) = menu.permission_code.as_deref().filter(|c| !c.is_empty())
            && seen.insert(code.to_string())
        {
            out.push(code.to_string());
        }
        for child in &menu.children {
            collect(child, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for menu in menus {
        collect(menu, &mut seen, &mut out);
    }
    out
}

/// Find the first visible `Page` node in pre-order, descending only into
/// `Folder` children. A folder's own visibility is irrelevant; `External`
/// and `Api` nodes neither match nor recurse. Used to pick the landing page
/// after login.
pub fn first_page_route(menus: &[MenuNode]) -> Option<&MenuNode> {
    for menu in menus {
        match menu.menu_type {
            MenuType::Page => {
                if menu.show {
                    return Some(menu);
                }
            }
            MenuType::Folder => {
                if let Some(found) = first_page_route(&menu.children) {
                    return Some(found);
                }
            }
            MenuType::External | MenuType::Api => {}
        }
    }
    None
}

/// Unique component paths of `Page` nodes across the forest, sorted
/// alphabetically. The menu-management screen uses this to offer known
/// component paths.
pub fn page_components_from_menus(menus: &[MenuNode]) -> Vec<String> {
    fn collect(menu: &MenuNode, out: &mut BTreeSet<String>) {
        if menu.menu_type == MenuType::Page
            && let Some(component) = menu.component.as_deref().filter(|c| !c.is_empty())
        {
            out.insert(component.to_string());
        }
        for child in &menu.children {
            collect(child, out);
        }
    }

    let mut out = BTreeSet::new();
    for menu in menus {
        collect(menu, &mut out);
    }
    out.into_iter().collect()
}

/// Route path: the backend resource verbatim, or a path synthesized from the
/// display name for synthetic folder nodes.
fn resolve_path(menu: &MenuNode) -> String {
    match menu.resource.as_deref().filter(|r| !r.is_empty()) {
        Some(resource) => resource.to_string(),
        None => {
            let source = if menu.name.is_empty() {
                "folder"
            } else {
                menu.name.as_str()
            };
            format!("/{}", route_name_from_path(source))
        }
    }
}

/// Normalize a stored component path into a logical view id.
///
/// `views/system/user/index.vue` -> `system_user`.
fn normalize_component_path(component: &str) -> String {
    let trimmed = component.strip_prefix("views/").unwrap_or(component);
    let trimmed = trimmed.strip_suffix("/index.vue").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(".vue").unwrap_or(trimmed);
    trimmed.replace('/', "_")
}

/// Prefix the layout shell unless an ancestor already supplies it.
fn wrap_view(view: &str, has_layout_parent: bool) -> String {
    if has_layout_parent {
        view.to_string()
    } else {
        format!("{LAYOUT_COMPONENT}${view}")
    }
}
