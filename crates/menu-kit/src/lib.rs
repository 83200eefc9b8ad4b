//! Admin console menu kit.
//!
//! The backend delivers navigation as a tree of menu nodes (folders, pages,
//! external links, and pure permission markers). This crate turns that tree
//! into the route definitions the front-end router registers, extracts the
//! permission codes used for authorization gating, and provides the tree
//! utilities shared by the menu-management screens.
//!
//! Fetching the menu tree and registering the produced routes belong to the
//! surrounding application; everything here is a pure transform over data the
//! caller already holds. The one stateful piece, [`lookup::LookupCache`], is
//! an explicit object the caller owns and passes around.

pub mod lookup;
pub mod model;
pub mod transform;
pub mod tree;

pub use model::{MenuId, MenuNode, MenuType, RouteMeta, RouteNode};
pub use transform::{
    first_page_route, page_components_from_menus, permissions_from_menus,
    transform_menu_to_route, transform_menus_to_routes,
};
pub use tree::{build_menu_tree, find_menu_by_id, flatten_menu_tree, menu_parents};
