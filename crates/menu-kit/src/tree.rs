//! Tree utilities shared by the menu-management screens.
//!
//! The backend stores menus flat, keyed by `(id, parentId)`. These helpers
//! rebuild and flatten the hierarchy and answer lookup queries over it.
//!
//! Correctness is only guaranteed for well-formed input: there is no cycle
//! detection, so a self-parenting id handed to [`build_menu_tree`] recurses
//! without bound, and [`menu_parents`] truncates silently once a chain
//! exceeds the flattened size. Malformed trees are a caller contract
//! violation, not a handled error.

use crate::model::{MenuId, MenuNode};

/// Rebuild a hierarchy from a flat list.
///
/// A node is a root when its parent id equals `root_parent`; a missing
/// `parent_id` counts as [`MenuId::ROOT`]. Input order is preserved at every
/// level.
pub fn build_menu_tree(items: &[MenuNode], root_parent: &MenuId) -> Vec<MenuNode> {
    let mut tree = Vec::new();
    for item in items {
        if item.effective_parent() == root_parent {
            let mut node = item.clone();
            node.children = build_menu_tree(items, &item.id);
            tree.push(node);
        }
    }
    tree
}

/// Flatten a forest in pre-order; every emitted node has its children
/// stripped.
pub fn flatten_menu_tree(nodes: &[MenuNode]) -> Vec<MenuNode> {
    fn walk(node: &MenuNode, out: &mut Vec<MenuNode>) {
        let mut flat = node.clone();
        flat.children = Vec::new();
        out.push(flat);
        for child in &node.children {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    for node in nodes {
        walk(node, &mut out);
    }
    out
}

/// Depth-first search by exact id; first match wins.
pub fn find_menu_by_id<'a>(nodes: &'a [MenuNode], id: &MenuId) -> Option<&'a MenuNode> {
    for node in nodes {
        if &node.id == id {
            return Some(node);
        }
        if let Some(found) = find_menu_by_id(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Ancestor chain of `target`, root-first.
///
/// Follows `parent_id` links over the flattened index and stops silently at
/// the first missing link or at the root sentinel.
pub fn menu_parents(nodes: &[MenuNode], target: &MenuId) -> Vec<MenuNode> {
    let flat = flatten_menu_tree(nodes);
    let mut parents: Vec<MenuNode> = Vec::new();

    let mut current = flat.iter().find(|m| &m.id == target);
    while let Some(menu) = current {
        let parent_id = match menu.parent_id.as_ref() {
            None | Some(MenuId::Num(0)) => break,
            Some(MenuId::Str(s)) if s.is_empty() => break,
            Some(id) => id,
        };
        let Some(parent) = flat.iter().find(|m| &m.id == parent_id) else {
            break;
        };
        parents.insert(0, parent.clone());
        // A parent cycle would loop forever; the chain can never legitimately
        // outgrow the flattened list.
        if parents.len() >= flat.len() {
            break;
        }
        current = Some(parent);
    }

    parents
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::MenuType;

    fn flat_node(id: i64, parent_id: i64, name: &str) -> MenuNode {
        MenuNode {
            id: MenuId::Num(id),
            name: name.to_string(),
            localized_name: None,
            menu_type: MenuType::Page,
            resource: None,
            component: None,
            parent_id: Some(MenuId::Num(parent_id)),
            icon: None,
            order: 0,
            show: true,
            permission_code: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn build_assigns_children_recursively() {
        let items = vec![
            flat_node(1, 0, "manage"),
            flat_node(2, 1, "user"),
            flat_node(3, 1, "role"),
            flat_node(4, 2, "user-detail"),
        ];

        let tree = build_menu_tree(&items, &MenuId::ROOT);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[0].children[0].name, "user");
        assert_eq!(tree[0].children[0].children[0].name, "user-detail");
        assert!(tree[0].children[1].children.is_empty());
    }

    #[test]
    fn build_preserves_sibling_order() {
        let items = vec![
            flat_node(3, 0, "c"),
            flat_node(1, 0, "a"),
            flat_node(2, 0, "b"),
        ];

        let tree = build_menu_tree(&items, &MenuId::ROOT);
        let names: Vec<&str> = tree
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn missing_parent_id_counts_as_root() {
        let mut orphan = flat_node(7, 0, "standalone");
        orphan.parent_id = None;

        let tree = build_menu_tree(&[orphan], &MenuId::ROOT);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn flatten_is_pre_order_and_strips_children() {
        let items = vec![
            flat_node(1, 0, "manage"),
            flat_node(2, 1, "user"),
            flat_node(3, 2, "user-detail"),
            flat_node(4, 0, "logs"),
        ];
        let tree = build_menu_tree(&items, &MenuId::ROOT);

        let flat = flatten_menu_tree(&tree);
        let names: Vec<&str> = flat.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["manage", "user", "user-detail", "logs"]);
        assert!(flat.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn build_flatten_round_trip_is_isomorphic() {
        let items = vec![
            flat_node(1, 0, "manage"),
            flat_node(2, 1, "user"),
            flat_node(3, 1, "role"),
            flat_node(4, 3, "role-detail"),
            flat_node(5, 0, "cache"),
        ];
        let tree = build_menu_tree(&items, &MenuId::ROOT);

        let rebuilt = build_menu_tree(&flatten_menu_tree(&tree), &MenuId::ROOT);

        fn shape(nodes: &[MenuNode]) -> Vec<(MenuId, Vec<(MenuId, usize)>)> {
            nodes
                .iter()
                .map(|n| {
                    (
                        n.id.clone(),
                        n.children
                            .iter()
                            .map(|c| (c.id.clone(), c.children.len()))
                            .collect(),
                    )
                })
                .collect()
        }
        assert_eq!(shape(&rebuilt), shape(&tree));
    }

    #[test]
    fn find_descends_into_children() {
        let items = vec![
            flat_node(1, 0, "manage"),
            flat_node(2, 1, "user"),
            flat_node(3, 2, "user-detail"),
        ];
        let tree = build_menu_tree(&items, &MenuId::ROOT);

        let found = find_menu_by_id(&tree, &MenuId::Num(3)).unwrap();
        assert_eq!(found.name, "user-detail");
        assert!(find_menu_by_id(&tree, &MenuId::Num(99)).is_none());
    }

    #[test]
    fn find_handles_string_ids() {
        let mut node = flat_node(0, 0, "settings");
        node.id = MenuId::Str("settings".to_string());

        let found = find_menu_by_id(std::slice::from_ref(&node), &MenuId::from("settings"));
        assert!(found.is_some());
    }

    #[test]
    fn parents_are_root_first() {
        let items = vec![
            flat_node(1, 0, "manage"),
            flat_node(2, 1, "user"),
            flat_node(3, 2, "user-detail"),
        ];
        let tree = build_menu_tree(&items, &MenuId::ROOT);

        let chain = menu_parents(&tree, &MenuId::Num(3));
        let names: Vec<&str> = chain.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["manage", "user"]);
    }

    #[test]
    fn parents_of_root_node_is_empty() {
        let items = vec![flat_node(1, 0, "manage"), flat_node(2, 1, "user")];
        let tree = build_menu_tree(&items, &MenuId::ROOT);

        assert!(menu_parents(&tree, &MenuId::Num(1)).is_empty());
        assert!(menu_parents(&tree, &MenuId::Num(99)).is_empty());
    }

    #[test]
    fn parents_stop_silently_on_broken_link() {
        // Node 2 claims parent 9, which exists nowhere in the forest.
        let mut tree = vec![flat_node(1, 0, "manage")];
        let mut child = flat_node(2, 9, "orphan");
        child.children = Vec::new();
        tree[0].children.push(child);

        assert!(menu_parents(&tree, &MenuId::Num(2)).is_empty());
    }
}
