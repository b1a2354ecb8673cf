//! Change-entry-type menu assembly.
//!
//! Builds an ordered [`MenuNode`] tree from a [`TypeCatalog`], the library's
//! [`DataMode`], and the current selection. The tree is pure data: the
//! rendering layer pattern-matches on the node tag and invokes
//! [`ChangeTypeCommand::activate`] when a leaf is chosen.
//!
//! Layout rules:
//!
//! - biblatex libraries show the built-in types unlabeled at top level,
//!   followed by a separated "Custom" sub-group when custom types exist.
//! - BibTeX libraries label every group, including the default one: a
//!   "BibTeX" group first, then "IEEETran", then "Custom", each preceded by
//!   a separator and elided when its source set is empty.
//! - The menu never starts with a separator and never contains an empty
//!   group.

use serde::{Deserialize, Serialize};

use crate::catalog::TypeCatalog;
use crate::model::{DataMode, EntryType};
use crate::operations::ChangeTypeCommand;

/// Fixed label text for the assembled menu.
///
/// The host application resolves these through its string lookup; this core
/// treats them as opaque text. `Default` supplies the English strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLabels {
    /// Label of the user-defined types sub-group.
    pub custom_group: String,
    /// Name of the undo group committed per activation.
    pub undo_name: String,
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self {
            custom_group: "Custom".to_string(),
            undo_name: "Change entry type".to_string(),
        }
    }
}

/// One node of the assembled menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuNode {
    /// Actionable item. Activating it runs `command` against the library
    /// and undo sink the caller supplies.
    Leaf {
        /// Display text, the target type's display name.
        label: String,
        command: ChangeTypeCommand,
        /// Hover help from the catalog, when it has any.
        tooltip: Option<String>,
    },
    /// Visual divider between groups.
    Separator,
    /// Nested sub-menu.
    Group { label: String, children: Vec<MenuNode> },
}

/// Assemble the change-entry-type menu for one menu-open event.
///
/// The catalog is queried fresh on every call; nothing is cached across
/// builds. `selection` holds the indices of the selected entries in
/// selection order and is captured by every leaf's command.
pub fn assemble_change_type_menu<C>(
    catalog: &C,
    mode: DataMode,
    selection: &[usize],
    labels: &MenuLabels,
) -> Vec<MenuNode>
where
    C: TypeCatalog + ?Sized,
{
    let mut items = Vec::new();
    match mode {
        DataMode::Biblatex => {
            // Default types sit unlabeled at top level.
            populate(&mut items, catalog, catalog.builtin_types(mode), selection, labels);
            push_group(
                &mut items,
                catalog,
                &labels.custom_group,
                catalog.custom_types(mode),
                selection,
                labels,
            );
        }
        DataMode::Bibtex => {
            // Legacy mode labels every group, the default one included.
            push_group(
                &mut items,
                catalog,
                mode.formatted_name(),
                catalog.builtin_types(mode),
                selection,
                labels,
            );
            push_group(
                &mut items,
                catalog,
                "IEEETran",
                catalog.ieee_tran_types(),
                selection,
                labels,
            );
            push_group(
                &mut items,
                catalog,
                &labels.custom_group,
                catalog.custom_types(mode),
                selection,
                labels,
            );
        }
    }
    // The group builder prepends a separator unconditionally; the top level
    // must not start with one.
    strip_leading_separator(&mut items);
    items
}

/// Append `Separator` + labeled `Group` built from `types`. Empty sources
/// are elided entirely, leaving no stray separator behind.
fn push_group<C>(
    items: &mut Vec<MenuNode>,
    catalog: &C,
    label: &str,
    types: Vec<EntryType>,
    selection: &[usize],
    labels: &MenuLabels,
) where
    C: TypeCatalog + ?Sized,
{
    if types.is_empty() {
        return;
    }
    let mut children = Vec::new();
    populate(&mut children, catalog, types, selection, labels);
    items.push(MenuNode::Separator);
    items.push(MenuNode::Group {
        label: label.to_string(),
        children,
    });
}

/// Append one leaf per type, in catalog order.
fn populate<C>(
    items: &mut Vec<MenuNode>,
    catalog: &C,
    types: Vec<EntryType>,
    selection: &[usize],
    labels: &MenuLabels,
) where
    C: TypeCatalog + ?Sized,
{
    for ty in types {
        let tooltip = catalog
            .description(&ty)
            .filter(|text| !text.trim().is_empty());
        items.push(MenuNode::Leaf {
            label: ty.display_name.clone(),
            command: ChangeTypeCommand::new(ty, selection.to_vec(), labels.undo_name.clone()),
            tooltip,
        });
    }
}

fn strip_leading_separator(items: &mut Vec<MenuNode>) {
    if matches!(items.first(), Some(MenuNode::Separator)) {
        items.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal catalog where every set is directly configurable.
    #[derive(Default)]
    struct FixtureCatalog {
        builtin: Vec<EntryType>,
        custom: Vec<EntryType>,
        ieee: Vec<EntryType>,
    }

    impl TypeCatalog for FixtureCatalog {
        fn builtin_types(&self, _mode: DataMode) -> Vec<EntryType> {
            self.builtin.clone()
        }

        fn custom_types(&self, _mode: DataMode) -> Vec<EntryType> {
            self.custom.clone()
        }

        fn ieee_tran_types(&self) -> Vec<EntryType> {
            self.ieee.clone()
        }

        fn description(&self, ty: &EntryType) -> Option<String> {
            // Exercise both the "no value" and "blank value" no-tooltip paths
            match ty.key.as_str() {
                "article" => Some("An article".to_string()),
                "book" => Some("   ".to_string()),
                _ => None,
            }
        }
    }

    fn article() -> EntryType {
        EntryType::new("article", "Article")
    }

    fn book() -> EntryType {
        EntryType::new("book", "Book")
    }

    #[test]
    fn test_empty_builtin_set_yields_no_leading_separator() {
        // With no built-ins the first surviving group would otherwise start
        // the menu with its separator.
        let catalog = FixtureCatalog {
            ieee: vec![article()],
            custom: vec![book()],
            ..Default::default()
        };
        let menu =
            assemble_change_type_menu(&catalog, DataMode::Bibtex, &[0], &MenuLabels::default());

        assert!(matches!(&menu[0], MenuNode::Group { label, .. } if label == "IEEETran"));
        assert!(matches!(&menu[1], MenuNode::Separator));
        assert!(matches!(&menu[2], MenuNode::Group { label, .. } if label == "Custom"));
        assert_eq!(menu.len(), 3);
    }

    #[test]
    fn test_fully_empty_catalog_yields_empty_menu() {
        let catalog = FixtureCatalog::default();
        for mode in [DataMode::Biblatex, DataMode::Bibtex] {
            let menu = assemble_change_type_menu(&catalog, mode, &[0], &MenuLabels::default());
            assert!(menu.is_empty(), "mode {mode:?} should produce no nodes");
        }
    }

    #[test]
    fn test_blank_description_attaches_no_tooltip() {
        let catalog = FixtureCatalog {
            builtin: vec![article(), book(), EntryType::new("misc", "Misc")],
            ..Default::default()
        };
        let menu =
            assemble_change_type_menu(&catalog, DataMode::Biblatex, &[0], &MenuLabels::default());

        let tooltips: Vec<Option<&str>> = menu
            .iter()
            .map(|node| match node {
                MenuNode::Leaf { tooltip, .. } => tooltip.as_deref(),
                other => panic!("expected leaf, got {other:?}"),
            })
            .collect();
        assert_eq!(tooltips, vec![Some("An article"), None, None]);
    }

    #[test]
    fn test_leaf_captures_selection_and_undo_name() {
        let catalog = FixtureCatalog {
            builtin: vec![article()],
            ..Default::default()
        };
        let labels = MenuLabels {
            custom_group: "Eigene".to_string(),
            undo_name: "Eintragstyp ändern".to_string(),
        };
        let menu = assemble_change_type_menu(&catalog, DataMode::Biblatex, &[2, 0, 1], &labels);

        match &menu[0] {
            MenuNode::Leaf { command, .. } => {
                assert_eq!(command.target, article());
                assert_eq!(command.selection, vec![2, 0, 1]);
                assert_eq!(command.undo_name, "Eintragstyp ändern");
            }
            other => panic!("expected leaf, got {other:?}"),
        }
    }
}
