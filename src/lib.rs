//! Change-entry-type menus for bibliographic libraries.
//!
//! This crate builds the hierarchical "change entry type" menu of a
//! reference manager: type choices are partitioned and ordered by the
//! library's data mode (biblatex vs. legacy BibTeX) and by provenance
//! (built-in, IEEETran extension set, user-defined), and every selectable
//! leaf is bound to a [`operations::ChangeTypeCommand`] that applies the
//! type to all selected entries as one named, undoable group.
//!
//! The binary `bibmenu` demonstrates usage and prints the assembled menu
//! tree as JSON.

pub mod catalog;
pub mod menu;
pub mod model;
pub mod operations;
