//! Entry-type catalogs: which types exist for a given library mode.
//!
//! The [`TypeCatalog`] trait is the read-only contract the menu assembler
//! consumes: built-in types per mode, user-defined custom types per mode, the
//! IEEETran extension set for legacy BibTeX libraries, and optional
//! per-type descriptions used as tooltips.
//!
//! [`StandardCatalog`] is the shipped implementation, carrying the standard
//! BibTeX and biblatex definitions plus editable custom-type lists.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bibmenu::catalog::{StandardCatalog, TypeCatalog};
//! use bibmenu::model::DataMode;
//!
//! let catalog = StandardCatalog::new();
//! let builtin = catalog.builtin_types(DataMode::Bibtex);
//! assert_eq!(builtin[0].key, "article");
//! ```

use once_cell::sync::Lazy;

use crate::model::{DataMode, EntryType};

/// Read-only view of the available entry types for a library.
///
/// Implementations are queried fresh on every menu build; the menu layer
/// never caches results, so a catalog may change between builds (e.g. after
/// the user edits custom types).
pub trait TypeCatalog {
    /// The default (built-in) types for the given mode, in catalog order.
    fn builtin_types(&self, mode: DataMode) -> Vec<EntryType>;

    /// User-defined types for the given mode, in creation order. May be empty.
    fn custom_types(&self, mode: DataMode) -> Vec<EntryType>;

    /// The fixed IEEETran extension set. Only meaningful for
    /// [`DataMode::Bibtex`] libraries; callers in biblatex mode never ask.
    fn ieee_tran_types(&self) -> Vec<EntryType>;

    /// Help text for a type, or `None` when there is nothing to show.
    fn description(&self, ty: &EntryType) -> Option<String>;
}

/// Helper to create a type definition concisely.
fn ty(key: &str, display_name: &str) -> EntryType {
    EntryType::new(key, display_name)
}

/// The standard BibTeX entry types, in their conventional order.
static BIBTEX_TYPES: Lazy<Vec<EntryType>> = Lazy::new(|| {
    vec![
        ty("article", "Article"),
        ty("book", "Book"),
        ty("booklet", "Booklet"),
        ty("conference", "Conference"),
        ty("inbook", "InBook"),
        ty("incollection", "InCollection"),
        ty("inproceedings", "InProceedings"),
        ty("manual", "Manual"),
        ty("mastersthesis", "MastersThesis"),
        ty("misc", "Misc"),
        ty("phdthesis", "PhdThesis"),
        ty("proceedings", "Proceedings"),
        ty("techreport", "TechReport"),
        ty("unpublished", "Unpublished"),
    ]
});

/// The biblatex entry types. Superset of the BibTeX names plus the
/// biblatex-only types (online, dataset, software, thesis, …).
static BIBLATEX_TYPES: Lazy<Vec<EntryType>> = Lazy::new(|| {
    vec![
        ty("article", "Article"),
        ty("book", "Book"),
        ty("mvbook", "MvBook"),
        ty("inbook", "InBook"),
        ty("bookinbook", "BookInBook"),
        ty("suppbook", "SuppBook"),
        ty("booklet", "Booklet"),
        ty("collection", "Collection"),
        ty("mvcollection", "MvCollection"),
        ty("incollection", "InCollection"),
        ty("suppcollection", "SuppCollection"),
        ty("dataset", "Dataset"),
        ty("manual", "Manual"),
        ty("misc", "Misc"),
        ty("online", "Online"),
        ty("patent", "Patent"),
        ty("periodical", "Periodical"),
        ty("suppperiodical", "SuppPeriodical"),
        ty("proceedings", "Proceedings"),
        ty("mvproceedings", "MvProceedings"),
        ty("inproceedings", "InProceedings"),
        ty("reference", "Reference"),
        ty("mvreference", "MvReference"),
        ty("inreference", "InReference"),
        ty("report", "Report"),
        ty("software", "Software"),
        ty("thesis", "Thesis"),
        ty("unpublished", "Unpublished"),
    ]
});

/// The IEEETran extension set for legacy BibTeX libraries.
static IEEETRAN_TYPES: Lazy<Vec<EntryType>> = Lazy::new(|| {
    vec![
        ty("electronic", "Electronic"),
        ty("ieeetranbstctl", "IEEEtranBSTCTL"),
        ty("periodical", "Periodical"),
        ty("patent", "Patent"),
        ty("standard", "Standard"),
    ]
});

/// Short help text for the common types. Types without an entry here get no
/// tooltip.
fn describe(key: &str) -> Option<&'static str> {
    let text = match key {
        "article" => "An article from a journal, magazine, or other periodical",
        "book" => "A single-volume book with an explicit publisher",
        "booklet" => "A book-like work without a formal publisher",
        "conference" => "Legacy alias for InProceedings",
        "inbook" => "A part of a book, such as a chapter or a page range",
        "incollection" => "A contribution with its own title inside a collection",
        "inproceedings" => "An article in a conference proceedings",
        "manual" => "Technical or other documentation",
        "mastersthesis" => "A thesis for a master's degree",
        "misc" => "A fallback for works that fit no other type",
        "phdthesis" => "A thesis for a doctoral degree",
        "proceedings" => "A single-volume conference proceedings",
        "techreport" => "A report published by an institution",
        "unpublished" => "A work with an author and title that has not been formally published",
        "dataset" => "A data set or a similar collection of raw data",
        "online" => "An online resource such as a website",
        "patent" => "A patent or patent request",
        "periodical" => "A complete issue of a periodical",
        "report" => "A report published by an institution or organization",
        "software" => "Computer software",
        "thesis" => "A thesis written to satisfy degree requirements",
        "electronic" => "An electronic reference, such as a website (IEEETran)",
        "standard" => "A formally published standard (IEEETran)",
        _ => return None,
    };
    Some(text)
}

/// The shipped catalog: standard built-in definitions plus per-mode
/// custom-type lists the host application can edit between menu builds.
#[derive(Debug, Clone, Default)]
pub struct StandardCatalog {
    custom_biblatex: Vec<EntryType>,
    custom_bibtex: Vec<EntryType>,
}

impl StandardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn custom_list(&mut self, mode: DataMode) -> &mut Vec<EntryType> {
        match mode {
            DataMode::Biblatex => &mut self.custom_biblatex,
            DataMode::Bibtex => &mut self.custom_bibtex,
        }
    }

    /// Add a user-defined type for the given mode. Replaces an existing
    /// custom type with the same key in place, keeping list order.
    pub fn add_custom_type(&mut self, mode: DataMode, ty: EntryType) {
        let list = self.custom_list(mode);
        if let Some(existing) = list.iter_mut().find(|t| **t == ty) {
            *existing = ty;
        } else {
            list.push(ty);
        }
    }

    /// Remove a user-defined type by key. Returns true if one was removed.
    pub fn remove_custom_type(&mut self, mode: DataMode, key: &str) -> bool {
        let list = self.custom_list(mode);
        if let Some(pos) = list.iter().position(|t| t.key == key) {
            list.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drop all user-defined types for the given mode.
    pub fn clear_custom_types(&mut self, mode: DataMode) {
        self.custom_list(mode).clear();
    }
}

impl TypeCatalog for StandardCatalog {
    fn builtin_types(&self, mode: DataMode) -> Vec<EntryType> {
        match mode {
            DataMode::Biblatex => BIBLATEX_TYPES.clone(),
            DataMode::Bibtex => BIBTEX_TYPES.clone(),
        }
    }

    fn custom_types(&self, mode: DataMode) -> Vec<EntryType> {
        match mode {
            DataMode::Biblatex => self.custom_biblatex.clone(),
            DataMode::Bibtex => self.custom_bibtex.clone(),
        }
    }

    fn ieee_tran_types(&self) -> Vec<EntryType> {
        IEEETRAN_TYPES.clone()
    }

    fn description(&self, ty: &EntryType) -> Option<String> {
        describe(&ty.key).map(str::to_string)
    }
}
