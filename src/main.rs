use anyhow::Result;
use clap::{Parser, ValueEnum};

use bibmenu::catalog::StandardCatalog;
use bibmenu::menu::{MenuLabels, assemble_change_type_menu};
use bibmenu::model::{DataMode, Entry, EntryType, Library};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble a change-entry-type menu and print it as JSON", long_about = None)]
struct Cli {
    /// Library mode to assemble the menu for
    #[arg(value_enum, default_value = "biblatex")]
    mode: Mode,
    /// Seed a user-defined type into the catalog (repeatable)
    #[arg(long = "custom", value_name = "NAME")]
    custom: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Biblatex,
    Bibtex,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = match cli.mode {
        Mode::Biblatex => DataMode::Biblatex,
        Mode::Bibtex => DataMode::Bibtex,
    };

    let mut catalog = StandardCatalog::new();
    for name in &cli.custom {
        catalog.add_custom_type(mode, EntryType::new(name.to_lowercase(), name.clone()));
    }

    let library = sample_library();
    let selection: Vec<usize> = (0..library.entries.len()).collect();
    let menu = assemble_change_type_menu(&catalog, mode, &selection, &MenuLabels::default());

    let json = serde_json::to_string_pretty(&menu)?;
    println!("{}", json);
    Ok(())
}

/// A small demo library standing in for an opened file.
fn sample_library() -> Library {
    let mut library = Library::new();

    let mut knuth = Entry::new(EntryType::new("article", "Article"));
    knuth.set_field("author", "Knuth, D. E.");
    knuth.set_field("title", "Literate Programming");
    knuth.set_field("year", "1984");
    library.entries.push(knuth);

    let mut sicp = Entry::new(EntryType::new("book", "Book"));
    sicp.set_field("author", "Abelson, H. and Sussman, G. J.");
    sicp.set_field("title", "Structure and Interpretation of Computer Programs");
    library.entries.push(sicp);

    let mut misc = Entry::new(EntryType::new("misc", "Misc"));
    misc.set_field("title", "Unfiled note");
    library.entries.push(misc);

    library
}
