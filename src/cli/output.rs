//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so every message
//! has the same styling. Errors and warnings go to stderr.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::envelope::value_kind;
use crate::vault::SecretData;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a table of the received fields (Field, Kind). Values are never shown.
pub fn print_fields_table(data: &SecretData) {
    if data.is_empty() {
        warning("The secret has no fields; the output file will be empty.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Kind"]);

    for (name, value) in data {
        table.add_row(vec![name.as_str(), value_kind(value)]);
    }

    println!("{table}");
}
