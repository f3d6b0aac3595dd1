//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::registry::{VaultEntry, VaultId};

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

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of vaults (ID, Path, Added, Open) in the given order.
pub fn print_vaults_table(vaults: &[(&VaultId, &VaultEntry)]) {
    if vaults.is_empty() {
        info("No vaults registered yet.");
        tip("Run `obsidian-cli open <DIR>` or `obsidian-cli new <DIR>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Path", "Added", "Open"]);

    for (id, entry) in vaults {
        let open = if entry.open {
            style("*").green().bold().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            id.to_string(),
            entry.path.display().to_string(),
            entry.date_added.format("%Y-%m-%d %H:%M:%S").to_string(),
            open,
        ]);
    }

    println!("{table}");
}
