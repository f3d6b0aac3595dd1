//! `obsidian-cli completions`: generate shell completion scripts.
//!
//! Usage:
//!   source <(obsidian-cli completions bash)
//!   source <(obsidian-cli completions zsh)
//!   obsidian-cli completions fish
//!   obsidian-cli completions powershell
//!
//! The clap_complete scripts complete commands and flags. For bash and zsh
//! a hook is appended that asks the hidden `obsidian-cli complete` command
//! for the path argument of `open`, `new` and `rm`, so registered vaults
//! and local directories are offered already shell-quoted. Other shells
//! get the static script only.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Wraps clap's `_obsidian-cli` so the first argument of `open`/`new`/`rm`
/// comes from `obsidian-cli complete`.
const BASH_HOOK: &str = r#"
_obsidian-cli_dynamic() {
    local cur="${COMP_WORDS[COMP_CWORD]}"
    if [[ ${COMP_CWORD} -eq 2 && "$cur" != -* ]]; then
        local IFS=$'\n'
        case "${COMP_WORDS[1]}" in
            open|new)
                COMPREPLY=($(obsidian-cli complete vaults-and-dirs -- "$cur" 2>/dev/null | cut -f1))
                return 0
                ;;
            rm)
                COMPREPLY=($(obsidian-cli complete vaults -- "$cur" 2>/dev/null | cut -f1))
                return 0
                ;;
        esac
    fi
    _obsidian-cli "$@"
}
complete -F _obsidian-cli_dynamic -o bashdefault -o default obsidian-cli
"#;

/// Same as [`BASH_HOOK`]; `compadd -Q -U` keeps the quoting and skips
/// zsh's own matching since candidates are already filtered.
const ZSH_HOOK: &str = r#"
_obsidian-cli_dynamic() {
    if (( CURRENT == 3 )) && [[ "${words[CURRENT]}" != -* ]]; then
        local -a candidates
        case "${words[2]}" in
            open|new)
                candidates=(${(f)"$(obsidian-cli complete vaults-and-dirs -- "${words[CURRENT]}" 2>/dev/null | cut -f1)"})
                compadd -Q -U -- "${candidates[@]}"
                return
                ;;
            rm)
                candidates=(${(f)"$(obsidian-cli complete vaults -- "${words[CURRENT]}" 2>/dev/null | cut -f1)"})
                compadd -Q -U -- "${candidates[@]}"
                return
                ;;
        esac
    fi
    _obsidian-cli "$@"
}
compdef _obsidian-cli_dynamic obsidian-cli
"#;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut io::stdout())?;
    Ok(())
}

fn write_script(shell: Shell, out: &mut dyn io::Write) -> io::Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);

    if let Some(hook) = dynamic_hook(shell) {
        out.write_all(hook.as_bytes())?;
    }
    Ok(())
}

/// Hook calling `obsidian-cli complete`, for shells that accept
/// POSIX-quoted candidates.
fn dynamic_hook(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some(BASH_HOOK),
        Shell::Zsh => Some(ZSH_HOOK),
        _ => None,
    }
}
