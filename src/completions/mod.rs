//! Shell completion support for jtag
//!
//! Completions are static: flags, value hints and the shell list come straight
//! from the clap definition in [`crate::cli`].

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate a completion script for `shell` into `buf`
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}
