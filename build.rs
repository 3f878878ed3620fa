use clap::{Command, CommandFactory};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

#[path = "src/cli.rs"]
mod cli;

const BIN: &str = "tagdown";

fn write_man_page(cmd: Command, title: &str, dir: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd).title(title).render(&mut buffer)?;
    fs::write(dir.join(format!("{title}.1")), buffer)
}

fn main() -> Result<()> {
    let mut cmd = cli::Cli::command();

    if let Some(out_dir) = std::env::var_os("OUT_DIR") {
        for shell in [Shell::Bash, Shell::Fish, Shell::Zsh, Shell::PowerShell] {
            generate_to(shell, &mut cmd, BIN, &out_dir)?;
        }
    }

    let man_dir = PathBuf::from("target/man");
    fs::create_dir_all(&man_dir)?;

    // `tagdown.1`, `tagdown-render.1`, `tagdown-scan.1`
    write_man_page(cmd.clone(), BIN, &man_dir)?;
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        let title = format!("{BIN}-{}", sub.get_name());
        write_man_page(sub.clone(), &title, &man_dir)?;
    }

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
