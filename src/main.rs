use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use tagdown::{render, scan};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", p.display()))),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_all(path: Option<&PathBuf>, content: &str) -> io::Result<()> {
    match path {
        Some(p) => fs::write(p, content)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", p.display()))),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(
    explicit: Option<&Path>,
    file: &Option<PathBuf>,
) -> io::Result<tagdown::Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = tagdown::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            file,
            output,
            fragment,
            no_paragraphs,
        } => {
            let mut cfg = load_config(cli.config.as_deref(), &file)?;
            if fragment {
                cfg.document = false;
            }
            if no_paragraphs {
                cfg.paragraphs = false;
            }

            let input = read_all(file.as_ref())?;
            let html = render(&input, Some(cfg));
            write_all(output.as_ref(), &html)?;

            if let Some(path) = &output {
                log::info!("Wrote {}", path.display());
            }
            Ok(())
        }
        Commands::Scan { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            write_all(None, &scan(&input, Some(cfg)))
        }
    }
}
