mod cli;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{eyre, WrapErr};

use partlabel_core::PartitionIdentity;

use cli::{Cli, Command};

fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so stdout stays usable in scripts.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let stdout = std::io::stdout();
    run(args, &mut stdout.lock())
}

fn run(args: Cli, out: &mut impl Write) -> eyre::Result<()> {
    match args.command {
        Command::Encode { label, name, uuid } => {
            writeln!(out, "{}", PartitionIdentity::new(label, name, uuid))?;
        }
        Command::Init => {
            let path = require_file(args.file)?;
            if !partlabel_core::init_store(&path).wrap_err("initialize partition info file")? {
                tracing::info!(path = %path.display(), "partition info file exists, left untouched");
            }
        }
        Command::Update { encoded } => {
            let path = require_file(args.file)?;
            partlabel_core::update(&encoded, &path)
                .wrap_err_with(|| format!("record partition `{}`", encoded.trim()))?;
        }
        Command::Get { label } => {
            let path = require_file(args.file)?;
            let uuid = partlabel_core::lookup_uuid(&path, &label)
                .wrap_err("look up partition UUID")?
                .ok_or_else(|| not_recorded("label", &label, &path))?;
            writeln!(out, "{uuid}")?;
        }
        Command::LabelOf { uuid } => {
            let path = require_file(args.file)?;
            let info = partlabel_core::load(&path).wrap_err("look up partition label")?;
            let label = info
                .label_for(&uuid)
                .ok_or_else(|| not_recorded("UUID", &uuid, &path))?;
            writeln!(out, "{label}")?;
        }
        Command::List => {
            let path = require_file(args.file)?;
            let info = partlabel_core::load(&path).wrap_err("list partition labels")?;
            for (label, uuid) in info.iter() {
                writeln!(out, "{label}\t{uuid}")?;
            }
        }
    }
    Ok(())
}

fn require_file(file: Option<PathBuf>) -> eyre::Result<PathBuf> {
    file.ok_or_else(|| eyre!("no partition info file given; pass --file or set PARTLABEL_FILE"))
}

fn not_recorded(what: &str, value: &str, path: &Path) -> eyre::Report {
    eyre!("{what} `{value}` is not recorded in {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> eyre::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("partlabel").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn encode_prints_joined_identity() {
        let out = run_to_string(&["encode", "--label", "boot", "--name", "sda1", "--uuid", "AAA"])
            .expect("encode");
        assert_eq!(out, "boot:sda1:AAA\n");
    }

    #[test]
    fn init_update_then_query() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("partition_info.yaml");
        let file = path.to_str().expect("utf-8 temp path");

        run_to_string(&["--file", file, "init"]).expect("init");
        run_to_string(&["--file", file, "update", "data:sda2:2222"]).expect("update data");
        run_to_string(&["--file", file, "update", "boot:sda1:1111"]).expect("update boot");

        assert_eq!(run_to_string(&["--file", file, "get", "data"]).expect("get"), "2222\n");
        assert_eq!(
            run_to_string(&["--file", file, "label-of", "1111"]).expect("label-of"),
            "boot\n"
        );
        assert_eq!(
            run_to_string(&["--file", file, "list"]).expect("list"),
            "boot\t1111\ndata\t2222\n"
        );
    }

    #[test]
    fn get_unknown_label_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("partition_info.yaml");
        std::fs::write(&path, "boot: AAA\n").expect("write store");
        let file = path.to_str().expect("utf-8 temp path");

        let err = run_to_string(&["--file", file, "get", "data"]).expect_err("must fail");
        assert!(err.to_string().contains("label `data` is not recorded"));
    }

    #[test]
    fn update_without_existing_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.yaml");
        let file = path.to_str().expect("utf-8 temp path");

        assert!(run_to_string(&["--file", file, "update", "boot:sda1:AAA"]).is_err());
        assert!(!path.exists());
    }
}
