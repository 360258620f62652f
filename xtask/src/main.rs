//! Developer tasks for preview-gen, run as `cargo xtask <task>`
//!
//! `render` pipes the fixture config through the real binary, which is the
//! quickest way to eyeball manifest changes. `ci` chains fmt, clippy, the
//! test suite and a fixture render.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BIN: &str = "preview-gen";
const FIXTURE: &str = "tests/fixtures/basic.yaml";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Developer tasks for preview-gen")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile preview-gen
    Build {
        /// Use the release profile
        #[arg(long)]
        release: bool,
    },
    /// Run the unit and integration tests
    Test {
        /// Skip unit tests and run the tests/ directory only
        #[arg(long)]
        integration: bool,
    },
    /// Print the manifests rendered from tests/fixtures/basic.yaml
    Render {
        /// Slug of the rendered preview
        #[arg(long, default_value = "xtask-preview")]
        slug: String,
        /// yaml or json
        #[arg(long, default_value = "yaml")]
        output: String,
    },
    /// Package the release binary as a tarball
    Dist {
        /// Cross-compile for this target triple
        #[arg(long)]
        target: Option<String>,
    },
    /// Everything a pull request must pass
    Ci,
    /// Run rustfmt over the workspace
    Format {
        /// Fail instead of rewriting files
        #[arg(long)]
        check: bool,
    },
    /// Lint with warnings denied
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;
    sh.change_dir(workspace_root());

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test { integration } => test(&sh, integration),
        Commands::Render { slug, output } => render(&sh, &slug, &output),
        Commands::Dist { target } => dist(&sh, target.as_deref()),
        Commands::Ci => ci(&sh),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    let profile = if release { "release" } else { "debug" };
    println!("▶ cargo build ({profile})");

    let release_flag = release.then_some("--release");
    cmd!(sh, "cargo build {release_flag...}").run()?;

    println!("✔ target/{profile}/{BIN}");
    Ok(())
}

fn test(sh: &Shell, integration: bool) -> Result<()> {
    if integration {
        println!("▶ integration tests");
        cmd!(sh, "cargo test --test integration_test").run()?;
    } else {
        println!("▶ workspace tests");
        cmd!(sh, "cargo test --workspace").run()?;
    }
    Ok(())
}

fn render(sh: &Shell, slug: &str, output: &str) -> Result<()> {
    let manifests = cmd!(
        sh,
        "cargo run --quiet --bin {BIN} -- generate --config {FIXTURE} --slug {slug} --output {output}"
    )
    .read()
    .with_context(|| format!("rendering {FIXTURE} failed"))?;

    println!("{manifests}");
    Ok(())
}

fn dist(sh: &Shell, target: Option<&str>) -> Result<()> {
    let target_args: Vec<&str> = target.map(|t| vec!["--target", t]).unwrap_or_default();
    cmd!(sh, "cargo build --release {target_args...}").run()?;

    let release_dir = match target {
        Some(triple) => format!("target/{triple}/release"),
        None => "target/release".to_string(),
    };

    let staging = workspace_root().join("dist");
    sh.create_dir(&staging)?;
    sh.copy_file(workspace_root().join(&release_dir).join(BIN), staging.join(BIN))?;

    let tarball = format!("{BIN}-{}.tar.gz", env!("CARGO_PKG_VERSION"));
    cmd!(sh, "tar -czf {tarball} -C dist {BIN}")
        .run()
        .with_context(|| format!("packing {tarball} failed"))?;

    println!("✔ {tarball}");
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    format(sh, true)?;
    clippy(sh)?;
    test(sh, false)?;

    println!("▶ fixture render");
    cmd!(
        sh,
        "cargo run --quiet --bin {BIN} -- generate --config {FIXTURE} --slug ci-preview"
    )
    .ignore_stdout()
    .run()
    .context("fixture no longer renders")?;

    println!("✔ ci");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    println!("▶ rustfmt");
    let check_args: &[&str] = if check { &["--", "--check"] } else { &[] };
    cmd!(sh, "cargo fmt --all {check_args...}").run()?;
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    println!("▶ clippy");
    cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
    Ok(())
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives one level below the workspace root")
        .to_path_buf()
}
