// Zoota Backend - Build Task Runner
// cargo xtask pattern: build, check and package the chat backend

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BINARY: &str = "zoota-backend";

fn main() -> Result<()> {
    let sh = Shell::new()?;
    let args: Vec<_> = std::env::args().skip(1).collect();

    match args.first().map(|s| s.as_str()) {
        Some("build") => build(&sh, args.iter().any(|a| a == "--release")),
        Some("test") => test(&sh),
        Some("format") => format(&sh, args.iter().any(|a| a == "--check")),
        Some("clippy") => clippy(&sh),
        Some("run") => run(&sh, &args[1..]),
        Some("clean") => clean(&sh),
        Some("ci") => ci(&sh),
        Some("dist") => dist(&sh),
        _ => {
            print_help();
            Ok(())
        }
    }
}

fn print_help() {
    println!("Zoota Backend - Build Commands:");
    println!();
    println!("Usage: cargo xtask <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  build [--release]   Build the backend (release also stages build/dist)");
    println!("  test                Run all tests");
    println!("  format [--check]    Format code (check mode doesn't modify)");
    println!("  clippy              Run clippy checks");
    println!("  run [ARGS...]       Run the backend, ARGS are passed through (e.g. --port 9000)");
    println!("  clean               Clean build artifacts");
    println!("  ci                  Run all CI checks (format + clippy + build + test)");
    println!("  dist                Create distribution package (tar.gz)");
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    println!("🦀 Building {}{}...", BINARY, if release { " (release)" } else { "" });
    let _dir = sh.push_dir(project_root());

    if release {
        cmd!(sh, "cargo build --release -p {BINARY}")
            .run()
            .context("Failed to build backend in release mode")?;
        stage_distribution(sh)?;
    } else {
        cmd!(sh, "cargo build -p {BINARY}").run().context("Failed to build backend")?;
    }

    println!("✅ Build complete");
    Ok(())
}

/// Lay out build/dist: bin, conf, migrations, data, logs
fn stage_distribution(sh: &Shell) -> Result<()> {
    let project = project_root();
    let dist_dir = project.join("build/dist");

    for sub in ["bin", "conf", "migrations", "data", "logs"] {
        sh.create_dir(dist_dir.join(sub))?;
    }

    let binary_src = project.join("target/release").join(BINARY);
    sh.copy_file(&binary_src, dist_dir.join("bin"))
        .with_context(|| format!("Missing release binary at {}", binary_src.display()))?;

    copy_dir_files(sh, &project.join("backend/migrations"), &dist_dir.join("migrations"))?;

    let sample_config = project.join("backend/conf/config.toml");
    if sample_config.exists() {
        sh.copy_file(&sample_config, dist_dir.join("conf"))?;
    }

    Ok(())
}

fn copy_dir_files(sh: &Shell, from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Ok(());
    }
    for entry in sh.read_dir(from)? {
        if entry.is_file() {
            sh.copy_file(&entry, to)?;
        }
    }
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    println!("🧪 Running tests...");
    let _dir = sh.push_dir(project_root());

    cmd!(sh, "cargo test --workspace").run().context("Tests failed")?;

    println!("✅ All tests passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    let _dir = sh.push_dir(project_root());

    if check {
        cmd!(sh, "cargo fmt --all -- --check").run().context("Rust code is not formatted")?;
        println!("✅ Rust code is properly formatted");
    } else {
        cmd!(sh, "cargo fmt --all").run().context("Failed to format Rust code")?;
        println!("✅ Rust code formatted");
    }

    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    let _dir = sh.push_dir(project_root());

    cmd!(sh, "cargo clippy --workspace --all-targets -- --deny warnings --allow clippy::uninlined-format-args")
        .run()
        .context("Clippy checks failed")?;

    Ok(())
}

fn run(sh: &Shell, args: &[String]) -> Result<()> {
    println!("▶️  Starting {}...", BINARY);
    let _dir = sh.push_dir(project_root().join("backend"));

    cmd!(sh, "cargo run -p {BINARY} -- {args...}").run().context("Failed to run application")?;

    Ok(())
}

fn clean(sh: &Shell) -> Result<()> {
    println!("🧹 Cleaning build artifacts...");
    let project = project_root();
    let _dir = sh.push_dir(&project);

    cmd!(sh, "cargo clean").run()?;

    let build_dir = project.join("build");
    if build_dir.exists() {
        sh.remove_path(&build_dir)?;
    }

    println!("✅ Clean complete!");
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    println!("🔄 Running CI pipeline...");

    println!("📝 [1/4] Checking code format...");
    format(sh, true)?;

    println!("🔍 [2/4] Running clippy checks...");
    clippy(sh)?;

    println!("🔨 [3/4] Building project...");
    build(sh, true)?;

    println!("🧪 [4/4] Running tests...");
    test(sh)?;

    println!("🎉 CI pipeline completed successfully!");
    Ok(())
}

fn dist(sh: &Shell) -> Result<()> {
    println!("📦 Creating distribution package...");
    build(sh, true)?;

    let dist_dir = project_root().join("build/dist");
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let package_name = format!("{}-{}.tar.gz", BINARY, timestamp);
    let package_path = dist_dir.join(&package_name);

    let _dir = sh.push_dir(&dist_dir);
    cmd!(sh, "tar czf {package_name} bin conf migrations data logs")
        .run()
        .context("Failed to create tarball")?;

    println!("✅ Distribution package created!");
    println!("   Location: {}", package_path.display());
    println!("   Size: {} KB", std::fs::metadata(&package_path)?.len() / 1024);
    println!("   Start with: ./bin/{} --config conf/config.toml", BINARY);

    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
