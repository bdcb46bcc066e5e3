use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use spriteforge::manifest::Manifest;
use spriteforge::output::{self, write_sprite};
use spriteforge::{DEFAULT_OUT_ROOT, sprites};

/// Generate the full sprite set as standalone PNG files.
#[derive(Debug, Parser)]
#[command(name = "spriteforge", version, about)]
struct Args {
    /// Root directory for the generated sprite tree.
    #[arg(default_value = DEFAULT_OUT_ROOT)]
    out_root: PathBuf,

    /// Suppress per-file progress lines.
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let groups = sprites::groups();
    let manifest = Manifest::from_groups(&groups);

    let mut written = 0usize;
    let mut failed = 0usize;

    for (folder, group) in &groups {
        if !args.quiet {
            println!("{folder}:");
        }
        let dir = args.out_root.join(folder);
        for sprite in group {
            match write_sprite(&dir, sprite) {
                Ok(path) => {
                    written += 1;
                    if !args.quiet {
                        println!("  ✓ {}", path.display());
                    }
                }
                Err(e) => {
                    // One bad sprite must not sink the rest of the batch.
                    failed += 1;
                    eprintln!("output: failed to write '{}': {e}", sprite.name);
                }
            }
        }
    }

    let manifest_path = args.out_root.join("manifest.json");
    match manifest.to_json() {
        Ok(json) => {
            if let Err(e) = std::fs::write(&manifest_path, json) {
                failed += 1;
                eprintln!("output: failed to write {}: {e}", manifest_path.display());
            } else if !args.quiet {
                println!("  ✓ {}", manifest_path.display());
            }
        }
        Err(e) => {
            failed += 1;
            eprintln!("output: manifest serialization failed: {e}");
        }
    }

    let report = output::verify_tree(&args.out_root, &manifest);
    for path in &report.missing {
        eprintln!("output: missing from disk: {}", path.display());
    }
    for path in &report.strays {
        eprintln!("output: stray file not in manifest: {}", path.display());
    }

    println!("{written} sprites written, {failed} failed");
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
