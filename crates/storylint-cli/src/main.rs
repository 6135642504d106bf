//! Storylint CLI: the `storylint` command.
//!
//! The validation scan always runs and always reports. Id sanitization and
//! text normalization are independently triggerable; an output file is
//! written only when at least one of them was requested.

mod cli;
mod report;

use std::path::PathBuf;

use clap::Parser;
use storylint_core::{
    RenameMap, apply_rename, build_rename_map, default_output_path, emptied_ids, normalize_story,
    rename_collisions, scan_story,
};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let mode = report::parse_mode_or_exit(&cli.mode);
    let mut scenes = report::load_story_or_exit(&cli.file);

    let issues = scan_story(&scenes);
    if !cli.json {
        report::print_scan(&issues, cli.details);
    }

    let mut mapping = RenameMap::new();
    if cli.sanitize {
        mapping = build_rename_map(&scenes, mode);
        apply_rename(&mut scenes, &mapping);
    }
    if cli.sanitize_text {
        normalize_story(&mut scenes);
    }
    let collisions = rename_collisions(&mapping);
    let emptied = emptied_ids(&mapping);

    let out_path = (cli.sanitize || cli.sanitize_text).then(|| {
        cli.out
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| default_output_path(&cli.file))
    });
    if let Some(path) = &out_path {
        report::write_story_or_exit(path, &scenes);
    }

    if cli.json {
        report::print_json(
            &cli.file,
            mode,
            &issues,
            cli.sanitize,
            cli.sanitize_text,
            &mapping,
            &collisions,
            &emptied,
            out_path.as_ref(),
        );
    } else if let Some(path) = &out_path {
        report::print_rewrite(cli.sanitize, &mapping, &collisions, &emptied, path);
    }
}
