use clap::Parser;

#[derive(Parser)]
#[command(
    name = "storylint",
    about = "Validate and optionally sanitize scene ids and text in story JSON",
    version
)]
pub struct Cli {
    /// Path to the story JSON (a top-level array of scenes)
    pub file: String,

    /// Rewrite non-conforming ids and write a sanitized copy (see --mode)
    #[arg(long)]
    pub sanitize: bool,

    /// Fold fancy Unicode punctuation in prompts and labels to ASCII
    #[arg(long)]
    pub sanitize_text: bool,

    /// Output path for the sanitized copy (defaults to <input>.sanitized.json)
    #[arg(long)]
    pub out: Option<String>,

    /// How to rewrite disallowed id characters: underscore or remove
    #[arg(long, default_value = "underscore")]
    pub mode: String,

    /// Show offending characters with Unicode code points and names
    #[arg(long)]
    pub details: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
