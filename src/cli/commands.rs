//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;

use crate::core::config::TranslatorConfig;

/// Commands for the Pig Latin translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a phrase given on the command line
    Phrase {
        /// Words of the phrase, joined with single spaces
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Translate text files
    File {
        /// Input file or directory (required)
        #[arg(short, long)]
        file: PathBuf,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Recursively translate subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Start HTTP API server
    Server {
        /// Bind address (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Handle phrase translation command
pub fn handle_phrase(words: Vec<String>) -> anyhow::Result<()> {
    let phrase = words.join(" ");
    let translation = crate::core::translator::translate(&phrase)?;
    println!("{}", translation);
    Ok(())
}

/// Handle text file translation command
pub async fn handle_file(
    config: TranslatorConfig,
    file: PathBuf,
    output: Option<PathBuf>,
    recursive: bool,
) -> anyhow::Result<()> {
    use crate::processors::text::TextProcessor;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;
    use tracing::info;

    let start_time = Instant::now();
    let processor = TextProcessor::new(config);

    // Determine output path
    let output = output.unwrap_or_else(|| {
        if file.is_dir() {
            file.join("translated")
        } else {
            processor.default_output_path(&file)
        }
    });

    info!("Starting text translation");
    info!("Input: {}", file.display());
    info!("Output: {}", output.display());
    info!("Recursive: {}", recursive);

    // Find files, pairing each with its output path
    let jobs: Vec<(PathBuf, PathBuf)> = if file.is_dir() {
        let files = if recursive {
            processor.find_files_recursive(&file)?
        } else {
            processor.find_files(&file)?
        };
        files
            .into_iter()
            // Skip earlier results when the output lives inside the input tree
            .filter(|path| !path.starts_with(&output))
            .map(|path| {
                let target = processor.mirrored_output_path(&path, &file, &output);
                (path, target)
            })
            .collect()
    } else {
        vec![(file.clone(), output.clone())]
    };

    if jobs.is_empty() {
        anyhow::bail!(
            "No files with extensions {:?} found",
            processor.config().file_extensions
        );
    }

    // Create progress bar
    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
        .progress_chars("=>-"));

    // Process files
    let mut processed = 0;
    let mut failed = 0;
    let mut words = 0;

    for (input, target) in jobs {
        pb.set_message(format!("Processing: {}", input.display()));

        match processor.translate_file(&input, &target).await {
            Ok(result) => {
                processed += 1;
                words += result.words_translated;
                pb.inc(1);
            }
            Err(e) => {
                failed += 1;
                pb.set_message(format!("Failed: {} - {}", input.display(), e));
                eprintln!("Error processing {}: {}", input.display(), e);
            }
        }
    }

    pb.finish_with_message("Completed");

    let duration = start_time.elapsed();
    info!(
        "Completed: {} processed, {} failed, {} words in {:?}",
        processed, failed, words, duration
    );

    println!("\n✅ Translation completed!");
    println!("   Processed: {}", processed);
    println!("   Failed: {}", failed);
    println!("   Words: {}", words);
    println!("   Time: {:?}", duration);

    Ok(())
}

/// Handle server command
pub async fn handle_server(
    config: TranslatorConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;
    use tracing::info;

    let host = host.unwrap_or_else(|| config.host.clone());
    let port = port.unwrap_or(config.port);

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);

    run_server(host, port).await?;

    Ok(())
}
