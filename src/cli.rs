use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI for validating and inspecting testimonial presets
#[derive(Parser)]
#[command(name = "plaudit")]
#[command(about = "A CLI tool for validating and inspecting testimonial presets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a preset file and report the first defect, if any
    Validate {
        /// Preset file (falls back to PLAUDIT_PRESET, then the bundled preset)
        file: Option<PathBuf>,
    },
    /// List testimonials, optionally filtered
    List {
        /// Preset file (falls back to PLAUDIT_PRESET, then the bundled preset)
        file: Option<PathBuf>,
        /// Keep only records in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
        /// Keep only featured records
        #[arg(long)]
        featured: bool,
        /// Keep only records with a video
        #[arg(long, conflicts_with = "text_only")]
        video: bool,
        /// Keep only records without a video
        #[arg(long)]
        text_only: bool,
        /// Keep only records with a star rating
        #[arg(long)]
        rated: bool,
        /// Keep only long-form quotes (over 300 characters)
        #[arg(long, conflicts_with = "short_form")]
        long_form: bool,
        /// Keep only short-form quotes
        #[arg(long)]
        short_form: bool,
        /// Emit JSON instead of a human-readable listing
        #[arg(long)]
        json: bool,
    },
    /// Print collection statistics
    Stats {
        /// Preset file (falls back to PLAUDIT_PRESET, then the bundled preset)
        file: Option<PathBuf>,
        /// Emit JSON instead of a human-readable listing
        #[arg(long)]
        json: bool,
    },
}
