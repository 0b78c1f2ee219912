mod cli;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use plaudit::types::Testimonial;
use plaudit::TestimonialSet;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Validate { file } => {
            let set = open(file)?;
            println!(
                "ok: {} testimonials, template {}",
                set.len(),
                set.template()
            );
        }
        Commands::List {
            file,
            category,
            featured,
            video,
            text_only,
            rated,
            long_form,
            short_form,
            json,
        } => {
            let set = open(file)?;
            let mut items: Vec<&Testimonial> = set.items().iter().collect();
            if let Some(cat) = &category {
                items.retain(|t| t.category.as_deref() == Some(cat.as_str()));
            }
            if featured {
                items.retain(|t| t.featured);
            }
            if video {
                items.retain(|t| t.has_video());
            }
            if text_only {
                items.retain(|t| !t.has_video());
            }
            if rated {
                items.retain(|t| t.has_rating());
            }
            if long_form {
                items.retain(|t| t.is_long_form());
            }
            if short_form {
                items.retain(|t| !t.is_long_form());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for t in items {
                    println!("{}: {} ({}){}", t.id, t.name, t.job, tags(t));
                }
            }
        }
        Commands::Stats { file, json } => {
            let set = open(file)?;
            let stats = set.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("total:       {}", stats.total);
                println!("featured:    {}", stats.featured);
                println!("with video:  {}", stats.with_video);
                println!("text only:   {}", stats.text_only);
                println!("with rating: {}", stats.with_rating);
                println!("long form:   {}", stats.long_form);
                println!("short form:  {}", stats.short_form);
                let categories = set.categories();
                if categories.is_empty() {
                    println!("categories:  none");
                } else {
                    println!("categories:  {}", categories.join(", "));
                }
            }
        }
    }
    Ok(())
}

// Resolve the preset source: explicit path, then PLAUDIT_PRESET, then the
// bundled data.
fn open(file: Option<PathBuf>) -> Result<TestimonialSet> {
    let file = file.or_else(|| std::env::var("PLAUDIT_PRESET").ok().map(PathBuf::from));
    match file {
        Some(path) => TestimonialSet::load(path),
        None => TestimonialSet::bundled(),
    }
}

fn tags(t: &Testimonial) -> String {
    let mut tags = Vec::new();
    if let Some(rating) = t.rating {
        tags.push(format!("{rating}/5"));
    }
    if t.featured {
        tags.push("featured".to_string());
    }
    if let Some(video) = &t.video {
        tags.push(format!("video:{}", video.orientation));
    }
    if let Some(category) = &t.category {
        tags.push(format!("category:{category}"));
    }
    if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    }
}
