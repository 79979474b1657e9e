use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dynamic_array::DynamicArray;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sort_words")]
#[command(version, about = "Sort words with a DynamicArray", long_about = None)]
struct Cli {
    /// Words to sort
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Read whitespace-separated words from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "words")]
    file: Option<PathBuf>,

    /// Initial capacity of the array
    #[arg(short, long)]
    capacity: Option<i32>,

    /// Compare words byte for byte instead of ignoring case
    #[arg(long)]
    case_sensitive: bool,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = match &cli.file {
        Some(path) => read_words(path)?,
        None => cli.words.clone(),
    };
    if words.is_empty() {
        return Err(anyhow!("Nothing to sort: pass words or --file"));
    }

    let mut arr = match cli.capacity {
        Some(capacity) => DynamicArray::with_capacity(capacity)
            .with_context(|| format!("Invalid --capacity {}", capacity))?,
        None => DynamicArray::new(),
    };
    if cli.verbose > 0 {
        println!("Starting with capacity {}", arr.capacity());
    }

    for word in words {
        let before = arr.capacity();
        if cli.verbose > 1 {
            println!("Appending {:?}", word);
        }
        arr.append(word);
        if cli.verbose > 0 && arr.capacity() != before {
            println!("Grew from {} to {} at size {}", before, arr.capacity(), arr.size());
        }
    }

    if cli.case_sensitive {
        arr.sort(|a, b| a.cmp(b));
    } else {
        arr.sort(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    }

    arr.trim_to_size();
    if cli.verbose > 0 {
        println!("Trimmed to capacity {}", arr.capacity());
    }

    for i in 0..arr.size() as i32 {
        println!("{}", arr.get(i)?);
    }

    Ok(())
}

fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
