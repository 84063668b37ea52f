use std::{path::Path, time::Duration};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use color_eyre::{Result, eyre::bail};
use log::debug;
use tokio::time::sleep;

use crate::{
    cli::{Cli, ConfigError},
    gemini::{Gemini, gemini_api::GenerateResponse},
    prompts::{IMAGE_PROMPTS, ImagePrompt},
};

/// Pause between consecutive requests to space out API calls
const REQUEST_DELAY: Duration = Duration::from_secs(2);

pub async fn run(cli: Cli) -> Result<()> {
    if cli.list {
        print_available_images();
        return Ok(());
    }

    // Everything that can fail without a network round trip is checked first
    let api_key = cli.resolve_api_key()?;
    let prompts = select_prompts(cli.single.as_deref())?;
    std::fs::create_dir_all(&cli.out_dir)?;

    println!("Output directory: {}", cli.out_dir.display());
    println!("Images to generate: {}\n", prompts.len());

    let gemini = Gemini::new(api_key);
    let mut successes = 0;

    for (i, prompt) in prompts.iter().copied().enumerate() {
        println!("Generating: {}", prompt.filename);
        println!("  Prompt: \"{}\"", prompt.summary());

        match generate_one(&gemini, prompt, &cli.out_dir).await {
            Ok(true) => successes += 1,
            Ok(false) => println!("  No image data in response"),
            Err(err) => println!("  Error: {err:#}"),
        }

        if i + 1 < prompts.len() {
            debug!("Waiting {REQUEST_DELAY:?} before the next request");
            sleep(REQUEST_DELAY).await;
        }
    }

    println!("\nGenerated {successes}/{} images", prompts.len());
    if successes < prompts.len() {
        bail!("{} image(s) failed to generate", prompts.len() - successes);
    }
    Ok(())
}

fn print_available_images() {
    println!("Available images:");
    for prompt in IMAGE_PROMPTS {
        println!("  - {}", prompt.filename);
        println!("    {}", prompt.summary());
    }
}

/// The full list, or just the entry named by `--single`
fn select_prompts(single: Option<&str>) -> Result<Vec<&'static ImagePrompt>, ConfigError> {
    match single {
        None => Ok(IMAGE_PROMPTS.iter().collect()),
        Some(name) => match crate::prompts::find(name) {
            Some(prompt) => Ok(vec![prompt]),
            None => Err(ConfigError::UnknownFilename {
                name: name.to_string(),
                available: IMAGE_PROMPTS
                    .iter()
                    .map(|p| format!("  - {}", p.filename))
                    .collect::<Vec<_>>()
                    .join("\n"),
            }),
        },
    }
}

async fn generate_one(gemini: &Gemini, prompt: &ImagePrompt, out_dir: &Path) -> Result<bool> {
    let response = gemini.generate_image(prompt.prompt).await?;
    save_first_image(&response, &out_dir.join(prompt.filename))
}

/// Walks the response parts in order. Text parts are logged, the first part
/// carrying image data is written to `path` and ends the walk; later parts are
/// ignored. Returns whether an image was written.
fn save_first_image(response: &GenerateResponse, path: &Path) -> Result<bool> {
    for part in response.parts() {
        if let Some(text) = &part.text {
            let preview: String = text.chars().take(100).collect();
            println!("  Model response: {preview}...");
        }

        if let Some(inline) = &part.inline_data {
            let bytes = STANDARD.decode(&inline.data)?;
            std::fs::write(path, &bytes)?;
            println!(
                "  Saved: {} ({}, {} bytes)",
                path.display(),
                inline.mime_type,
                bytes.len()
            );
            return Ok(true);
        }
    }

    Ok(false)
}
