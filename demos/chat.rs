//! Non-streaming chat completion against the Venice.ai API.
//!
//! ```bash
//! export VENICE_API_KEY=your-api-key-here
//! cargo run --example chat
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use venice::prelude::*;

#[tokio::main]
async fn main() {
    let client = Venice::from_env().unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        eprintln!();
        eprintln!("Please set your API key:");
        eprintln!("  export VENICE_API_KEY=your-api-key-here");
        std::process::exit(1);
    });

    if let Err(err) = run(&client).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(client: &Venice) -> Result<()> {
    println!("Testing Venice.ai chat completion...\n");

    let request = ChatRequest::new(client.model())
        .user("Hello! Say \"Venice API is working!\" if you can hear me.")
        .temperature(0.7)
        .max_completion_tokens(100);

    let response = client.chat(&request).await?;

    println!("Model: {}", response.model);
    println!("Content: {}", response.text().unwrap_or_default());

    if let Some(usage) = response.usage {
        println!();
        println!("Usage:");
        println!("  Prompt tokens: {}", usage.prompt_tokens);
        println!("  Completion tokens: {}", usage.completion_tokens);
        println!("  Total tokens: {}", usage.total_tokens);
    }

    Ok(())
}
