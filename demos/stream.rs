//! Streaming chat completion against the Venice.ai API.
//!
//! ```bash
//! export VENICE_API_KEY=your-api-key-here
//! cargo run --example stream
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{Write, stdout};

use futures::StreamExt;
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
        eprintln!();
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(client: &Venice) -> Result<()> {
    println!("Testing Venice.ai streaming chat completion...\n");

    let request = ChatRequest::new(client.model())
        .user("Tell me a very short joke about AI.")
        .temperature(0.8);

    let mut stream = client.chat_stream(&request).await?;
    let mut content = String::new();

    print!("AI: ");
    stdout().flush()?;

    while let Some(event) = stream.next().await {
        match event? {
            StreamEvent::Text(text) => {
                print!("{text}");
                stdout().flush()?;
                content.push_str(&text);
            }
            StreamEvent::Done => break,
        }
    }
    println!();

    println!();
    println!("Streaming completed ({} characters).", content.len());

    Ok(())
}
