use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;

mod github_client;
mod models;
mod recon;

use github_client::GithubClient;

const BANNER: &str = r#"
          _  _
    __ _ (_)| |_  _ _  ___  __  ___  _ _
   / _` || ||  _|| '_|/ -_)/ _|/ _ \| ' \
   \__, ||_| \__||_|  \___|\__|\___/|_||_|
   |___/
"#;

/// One line of operator input.
enum Command {
    Exit,
    Recon(String),
}

/// The first whitespace-delimited token decides the command; `exit` quits.
/// Anything else, even an empty token, is taken as a username verbatim.
fn parse_command(line: &str) -> Command {
    let token = line.split_whitespace().next().unwrap_or("");
    if token == "exit" {
        Command::Exit
    } else {
        Command::Recon(token.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let api_url = env::var("GITRECON_API_URL")
        .unwrap_or_else(|_| github_client::DEFAULT_API_URL.to_string());
    let client = GithubClient::new(api_url)?;

    println!("{}", BANNER);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter GitHub username (or 'exit' to quit): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // End of input quits like the sentinel.
            None => break,
        };

        match parse_command(&line) {
            Command::Exit => break,
            Command::Recon(username) => {
                if let Err(e) = recon::run(&client, &username).await {
                    eprintln!("An error occurred: {}", e);
                }
            }
        }
    }

    Ok(())
}
