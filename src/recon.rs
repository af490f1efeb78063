use crate::github_client::GithubClient;
use crate::models::Event;
use anyhow::{Context, Result};
use log::info;
use std::collections::BTreeSet;

/// One reconnaissance pass over a single username.
///
/// Profile, organizations, and public keys are best-effort sections: a
/// failure there is warned on stderr and the pass moves on. The activity
/// feed is the core step; its error aborts the pass and is reported by
/// the caller.
pub async fn run(client: &GithubClient, username: &str) -> Result<()> {
    info!("Running reconnaissance on {}", username);

    match client.get_user(username).await {
        Ok(user) => {
            let name = user.name.as_deref().unwrap_or("No name");
            println!("Found GitHub user: {} ({})", user.login, name);
            println!("Profile: https://github.com/{}", user.login);
            if let Some(created_at) = &user.created_at {
                println!("Created: {}", created_at);
            }
            if let Some(location) = &user.location {
                println!("Location: {}", location);
            }
            if let Some(email) = &user.email {
                println!("Public email: {}", email);
            }
            println!(
                "Followers: {}, following: {}",
                user.followers, user.following
            );
        }
        Err(e) => eprintln!("Error fetching profile for {}: {}", username, e),
    }

    match client.get_user_orgs(username).await {
        Ok(orgs) if orgs.is_empty() => println!("No organizations found"),
        Ok(orgs) => {
            let logins: Vec<&str> = orgs.iter().map(|o| o.login.as_str()).collect();
            println!("Found {} organizations: {}", logins.len(), logins.join(", "));
        }
        Err(e) => eprintln!("Error fetching organizations for {}: {}", username, e),
    }

    match client.get_user_keys(username).await {
        Ok(keys) if keys.is_empty() => println!("No public SSH keys found"),
        Ok(keys) => {
            println!("Found {} public SSH keys", keys.len());
            for key in &keys {
                println!("Key #{}: {}...", key.id, key_prefix(&key.key));
            }
        }
        Err(e) => eprintln!("Error fetching public keys for {}: {}", username, e),
    }

    let body = client.user_events_raw(username).await?;
    let emails = emails_from_feed(&body)?;
    for email in &emails {
        println!("{}", email);
    }
    Ok(())
}

fn key_prefix(key: &str) -> &str {
    key.get(..40).unwrap_or(key)
}

/// Parses an activity-feed body and returns the unique commit-author
/// emails in ascending lexicographic order.
///
/// The feed endpoint serves a JSON error object for unknown users and
/// rate-limited callers; that body surfaces here as a parse error.
pub fn emails_from_feed(body: &str) -> Result<Vec<String>> {
    let events: Vec<Event> =
        serde_json::from_str(body).context("Unexpected activity feed response")?;
    Ok(extract_emails(&events))
}

/// Only the first commit of each event's `commits` list is consulted.
/// Events without pushed commits, and commits without an author email,
/// contribute nothing.
fn extract_emails(events: &[Event]) -> Vec<String> {
    let mut emails = BTreeSet::new();
    for event in events {
        let first_commit = event
            .payload
            .as_ref()
            .and_then(|payload| payload.commits.as_ref())
            .and_then(|commits| commits.first());
        if let Some(commit) = first_commit {
            if let Some(email) = commit.author.as_ref().and_then(|a| a.email.as_ref()) {
                emails.insert(email.clone());
            }
        }
    }
    emails.into_iter().collect()
}
