use serde::Deserialize;

/// One entry in a user's public activity feed (`/users/{username}/events`).
///
/// Only push-style events carry `payload.commits`; every other event type
/// deserializes with those fields absent and contributes no emails.
#[derive(Deserialize, Debug, Clone)]
pub struct Event {
    #[serde(default)]
    pub payload: Option<Payload>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Payload {
    #[serde(default)]
    pub commits: Option<Vec<Commit>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Commit {
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommitAuthor {
    #[serde(default)]
    pub email: Option<String>,
}

/// Public profile from `/users/{username}`.
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Org {
    pub login: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PublicKey {
    pub id: u64,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_deserializes() {
        let body = r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "email": null,
            "location": "San Francisco",
            "created_at": "2011-01-25T18:44:36Z",
            "followers": 9999,
            "following": 9
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.name.as_deref(), Some("The Octocat"));
        assert!(user.email.is_none());
        assert_eq!(user.followers, 9999);
    }

    #[test]
    fn org_and_key_lists_deserialize() {
        let orgs: Vec<Org> =
            serde_json::from_str(r#"[{"login": "rust-lang"}, {"login": "tokio-rs"}]"#).unwrap();
        assert_eq!(orgs.len(), 2);
        assert_eq!(orgs[0].login, "rust-lang");

        let keys: Vec<PublicKey> =
            serde_json::from_str(r#"[{"id": 42, "key": "ssh-ed25519 AAAAC3Nza"}]"#).unwrap();
        assert_eq!(keys[0].id, 42);
        assert!(keys[0].key.starts_with("ssh-ed25519"));
    }

    #[test]
    fn non_push_event_has_no_commits() {
        let body = r#"{"type": "WatchEvent", "payload": {"action": "started"}}"#;
        let event: Event = serde_json::from_str(body).unwrap();
        assert!(event.payload.unwrap().commits.is_none());
    }
}
