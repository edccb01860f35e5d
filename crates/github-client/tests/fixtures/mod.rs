//! Recorded-style payloads for the `google` organization, served by the mock HTTP server.
//!
//! URLs are rebased onto the mock server so the client follows `repos_url` back to it.

use serde_json::{json, Value};

/// Organization payload for `google` with every URL rooted at `base`.
pub fn org_payload(base: &str) -> Value {
    json!({
        "login": "google",
        "id": 1342004,
        "url": format!("{}/orgs/google", base),
        "repos_url": format!("{}/orgs/google/repos", base),
        "events_url": format!("{}/orgs/google/events", base),
        "hooks_url": format!("{}/orgs/google/hooks", base),
        "issues_url": format!("{}/orgs/google/issues", base),
        "members_url": format!("{}/orgs/google/members{{/member}}", base),
        "public_members_url": format!("{}/orgs/google/public_members{{/member}}", base),
        "avatar_url": "https://avatars1.githubusercontent.com/u/1342004?v=4",
        "description": "Google ❤️ Open Source"
    })
}

fn repo(id: u64, name: &str, license: Option<(&str, &str)>) -> Value {
    let license = match license {
        Some((key, spdx_id)) => json!({
            "key": key,
            "name": spdx_id,
            "spdx_id": spdx_id,
            "url": format!("https://api.github.com/licenses/{}", key),
        }),
        None => Value::Null,
    };
    json!({
        "id": id,
        "name": name,
        "full_name": format!("google/{}", name),
        "private": false,
        "owner": {"login": "google", "id": 1342004, "type": "Organization"},
        "html_url": format!("https://github.com/google/{}", name),
        "fork": false,
        "license": license,
        "forks": 0,
        "default_branch": "master"
    })
}

/// Repository listing for `google`.
pub fn repos_payload() -> Value {
    let apache = Some(("apache-2.0", "Apache-2.0"));
    Value::Array(vec![
        repo(7697149, "episodes.dart", None),
        repo(7776515, "cpp-netlib", Some(("bsl-1.0", "BSL-1.0"))),
        repo(7968417, "dagger", apache),
        repo(8165161, "ios-webkit-debug-proxy", Some(("other", "NOASSERTION"))),
        repo(8459994, "google.github.io", None),
        repo(8566972, "kratu", apache),
        repo(8858648, "build-debian-cloud", Some(("other", "NOASSERTION"))),
        repo(9060347, "traceur-compiler", apache),
        repo(9065917, "firmata.py", apache),
    ])
}

pub fn expected_repos() -> Vec<&'static str> {
    vec![
        "episodes.dart",
        "cpp-netlib",
        "dagger",
        "ios-webkit-debug-proxy",
        "google.github.io",
        "kratu",
        "build-debian-cloud",
        "traceur-compiler",
        "firmata.py",
    ]
}

pub fn apache2_repos() -> Vec<&'static str> {
    vec!["dagger", "kratu", "traceur-compiler", "firmata.py"]
}
