//! Canned upstream payloads shaped like real GitHub REST responses.
//!
//! Each builder returns the minimal-but-realistic JSON a pipeline needs;
//! tests tweak individual fields with `value["field"] = ...` as required.

use serde_json::{Value, json};

/// Account reference as embedded in issues, pulls, and repositories
pub fn user(login: &str) -> Value {
  json!({
    "login": login,
    "id": 1,
    "html_url": format!("https://github.com/{login}"),
    "avatar_url": format!("https://avatars.githubusercontent.com/{login}"),
    "type": "User"
  })
}

/// `GET /repos/{owner}/{repo}` payload without a license block
pub fn repository(full_name: &str, stars: u64) -> Value {
  let (owner, name) = full_name.split_once('/').unwrap_or((full_name, full_name));
  json!({
    "id": 1296269,
    "name": name,
    "full_name": full_name,
    "owner": user(owner),
    "description": "This your first repo!",
    "html_url": format!("https://github.com/{full_name}"),
    "created_at": "2011-01-26T19:01:12Z",
    "updated_at": "2011-01-26T19:14:43Z",
    "language": "Rust",
    "stargazers_count": stars,
    "watchers_count": stars,
    "forks_count": 9,
    "open_issues_count": 2,
    "size": 108,
    "has_wiki": true,
    "has_pages": false,
    "has_issues": true,
    "has_projects": true,
    "has_downloads": true,
    "license": null,
    "default_branch": "main",
    "topics": ["octocat", "atom", "electron", "api", "rust", "extra"],
    "fork": false,
    "archived": false,
    "visibility": "public"
  })
}

/// Issue entry from `GET /repos/{owner}/{repo}/issues`
pub fn issue(number: u64, title: &str) -> Value {
  json!({
    "number": number,
    "title": title,
    "state": "open",
    "user": user("reporter"),
    "body": "Steps to reproduce",
    "labels": [{ "name": "bug" }],
    "assignees": [],
    "milestone": null,
    "comments": 3,
    "created_at": "2024-01-01T00:00:00Z",
    "updated_at": "2024-01-02T00:00:00Z",
    "closed_at": null,
    "html_url": format!("https://github.com/octocat/Hello-World/issues/{number}"),
    "repository_url": "https://api.github.com/repos/octocat/Hello-World"
  })
}

/// Pull request as it appears interleaved in the issues endpoint
pub fn pull_request_issue(number: u64, title: &str) -> Value {
  let mut value = issue(number, title);
  value["pull_request"] = json!({
    "url": format!("https://api.github.com/repos/octocat/Hello-World/pulls/{number}")
  });
  value
}

/// `GET /repos/{owner}/{repo}/pulls/{number}` payload
pub fn pull_request(number: u64, title: &str) -> Value {
  json!({
    "number": number,
    "title": title,
    "state": "open",
    "user": user("contributor"),
    "body": "Adds the feature",
    "draft": false,
    "merged": false,
    "mergeable": true,
    "head": { "label": "octocat:feature", "ref": "feature", "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" },
    "base": { "label": "octocat:main", "ref": "main", "sha": "e5bd3914e2e596debea16f433f57875b5b90bcd6" },
    "commits": 3,
    "additions": 100,
    "deletions": 3,
    "changed_files": 5,
    "comments": 10,
    "review_comments": 0,
    "created_at": "2024-01-01T00:00:00Z",
    "updated_at": "2024-01-02T00:00:00Z",
    "merged_at": null,
    "closed_at": null,
    "html_url": format!("https://github.com/octocat/Hello-World/pull/{number}")
  })
}

/// Commit entry from the commits endpoints
pub fn commit(sha: &str, message: &str) -> Value {
  json!({
    "sha": sha,
    "html_url": format!("https://github.com/octocat/Hello-World/commit/{sha}"),
    "commit": {
      "message": message,
      "author": { "name": "Monalisa Octocat", "email": "mona@github.com", "date": "2024-01-01T00:00:00Z" },
      "committer": { "name": "GitHub", "email": "noreply@github.com", "date": "2024-01-01T00:00:00Z" }
    },
    "author": user("monalisa")
  })
}

/// Release entry from the releases endpoints
pub fn release(tag: &str) -> Value {
  json!({
    "tag_name": tag,
    "name": format!("Release {tag}"),
    "author": user("releaser"),
    "draft": false,
    "prerelease": false,
    "created_at": "2024-01-01T00:00:00Z",
    "published_at": "2024-01-01T00:00:00Z",
    "body": "Changelog",
    "assets": [
      {
        "name": "binary.tar.gz",
        "size": 1024,
        "download_count": 42,
        "content_type": "application/gzip",
        "browser_download_url": format!("https://github.com/octocat/Hello-World/releases/download/{tag}/binary.tar.gz")
      }
    ],
    "html_url": format!("https://github.com/octocat/Hello-World/releases/tag/{tag}")
  })
}

/// Search envelope around `items`
pub fn search(total_count: u64, items: Vec<Value>) -> Value {
  json!({
    "total_count": total_count,
    "incomplete_results": false,
    "items": items
  })
}
