//! Shared helpers for integration tests
#![allow(dead_code)]

use pattern_scout::catalog::{Fetch, RemoteRepository};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const RAW_BASE: &str = "https://raw.test";

pub fn test_repo(branch: &str) -> RemoteRepository {
    RemoteRepository::new(RAW_BASE, branch)
}

/// In-memory remote: URL -> body, every request recorded
#[derive(Default)]
pub struct MockFetcher {
    bodies: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&mut self, url: impl Into<String>, body: impl Into<String>) -> &mut Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    pub fn serve_json(&mut self, url: impl Into<String>, body: &Value) -> &mut Self {
        self.serve(url, body.to_string())
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for MockFetcher {
    fn fetch_text(&self, url: &str) -> Option<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies.get(url).cloned()
    }
}

/// Three manifest entries: two canonical categories and one custom one
pub fn sample_manifest() -> Value {
    json!([
        {
            "id": "reflection",
            "title": "Reflection",
            "category": "Feedback Loops",
            "summary": {"en": "Self-critique loop", "ko": "자기 비평 루프"},
            "status": "established",
            "tags": ["reasoning", "quality"]
        },
        {
            "id": "tool-router",
            "title": "Tool Router",
            "category": "Tool Use & Environment",
            "summary": "Route calls to tools",
            "status": "emerging",
            "tags": ["tools"]
        },
        {
            "id": "guild",
            "title": "Guild Pattern",
            "category": "Experimental Lab",
            "status": "experimental",
            "tags": []
        }
    ])
}

/// Full detail document for a manifest entry
pub fn sample_detail(id: &str) -> Value {
    match id {
        "reflection" => json!({
            "id": "reflection",
            "title": "Reflection",
            "category": "Feedback Loops",
            "summary": {"en": "Self-critique loop", "ko": "자기 비평 루프"},
            "status": "established",
            "tags": ["reasoning", "quality"],
            "problem": {"en": "First drafts contain mistakes.", "ko": "초안에는 실수가 있다."},
            "solution": {"en": "Critique and revise.", "ko": "비평하고 수정한다."},
            "when_to_use": {"en": ["Quality matters"], "ko": ["품질이 중요할 때"]},
            "pros": {"en": ["Better answers"]},
            "cons": {"en": ["More tokens"]}
        }),
        "tool-router" => json!({
            "id": "tool-router",
            "title": "Tool Router",
            "category": "Tool Use & Environment",
            "summary": "Route calls to tools",
            "status": "emerging",
            "tags": ["tools"],
            "problem": "Too many tools.",
            "solution": "Pick one per request."
        }),
        other => json!({"id": other}),
    }
}

/// Mock serving the manifest, SKILL.md and every detail but `guild`
pub fn sample_remote(branch: &str) -> MockFetcher {
    let repo = test_repo(branch);
    let mut fetcher = MockFetcher::new();
    fetcher
        .serve_json(repo.manifest_url(), &sample_manifest())
        .serve(repo.skill_md_url(), "# Pattern Scout\n")
        .serve_json(repo.pattern_url("reflection"), &sample_detail("reflection"))
        .serve_json(repo.pattern_url("tool-router"), &sample_detail("tool-router"));
    fetcher
}
