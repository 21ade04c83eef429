use crate::core::{Category, Demo, Result, Transcript};
use crate::utils::error::PatternError;
use std::collections::HashSet;

pub trait Internet {
    fn connect(&self, host: &str) -> Result<String>;
}

/// The real subject connects to anything it is asked for.
pub struct DirectInternet;

impl Internet for DirectInternet {
    fn connect(&self, host: &str) -> Result<String> {
        Ok(format!("Connecting to {}", host))
    }
}

/// Protection proxy: consults the deny list before delegating.
pub struct FilteringProxy {
    inner: DirectInternet,
    banned: HashSet<String>,
}

impl FilteringProxy {
    pub fn new(banned: &[&str]) -> Self {
        Self {
            inner: DirectInternet,
            banned: banned.iter().map(|h| h.to_lowercase()).collect(),
        }
    }
}

impl Internet for FilteringProxy {
    fn connect(&self, host: &str) -> Result<String> {
        if self.banned.contains(&host.to_lowercase()) {
            return Err(PatternError::AccessDeniedError {
                host: host.to_string(),
            });
        }
        self.inner.connect(host)
    }
}

pub struct ProxyDemo;

impl Demo for ProxyDemo {
    fn name(&self) -> &'static str {
        "proxy"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Connection proxy enforcing a banned-host list"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let proxy = FilteringProxy::new(&["blocked.example", "denied.example"]);

        for host in ["docs.example", "blocked.example"] {
            match proxy.connect(host) {
                Ok(line) => transcript.note(line),
                Err(e) => transcript.note(format!("{}", e)),
            }
        }

        Ok(())
    }
}
