use async_trait::async_trait;
use sieve_dns_application::ports::BlocklistSource;
use sieve_dns_domain::DomainError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Parse one blocklist line.
///
/// Accepted formats:
///   - hosts: `0.0.0.0 domain`, `127.0.0.1 domain`, `:: domain`, `::1 domain`
///   - AdBlock: `||domain^`
///   - plain: `domain`
///
/// Comments (`#`, `!`) and blank lines yield `None`. Syntax validation is
/// left to the matcher.
pub fn parse_list_line(line: &str) -> Option<String> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    if let Some(rest) = line.strip_prefix("||") {
        let domain = rest.strip_suffix('^')?;
        return (!domain.is_empty()).then(|| domain.to_ascii_lowercase());
    }

    let content = line.split('#').next().unwrap_or(line);
    let parts: Vec<&str> = content.split_whitespace().collect();

    match parts.as_slice() {
        [addr, domain, ..] if matches!(*addr, "0.0.0.0" | "127.0.0.1" | "::" | "::1") => {
            if matches!(
                *domain,
                "localhost"
                    | "localhost.localdomain"
                    | "0.0.0.0"
                    | "broadcasthost"
                    | "ip6-localhost"
                    | "ip6-loopback"
            ) {
                return None;
            }
            Some(domain.to_ascii_lowercase())
        }
        [domain] if domain.contains('.') => Some(domain.to_ascii_lowercase()),
        _ => None,
    }
}

/// Parse an entire list text.
pub fn parse_list_text(text: &str) -> Vec<String> {
    text.lines().filter_map(parse_list_line).collect()
}

/// Blocklist made of every `*.txt` file in a directory plus inline entries
/// from the configuration.
pub struct LocalBlocklistSource {
    dir: PathBuf,
    custom: Vec<String>,
}

impl LocalBlocklistSource {
    pub fn new(dir: impl Into<PathBuf>, custom: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            custom,
        }
    }

    async fn list_files(&self) -> Result<Vec<PathBuf>, DomainError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(dir = %self.dir.display(), "Blocklist directory not found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(DomainError::IoError(e.to_string())),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if is_list_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_list_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "txt")
}

#[async_trait]
impl BlocklistSource for LocalBlocklistSource {
    async fn load(&self) -> Result<Vec<String>, DomainError> {
        let mut domains = Vec::new();

        for path in self.list_files().await? {
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => {
                    let before = domains.len();
                    domains.extend(parse_list_text(&text));
                    debug!(
                        file = %path.display(),
                        entries = domains.len() - before,
                        "Loaded blocklist file"
                    );
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "Failed to read blocklist file");
                }
            }
        }

        domains.extend(self.custom.iter().filter_map(|d| parse_list_line(d)));

        info!(
            dir = %self.dir.display(),
            entries = domains.len(),
            "Blocklist source loaded"
        );
        Ok(domains)
    }
}
