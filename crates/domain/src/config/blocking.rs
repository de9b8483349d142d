use serde::{Deserialize, Serialize};

/// Ad-blocking and domain filtering configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    /// Enable ad-blocking (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory scanned for `*.txt` blocklists (hosts, AdBlock or plain format)
    #[serde(default = "default_blocklist_dir")]
    pub blocklist_dir: String,

    /// Custom domains to block (user-defined blocklist)
    #[serde(default)]
    pub custom_blocked: Vec<String>,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            blocklist_dir: default_blocklist_dir(),
            custom_blocked: vec![],
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_blocklist_dir() -> String {
    "blocklists".to_string()
}
