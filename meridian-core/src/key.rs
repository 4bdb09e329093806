use url::{Host, Url};

/// Second-level labels that act as a TLD, so the registered domain keeps
/// three labels instead of two (`bbc.co.uk`, not `co.uk`).
const MULTI_PART_SUFFIXES: &[&str] = &[
    "ac.in", "ac.jp", "ac.uk", "co.id", "co.il", "co.in", "co.jp", "co.kr", "co.nz", "co.th",
    "co.uk", "co.za", "com.ar", "com.au", "com.br", "com.cn", "com.co", "com.eg", "com.hk",
    "com.mx", "com.my", "com.pl", "com.sa", "com.sg", "com.tr", "com.tw", "com.ua", "edu.au",
    "go.jp", "gob.mx", "gov.au", "gov.br", "gov.cn", "gov.in", "gov.uk", "govt.nz", "me.uk",
    "ne.jp", "net.au", "net.br", "net.cn", "net.in", "net.nz", "net.uk", "or.jp", "or.kr",
    "org.au", "org.br", "org.cn", "org.in", "org.mx", "org.nz", "org.uk", "org.za", "sch.uk",
];

/// A URL or bare domain being located.
///
/// The raw string is kept verbatim because lookup caches are keyed by
/// it. Host extraction happens once at construction; keys that do not
/// parse simply have no host, which downstream signals treat as "no
/// information" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    raw: String,
    host: Option<String>,
}

impl LookupKey {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let host = extract_host(raw.trim());
        Self { raw, host }
    }

    /// The key exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased hostname without port. IP-address hosts carry no
    /// geographic naming information and yield `None`.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Final label of the host, e.g. `"uk"` for `bbc.co.uk`.
    pub fn tld(&self) -> Option<&str> {
        self.host()
            .and_then(|h| h.rsplit('.').next())
            .filter(|label| !label.is_empty())
    }

    /// The registrable part of the host: the last two labels, or three
    /// when the trailing pair is itself a registry suffix.
    pub fn registered_domain(&self) -> Option<String> {
        let host = self.host()?;
        let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
        if labels.len() < 2 {
            return None;
        }
        let tail = format!("{}.{}", labels[labels.len() - 2], labels[labels.len() - 1]);
        let keep = if labels.len() >= 3 && MULTI_PART_SUFFIXES.binary_search(&tail.as_str()).is_ok()
        {
            3
        } else {
            2
        };
        Some(labels[labels.len() - keep..].join("."))
    }
}

impl From<&str> for LookupKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn extract_host(trimmed: &str) -> Option<String> {
    let candidate = if trimmed.starts_with("http:") || trimmed.starts_with("https:") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    let url = Url::parse(&candidate).ok()?;
    match url.host() {
        Some(Host::Domain(domain)) => Some(domain.to_lowercase()),
        _ => None,
    }
}
