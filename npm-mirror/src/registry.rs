//! Mirror URL resolution and normalization.

/// The public npm registry, as written in lockfiles
pub const PUBLIC_REGISTRY: &str = "https://registry.npmjs.org";

/// Mirror used when neither an argument nor the environment supplies one
pub const DEFAULT_MIRROR: &str = "http://registry.npmmirror.com";

/// Environment variable consulted when no usable mirror argument is given
pub const MIRROR_ENV_VAR: &str = "NPM_MIRROR_REGISTRY";

/// A resolved mirror registry URL in its two working forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryUrl {
    configured: String,
    lockfile: String,
}

impl RegistryUrl {
    /// Pick the mirror URL from the argument, the environment value or the
    /// built-in default, then normalize it.
    ///
    /// Arguments of two characters or fewer are ignored.
    pub fn resolve(argument: Option<&str>, env_value: Option<&str>) -> Self {
        let raw = match (argument, env_value) {
            (Some(arg), _) if arg.len() > 2 => arg,
            (_, Some(env)) if !env.is_empty() => env,
            _ => DEFAULT_MIRROR,
        };
        Self::normalize(raw)
    }

    /// Add a missing scheme and strip one trailing slash
    pub fn normalize(raw: &str) -> Self {
        let mut configured = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("https://{}", raw)
        };
        if configured.ends_with('/') {
            configured.pop();
        }

        // Lockfiles always get https, except for addresses like a LAN host
        let lockfile = configured.replacen("http://registry.", "https://registry.", 1);

        Self {
            configured,
            lockfile,
        }
    }

    /// The form written to and compared against `.npmrc`
    pub fn configured(&self) -> &str {
        &self.configured
    }

    /// Whether an `.npmrc` value names this registry once normalized
    pub fn matches_configured(&self, value: &str) -> bool {
        Self::normalize(value).configured == self.configured
    }

    /// The form searched for and written into lockfiles
    pub fn lockfile(&self) -> &str {
        &self.lockfile
    }
}

impl std::fmt::Display for RegistryUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mirror_when_nothing_given() {
        let url = RegistryUrl::resolve(None, None);
        assert_eq!(url.configured(), "http://registry.npmmirror.com");
        assert_eq!(url.lockfile(), "https://registry.npmmirror.com");
    }

    #[test]
    fn test_argument_wins_over_environment() {
        let url = RegistryUrl::resolve(Some("https://a.example"), Some("https://b.example"));
        assert_eq!(url.configured(), "https://a.example");
    }

    #[test]
    fn test_short_argument_falls_back_to_environment() {
        let url = RegistryUrl::resolve(Some("--"), Some("https://b.example/"));
        assert_eq!(url.configured(), "https://b.example");

        let url = RegistryUrl::resolve(Some(""), None);
        assert_eq!(url.configured(), DEFAULT_MIRROR);
    }

    #[test]
    fn test_empty_environment_uses_default() {
        let url = RegistryUrl::resolve(None, Some(""));
        assert_eq!(url.configured(), DEFAULT_MIRROR);
    }

    #[test]
    fn test_missing_scheme_gets_https() {
        let url = RegistryUrl::resolve(Some("mirror.example/npm/"), None);
        assert_eq!(url.configured(), "https://mirror.example/npm");
        assert_eq!(url.lockfile(), "https://mirror.example/npm");
    }

    #[test]
    fn test_only_one_trailing_slash_is_stripped() {
        let url = RegistryUrl::normalize("https://mirror.example//");
        assert_eq!(url.configured(), "https://mirror.example/");
    }

    #[test]
    fn test_plain_http_host_is_kept_in_lockfile_form() {
        let url = RegistryUrl::normalize("http://192.168.1.10:4873");
        assert_eq!(url.lockfile(), "http://192.168.1.10:4873");
    }

    #[test]
    fn test_matches_configured_ignores_trailing_slash() {
        let url = RegistryUrl::normalize("https://mirror.example/");
        assert!(url.matches_configured("https://mirror.example/"));
        assert!(url.matches_configured("https://mirror.example"));
        assert!(!url.matches_configured("http://mirror.example"));
        assert!(!url.matches_configured("https://other.example"));
    }

    #[test]
    fn test_display_uses_configured_form() {
        let url = RegistryUrl::normalize("http://registry.example.org/");
        assert_eq!(url.to_string(), "http://registry.example.org");
        assert_eq!(url.lockfile(), "https://registry.example.org");
    }
}
