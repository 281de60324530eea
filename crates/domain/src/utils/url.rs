//! URL helpers for domain extraction

/// Extract the hostname from a URL string.
///
/// Returns `None` when the input is not a parseable absolute URL or has no
/// host component. Callers treat an unparseable URL as "no domain" rather
/// than an error.
///
/// # Examples
///
/// ```
/// use timesift_domain::utils::url::parse_domain;
///
/// assert_eq!(parse_domain("https://github.com/x/y"), Some("github.com".to_string()));
/// assert_eq!(parse_domain("not a url"), None);
/// ```
#[must_use]
pub fn parse_domain(url: &str) -> Option<String> {
    url::Url::parse(url).ok().and_then(|u| u.host_str().map(std::string::ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain_standard_url() {
        assert_eq!(parse_domain("https://github.com/rust-lang/rust"), Some("github.com".into()));
    }

    #[test]
    fn test_parse_domain_with_port_and_query() {
        assert_eq!(parse_domain("http://localhost:8080/path?q=1"), Some("localhost".into()));
    }

    #[test]
    fn test_parse_domain_subdomain_preserved() {
        assert_eq!(parse_domain("https://mail.google.com/mail/u/0"), Some("mail.google.com".into()));
    }

    #[test]
    fn test_parse_domain_invalid_input() {
        assert_eq!(parse_domain("not a url"), None);
        assert_eq!(parse_domain(""), None);
    }

    #[test]
    fn test_parse_domain_no_host() {
        // file URLs parse but carry no host
        assert_eq!(parse_domain("file:///etc/hosts"), None);
    }
}
