//! Pivot link catalog.
//!
//! A small, static mapping from input kind to public lookup pages. Links are
//! only built here, never fetched.

use serde::Serialize;

use crate::intel::phone::digits_only;
use crate::types::InputKind;

/// How the input is placed into a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    /// Trimmed input as typed
    Raw,
    /// Percent-encoded
    Component,
    /// ASCII digits only
    Digits,
}

/// A URL template with a single `{}` placeholder
#[derive(Debug, Clone, Copy)]
pub struct PivotTemplate {
    pub label: &'static str,
    template: &'static str,
    encoding: Encoding,
}

impl PivotTemplate {
    const fn raw(label: &'static str, template: &'static str) -> Self {
        Self {
            label,
            template,
            encoding: Encoding::Raw,
        }
    }

    const fn encoded(label: &'static str, template: &'static str, encoding: Encoding) -> Self {
        Self {
            label,
            template,
            encoding,
        }
    }

    /// Fill the template with an already-trimmed value
    pub fn render(&self, value: &str) -> PivotLink {
        let filled = match self.encoding {
            Encoding::Raw => value.to_string(),
            Encoding::Component => urlencoding::encode(value).into_owned(),
            Encoding::Digits => digits_only(value),
        };
        PivotLink {
            label: self.label,
            url: self.template.replacen("{}", &filled, 1),
        }
    }
}

/// A rendered pivot link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotLink {
    pub label: &'static str,
    pub url: String,
}

pub const PLATFORM_PIVOTS: &[PivotTemplate] = &[
    PivotTemplate::raw("GitHub", "https://github.com/{}"),
    PivotTemplate::raw("X/Twitter", "https://x.com/{}"),
    PivotTemplate::raw("Instagram", "https://instagram.com/{}"),
    PivotTemplate::raw("TikTok", "https://www.tiktok.com/@{}"),
    PivotTemplate::raw("Reddit", "https://www.reddit.com/user/{}"),
    PivotTemplate::raw("Telegram", "https://t.me/{}"),
];

pub const DOMAIN_PIVOTS: &[PivotTemplate] = &[
    PivotTemplate::raw("WHOIS", "https://who.is/whois/{}"),
    PivotTemplate::raw(
        "DNS Records",
        "https://dnschecker.org/all-dns-records-of-domain.php?query={}",
    ),
    PivotTemplate::raw("crt.sh", "https://crt.sh/?q={}"),
    PivotTemplate::raw("Wayback", "https://web.archive.org/web/*/{}"),
    PivotTemplate::raw("VirusTotal", "https://www.virustotal.com/gui/domain/{}"),
    PivotTemplate::raw("SecurityTrails", "https://securitytrails.com/domain/{}"),
];

pub const EMAIL_PIVOTS: &[PivotTemplate] = &[
    PivotTemplate::raw("HIBP", "https://haveibeenpwned.com/unifiedsearch/{}"),
    PivotTemplate::raw("Email Rep", "https://emailrep.io/{}"),
    PivotTemplate::raw("Hunter", "https://hunter.io/email-verifier/{}"),
    PivotTemplate::encoded("Gravatar", "https://www.gravatar.com/avatar/{}", Encoding::Component),
];

pub const PHONE_PIVOTS: &[PivotTemplate] = &[
    PivotTemplate::raw("Truecaller", "https://www.truecaller.com/search/pk/{}"),
    PivotTemplate::raw("Sync.me", "https://sync.me/search/?number={}"),
    PivotTemplate::encoded("WhatsApp check", "https://wa.me/{}", Encoding::Digits),
];

pub const IP_PIVOTS: &[PivotTemplate] = &[
    PivotTemplate::raw("AbuseIPDB", "https://www.abuseipdb.com/check/{}"),
    PivotTemplate::raw("Shodan", "https://www.shodan.io/host/{}"),
    PivotTemplate::raw("IPInfo", "https://ipinfo.io/{}"),
    PivotTemplate::raw("Censys", "https://search.censys.io/hosts/{}"),
];

/// Templates for an input kind. Username templates apply per variant.
pub fn templates_for(kind: InputKind) -> &'static [PivotTemplate] {
    match kind {
        InputKind::Username => PLATFORM_PIVOTS,
        InputKind::Domain => DOMAIN_PIVOTS,
        InputKind::Email => EMAIL_PIVOTS,
        InputKind::Phone => PHONE_PIVOTS,
        InputKind::Ip => IP_PIVOTS,
    }
}

/// Build all links for `value`; empty when the trimmed value is empty
pub fn pivot_links(kind: InputKind, value: &str) -> Vec<PivotLink> {
    let value = value.trim();
    if value.is_empty() {
        return Vec::new();
    }
    templates_for(kind).iter().map(|t| t.render(value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_links() {
        let links = pivot_links(InputKind::Domain, " example.com ");
        assert_eq!(links.len(), 6);
        assert_eq!(links[0].label, "WHOIS");
        assert_eq!(links[0].url, "https://who.is/whois/example.com");
        assert_eq!(links[3].url, "https://web.archive.org/web/*/example.com");
    }

    #[test]
    fn test_gravatar_is_encoded() {
        let links = pivot_links(InputKind::Email, "a+b@example.com");
        let gravatar = links.iter().find(|l| l.label == "Gravatar").unwrap();
        assert_eq!(gravatar.url, "https://www.gravatar.com/avatar/a%2Bb%40example.com");
        let hibp = links.iter().find(|l| l.label == "HIBP").unwrap();
        assert_eq!(hibp.url, "https://haveibeenpwned.com/unifiedsearch/a+b@example.com");
    }

    #[test]
    fn test_whatsapp_uses_digits() {
        let links = pivot_links(InputKind::Phone, "+92 300-1234567");
        let wa = links.iter().find(|l| l.label == "WhatsApp check").unwrap();
        assert_eq!(wa.url, "https://wa.me/923001234567");
        let sync = links.iter().find(|l| l.label == "Sync.me").unwrap();
        assert_eq!(sync.url, "https://sync.me/search/?number=+92 300-1234567");
    }

    #[test]
    fn test_platform_links() {
        let links = pivot_links(InputKind::Username, "meelad786");
        let tiktok = links.iter().find(|l| l.label == "TikTok").unwrap();
        assert_eq!(tiktok.url, "https://www.tiktok.com/@meelad786");
        assert_eq!(links.len(), PLATFORM_PIVOTS.len());
    }

    #[test]
    fn test_blank_value_has_no_links() {
        for kind in InputKind::ALL {
            assert!(pivot_links(kind, "  ").is_empty());
        }
    }

    #[test]
    fn test_every_template_has_one_placeholder() {
        for kind in InputKind::ALL {
            for t in templates_for(kind) {
                assert_eq!(t.template.matches("{}").count(), 1, "{}", t.label);
            }
        }
    }
}
