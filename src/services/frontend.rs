//! Locating the pre-built single-page application entry document.
use std::path::PathBuf;

/// The meta tag name the SPA reads its Google client id from at runtime.
const CLIENT_ID_META_NAME: &str = "VITE_GOOGLE_CLIENT_ID";

const HEAD_END: &str = "</head>";

/// Where to find the SPA entry document and what to inject into it.
#[derive(Clone, Debug)]
pub struct FrontendSource {
    /// Candidate index documents, checked in order.
    pub index_candidates: Vec<PathBuf>,
    /// The public Google OAuth client id to expose to the SPA, if any.
    pub google_client_id: Option<String>,
}

impl FrontendSource {
    /// Read the first candidate that can be read. Unreadable candidates are
    /// skipped, so `None` means no SPA build is available.
    pub async fn load_index(&self) -> Option<String> {
        for candidate in &self.index_candidates {
            match tokio::fs::read_to_string(candidate).await {
                Ok(html) => {
                    return Some(match self.google_client_id {
                        Some(ref client_id) => inject_client_id(&html, client_id),
                        None => html,
                    });
                }
                Err(err) => {
                    tracing::debug!("Frontend candidate {} unavailable: {err}", candidate.display());
                }
            }
        }
        None
    }
}

/// Add a `<meta name="VITE_GOOGLE_CLIENT_ID">` tag just before `</head>`,
/// unless the document already carries one or has no head.
pub fn inject_client_id(html: &str, client_id: &str) -> String {
    if html.contains(CLIENT_ID_META_NAME) {
        return html.to_owned();
    }
    let Some((head, rest)) = html.split_once(HEAD_END) else {
        return html.to_owned();
    };
    let tag = format!(
        r#"<meta name="{CLIENT_ID_META_NAME}" content="{}"/>"#,
        escape_attribute(client_id)
    );
    let mut injected = String::with_capacity(html.len() + tag.len());
    injected.push_str(head);
    injected.push_str(&tag);
    injected.push_str(HEAD_END);
    injected.push_str(rest);
    injected
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const INDEX: &str = "<html><head><title>Ojasritu</title></head><body></body></html>";

    #[tokio::test]
    async fn test_first_candidate_wins() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.html");
        let second = dir.path().join("second.html");
        std::fs::write(&first, "first").unwrap();
        std::fs::write(&second, "second").unwrap();
        let source = FrontendSource {
            index_candidates: vec![first, second],
            google_client_id: None,
        };
        assert_eq!(source.load_index().await.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_unreadable_candidate_is_skipped() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be read as text.
        let unreadable = dir.path().join("index.html");
        std::fs::create_dir(&unreadable).unwrap();
        let second = dir.path().join("second.html");
        std::fs::write(&second, "second").unwrap();
        let source = FrontendSource {
            index_candidates: vec![unreadable, second],
            google_client_id: None,
        };
        assert_eq!(source.load_index().await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_no_candidates_available() {
        let dir = TempDir::new().unwrap();
        let source = FrontendSource {
            index_candidates: vec![dir.path().join("a.html"), dir.path().join("b.html")],
            google_client_id: None,
        };
        assert!(source.load_index().await.is_none());
    }

    #[test]
    fn test_inject_client_id_before_head_end() {
        let html = inject_client_id(INDEX, "123.apps.googleusercontent.com");
        assert_eq!(
            html,
            "<html><head><title>Ojasritu</title>\
             <meta name=\"VITE_GOOGLE_CLIENT_ID\" content=\"123.apps.googleusercontent.com\"/>\
             </head><body></body></html>"
        );
    }

    #[test]
    fn test_inject_client_id_after_non_ascii_head() {
        let html = inject_client_id("<head><title>ओजस्ऋतु</title></head><body/>", "id");
        assert_eq!(
            html,
            "<head><title>ओजस्ऋतु</title>\
             <meta name=\"VITE_GOOGLE_CLIENT_ID\" content=\"id\"/></head><body/>"
        );
    }

    #[test]
    fn test_inject_client_id_keeps_existing_tag() {
        let html = "<head><meta name=\"VITE_GOOGLE_CLIENT_ID\" content=\"baked\"/></head>";
        assert_eq!(inject_client_id(html, "other"), html);
    }

    #[test]
    fn test_inject_client_id_escapes_value() {
        let html = inject_client_id("<head></head>", "a\"><script>");
        assert!(html.contains("content=\"a&quot;&gt;&lt;script&gt;\""));
    }

    #[test]
    fn test_inject_client_id_without_head() {
        assert_eq!(inject_client_id("<p>hi</p>", "id"), "<p>hi</p>");
    }
}
