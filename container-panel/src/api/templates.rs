//! Compiled HTML templates for the panel page and its status fragment.

use askama::Template;

/// Seconds between `/status` polls issued by the page.
pub const POLL_INTERVAL_SECS: u64 = 2;

/// Full page shell. The status area is filled in by htmx polling.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub title: &'a str,
    pub container_name: &'a str,
    pub poll_interval_secs: u64,
}

/// Fragment swapped into the page on every poll.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusFragment {
    pub running: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_escapes_title() {
        let page = IndexPage {
            title: "<Tom & Jerry>",
            container_name: "tj",
            poll_interval_secs: POLL_INTERVAL_SECS,
        }
        .render()
        .unwrap();

        assert!(page.contains("&lt;Tom &amp; Jerry&gt;"));
        assert!(!page.contains("<Tom & Jerry>"));
    }

    #[test]
    fn test_index_polls_status_every_interval() {
        let page = IndexPage {
            title: "t",
            container_name: "c",
            poll_interval_secs: 2,
        }
        .render()
        .unwrap();

        assert!(page.contains(r#"hx-get="/status""#));
        assert!(page.contains("every 2s"));
    }
}
