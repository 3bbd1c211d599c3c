//! User-agent sniffing. Rules are evaluated in a fixed priority order and
//! the first match wins; its label is added to the root as a marker.

use serde::Serialize;
use tracing::debug;

use crate::platform::MarkerSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Ie,
    Edge,
    Firefox,
    Chrome,
    Safari,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Ie => "ie",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Chrome => "chrome",
            Browser::Safari => "safari",
        }
    }

    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        if user_agent.contains("MSIE") {
            return Some(Browser::Ie);
        }
        if has_edge_version(user_agent) {
            return Some(Browser::Edge);
        }
        if user_agent.contains("Firefox") {
            return Some(Browser::Firefox);
        }
        // Chrome UAs also mention Safari, so Chrome must be checked first.
        if user_agent.contains("Chrome") {
            return Some(Browser::Chrome);
        }
        if user_agent.contains("Safari") {
            return Some(Browser::Safari);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Ios,
    Android,
    Mac,
    Windows,
}

impl Os {
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Ios => "ios",
            Os::Android => "android",
            Os::Mac => "mac",
            Os::Windows => "windows",
        }
    }

    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        if ["iPod", "iPhone", "iPad"]
            .iter()
            .any(|device| user_agent.contains(device))
        {
            return Some(Os::Ios);
        }

        let lower = user_agent.to_lowercase();
        if lower.contains("android") {
            return Some(Os::Android);
        }
        // iOS UAs contain "Mac OS X"; mobile platforms are matched above.
        if lower.contains("mac") {
            return Some(Os::Mac);
        }
        if lower.contains("windows") {
            return Some(Os::Windows);
        }
        None
    }
}

/// Detect the browser and add its label to `root`.
/// Returns None (and adds nothing) if no rule matched.
pub fn detect_browser(user_agent: &str, root: &impl MarkerSet) -> Option<Browser> {
    let browser = Browser::from_user_agent(user_agent)?;
    debug!("Detected browser: {}", browser.as_str());
    root.add(browser.as_str());
    Some(browser)
}

/// Detect the OS and add its label to `root`.
pub fn detect_os(user_agent: &str, root: &impl MarkerSet) -> Option<Os> {
    let os = Os::from_user_agent(user_agent)?;
    debug!("Detected OS: {}", os.as_str());
    root.add(os.as_str());
    Some(os)
}

/// Case-insensitive `Edge/` followed by a digit and at least one more character.
fn has_edge_version(user_agent: &str) -> bool {
    let lower = user_agent.to_lowercase();
    lower.match_indices("edge/").any(|(idx, needle)| {
        let mut rest = lower[idx + needle.len()..].chars();
        matches!(rest.next(), Some(c) if c.is_ascii_digit()) && rest.next().is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRoot;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const LEGACY_EDGE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/70.0.3538.102 Safari/537.36 Edge/18.19582";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const FIREFOX_ANDROID: &str = "Mozilla/5.0 (Android 14; Mobile; rv:121.0) Gecko/121.0 Firefox/121.0";
    const IE_10: &str = "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1; Trident/6.0)";
    const FIREFOX_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.1; rv:121.0) Gecko/20100101 Firefox/121.0";

    #[test]
    fn test_detects_chrome_on_windows_and_marks_root() {
        let root = MemoryRoot::new();

        assert_eq!(detect_browser(CHROME_WINDOWS, &root), Some(Browser::Chrome));
        assert_eq!(detect_os(CHROME_WINDOWS, &root), Some(Os::Windows));
        assert!(root.contains("chrome"));
        assert!(root.contains("windows"));
        assert_eq!(root.markers().len(), 2);
    }

    #[test]
    fn test_legacy_edge_wins_over_chrome() {
        assert_eq!(Browser::from_user_agent(LEGACY_EDGE), Some(Browser::Edge));
    }

    #[test]
    fn test_edge_requires_version_digit() {
        assert_eq!(Browser::from_user_agent("Something Edge/ beta"), None);
        assert_eq!(Browser::from_user_agent("Something Edge/1"), None);
        assert_eq!(Browser::from_user_agent("something edge/12"), Some(Browser::Edge));
    }

    #[test]
    fn test_ie_has_highest_priority() {
        assert_eq!(Browser::from_user_agent(IE_10), Some(Browser::Ie));
        assert_eq!(Os::from_user_agent(IE_10), Some(Os::Windows));
    }

    #[test]
    fn test_iphone_is_ios_not_mac() {
        assert_eq!(Os::from_user_agent(SAFARI_IPHONE), Some(Os::Ios));
        assert_eq!(Browser::from_user_agent(SAFARI_IPHONE), Some(Browser::Safari));
    }

    #[test]
    fn test_firefox_platforms() {
        assert_eq!(Browser::from_user_agent(FIREFOX_ANDROID), Some(Browser::Firefox));
        assert_eq!(Os::from_user_agent(FIREFOX_ANDROID), Some(Os::Android));
        assert_eq!(Os::from_user_agent(FIREFOX_MAC), Some(Os::Mac));
    }

    #[test]
    fn test_unknown_agent_adds_no_marker() {
        let root = MemoryRoot::new();

        assert_eq!(detect_browser("curl/8.4.0", &root), None);
        assert_eq!(detect_os("curl/8.4.0", &root), None);
        assert!(root.markers().is_empty());
    }

    #[test]
    fn test_labels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Browser::Firefox).unwrap(), "\"firefox\"");
        assert_eq!(serde_json::to_string(&Os::Ios).unwrap(), "\"ios\"");
    }
}
