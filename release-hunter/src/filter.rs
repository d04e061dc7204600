use crate::github::ReleaseAsset;

/// Keep the assets whose name contains `keyword`, ignoring case.
///
/// An empty keyword keeps everything. Upstream order is preserved.
pub fn filter_assets<'a>(assets: &'a [ReleaseAsset], keyword: &str) -> Vec<&'a ReleaseAsset> {
    let keyword = keyword.to_lowercase();
    assets
        .iter()
        .filter(|asset| keyword.is_empty() || asset.name.to_lowercase().contains(&keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(names: &[&str]) -> Vec<ReleaseAsset> {
        names
            .iter()
            .map(|name| ReleaseAsset {
                name: name.to_string(),
                browser_download_url: format!("https://example.com/download/{name}"),
            })
            .collect()
    }

    fn names<'a>(assets: &[&'a ReleaseAsset]) -> Vec<&'a str> {
        assets.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_keyword_match() {
        let input = assets(&["asset1", "keywordMatch", "asset3"]);
        let filtered = filter_assets(&input, "keyword");
        assert_eq!(names(&filtered), vec!["keywordMatch"]);
    }

    #[test]
    fn test_no_keyword_match() {
        let input = assets(&["asset1", "asset2", "asset3"]);
        assert!(filter_assets(&input, "nonexistent").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let input = assets(&[
            "helm-v3.14.0-linux-ARM64.tar.gz",
            "helm-v3.14.0-linux-amd64.tar.gz",
            "helm-v3.14.0-darwin-arm64.tar.gz",
        ]);
        let filtered = filter_assets(&input, "Arm64");
        assert_eq!(
            names(&filtered),
            vec![
                "helm-v3.14.0-linux-ARM64.tar.gz",
                "helm-v3.14.0-darwin-arm64.tar.gz"
            ]
        );
    }

    #[test]
    fn test_empty_keyword_is_identity() {
        let input = assets(&["b", "a", "c"]);
        let filtered = filter_assets(&input, "");
        assert_eq!(names(&filtered), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_assets(&[], "anything").is_empty());
        assert!(filter_assets(&[], "").is_empty());
    }

    #[test]
    fn test_subsequence_partition() {
        let input = assets(&["x-linux", "x-windows", "LINUX-y", "mac", "linux"]);
        let keyword = "linux";
        let filtered = filter_assets(&input, keyword);

        // Every kept asset matches, every dropped one does not, order intact.
        let mut kept = filtered.iter().peekable();
        for asset in &input {
            let matches = asset.name.to_lowercase().contains(keyword);
            if kept.peek().is_some_and(|k| std::ptr::eq(**k, asset)) {
                assert!(matches);
                kept.next();
            } else {
                assert!(!matches);
            }
        }
        assert!(kept.next().is_none());
    }
}
