use std::io::{self, Write};

use crate::github::{ReleaseAsset, RepositoryHit};

/// Maximum number of search hits shown.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Message printed when a repository has no published release.
pub const NO_RELEASE_MESSAGE: &str = "No release found for repo.";

/// Write `<i>. <full name> - <description>` for each hit, 1-indexed.
pub fn write_search_hits<W: Write>(out: &mut W, hits: &[RepositoryHit]) -> io::Result<()> {
    for (i, hit) in hits.iter().take(SEARCH_RESULT_LIMIT).enumerate() {
        writeln!(out, "{}. {} - {}", i + 1, hit.full_name, hit.description)?;
    }
    Ok(())
}

/// Write one download URL per line.
pub fn write_asset_urls<W: Write>(out: &mut W, assets: &[&ReleaseAsset]) -> io::Result<()> {
    for asset in assets {
        writeln!(out, "{}", asset.browser_download_url)?;
    }
    Ok(())
}
