/// Decides whether a `git diff-index` listing has changes worth flagging.
///
/// Every line is one changed path. A line counts unless it contains one of
/// `ignore_files`. Blank input means no changes at all.
pub fn is_dirty<S: AsRef<str>>(diff_listing: &str, ignore_files: &[S]) -> bool {
    let listing = diff_listing.trim();
    if listing.is_empty() {
        return false;
    }

    match listing
        .lines()
        .find(|line| !ignore_files.iter().any(|f| line.contains(f.as_ref())))
    {
        Some(line) => {
            log::debug!("uncommitted change: {}", line);
            true
        }
        None => false,
    }
}
