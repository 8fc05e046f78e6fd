use std::path::Path;

/// Accepts files whose extension marks them as fragments (case-insensitive).
#[derive(Debug, Clone)]
pub struct FragmentFilter {
    extensions: Vec<String>,
}

impl FragmentFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { extensions: extensions.into_iter().map(Into::into).collect() }
    }

    pub fn accept(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| self.extensions.iter().any(|ok| ok.eq_ignore_ascii_case(ext)))
    }
}

impl Default for FragmentFilter {
    fn default() -> Self {
        Self::new(["ttl"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let filter = FragmentFilter::default();
        assert!(filter.accept(Path::new("data.TTL")));
        assert!(filter.accept(Path::new("/dir/BagCAT_1.ttl")));
        assert!(filter.accept(Path::new("data.Ttl")));
    }

    #[test]
    fn test_other_files_rejected() {
        let filter = FragmentFilter::default();
        assert!(!filter.accept(Path::new("data.txt")));
        assert!(!filter.accept(Path::new("datattl")));
        assert!(!filter.accept(Path::new(".bagcat-x1y2.part")));
        assert!(!filter.accept(Path::new("ttl")));
    }
}
