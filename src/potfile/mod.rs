use crate::models::HashAlgorithm;

/// One recovered credential from a hashcat potfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotfileEntry {
    pub hash: String,
    pub plaintext: String,
}

/// Parse `hash:plaintext` potfile lines. Blank lines and lines with an
/// empty hash are skipped; a line without a separator yields an empty
/// plaintext. Hashcat prefixes BLAKE2b digests with `$BLAKE2$` in the
/// potfile, which is stripped so they match the stored column.
pub fn parse_potfile(content: &str, algorithm: HashAlgorithm) -> Vec<PotfileEntry> {
    let mut entries = Vec::new();
    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let (hash, plaintext) = line.split_once(':').unwrap_or((line, ""));
        let hash = match algorithm {
            HashAlgorithm::Blake2b => hash.strip_prefix("$BLAKE2$").unwrap_or(hash),
            _ => hash,
        };
        if hash.is_empty() {
            continue;
        }

        entries.push(PotfileEntry {
            hash: hash.to_string(),
            plaintext: plaintext.to_string(),
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_lines() {
        let entries = parse_potfile(
            "5f4dcc3b5aa765d61d8327deb882cf99:password\n098f6bcd4621d373cade4e832627b4f6:test\n",
            HashAlgorithm::Md5,
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hash, "5f4dcc3b5aa765d61d8327deb882cf99");
        assert_eq!(entries[0].plaintext, "password");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let entries = parse_potfile("\n\nabc:one\n\n", HashAlgorithm::Md5);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_plaintext_may_contain_colons() {
        let entries = parse_potfile("abc:pass:word", HashAlgorithm::Md5);
        assert_eq!(entries[0].plaintext, "pass:word");
    }

    #[test]
    fn test_missing_separator_yields_empty_plaintext() {
        let entries = parse_potfile("abcdef", HashAlgorithm::Md5);
        assert_eq!(entries[0].hash, "abcdef");
        assert_eq!(entries[0].plaintext, "");
    }

    #[test]
    fn test_empty_hash_skipped() {
        let entries = parse_potfile(":orphanplaintext", HashAlgorithm::Md5);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_blake2b_prefix_stripped() {
        let entries = parse_potfile("$BLAKE2$aabbcc:secret", HashAlgorithm::Blake2b);
        assert_eq!(entries[0].hash, "aabbcc");
    }

    #[test]
    fn test_prefix_untouched_for_other_algorithms() {
        let entries = parse_potfile("$BLAKE2$aabbcc:secret", HashAlgorithm::Md5);
        assert_eq!(entries[0].hash, "$BLAKE2$aabbcc");
    }
}
