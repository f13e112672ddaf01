use std::path::Path;

use tracing::debug;

/// Parse KEY=VALUE lines from an env file. Blank lines and `#` comments are
/// skipped; surrounding double quotes on values are stripped; the first `=`
/// is the separator.
pub fn parse_env_lines(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let mut value = value.trim();
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }
        entries.push((key.to_string(), value.to_string()));
    }
    entries
}

/// Load an env file into the process environment. Missing files are
/// silently ignored; file values override existing variables, matching the
/// lab's load order where `env.local` wins over `.env`.
pub fn load_env_file(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    let entries = parse_env_lines(&content);
    let count = entries.len();
    for (key, value) in entries {
        std::env::set_var(&key, &value);
    }
    debug!(path = %path.display(), count, "Loaded environment file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "# lab credentials\n\nDB_HOST=10.0.0.5\n  \nDB_PORT=3307\n";
        let entries = parse_env_lines(content);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("DB_HOST".to_string(), "10.0.0.5".to_string()));
        assert_eq!(entries[1], ("DB_PORT".to_string(), "3307".to_string()));
    }

    #[test]
    fn test_parse_strips_surrounding_quotes() {
        let entries = parse_env_lines("DB_PASS=\"hunter two\"");
        assert_eq!(entries[0].1, "hunter two");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let entries = parse_env_lines("DB_PASS=a=b=c");
        assert_eq!(entries[0], ("DB_PASS".to_string(), "a=b=c".to_string()));
    }

    #[test]
    fn test_parse_value_missing_equals() {
        let entries = parse_env_lines("STANDALONE");
        assert_eq!(entries[0], ("STANDALONE".to_string(), String::new()));
    }

    #[test]
    fn test_load_missing_file_is_noop() {
        assert!(load_env_file("/nonexistent/cracklab.env").is_ok());
    }

    #[test]
    fn test_load_sets_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.local");
        std::fs::write(&path, "CRACKLAB_TEST_ENVFILE=loaded\n").unwrap();

        load_env_file(&path).unwrap();
        assert_eq!(std::env::var("CRACKLAB_TEST_ENVFILE").unwrap(), "loaded");
        std::env::remove_var("CRACKLAB_TEST_ENVFILE");
    }
}
