//! Feature input parsing
//!
//! Features can be supplied as `name=value` assignments or from a file:
//! a JSON object of name to value, or a CSV with a header row of feature
//! names followed by one row of values.

use anyhow::{anyhow, bail, Context, Result};
use oncoscore_classifier::FeatureVector;
use std::collections::BTreeMap;
use std::path::Path;

/// Split `name=value` on the last `=`; names may contain spaces
pub fn parse_assignment(raw: &str) -> Result<(String, f64)> {
    let (name, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        bail!("missing feature name in '{}'", raw);
    }
    let value = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid number for '{}'", name))?;
    Ok((name.to_string(), value))
}

/// Read `(name, value)` pairs from a `.json` or `.csv` file
pub fn read_feature_file(path: &Path) -> Result<Vec<(String, f64)>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let map: BTreeMap<String, f64> = serde_json::from_str(&content)
            .with_context(|| format!("{} is not a JSON object of numbers", path.display()))?;
        return Ok(map.into_iter().collect());
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let headers = reader.headers()?.clone();
    let row = reader
        .records()
        .next()
        .ok_or_else(|| anyhow!("{} has a header but no values", path.display()))??;

    headers
        .iter()
        .zip(row.iter())
        .map(|(name, value)| {
            let value = value
                .parse::<f64>()
                .with_context(|| format!("invalid number for '{}'", name))?;
            Ok((name.to_string(), value))
        })
        .collect()
}

/// Overlay named values onto `base`
pub fn apply_features(base: &FeatureVector, pairs: &[(String, f64)]) -> Result<FeatureVector> {
    let mut features = base.clone();
    for (name, value) in pairs {
        features.set(name, *value)?;
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_assignment_with_space_in_name() {
        let (name, value) = parse_assignment("concave points_mean=0.1471").unwrap();
        assert_eq!(name, "concave points_mean");
        assert_eq!(value, 0.1471);
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!(parse_assignment("radius_mean").is_err());
        assert!(parse_assignment("=1.0").is_err());
        assert!(parse_assignment("radius_mean=abc").is_err());
    }

    #[test]
    fn test_read_json_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{"radius_mean": 17.99, "area_worst": 2019.0}"#)?;

        let features = apply_features(&FeatureVector::default(), &read_feature_file(&path)?)?;
        assert_eq!(features.get("radius_mean"), Some(17.99));
        assert_eq!(features.get("area_worst"), Some(2019.0));
        assert_eq!(features.get("texture_mean"), Some(0.0));
        Ok(())
    }

    #[test]
    fn test_read_csv_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.csv");
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "radius_mean, concave points_se")?;
        writeln!(file, "13.54, 0.0123")?;
        file.flush()?;

        let pairs = read_feature_file(&path)?;
        assert_eq!(
            pairs,
            vec![
                ("radius_mean".to_string(), 13.54),
                ("concave points_se".to_string(), 0.0123)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let pairs = vec![("tumor_size".to_string(), 1.0)];
        assert!(apply_features(&FeatureVector::default(), &pairs).is_err());
    }
}
