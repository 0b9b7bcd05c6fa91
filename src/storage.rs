use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;

use crate::error::Result;
use crate::export::ExportedDocument;
use crate::models::UserProfile;

/// Load a profile from a JSON file and apply the form constraints.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}

/// Resolve the output path: a directory gets the document's own file name.
pub fn output_path(target: &Path, document: &ExportedDocument) -> PathBuf {
    if target.is_dir() {
        target.join(document.file_name)
    } else {
        target.to_path_buf()
    }
}

/// Write a document through a temp file in the same directory, then rename into place.
///
/// The target path only ever holds a complete document.
pub fn write_document(target: &Path, document: &ExportedDocument) -> Result<PathBuf> {
    let path = output_path(target, document);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(&document.bytes)?;
    tmp.flush()?;
    tmp.persist(&path).map_err(|e| e.error)?;

    info!("wrote {} ({} bytes)", path.display(), document.bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietPreference, Level};
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_profile() {
        let json = r#"{
            "name": "Meera",
            "age": 41,
            "diet": "Veg",
            "conditions": ["IBS", "Cold"],
            "bp": "Low",
            "sugar": "Normal"
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.name, "Meera");
        assert_eq!(profile.diet_preference, DietPreference::Veg);
        assert_eq!(profile.blood_pressure, Level::Low);
        assert_eq!(profile.selected_conditions.len(), 2);
    }

    #[test]
    fn test_load_profile_rejects_bad_age() {
        let json = r#"{"name": "Old", "age": 120, "diet": "Veg"}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_profile(file.path()).is_err());
    }

    #[test]
    fn test_load_profile_collapses_repeated_conditions() {
        let json = r#"{"name": "Ravi", "age": 52, "diet": "Veg", "conditions": ["IBS", "IBS"]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.selected_conditions.len(), 1);
        assert_eq!(profile.selected_conditions[0].name(), "IBS");
    }

    #[test]
    fn test_write_document_into_directory() {
        let dir = TempDir::new().unwrap();
        let document = ExportedDocument {
            file_name: "plan.pdf",
            content_type: "application/pdf",
            bytes: b"%PDF-1.5 test".to_vec(),
        };

        let written = write_document(dir.path(), &document).unwrap();
        assert_eq!(written, dir.path().join("plan.pdf"));
        assert_eq!(fs::read(&written).unwrap(), document.bytes);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
