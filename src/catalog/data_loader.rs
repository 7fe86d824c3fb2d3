use anyhow::{Result, Context};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use super::{IngredientCatalogEntry, MoodCatalogEntry};

const ID_COL: &str = "id";
const NAME_COL: &str = "name";
const CATEGORY_COL: &str = "category";
const EMOJI_COL: &str = "emoji";

fn column_index(headers: &StringRecord, column: &str, csv_path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found in {:?}", column, csv_path))
}

/// Reads `csv_path` and returns `(id, name, third column)` triples, skipping rows with an empty id.
fn load_triples(csv_path: &Path, third_col: &str) -> Result<Vec<(String, String, String)>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Catalog CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open catalog CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let id_idx = column_index(&headers, ID_COL, csv_path)?;
    let name_idx = column_index(&headers, NAME_COL, csv_path)?;
    let third_idx = column_index(&headers, third_col, csv_path)?;

    let mut rows = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let id = record.get(id_idx).unwrap_or_default().trim().to_string();
        if id.is_empty() {
            tracing::debug!(row_index, path = ?csv_path, "skipping catalog row without id");
            continue;
        }
        let name = record.get(name_idx).unwrap_or_default().trim().to_string();
        let third = record.get(third_idx).unwrap_or_default().trim().to_string();
        // An empty display name falls back to the id, like any other lookup miss.
        let name = if name.is_empty() { id.clone() } else { name };
        rows.push((id, name, third));
    }

    if rows.is_empty() {
        return Err(anyhow::anyhow!("No catalog entries loaded from {:?}", csv_path));
    }
    Ok(rows)
}

pub fn load_ingredient_catalog(csv_path: &Path) -> Result<Vec<IngredientCatalogEntry>> {
    let rows = load_triples(csv_path, CATEGORY_COL)?;
    tracing::info!(count = rows.len(), path = ?csv_path, "loaded ingredient catalog");
    Ok(rows
        .into_iter()
        .map(|(id, name, category)| IngredientCatalogEntry { id, name, category })
        .collect())
}

pub fn load_mood_catalog(csv_path: &Path) -> Result<Vec<MoodCatalogEntry>> {
    let rows = load_triples(csv_path, EMOJI_COL)?;
    tracing::info!(count = rows.len(), path = ?csv_path, "loaded mood catalog");
    Ok(rows
        .into_iter()
        .map(|(id, name, emoji)| MoodCatalogEntry { id, name, emoji })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_load_ingredients() -> Result<()> {
        let file = write_csv("id,name,category\nrice,お米,主食\n,ghost,none\nokra,,野菜\n");
        let entries = load_ingredient_catalog(file.path())?;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "お米");
        assert_eq!(entries[0].category, "主食");
        assert_eq!(entries[1].name, "okra");
        Ok(())
    }

    #[test]
    fn test_load_moods_with_reordered_columns() -> Result<()> {
        let file = write_csv("emoji,id,name\n😄,happy,元気いっぱい\n");
        let entries = load_mood_catalog(file.path())?;
        assert_eq!(entries, vec![MoodCatalogEntry {
            id: "happy".into(),
            name: "元気いっぱい".into(),
            emoji: "😄".into(),
        }]);
        Ok(())
    }

    #[test]
    fn test_missing_column_is_error() {
        let file = write_csv("id,name\nrice,お米\n");
        let err = load_ingredient_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_mood_catalog(Path::new("/definitely/not/here.csv")).is_err());
    }

    #[test]
    fn test_header_only_is_error() {
        let file = write_csv("id,name,emoji\n");
        assert!(load_mood_catalog(file.path()).is_err());
    }
}
