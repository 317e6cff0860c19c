use serde::Serialize;

/// Write any serializable snapshot as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &str, rows: &[T]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
