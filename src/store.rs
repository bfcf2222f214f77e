use std::path::PathBuf;

use serde_json::{Map, Value};

/// Best-effort key-value persistence. Implementations swallow their own
/// failures: a broken store degrades to "nothing saved / nothing found" and
/// must never block core operations.
pub trait Store {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// All keys in one JSON object file, default under `~/.config/penny/`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("penny")
            .join("store.json")
    }

    fn read_map(&self) -> Map<String, Value> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };
        serde_json::from_str::<Value>(&content)
            .ok()
            .and_then(|value| value.as_object().cloned())
            .unwrap_or_default()
    }

    fn write_map(&self, map: Map<String, Value>) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(&Value::Object(map)) {
            let _ = std::fs::write(&self.path, format!("{json}\n"));
        }
    }
}

impl Store for JsonFileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.read_map()
            .get(key)
            .and_then(|value| value.as_str().map(str::to_string))
    }

    fn save(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.read_map();
        if map.remove(key).is_some() {
            self.write_map(map);
        }
    }
}
