use std::{
    collections::{BTreeMap, HashMap},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use serde::{Serialize, Serializer};
use tracing::{debug, error, info};

use crate::errors::ConfigError;
use crate::parse::parse_line;
use crate::value::PropertyValue;

/// In-memory `key=value` properties loaded from one or more files.
///
/// The store starts uninitialized and becomes live on the first load call.
/// Later loads add to and overwrite earlier entries; nothing is removed.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    props: Option<HashMap<String, String>>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load properties from `path`, returning how many lines produced a key.
    ///
    /// A file that cannot be opened or read is logged and counts as zero
    /// properties; entries from earlier loads stay in place.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> usize {
        match self.try_load_file(path) {
            Ok(n) => n,
            Err(e) => {
                error!(error = %e, "error reading configuration file");
                0
            }
        }
    }

    /// Like [`load_file`](Self::load_file) but surfaces the I/O failure.
    pub fn try_load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ConfigError> {
        let path = path.as_ref();
        self.props.get_or_insert_with(HashMap::new);

        let file = File::open(path).map_err(|e| ConfigError::read(path, e))?;
        let loaded = self.load_reader(BufReader::new(file)).map_err(|e| match e {
            ConfigError::Io(source) => ConfigError::read(path, source),
            other => other,
        })?;

        info!(path = %path.display(), properties = loaded, "configuration loaded");
        Ok(loaded)
    }

    /// Load properties line by line from any buffered reader.
    ///
    /// Lines are applied as they are read, so a read error part way through
    /// leaves the earlier lines of this input in the store.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, ConfigError> {
        let props = self.props.get_or_insert_with(HashMap::new);
        let mut loaded = 0;
        for line in reader.split(b'\n') {
            if let Some((key, value)) = parse_line(&line?) {
                props.insert(key, value);
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Load properties from in-memory text.
    pub fn load_str(&mut self, text: &str) -> usize {
        // reading from a byte slice cannot fail
        self.load_reader(text.as_bytes()).unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.props.is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.props.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props
            .iter()
            .flat_map(|m| m.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Stored string for `key`, if any.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.props.as_ref()?.get(key).map(String::as_str)
    }

    /// Typed lookup.
    ///
    /// Absent keys (or an uninitialized store) yield `default`. A present
    /// value that does not convert yields `T::zero()`, not `default`.
    pub fn get<T: PropertyValue>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.raw(key) else {
            return default;
        };
        match T::parse_property(raw) {
            Ok(v) => v,
            Err(e) => {
                debug!(key, value = raw, error = %e, "property value did not parse; using zero");
                T::zero()
            }
        }
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key, default.to_string())
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    pub fn get_u64(&self, key: &str, default: u64) -> u64 { self.get(key, default) }
    pub fn get_i64(&self, key: &str, default: i64) -> i64 { self.get(key, default) }
    pub fn get_u32(&self, key: &str, default: u32) -> u32 { self.get(key, default) }
    pub fn get_i32(&self, key: &str, default: i32) -> i32 { self.get(key, default) }
    pub fn get_u16(&self, key: &str, default: u16) -> u16 { self.get(key, default) }
    pub fn get_i16(&self, key: &str, default: i16) -> i16 { self.get(key, default) }
    pub fn get_u8(&self, key: &str, default: u8) -> u8 { self.get(key, default) }
    pub fn get_i8(&self, key: &str, default: i8) -> i8 { self.get(key, default) }
    pub fn get_f32(&self, key: &str, default: f32) -> f32 { self.get(key, default) }
    pub fn get_f64(&self, key: &str, default: f64) -> f64 { self.get(key, default) }
}

impl Serialize for PropertyStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sorted: BTreeMap<&str, &str> = self.iter().collect();
        serializer.collect_map(sorted)
    }
}
