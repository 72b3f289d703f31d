//! INI league configuration adapter.

use crate::domain::error::TradefairError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

/// League settings read from an INI file. Section and key names are
/// case-insensitive; values are trimmed.
#[derive(Debug)]
pub struct FileConfigAdapter {
    source: String,
    ini: Ini,
}

impl FileConfigAdapter {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TradefairError> {
        let source = path.as_ref().display().to_string();
        let mut ini = Ini::new();
        ini.load(path.as_ref())
            .map_err(|reason| TradefairError::ConfigParse {
                file: source.clone(),
                reason,
            })?;
        Ok(Self { source, ini })
    }

    pub fn parse(content: &str) -> Result<Self, TradefairError> {
        let source = "<inline>".to_string();
        let mut ini = Ini::new();
        ini.read(content.to_string())
            .map_err(|reason| TradefairError::ConfigParse {
                file: source.clone(),
                reason,
            })?;
        Ok(Self { source, ini })
    }

    /// Where the settings came from, for log lines.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.ini.get(section, key).map(|v| v.trim().to_string())
    }
}
