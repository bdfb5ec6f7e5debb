use std::num::ParseIntError;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ScoreStoreError {
    Io(std::io::Error),
    Parse(ParseIntError),
}

impl std::fmt::Display for ScoreStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreStoreError::Io(e) => write!(f, "IO error: {}", e),
            ScoreStoreError::Parse(e) => write!(f, "Corrupt best score file: {}", e),
        }
    }
}

impl std::error::Error for ScoreStoreError {}

impl From<std::io::Error> for ScoreStoreError {
    fn from(e: std::io::Error) -> Self {
        ScoreStoreError::Io(e)
    }
}

impl From<ParseIntError> for ScoreStoreError {
    fn from(e: ParseIntError) -> Self {
        ScoreStoreError::Parse(e)
    }
}

// Boundary to the persistence collaborator: load once at startup, save on
// game over.
pub trait BestScoreStore {
    fn load(&self) -> Result<Option<u32>, ScoreStoreError>;
    fn save(&self, best_level: u32) -> Result<(), ScoreStoreError>;
}

pub struct FileBestScoreStore {
    path: PathBuf,
}

impl FileBestScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileBestScoreStore {
    fn load(&self) -> Result<Option<u32>, ScoreStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ScoreStoreError::Io(e)),
        };
        Ok(Some(content.trim().parse::<u32>()?))
    }

    fn save(&self, best_level: u32) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, best_level.to_string())?;
        Ok(())
    }
}
