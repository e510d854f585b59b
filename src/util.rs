use crate::config::{Error, Result};
use std::fs::File;
use std::path::Path;

pub fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(err) => {
            tracing::warn!(kind, path = %path.display(), "opening file failed");
            Err(Error::Open {
                path: path.to_owned(),
                err,
            })
        }
        Ok(file) => Ok(file),
    }
}
