use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::fs;
use std::path::Path;

pub fn run(data_dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(data_dir)?;
    let mut result = CmdResult::default();
    result.data_dir = Some(data_dir.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Initialized recipe book at {}",
        data_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("book");
        let result = run(&target).unwrap();
        assert!(target.is_dir());
        assert_eq!(result.data_dir.as_deref(), Some(target.as_path()));
    }
}
