use std::{
    env,
    path::{Path, PathBuf},
};

/// Workspace root, derived from the crate manifest dir.
///
/// Relies on `CARGO_MANIFEST_DIR` pointing at a direct workspace member.
pub fn workspace_dir() -> PathBuf {
    Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap())
        .parent()
        .unwrap()
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_dir() {
        let workspace_dir = workspace_dir();
        assert!(workspace_dir.join("configs").exists());
    }
}
