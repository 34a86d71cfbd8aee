use std::path::{Path, PathBuf};

use crate::collaborators::FileChooser;

/// Native "Save File" dialog.
pub struct RfdChooser;

impl FileChooser for RfdChooser {
    fn choose_save_path(&mut self, proposed: &Path) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Save File");
        if let Some(name) = proposed.file_name() {
            dialog = dialog.set_file_name(name.to_string_lossy());
        }
        if let Some(parent) = proposed.parent().filter(|p| p.is_dir()) {
            dialog = dialog.set_directory(parent);
        }
        dialog.save_file()
    }
}
