//! Mutations scoped to the session's current directory.
//!
//! Each method delegates to the matching `fs_op` primitive and then
//! re-lists the directory so `entries()` reflects the change.

use super::*;
use crate::fs_op::{create, mv, remove};

impl Session {
    /// Create an empty file named `name` in the current directory.
    pub fn new_file(&mut self, name: &str) -> Result<(), FsOpError> {
        create::create_file(&self.cwd, name)?;
        self.refresh_after_mutation();
        Ok(())
    }

    /// Create an empty directory named `name` in the current directory.
    pub fn new_dir(&mut self, name: &str) -> Result<(), FsOpError> {
        create::create_dir(&self.cwd, name)?;
        self.refresh_after_mutation();
        Ok(())
    }

    /// Delete `name` from the current directory without recursing.
    pub fn delete(&mut self, name: &str) -> Result<(), FsOpError> {
        remove::delete_entry(&self.cwd, name)?;
        self.refresh_after_mutation();
        Ok(())
    }

    /// Delete `name` and everything below it. Callers confirm first.
    pub fn delete_tree(&mut self, name: &str) -> Result<(), FsOpError> {
        remove::delete_tree(&self.cwd, name)?;
        self.refresh_after_mutation();
        Ok(())
    }

    /// Rename `old_name` to `new_name` within the current directory.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), FsOpError> {
        mv::rename_entry(&self.cwd, old_name, new_name)?;
        self.refresh_after_mutation();
        Ok(())
    }
}
