//! Quick start: build, search and render an error stack.

use errstack::prelude::*;

#[derive(Debug, PartialEq)]
enum StorageError {
    DiskFull,
    PermissionDenied,
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::DiskFull => f.write_str("disk full"),
            StorageError::PermissionDenied => f.write_str("permission denied"),
        }
    }
}

impl_stack_error!(StorageError, eq);

fn write_file() -> Result<(), StorageError> {
    Err(StorageError::DiskFull)
}

fn save() -> Result<(), ErrorStack> {
    write_file().context("writing cache file")?;
    Ok(())
}

fn handle_request() -> Result<(), ErrorStack> {
    save().context_with(|| format!("request {} failed", 7))
}

fn main() {
    let Err(stack) = handle_request() else {
        return;
    };

    println!("plain:   {}", stack);
    println!("quoted:  {}", stack.quoted());
    println!("verbose:\n{:#}", stack);

    println!("root is disk full: {}", stack.is(&StorageError::DiskFull));
    println!("permission denied at: {:?}", stack.first(&StorageError::PermissionDenied));
    println!("context levels: {:?}", stack.find(&Message::new("writing cache file"), None));
}
