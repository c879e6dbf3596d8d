use std::rc::Rc;

use anyhow::anyhow;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use web_sys::Storage;

pub static UPLOAD_FLAG_KEY: &str = "fileUploaded";
static UPLOAD_FLAG_SET: &str = "true";

/// Where the "a file has been uploaded" flag lives.
///
/// The app provides [`LocalStorageFlag`] as context; pages get it back with
/// [`use_upload_flag`].
pub trait UploadFlag {
    /// Raw stored value, `None` when absent or unreadable.
    fn read(&self) -> Option<String>;
    fn mark_uploaded(&self) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;

    fn is_set(&self) -> bool {
        is_satisfied(self.read().as_deref())
    }
}

pub type SharedUploadFlag = Rc<dyn UploadFlag>;

pub fn use_upload_flag() -> SharedUploadFlag {
    use_context::<SharedUploadFlag>()
}

pub fn is_satisfied(value: Option<&str>) -> bool {
    value == Some(UPLOAD_FLAG_SET)
}

/// Flag kept in the browser's `localStorage` under [`UPLOAD_FLAG_KEY`].
pub struct LocalStorageFlag;

fn local_storage() -> anyhow::Result<Storage> {
    web_sys::window()
        .ok_or_else(|| anyhow!("no window"))?
        .local_storage()
        .map_err(|e| anyhow!("local storage unavailable: {:?}", e))?
        .ok_or_else(|| anyhow!("local storage disabled"))
}

impl UploadFlag for LocalStorageFlag {
    fn read(&self) -> Option<String> {
        let storage = match local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!("reading {}: {}", UPLOAD_FLAG_KEY, e);
                return None;
            }
        };

        match storage.get_item(UPLOAD_FLAG_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("reading {}: {:?}", UPLOAD_FLAG_KEY, e);
                None
            }
        }
    }

    fn mark_uploaded(&self) -> anyhow::Result<()> {
        local_storage()?
            .set_item(UPLOAD_FLAG_KEY, UPLOAD_FLAG_SET)
            .map_err(|e| anyhow!("failed to set {}: {:?}", UPLOAD_FLAG_KEY, e))?;

        info!("upload flag set");
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        local_storage()?
            .remove_item(UPLOAD_FLAG_KEY)
            .map_err(|e| anyhow!("failed to remove {}: {:?}", UPLOAD_FLAG_KEY, e))?;

        info!("upload flag cleared");
        Ok(())
    }
}

/// In-memory flag for driving pages without a browser.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryFlag {
    pub value: std::cell::RefCell<Option<String>>,
    pub fail_writes: bool,
}

#[cfg(test)]
impl MemoryFlag {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()).into(),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            value: None.into(),
            fail_writes: true,
        }
    }
}

#[cfg(test)]
impl UploadFlag for MemoryFlag {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn mark_uploaded(&self) -> anyhow::Result<()> {
        if self.fail_writes {
            return Err(anyhow!("failed to set {}", UPLOAD_FLAG_KEY));
        }
        *self.value.borrow_mut() = Some(UPLOAD_FLAG_SET.to_string());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        if self.fail_writes {
            return Err(anyhow!("failed to remove {}", UPLOAD_FLAG_KEY));
        }
        self.value.borrow_mut().take();
        Ok(())
    }
}
