//! Shared test utilities

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use app_version_check::{InfoPlist, ItunesLookup, MainLoop, VersionChecker, main_context};

pub const BUNDLE_ID: &str = "com.example.notes";

/// Write an Info.plist with the given entries into a fresh temp directory
pub fn write_info_plist(version: Option<&str>, bundle_id: Option<&str>) -> (TempDir, InfoPlist) {
    let mut entries = String::new();
    if let Some(bundle_id) = bundle_id {
        entries.push_str(&format!(
            "    <key>CFBundleIdentifier</key>\n    <string>{}</string>\n",
            bundle_id
        ));
    }
    if let Some(version) = version {
        entries.push_str(&format!(
            "    <key>CFBundleShortVersionString</key>\n    <string>{}</string>\n",
            version
        ));
    }

    let contents = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
{}</dict>
</plist>
"#,
        entries
    );

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Info.plist");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, InfoPlist::new(path))
}

/// Lookup body with a single result
pub fn lookup_body(version: &str) -> String {
    format!(
        r#"{{
            "resultCount": 1,
            "results": [
                {{
                    "version": "{}",
                    "trackViewUrl": "https://apps.apple.com/in/app/notes/id100",
                    "bundleId": "com.example.notes",
                    "minimumOsVersion": "15.0"
                }}
            ]
        }}"#,
        version
    )
}

/// Build a checker wired to a real Info.plist and an iTunes lookup at `base_url`
pub fn create_checker(plist: InfoPlist, base_url: &str) -> (VersionChecker, MainLoop) {
    let (main, main_loop) = main_context();
    let checker = VersionChecker::new(Arc::new(plist), Arc::new(ItunesLookup::new(base_url)), main);
    (checker, main_loop)
}

/// Collects values delivered to callbacks
pub struct Received<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Send + 'static> Received<T> {
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn callback(&self) -> Box<dyn FnOnce(T) + Send> {
        let values = Arc::clone(&self.values);
        Box::new(move |value| values.lock().unwrap().push(value))
    }

    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.values.lock().unwrap())
    }
}
