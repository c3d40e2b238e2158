//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const TAURI_CONF: &str = r#"{
  "$schema": "../node_modules/@tauri-apps/cli/schema.json",
  "build": {
    "beforeBuildCommand": "npm run build",
    "beforeDevCommand": "npm run dev",
    "devPath": "http://localhost:5173",
    "distDir": "../dist"
  },
  "package": {
    "productName": "Lab Tracker",
    "version": "0.1.0"
  },
  "tauri": {
    "allowlist": { "all": false },
    "bundle": {
      "active": true,
      "identifier": "com.example.labtracker",
      "targets": "all"
    },
    "windows": [{ "title": "Lab Tracker", "width": 1200, "height": 800 }]
  }
}
"#;

pub const CARGO_TOML: &str = r#"[package]
name = "lab-tracker"
version = "0.1.0"
description = "Lab results tracker"
authors = ["you"]
edition = "2021"

# See more keys at https://doc.rust-lang.org/cargo/reference/manifest.html

[build-dependencies]
tauri-build = { version = "1.5", features = [] }

[dependencies]
tauri = { version = "1.5", features = ["shell-open"] }
serde = { version = "1.0", features = ["derive"] }
serde_json = "1.0"

[features]
custom-protocol = ["tauri/custom-protocol"]
"#;

pub const PACKAGE_JSON: &str = r#"{
    "name": "lab-tracker",
    "private": true,
    "version": "0.1.0",
    "type": "module",
    "scripts": {
        "dev": "vite",
        "build": "tsc && vite build",
        "tauri": "tauri",
        "tauri:build": "tauri build"
    }
}
"#;

/// A Tauri-shaped project in a temp directory.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    /// Create a project with all three manifests at version 0.1.0.
    pub fn new() -> Self {
        Self::with_cargo_toml(CARGO_TOML)
    }

    /// Create a project with a custom src-tauri/Cargo.toml.
    pub fn with_cargo_toml(cargo_toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        std::fs::create_dir_all(dir.path().join("src-tauri")).expect("Failed to create src-tauri");

        let project = Self { dir };
        project.write("src-tauri/tauri.conf.json", TAURI_CONF);
        project.write("src-tauri/Cargo.toml", cargo_toml);
        project.write("package.json", PACKAGE_JSON);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) {
        std::fs::write(self.path(rel), content)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", rel, e));
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e))
    }

    pub fn read_json(&self, rel: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(rel))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", rel, e))
    }

    /// Contents of all three manifests, in update order.
    pub fn snapshot(&self) -> [String; 3] {
        [
            self.read("src-tauri/tauri.conf.json"),
            self.read("src-tauri/Cargo.toml"),
            self.read("package.json"),
        ]
    }
}
