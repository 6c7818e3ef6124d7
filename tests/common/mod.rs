#![allow(dead_code)]

mod mocks;

pub use mocks::{MockReader, MockWriter};

use std::{env::temp_dir, fs, path::PathBuf};

use rand::distr::{Alphanumeric, SampleString};

/// Creates an empty directory under the system temp dir with a random name.
pub fn random_dir() -> PathBuf {
    let name = Alphanumeric.sample_string(&mut rand::rng(), 16);
    let dir = temp_dir().join(format!("csv_report_{}", name));
    fs::create_dir_all(&dir).expect("Failed to create directory");
    dir
}

/// Lets `RUST_LOG` drive log output while debugging a test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
