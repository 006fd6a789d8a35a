#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_ports;

pub use mock_ports::*;

use std::sync::Arc;

pub fn domains(prefix: &str, n: usize) -> Vec<Arc<str>> {
    (0..n)
        .map(|i| Arc::from(format!("{prefix}{i}.example.com")))
        .collect()
}
