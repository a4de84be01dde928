mod loader;
mod pre_main_async;
mod source;

#[cfg(not(target_arch = "wasm32"))]
pub mod sample_gen;
#[cfg(not(target_arch = "wasm32"))]
mod writer;

pub use {
    loader::{LoadReport, Provenance, load_datasets},
    pre_main_async::fetch_datasets,
    source::{DatasetSource, EmbeddedSample},
};

#[cfg(not(target_arch = "wasm32"))]
pub use {source::DirectorySource, writer::write_dataset};
