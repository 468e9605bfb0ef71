//! Asset folders, JSON configs and Markdown docs

pub mod assets;
pub mod configs;
pub mod docs;

pub use assets::create_asset_folders;
pub use configs::{write_configs, ConfigDocument, CONFIG_DOCUMENTS};
pub use docs::{write_docs, DocContext, DocKind};
