//! Folder entity: row model, mutation payloads, transport record, and tree
//! node types.

pub mod model;
pub mod record;
pub mod tree;

pub use model::{CreateFolder, Folder, UpdateFolder};
pub use record::FolderRecord;
pub use tree::{FolderNode, TreeSnapshot};
