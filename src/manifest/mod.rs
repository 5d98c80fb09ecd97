//! package.json reading, patching and writing

mod package_json;

pub use package_json::{
    apply_to_file, patch_manifest, AppliedUpdate, DependencySection, PatchResult,
};
