mod model;

pub use model::{
    COMMENT_MARKER, DEFAULT_ROOT, EXCLUDED_DIRECTORIES, EXCLUDED_FILE_SUFFIX, SOURCE_EXTENSION,
    SourceConfig,
};
