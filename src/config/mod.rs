mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config};
pub use model::{
    Config, DEFAULT_MAX_PAGES, ForbiddenConfig, InstitutionsConfig, KeywordsConfig,
    PageHeaderConfig, PagesConfig, ReferencesConfig, SectionSpec, SectionsConfig,
    TeamHeaderConfig,
};
pub use validation::validate_config_semantics;
