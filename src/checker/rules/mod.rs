mod headers;
mod identifiers;
mod page_count;
mod sections;

pub use headers::{PageHeaderRule, TeamHeaderRule};
pub use identifiers::PatternScanRule;
pub use page_count::PageCountRule;
pub use sections::{RecommendedSectionRule, RequiredSection, RequiredSectionsRule};

pub const PAGE_COUNT: &str = "page-count";
pub const TEAM_HEADER: &str = "team-header";
pub const PAGE_HEADER: &str = "page-header";
pub const FORBIDDEN_IDENTIFIERS: &str = "forbidden-identifiers";
pub const INSTITUTION_NAMES: &str = "institution-names";
pub const REQUIRED_SECTIONS: &str = "required-sections";
pub const REFERENCES: &str = "references";
pub const KEYWORDS: &str = "keywords";
