pub mod address;
pub mod compensation;
pub mod config;
pub mod date;
pub mod department;
pub mod employment;
pub mod error;
pub mod location;
pub mod metadata;
pub mod models;
pub mod payload;
pub mod traits;

pub use address::Address;
pub use compensation::{Compensation, parse_compensation};
pub use config::NormalizeConfig;
pub use date::{DateNormalizer, RawDate, normalize_date};
pub use department::{Department, classify_department};
pub use employment::{EmploymentType, classify_employment_type};
pub use error::AppError;
pub use location::{LocationType, classify_location_type, location_type_keyword};
pub use metadata::MetadataTags;
pub use models::{Company, Equity, JobRecord, compute_hash};
pub use traits::SourceAdapter;
