//! One adapter per ATS provider. Each walks its provider's job JSON and
//! feeds raw field values through the shared classifiers and parsers.

pub mod ashby;
pub mod bamboo;
pub mod gem;
pub mod greenhouse;
pub mod lever;
pub mod rippling;
pub mod workable;

pub use ashby::AshbyAdapter;
pub use bamboo::BambooAdapter;
pub use gem::GemAdapter;
pub use greenhouse::GreenhouseAdapter;
pub use lever::LeverAdapter;
pub use rippling::RipplingAdapter;
pub use workable::WorkableAdapter;
