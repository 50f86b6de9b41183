//! Use cases - the orchestrators exposed to consumers

pub mod analyze_company;
pub mod compare_companies;

pub use analyze_company::{AnalyzeCompanyError, AnalyzeCompanyInput, AnalyzeCompanyUseCase};
pub use compare_companies::{
    CompareCompaniesError, CompareCompaniesInput, CompareCompaniesUseCase,
};
