use serde::Serialize;

/// Output columns, in file order.
pub const COLUMNS: [&str; 7] = [
    "company_name",
    "industry",
    "sector",
    "employees",
    "location",
    "description",
    "social_media",
];

/// One company row. Unset fields are empty strings, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyRecord {
    pub company_name: String,
    /// Relative detail page path. Only drives the second fetch; never exported.
    #[serde(skip)]
    pub detail_link: Option<String>,
    pub industry: String,
    pub sector: String,
    pub employees: String,
    pub location: String,
    pub description: String,
    pub social_media: String,
}

/// Fields scraped from a company's detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub employees: String,
    pub location: String,
    pub description: String,
    pub social_media: String,
}

impl CompanyRecord {
    pub fn merge_details(&mut self, details: DetailFields) {
        self.employees = details.employees;
        self.location = details.location;
        self.description = details.description;
        self.social_media = details.social_media;
    }
}
