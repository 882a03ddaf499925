pub const QUESTIONS_URL: &str = "/questions";
pub const ALL_QUESTIONS_URL: &str = "/questions/all";
pub const RANDOM_QUESTION_URL: &str = "/questions/random";
pub const BY_LICENSE_URL: &str = "/questions/by-license/{license_type}";

pub const DATASTORE_BASE_URL: &str = "https://data.gov.il";
pub const DATASTORE_SEARCH_PATH: &str = "/api/3/action/datastore_search";

/// Resource id of the theory-test question bank on data.gov.il.
pub const QUESTION_RESOURCE_ID: &str = "bf7cb748-f220-474b-a4d5-2d59f93db28d";

/// Upper bound of rows requested from the datastore in one call.
pub const FETCH_LIMIT: usize = 2000;

/// Default sample size served by `/questions`.
pub const SAMPLE_LIMIT: usize = 50;

/// Cap on `/questions/by-license/{type}` results, sized like a real exam.
pub const LICENSE_MATCH_LIMIT: usize = 30;

/// Placeholder prompt for records without a title, in the dataset's language.
pub const UNTITLED_QUESTION: &str = "שאלה ללא כותרת";
