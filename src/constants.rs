// Petfinder API endpoints
pub const TOKEN_URL: &str = "https://api.petfinder.com/v2/oauth2/token";
pub const LISTING_URL: &str = "https://api.petfinder.com/v2/animals";

// Fixed listing query
pub const ANIMAL_TYPE: &str = "dog";
pub const ORGANIZATION_ID: &str = "OR208";
pub const ADOPTION_STATUS: &str = "adoptable";

// Credential environment variables
pub const CLIENT_ID_ENV: &str = "PETFINDER_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "PETFINDER_CLIENT_SECRET";

// Filter tokens accepted by the API, in prompt order
pub const AGE_OPTIONS: &[&str] = &["baby", "young", "adult", "senior"];
pub const SIZE_OPTIONS: &[&str] = &["small", "medium", "large", "xlarge"];
pub const GENDER_OPTIONS: &[&str] = &["male", "female"];

// Date window aliases
pub const TODAY_ALIASES: &[&str] = &["today"];
pub const LAST_3_DAYS_ALIASES: &[&str] = &["3days", "last-3-days", "last3days"];

// Console output
pub const SEPARATOR: &str = "-----------------------";
pub const LOOKING_TODAY: &str = "Looking for new dogs posted today...";
pub const LOOKING_RECENTLY: &str = "Looking for new dogs posted in the last 3 days...";
pub const LOOKING_FILTERED: &str = "Looking for new dogs with the selected filter options:";
pub const NO_DOGS_TODAY: &str = "No new dogs today :(";
pub const NO_DOGS_RECENTLY: &str = "No new dogs posted recently :(";
pub const NO_DOGS_FILTERED: &str = "No dogs match the selected filters :(";
