/// Primary environment variable holding the AWS region
pub const AWS_REGION_ENV: &str = "AWS_REGION";

/// Fallback region variable, consulted only when `AWS_REGION` is unset or empty
pub const AWS_DEFAULT_REGION_ENV: &str = "AWS_DEFAULT_REGION";

/// Environment variable holding the ARN of the role to assume
pub const AWS_ROLE_ARN_ENV: &str = "AWS_ROLE_ARN";

/// Environment variable holding the path of the web identity token file
pub const AWS_WEB_IDENTITY_TOKEN_FILE_ENV: &str = "AWS_WEB_IDENTITY_TOKEN_FILE";

/// Session name sent with every AssumeRoleWithWebIdentity request
pub const ROLE_SESSION_NAME: &str = "web_identity_session";

/// Number of characters kept visible at each end of a redacted value
pub const REDACT_VISIBLE_CHARS: usize = 4;

/// Character used to mask hidden portions of a secret
pub const REDACT_MASK_CHAR: char = '*';

/// Returned for values too short to partially reveal
pub const REDACT_FULL_MASK: &str = "****";

/// Variable names listed in the configuration error, in the order operators expect them
pub const REQUIRED_ENV_VARS: &str =
    "AWS_REGION/AWS_DEFAULT_REGION, AWS_ROLE_ARN, AWS_WEB_IDENTITY_TOKEN_FILE";
