use serde::Deserialize;

use crate::args::LoadArgs;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SinksConfig {
    /// Write the summary as pretty JSON to this path.
    pub summary_file: Option<String>,
    /// POST the summary as JSON to this URL.
    pub webhook_url: Option<String>,
}

impl From<&LoadArgs> for SinksConfig {
    fn from(args: &LoadArgs) -> Self {
        Self {
            summary_file: args.summary_file.clone(),
            webhook_url: args.webhook_url.clone(),
        }
    }
}
