use serde::{Deserialize, Serialize};

/// JSON body of the IDM email-send action. Built fresh per invocation,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}
