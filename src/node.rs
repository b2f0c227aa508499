use crate::{
    config::Config,
    dto::SendEmailRequest,
    outcome::Outcome,
    service::{EmailTransport, IdmEmailService},
    state::{IdRepository, MAIL_ATTRIBUTE, NodeState, ONE_TIME_PASSWORD_KEY, SystemEnv, USER_ID_KEY},
};

const SUBJECT: &str = "One Time Password";

/// The send-HOTP node: validates session state, resolves the user's mail
/// address and delivers the one-time password through the IDM email service.
pub struct SendHotpNode<T = IdmEmailService> {
    config: Config,
    transport: T,
}

impl SendHotpNode<IdmEmailService> {
    pub fn new(config: Config) -> Self {
        SendHotpNode {
            config,
            transport: IdmEmailService::new(),
        }
    }
}

impl<T: EmailTransport> SendHotpNode<T> {
    pub const fn with_transport(config: Config, transport: T) -> Self {
        SendHotpNode { config, transport }
    }

    /// Execute the node once. Always returns an outcome; failures are logged
    /// and mapped, never propagated. An empty string read from any port is
    /// treated exactly like an absent value.
    pub async fn resolve(
        &self,
        state: &dyn NodeState,
        env: &dyn SystemEnv,
        identities: &dyn IdRepository,
    ) -> Outcome {
        tracing::debug!("Send HOTP node executing");

        let Some(user_id) = non_empty(state.get(USER_ID_KEY)) else {
            tracing::error!("Unable to retrieve the user id from shared state");
            return Outcome::Error;
        };

        let Some(access_token) = non_empty(state.get(&self.config.access_token_field)) else {
            tracing::error!(
                "Unable to retrieve an access token from transient state field '{}'",
                self.config.access_token_field
            );
            return Outcome::Error;
        };

        let Some(fqdn) = non_empty(env.get_property(&self.config.tenant_fqdn_property)) else {
            tracing::error!(
                "Unable to retrieve the tenant FQDN from environment property '{}'",
                self.config.tenant_fqdn_property
            );
            return Outcome::Error;
        };

        let Some(otp) = non_empty(state.get(ONE_TIME_PASSWORD_KEY)) else {
            tracing::error!("Unable to retrieve a one-time password from transient state");
            return Outcome::Error;
        };

        // Only the first value of the mail attribute is ever delivered to
        let mail = identities
            .get_attribute(&user_id, MAIL_ATTRIBUTE)
            .into_iter()
            .next()
            .filter(|mail| !mail.is_empty());
        let Some(mail) = mail else {
            tracing::warn!("No mail attribute registered for user '{}'", user_id);
            return Outcome::NoMail;
        };

        self.send_mail(&user_id, &access_token, &fqdn, &otp, &mail)
            .await
    }

    async fn send_mail(
        &self,
        user_id: &str,
        access_token: &str,
        fqdn: &str,
        otp: &str,
        mail: &str,
    ) -> Outcome {
        let endpoint = format!("https://{fqdn}/openidm/external/email?_action=send");
        let request = SendEmailRequest {
            from: self.config.sender.clone(),
            to: mail.to_string(),
            subject: SUBJECT.to_string(),
            body: format!(
                "Here is your One Time Password. Please enter it into the login browser window: {otp}"
            ),
        };

        tracing::info!(
            "Sending email via the IDM email service for user '{}' to '{}'",
            user_id,
            mail
        );

        let response = match self.transport.send(&endpoint, access_token, &request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Unable to call the IDM email endpoint: {e}");
                return Outcome::Error;
            }
        };

        tracing::debug!(
            "IDM email service response: {}, body: {}",
            response.status,
            response.body
        );

        match response.status {
            200 => {
                tracing::info!("Email sent for user '{}' to '{}'", user_id, mail);
                Outcome::Sent
            }
            401 => {
                tracing::error!(
                    "Access token rejected by the IDM email service (status 401) for user '{}'",
                    user_id
                );
                Outcome::Error
            }
            404 => {
                tracing::error!("IDM email endpoint not found (status 404): {}", endpoint);
                Outcome::Error
            }
            // Catch-all for anything else the service returns
            status => {
                tracing::error!(
                    "Unexpected status {} from the IDM email service for user '{}'",
                    status,
                    user_id
                );
                Outcome::Error
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
