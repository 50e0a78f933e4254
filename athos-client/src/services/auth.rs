use super::api_client::{ApiClient, ApiRequest, ResponseEnvelope};
use crate::models::auth::{LoginRequest, MeResponse, SignupRequest, TokenResponse};
use athos_core::Result;
use secrecy::Secret;

/// Sign-in, sign-up and profile calls.
#[derive(Clone, Debug)]
pub struct AuthApi {
    api: ApiClient,
}

impl AuthApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a bearer token and store it in the session.
    pub async fn login(
        &self,
        email: &str,
        password: Secret<String>,
    ) -> Result<ResponseEnvelope<TokenResponse>> {
        let body = LoginRequest {
            email: email.to_string(),
            password,
        };

        let envelope = self
            .api
            .request::<TokenResponse>(ApiRequest::post("/v1/auth/login").json(&body)?)
            .await?;

        self.api.session().sign_in(&envelope.data.access_token).await?;
        tracing::info!(request_id = ?envelope.request_id, "Signed in");

        Ok(envelope)
    }

    /// Create an account. The returned token is stored like a login.
    pub async fn signup(&self, request: SignupRequest) -> Result<ResponseEnvelope<TokenResponse>> {
        let envelope = self
            .api
            .request::<TokenResponse>(ApiRequest::post("/v1/auth/signup").json(&request)?)
            .await?;

        self.api.session().sign_in(&envelope.data.access_token).await?;
        tracing::info!(request_id = ?envelope.request_id, "Account created and signed in");

        Ok(envelope)
    }

    pub async fn me(&self) -> Result<ResponseEnvelope<MeResponse>> {
        self.api
            .request(ApiRequest::get("/v1/auth/me").authenticated())
            .await
    }

    /// Forget the stored credential. The backend keeps no session state.
    pub async fn logout(&self) -> Result<()> {
        self.api.session().sign_out().await?;
        tracing::info!("Signed out");
        Ok(())
    }
}
