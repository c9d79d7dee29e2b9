use gloo_net::http::{Request, Response};
use liftlog_domain::{self as domain, AuthError, AuthListener, AuthListeners, AuthProvider};
use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::local_storage::{LocalStorage, Session};

pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl AuthConfig {
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    #[must_use]
    pub fn url(&self, method: &str) -> String {
        format!(
            "{}/accounts:{method}?key={}",
            self.endpoint.trim_end_matches('/'),
            self.api_key
        )
    }
}

/// Account management of the Identity Toolkit REST API.
///
/// The current session is kept in local storage, so that it survives
/// reloads of the app.
pub struct IdentityToolkit {
    config: AuthConfig,
    listeners: AuthListeners,
}

impl IdentityToolkit {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            listeners: AuthListeners::default(),
        }
    }

    async fn authenticate(
        &self,
        method: &str,
        email: &str,
        password: &str,
    ) -> Result<domain::User, AuthError> {
        let response: AuthResponse = self
            .post(
                method,
                &Credentials {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        let session = Session {
            user_id: response.local_id,
            email: response.email,
            email_verified: false,
            id_token: response.id_token,
        };
        store(&session)?;
        let user = session.user();
        self.listeners.notify(Some(&user));
        Ok(user)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let response = Request::post(&self.config.url(method))
            .json(body)
            .map_err(|err| AuthError::Provider(err.to_string()))?
            .send()
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| AuthError::Provider(format!("deserialization failed: {err}")))
        } else {
            Err(error(response).await)
        }
    }
}

impl AuthProvider for IdentityToolkit {
    async fn sign_in(&self, email: &str, password: &str) -> Result<domain::User, AuthError> {
        self.authenticate("signInWithPassword", email, password)
            .await
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<domain::User, AuthError> {
        self.authenticate("signUp", email, password).await
    }

    async fn send_email_verification(&self, user: &domain::User) -> Result<(), AuthError> {
        let session = LocalStorage
            .read_session()
            .map_err(|_| AuthError::NoSession)?;
        if session.user().id != user.id {
            return Err(AuthError::NoSession);
        }
        let _: OobCodeResponse = self
            .post(
                "sendOobCode",
                &OobCodeRequest {
                    request_type: "VERIFY_EMAIL",
                    id_token: &session.id_token,
                },
            )
            .await?;
        debug!("sent verification email to {}", user.email);
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        LocalStorage.delete_session();
        self.listeners.notify(None);
        Ok(())
    }

    fn subscribe(&self, listener: AuthListener) -> domain::Subscription {
        let user = LocalStorage.read_session().ok().map(|s| s.user());
        listener(user.as_ref());
        self.listeners.subscribe(listener)
    }
}

fn store(session: &Session) -> Result<(), AuthError> {
    LocalStorage
        .write_session(session)
        .map_err(|err| AuthError::Provider(err.to_string()))
}

async fn error(response: Response) -> AuthError {
    match response.json::<ErrorResponse>().await {
        Ok(body) => map_error(&body.error.message),
        Err(_) => AuthError::Provider(format!(
            "{} {}",
            response.status(),
            response.status_text()
        )),
    }
}

/// Map an error code of the API to an authentication error.
///
/// Codes may carry a description after a colon, e.g. `WEAK_PASSWORD : Password
/// should be at least 6 characters`.
fn map_error(message: &str) -> AuthError {
    let code = message.split(':').next().unwrap_or_default().trim();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            AuthError::InvalidCredentials
        }
        "EMAIL_EXISTS" => AuthError::EmailExists,
        "INVALID_ID_TOKEN" | "USER_NOT_FOUND" | "TOKEN_EXPIRED" => AuthError::NoSession,
        code if code.starts_with("WEAK_PASSWORD") => AuthError::WeakPassword,
        _ => AuthError::Provider(message.to_string()),
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    id_token: &'a str,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    local_id: String,
    email: String,
    id_token: String,
}

#[derive(Deserialize, Debug)]
struct OobCodeResponse {}

#[derive(Deserialize, Debug, PartialEq)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize, Debug, PartialEq)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_url() {
        assert_eq!(
            AuthConfig::new("abc").url("signUp"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=abc"
        );
        assert_eq!(
            AuthConfig {
                api_key: String::from("abc"),
                endpoint: String::from("http://localhost:9099/"),
            }
            .url("signInWithPassword"),
            "http://localhost:9099/accounts:signInWithPassword?key=abc"
        );
    }

    #[rstest]
    #[case("EMAIL_NOT_FOUND", AuthError::InvalidCredentials)]
    #[case("INVALID_PASSWORD", AuthError::InvalidCredentials)]
    #[case("INVALID_LOGIN_CREDENTIALS", AuthError::InvalidCredentials)]
    #[case("EMAIL_EXISTS", AuthError::EmailExists)]
    #[case(
        "WEAK_PASSWORD : Password should be at least 6 characters",
        AuthError::WeakPassword
    )]
    #[case("INVALID_ID_TOKEN", AuthError::NoSession)]
    #[case("USER_NOT_FOUND", AuthError::NoSession)]
    #[case(
        "TOO_MANY_ATTEMPTS_TRY_LATER",
        AuthError::Provider(String::from("TOO_MANY_ATTEMPTS_TRY_LATER"))
    )]
    fn test_map_error(#[case] message: &str, #[case] expected: AuthError) {
        assert_eq!(map_error(message), expected);
    }

    #[test]
    fn test_credentials_serialize() {
        assert_eq!(
            json!(Credentials {
                email: "alice@example.com",
                password: "secret",
                return_secure_token: true,
            }),
            json!({
                "email": "alice@example.com",
                "password": "secret",
                "returnSecureToken": true,
            })
        );
    }

    #[test]
    fn test_oob_code_request_serialize() {
        assert_eq!(
            json!(OobCodeRequest {
                request_type: "VERIFY_EMAIL",
                id_token: "token",
            }),
            json!({ "requestType": "VERIFY_EMAIL", "idToken": "token" })
        );
    }

    #[test]
    fn test_auth_response_deserialize() {
        let response: AuthResponse = serde_json::from_value(json!({
            "kind": "identitytoolkit#SignupNewUserResponse",
            "idToken": "token",
            "email": "alice@example.com",
            "refreshToken": "refresh",
            "expiresIn": "3600",
            "localId": "W4fJq2nRkLhT8s1bXyZ0",
        }))
        .unwrap();
        assert_eq!(
            response,
            AuthResponse {
                local_id: String::from("W4fJq2nRkLhT8s1bXyZ0"),
                email: String::from("alice@example.com"),
                id_token: String::from("token"),
            }
        );
    }

    #[test]
    fn test_error_response_deserialize() {
        let response: ErrorResponse = serde_json::from_value(json!({
            "error": {
                "code": 400,
                "message": "EMAIL_EXISTS",
                "errors": [{ "message": "EMAIL_EXISTS", "domain": "global", "reason": "invalid" }],
            }
        }))
        .unwrap();
        assert_eq!(map_error(&response.error.message), AuthError::EmailExists);
    }
}
