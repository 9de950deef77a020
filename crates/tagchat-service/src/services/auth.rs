//! Authentication service
//!
//! Handles user registration and login. Sessions are stateless JWTs, so
//! there is no logout or refresh path.

use rand::Rng;
use tracing::{info, instrument, warn};

use tagchat_common::auth::{hash_password, validate_password_strength, verify_password};
use tagchat_common::AppError;
use tagchat_core::{DomainError, User};

use crate::dto::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::tag::{TagAllocator, MAX_ATTEMPTS};

const ADJECTIVES: &[&str] = &[
    "swift", "clever", "brave", "quiet", "lucky", "mellow", "fuzzy", "stellar", "crimson",
    "golden", "shadow", "cosmic", "frosty", "electric", "wandering", "midnight",
];

const NOUNS: &[&str] = &[
    "falcon", "otter", "panda", "wolf", "raven", "tiger", "badger", "dolphin", "phoenix",
    "lynx", "viper", "heron", "mantis", "walrus", "gecko", "condor",
];

/// Generate a random display name: adjective + noun + 4 digits
fn generate_username<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let digits = rng.gen_range(1000..10000);
    format!("{adjective}{noun}{digits}")
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// The username and tag are server-assigned; only credentials come from
    /// the request.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if email already exists
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let username = generate_username(&mut rand::thread_rng());
        let allocator = TagAllocator::new(self.ctx);

        // The allocator pre-checks tags, but a concurrent registration can
        // still grab one first; the unique constraint surfaces that as
        // DuplicateTag and we draw again.
        let mut attempts = 0;
        let user = loop {
            attempts += 1;
            let tag = allocator.allocate().await?;
            let user = User::new(
                self.ctx.generate_id(),
                tag,
                request.email.clone(),
                username.clone(),
            );

            match self.ctx.user_repo().create(&user, &password_hash).await {
                Ok(()) => break user,
                Err(DomainError::DuplicateTag) if attempts < MAX_ATTEMPTS => {
                    warn!(attempts, "Tag collision on insert, drawing a new tag");
                }
                Err(e) => return Err(e.into()),
            }
        };

        info!(user_id = %user.id, tag = %user.tag, "User registered successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id, &user.email)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token.access_token,
            token.expires_in,
            ProfileResponse::from(&user),
        ))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id, &user.email)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token.access_token,
            token.expires_in,
            ProfileResponse::from(&user),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::test_context;

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_generated_username_shape() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let name = generate_username(&mut rng);
            let digits: String = name.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(digits.len(), 4);
            assert!(name.len() > 4);
        }
    }

    #[tokio::test]
    async fn test_register_assigns_tag_and_token() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        let response = service.register(register_request("a@example.com")).await.unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert!(!response.access_token.is_empty());
        assert_eq!(response.user.email, "a@example.com");
        assert_eq!(response.user.tag.len(), 6);
        // Default avatar until the user picks one
        assert_eq!(response.user.avatar, "👤");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        service.register(register_request("a@example.com")).await.unwrap();
        let result = service.register(register_request("a@example.com")).await;
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::EmailAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_register_weak_password() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        let result = service
            .register(RegisterRequest {
                email: "a@example.com".to_string(),
                password: "short".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::App(AppError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_login_roundtrip() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        service.register(register_request("a@example.com")).await.unwrap();

        let response = service
            .login(LoginRequest {
                email: "a@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.email, "a@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        service.register(register_request("a@example.com")).await.unwrap();

        let result = service
            .login(LoginRequest {
                email: "a@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::App(AppError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        let result = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::App(AppError::InvalidCredentials))
        ));
    }
}
