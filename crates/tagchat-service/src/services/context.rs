//! Service context - dependency container for services
//!
//! Holds the repositories, the rate limiter, and other dependencies needed
//! by services. Repositories are trait objects, so the same context works
//! over the PostgreSQL and in-memory backings.

use std::sync::Arc;

use tagchat_common::auth::JwtService;
use tagchat_common::RateLimitConfig;
use tagchat_core::{
    FriendRepository, MessageRepository, RateLimiter, Snowflake, SnowflakeGenerator,
    UserRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    friend_repo: Arc<dyn FriendRepository>,
    message_repo: Arc<dyn MessageRepository>,

    // Per-user budgets
    rate_limiter: Arc<dyn RateLimiter>,
    rate_limits: RateLimitConfig,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the friend repository
    pub fn friend_repo(&self) -> &dyn FriendRepository {
        self.friend_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the rate limiter
    pub fn rate_limiter(&self) -> &dyn RateLimiter {
        self.rate_limiter.as_ref()
    }

    /// Get the configured per-user budgets
    pub fn rate_limits(&self) -> &RateLimitConfig {
        &self.rate_limits
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("rate_limits", &self.rate_limits)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    friend_repo: Option<Arc<dyn FriendRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    rate_limiter: Option<Arc<dyn RateLimiter>>,
    rate_limits: Option<RateLimitConfig>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn friend_repo(mut self, repo: Arc<dyn FriendRepository>) -> Self {
        self.friend_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    pub fn rate_limits(mut self, limits: RateLimitConfig) -> Self {
        self.rate_limits = Some(limits);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            friend_repo: self
                .friend_repo
                .ok_or_else(|| ServiceError::validation("friend_repo is required"))?,
            message_repo: self
                .message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            rate_limiter: self
                .rate_limiter
                .ok_or_else(|| ServiceError::validation("rate_limiter is required"))?,
            rate_limits: self
                .rate_limits
                .ok_or_else(|| ServiceError::validation("rate_limits is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        })
    }
}
