//! # tagchat-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, FriendService, MessageService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TagAllocator, UserService,
};
