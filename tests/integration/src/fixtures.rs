//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};

use market_core::ImageRef;
use market_service::{RegisterModelRequest, RegisterUserRequest};
use serde_json::{json, Value};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user with unique username, email, wallet and external token
#[derive(Debug, Clone)]
pub struct UserFixture {
    pub username: String,
    pub email: String,
    pub wallet_address: String,
    pub token_id: String,
}

impl UserFixture {
    pub fn unique() -> Self {
        let n = unique_suffix();
        Self {
            username: format!("user{n}"),
            email: format!("user{n}@example.com"),
            wallet_address: format!("0xWallet{n:08}"),
            token_id: format!("ext-{n}"),
        }
    }

    pub fn request(&self) -> RegisterUserRequest {
        RegisterUserRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            wallet_address: self.wallet_address.clone(),
            ipfs_url: None,
            openai_token_id: Some(self.token_id.clone()),
        }
    }

    pub fn body(&self) -> Value {
        json!({
            "username": self.username,
            "email": self.email,
            "wallet_address": self.wallet_address,
            "openai_token_id": self.token_id,
        })
    }
}

/// A model with a unique business key
#[derive(Debug, Clone)]
pub struct ModelFixture {
    pub name: String,
    pub model_id: String,
    pub ipfs_url: String,
}

impl ModelFixture {
    pub fn unique() -> Self {
        let n = unique_suffix();
        Self {
            name: format!("Model {n}"),
            model_id: format!("model-{n}"),
            ipfs_url: format!("ipfs://model-{n}"),
        }
    }

    pub fn request(&self) -> RegisterModelRequest {
        RegisterModelRequest {
            name: self.name.clone(),
            model_id: self.model_id.clone(),
            ipfs_url: self.ipfs_url.clone(),
            slug: self.model_id.clone(),
            location: "Lisbon".to_string(),
            about_me: "Hello".to_string(),
            value: 1.5,
            image: ImageRef {
                src: "https://cdn.example.com/a.png".to_string(),
            },
            ..Default::default()
        }
    }

    pub fn body(&self) -> Value {
        json!({
            "name": self.name,
            "model_id": self.model_id,
            "ipfs_url": self.ipfs_url,
            "slug": self.model_id,
            "location": "Lisbon",
            "aboutMe": "Hello",
            "value": 1.5,
            "image": {"src": "https://cdn.example.com/a.png"},
            "icon": {"src": "https://cdn.example.com/i.png"},
        })
    }
}

/// Unique on-chain token id
pub fn unique_token() -> String {
    format!("token-{}", unique_suffix())
}
