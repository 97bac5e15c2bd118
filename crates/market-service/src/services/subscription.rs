//! Subscription lifecycle service
//!
//! One implementation for every chain. The chain's [`ChainSpec`] decides the
//! table, which listing fields are recorded, and which identity key resolves
//! owners; nothing here branches on the chain itself.
//!
//! Ownership reassignment (`update`) performs no authorization: any caller
//! naming an existing user can move any subscription to that user. Every
//! reassignment is logged at `warn`.

use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use market_core::{
    Chain, ChainSpec, DomainError, IdentityKey, Listing, Model, Snowflake, Subscription, User,
};

use crate::dto::{
    ListSubscriptionRequest, ListedSubscriptionResponse, PurchaseResponse,
    PurchaseSubscriptionRequest, SubscriptionDetails, SubscriptionResponse, UpdateSubscriptionRequest,
    UserInfoQuery, UserInfoResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::validation::{non_blank, require};

/// Subscription lifecycle for one chain
pub struct SubscriptionService<'a> {
    ctx: &'a ServiceContext,
    chain: Chain,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(ctx: &'a ServiceContext, chain: Chain) -> Self {
        Self { ctx, chain }
    }

    fn spec(&self) -> &'static ChainSpec {
        self.chain.spec()
    }

    /// Purchase a token: resolve buyer by email and model by model id, then
    /// insert an unlisted subscription
    #[instrument(skip(self, request), fields(chain = %self.chain, token_id = %request.token_id))]
    pub async fn purchase(&self, request: PurchaseSubscriptionRequest) -> ServiceResult<PurchaseResponse> {
        require(&[
            ("Email", request.email.as_str()),
            ("modelId", request.model_id.as_str()),
            ("tokenId", request.token_id.as_str()),
        ])?;
        let email = request.email.trim();
        let model_id = request.model_id.trim();
        let token_id = request.token_id.trim();

        let user = self.resolve_user(IdentityKey::Email, email).await?;
        let model = self
            .ctx
            .model_repo()
            .find_by_model_id(model_id)
            .await?
            .ok_or_else(|| DomainError::ModelNotFound(model_id.to_string()))?;

        let subscription = Subscription::purchase(
            self.ctx.generate_id(),
            self.chain,
            user.id,
            model.id,
            token_id.to_string(),
        );
        self.ctx.subscription_repo().create(&subscription).await?;

        info!(
            subscription_id = %subscription.id,
            user_id = %user.id,
            model_id = %model.model_id,
            "Subscription purchased"
        );
        Ok(PurchaseResponse::from(&subscription))
    }

    /// Mark a subscription as listed and record the listing fields the chain keeps
    ///
    /// Listing an already listed subscription overwrites the recorded fields.
    #[instrument(skip(self, request), fields(chain = %self.chain, token_id = %request.token_id))]
    pub async fn list(&self, request: ListSubscriptionRequest) -> ServiceResult<SubscriptionResponse> {
        let fields = self.spec().listing;
        let price = request.price.as_deref().unwrap_or_default();
        let listing_id = request.listing_id.as_deref().unwrap_or_default();

        let mut required = vec![("TokenId", request.token_id.as_str())];
        if fields.listing_id {
            required.push(("listingId", listing_id));
        }
        if fields.price {
            required.push(("price", price));
        }
        require(&required)?;

        let token_id = request.token_id.trim();
        let listing = Listing::for_chain(fields, non_blank(Some(price)), non_blank(Some(listing_id)));

        let subscription = self
            .ctx
            .subscription_repo()
            .mark_listed(self.chain, token_id, &listing)
            .await?
            .ok_or_else(|| self.not_found(token_id))?;

        info!(price = ?subscription.price, "Subscription listed");
        Ok(SubscriptionResponse::from(subscription))
    }

    /// Reassign a subscription to the user named by the chain's identity key
    /// and take it off the market
    ///
    /// Price and listing id are kept. Repeating the call is a no-op.
    #[instrument(skip(self, request), fields(chain = %self.chain, token_id = %request.token_id))]
    pub async fn update(&self, request: UpdateSubscriptionRequest) -> ServiceResult<SubscriptionResponse> {
        let key = self.spec().owner_key;
        let identity = match key {
            IdentityKey::WalletAddress => request.wallet_address.as_deref(),
            IdentityKey::Email => request.email.as_deref(),
        }
        .unwrap_or_default();
        let identity_label = match key {
            IdentityKey::WalletAddress => "wallet_address",
            IdentityKey::Email => "email",
        };
        require(&[("TokenId", request.token_id.as_str()), (identity_label, identity)])?;

        let token_id = request.token_id.trim();
        let owner = self.resolve_user(key, identity.trim()).await?;

        let subscription = self
            .ctx
            .subscription_repo()
            .transfer(self.chain, token_id, owner.id)
            .await?
            .ok_or_else(|| self.not_found(token_id))?;

        warn!(
            new_owner = %owner.id,
            "Subscription ownership reassigned without an ownership check"
        );
        Ok(SubscriptionResponse::from(subscription))
    }

    /// All listed subscriptions on the chain, each with its model
    ///
    /// Rows whose model no longer resolves, or whose model lookup fails, are
    /// skipped.
    #[instrument(skip(self), fields(chain = %self.chain))]
    pub async fn listed(&self) -> ServiceResult<Vec<ListedSubscriptionResponse>> {
        let subscriptions = self.ctx.subscription_repo().find_listed(self.chain).await?;
        let mut models = ModelLookup::new(self.ctx);

        let mut listed = Vec::with_capacity(subscriptions.len());
        for subscription in &subscriptions {
            if let Some(model) = models.get(subscription).await {
                listed.push(ListedSubscriptionResponse::new(subscription, model));
            }
        }

        debug!(count = listed.len(), "Listed subscriptions resolved");
        Ok(listed)
    }

    /// A user (resolved by the chain's identity key) and the subscriptions
    /// they own on this chain
    #[instrument(skip(self, query), fields(chain = %self.chain))]
    pub async fn user_info(&self, query: UserInfoQuery) -> ServiceResult<UserInfoResponse> {
        let key = self.spec().owner_key;
        let (label, identity) = match key {
            IdentityKey::WalletAddress => ("Wallet address", query.wallet_address.as_deref()),
            IdentityKey::Email => ("Email", query.email.as_deref()),
        };
        let identity = identity.unwrap_or_default();
        require(&[(label, identity)])?;

        let user = self.resolve_user(key, identity.trim()).await?;
        let owned = self
            .ctx
            .subscription_repo()
            .find_by_owner(self.chain, user.id)
            .await?;

        let mut models = ModelLookup::new(self.ctx);
        let mut subscriptions = Vec::with_capacity(owned.len());
        for subscription in &owned {
            if let Some(model) = models.get(subscription).await {
                subscriptions.push(SubscriptionDetails::new(subscription, model));
            }
        }

        Ok(UserInfoResponse {
            user: UserResponse::from(&user),
            subscriptions,
        })
    }

    async fn resolve_user(&self, key: IdentityKey, value: &str) -> ServiceResult<User> {
        let users = self.ctx.user_repo();
        let found = match key {
            IdentityKey::WalletAddress => users.find_by_wallet(value).await?,
            IdentityKey::Email => users.find_by_email(value).await?,
        };
        found.ok_or_else(|| DomainError::user_not_found(key, value).into())
    }

    fn not_found(&self, token_id: &str) -> DomainError {
        DomainError::SubscriptionNotFound {
            chain: self.chain,
            token_id: token_id.to_string(),
        }
    }
}

/// Per-request memo of model point lookups for subscription joins
struct ModelLookup<'a> {
    ctx: &'a ServiceContext,
    cache: HashMap<Snowflake, Option<Model>>,
}

impl<'a> ModelLookup<'a> {
    fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            cache: HashMap::new(),
        }
    }

    /// The subscription's model, or `None` if the row should be skipped
    ///
    /// A failed lookup is logged and skips the row like a missing model.
    async fn get(&mut self, subscription: &Subscription) -> Option<&Model> {
        let id = subscription.model_id;
        if !self.cache.contains_key(&id) {
            let model = match self.ctx.model_repo().find_by_id(id).await {
                Ok(Some(model)) => Some(model),
                Ok(None) => {
                    debug!(
                        token_id = %subscription.token_id,
                        model = %id,
                        "Skipping subscription with unresolvable model"
                    );
                    None
                }
                Err(e) => {
                    warn!(
                        token_id = %subscription.token_id,
                        model = %id,
                        error = %e,
                        "Model lookup failed, skipping subscription"
                    );
                    None
                }
            };
            self.cache.insert(id, model);
        }
        self.cache.get(&id).and_then(Option::as_ref)
    }
}
