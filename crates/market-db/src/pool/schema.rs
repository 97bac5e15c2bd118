//! Idempotent schema setup
//!
//! Creates the user, model and per-chain subscription tables together with
//! the unique indexes the registration and purchase flows rely on. Safe to
//! run on every startup.

use market_core::Chain;
use sqlx::PgPool;

const USERS_DDL: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id              BIGINT PRIMARY KEY,
        username        TEXT NOT NULL,
        email           TEXT NOT NULL,
        wallet_address  TEXT NOT NULL,
        ipfs_url        TEXT,
        openai_token_id TEXT,
        created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

const USER_INDEXES: [&str; 4] = [
    "CREATE UNIQUE INDEX IF NOT EXISTS users_username_key ON users (username)",
    "CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)",
    "CREATE UNIQUE INDEX IF NOT EXISTS users_wallet_address_key ON users (wallet_address)",
    "CREATE INDEX IF NOT EXISTS users_openai_token_id_idx ON users (openai_token_id)",
];

const MODELS_DDL: &str = r"
    CREATE TABLE IF NOT EXISTS models (
        id              BIGINT PRIMARY KEY,
        name            TEXT NOT NULL,
        model_id        TEXT NOT NULL,
        email           TEXT,
        wallet_address  TEXT,
        ipfs_url        TEXT NOT NULL DEFAULT '',
        openai_token_id TEXT,
        slug            TEXT NOT NULL DEFAULT '',
        location        TEXT NOT NULL DEFAULT '',
        about_me        TEXT NOT NULL DEFAULT '',
        value           DOUBLE PRECISION NOT NULL DEFAULT 0,
        views           BIGINT NOT NULL DEFAULT 0,
        tease           BIGINT NOT NULL DEFAULT 0,
        posts           BIGINT NOT NULL DEFAULT 0,
        image           JSONB NOT NULL DEFAULT '{}',
        icon            JSONB NOT NULL DEFAULT '{}',
        created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

const MODEL_INDEXES: [&str; 2] = [
    "CREATE UNIQUE INDEX IF NOT EXISTS models_model_id_key ON models (model_id)",
    "CREATE INDEX IF NOT EXISTS models_openai_token_id_idx ON models (openai_token_id)",
];

fn subscription_statements(table: &str) -> [String; 4] {
    [
        format!(
            r"
            CREATE TABLE IF NOT EXISTS {table} (
                id         BIGINT PRIMARY KEY,
                user_id    BIGINT NOT NULL,
                model_id   BIGINT NOT NULL,
                token_id   TEXT NOT NULL,
                listing_id TEXT,
                price      TEXT,
                is_listed  BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "
        ),
        format!("CREATE UNIQUE INDEX IF NOT EXISTS {table}_token_id_key ON {table} (token_id)"),
        format!("CREATE INDEX IF NOT EXISTS {table}_user_id_idx ON {table} (user_id)"),
        format!("CREATE INDEX IF NOT EXISTS {table}_listed_idx ON {table} (is_listed) WHERE is_listed"),
    ]
}

/// Every statement needed to bring an empty database up to date, in order
pub fn schema_statements() -> Vec<String> {
    let mut statements = vec![USERS_DDL.to_string()];
    statements.extend(USER_INDEXES.iter().map(ToString::to_string));
    statements.push(MODELS_DDL.to_string());
    statements.extend(MODEL_INDEXES.iter().map(ToString::to_string));
    for chain in Chain::ALL {
        statements.extend(subscription_statements(chain.table()));
    }
    statements
}

/// Create all tables and indexes that do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let statements = schema_statements();
    for statement in &statements {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!(statements = statements.len(), "Database schema ensured");
    Ok(())
}
